//! Alert generation.

use rand::Rng;
use time::OffsetDateTime;

use wastewatch::models::{Alert, AlertType};

use super::{LOCATIONS, pick, random_past, random_ref};

/// Configuration for alert generation.
#[derive(Debug, Clone)]
pub struct AlertGenConfig {
    /// Probability an alert is already resolved.
    pub resolved_probability: f64,
    /// Probability an alert references a bin.
    pub bin_ref_probability: f64,
    /// Probability an alert references a vehicle.
    pub vehicle_ref_probability: f64,
    /// Number of bins references are drawn from (`bin-1` to `bin-N`).
    pub bin_count: usize,
    /// Number of vehicles references are drawn from.
    pub vehicle_count: usize,
}

impl Default for AlertGenConfig {
    fn default() -> Self {
        Self {
            resolved_probability: 0.6,
            bin_ref_probability: 0.7,
            vehicle_ref_probability: 0.3,
            bin_count: 50,
            vehicle_count: 12,
        }
    }
}

/// Generates alerts. Priority and title come from the alert type.
pub struct AlertGenerator {
    config: AlertGenConfig,
}

impl AlertGenerator {
    /// Creates a new alert generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AlertGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AlertGenConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, index: usize, base_time: OffsetDateTime, rng: &mut impl Rng) -> Alert {
        let alert_type = pick(rng, &AlertType::ALL);
        let title = alert_type.title();
        let is_resolved = rng.gen_bool(self.config.resolved_probability);

        let message = format!("{title} at {}", pick(rng, LOCATIONS));
        let bin_id = if rng.gen_bool(self.config.bin_ref_probability) {
            random_ref(rng, "bin", self.config.bin_count)
        } else {
            None
        };
        let vehicle_id = if rng.gen_bool(self.config.vehicle_ref_probability) {
            random_ref(rng, "vehicle", self.config.vehicle_count)
        } else {
            None
        };

        let resolved_at = is_resolved.then(|| random_past(rng, base_time, 7));
        let created_at = random_past(rng, base_time, 30);

        Alert {
            id: format!("alert-{}", index + 1),
            alert_type,
            priority: alert_type.priority(),
            title: title.to_string(),
            message,
            bin_id,
            vehicle_id,
            is_resolved,
            // An alert cannot be resolved before it was raised
            resolved_at: resolved_at.map(|t| t.max(created_at)),
            created_at,
        }
    }

    /// Generates alerts sorted newest first.
    pub fn generate_batch(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = (0..count)
            .map(|i| self.generate(i, base_time, rng))
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts
    }
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new()
    }
}
