//! Daily collection statistics generation.

use rand::Rng;
use time::{Duration, OffsetDateTime, Time};
use tracing::debug;

use wastewatch::models::WasteStatistic;

use super::random_float;

/// Generates one statistics record per day, counting back from the base date.
pub struct StatisticGenerator;

impl StatisticGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the record for `days_ago` days before `base_time` (0 = today).
    ///
    /// Category shares are drawn independently for recyclable, organic, and
    /// hazardous waste; general waste takes the remaining weight, so the four
    /// categories always add up to the day's total.
    ///
    /// Returns `None` when the day falls before the earliest representable
    /// date.
    pub fn generate(
        &self,
        days_ago: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Option<WasteStatistic> {
        let offset = i64::try_from(days_ago)
            .ok()
            .filter(|days| *days <= i64::MAX / 86_400)
            .map(Duration::days)?;
        let day = base_time.checked_sub(offset)?;

        let total = random_float(rng, 2000.0, 5000.0, 2);
        let recyclable_share = random_float(rng, 0.25, 0.35, 2);
        let organic_share = random_float(rng, 0.20, 0.30, 2);
        let hazardous_share = random_float(rng, 0.01, 0.03, 2);

        let recyclable_kg = total * recyclable_share;
        let organic_kg = total * organic_share;
        let hazardous_kg = total * hazardous_share;
        let general_kg = total - recyclable_kg - organic_kg - hazardous_kg;

        Some(WasteStatistic {
            id: format!("stat-{}", days_ago + 1),
            stat_date: day.date(),
            total_waste_collected_kg: total,
            recyclable_kg,
            organic_kg,
            general_kg,
            hazardous_kg,
            collections_completed: rng.gen_range(20..=50),
            fuel_consumed_liters: random_float(rng, 200.0, 500.0, 2),
            distance_traveled_km: random_float(rng, 300.0, 800.0, 2),
            created_at: day.replace_time(Time::MIDNIGHT),
        })
    }

    /// Generates `days` records, most recent first.
    ///
    /// Stops early, without error, at the earliest representable date.
    pub fn generate_batch(
        &self,
        days: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<WasteStatistic> {
        let mut statistics: Vec<WasteStatistic> = (0..days)
            .map_while(|i| self.generate(i, base_time, rng))
            .collect();
        if statistics.len() < days {
            debug!(
                requested = days,
                generated = statistics.len(),
                "Statistics truncated at the earliest representable date"
            );
        }
        statistics.sort_by(|a, b| b.stat_date.cmp(&a.stat_date));
        statistics
    }
}

impl Default for StatisticGenerator {
    fn default() -> Self {
        Self::new()
    }
}
