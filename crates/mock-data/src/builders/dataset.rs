//! Fluent builder for assembling a complete dashboard dataset.

use std::time::Instant;

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info};

use wastewatch::models::Dataset;

use crate::config::{BoundingBox, ConfigError, DatasetConfig};
use crate::generators::{
    AlertGenConfig, AlertGenerator, BinGenConfig, BinGenerator, InsightGenConfig,
    InsightGenerator, ReportGenerator, RouteGenerator, StatisticGenerator, VehicleGenerator,
};

/// Result of building a dataset.
#[derive(Debug)]
pub struct BuildResult {
    pub dataset: Dataset,
    /// Metrics from generation (populated if metrics tracking enabled).
    pub metrics: Option<BuildMetrics>,
}

/// Counts and timing from dataset generation.
#[derive(Debug, Clone)]
pub struct BuildMetrics {
    /// Time spent generating data (microseconds).
    pub generation_time_us: u64,
    pub bin_count: usize,
    pub vehicle_count: usize,
    pub route_count: usize,
    pub alert_count: usize,
    pub report_count: usize,
    pub insight_count: usize,
    pub statistic_count: usize,
}

/// Builder for creating complete datasets.
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = DatasetBuilder::demo()
///     .with_bins(200)
///     .with_vehicles(20)
///     .with_base_time(OffsetDateTime::now_utc())
///     .build(&mut rng)?;
/// ```
pub struct DatasetBuilder {
    config: DatasetConfig,
    base_time: Option<OffsetDateTime>,
    track_metrics: bool,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates a builder with default counts and probabilities.
    pub fn new() -> Self {
        Self {
            config: DatasetConfig::default(),
            base_time: None,
            track_metrics: false,
        }
    }

    /// Replaces the whole configuration. It is validated by [`Self::build`].
    pub fn with_config(mut self, config: DatasetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_bins(mut self, count: usize) -> Self {
        self.config.bin_count = count;
        self
    }

    pub fn with_vehicles(mut self, count: usize) -> Self {
        self.config.vehicle_count = count;
        self
    }

    pub fn with_routes(mut self, count: usize) -> Self {
        self.config.route_count = count;
        self
    }

    pub fn with_alerts(mut self, count: usize) -> Self {
        self.config.alert_count = count;
        self
    }

    pub fn with_reports(mut self, count: usize) -> Self {
        self.config.report_count = count;
        self
    }

    pub fn with_insights(mut self, count: usize) -> Self {
        self.config.insight_count = count;
        self
    }

    /// Sets how many days of statistics to generate, ending on the base date.
    pub fn with_statistic_days(mut self, days: usize) -> Self {
        self.config.statistic_days = days;
        self
    }

    pub fn with_region(mut self, region: BoundingBox) -> Self {
        self.config.region = region;
        self
    }

    /// Fixes the reference time all timestamps are derived from.
    ///
    /// Defaults to the current time when not set.
    pub fn with_base_time(mut self, base_time: OffsetDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generates every collection.
    ///
    /// Vehicles are generated before routes so routes can reference them, and
    /// alert and insight references only point at bins and vehicles that exist.
    /// Fails only when the configuration does not pass
    /// [`DatasetConfig::validate`]; nothing is generated in that case.
    pub fn build(&self, rng: &mut impl Rng) -> Result<BuildResult, ConfigError> {
        self.config.validate()?;

        let start_time = self.track_metrics.then(Instant::now);
        let base_time = self.base_time.unwrap_or_else(OffsetDateTime::now_utc);
        let config = &self.config;

        let bins = BinGenerator::with_config(BinGenConfig {
            region: config.region,
            offline_probability: config.bin_offline_probability,
            sensor_fault_probability: config.sensor_fault_probability,
            last_collection_probability: config.last_collection_probability,
            ..Default::default()
        })
        .generate_batch(config.bin_count, base_time, rng);
        debug!("Generated {} bins", bins.len());

        let vehicles = VehicleGenerator::for_region(config.region).generate_batch(
            config.vehicle_count,
            base_time,
            rng,
        );
        debug!("Generated {} vehicles", vehicles.len());

        let routes =
            RouteGenerator::new().generate_batch(config.route_count, &vehicles, base_time, rng);
        debug!("Generated {} routes", routes.len());

        let alerts = AlertGenerator::with_config(AlertGenConfig {
            resolved_probability: config.alert_resolved_probability,
            bin_ref_probability: config.alert_bin_ref_probability,
            vehicle_ref_probability: config.alert_vehicle_ref_probability,
            bin_count: bins.len(),
            vehicle_count: vehicles.len(),
        })
        .generate_batch(config.alert_count, base_time, rng);
        debug!("Generated {} alerts", alerts.len());

        let citizen_reports = ReportGenerator::for_region(config.region).generate_batch(
            config.report_count,
            base_time,
            rng,
        );
        debug!("Generated {} citizen reports", citizen_reports.len());

        let insights = InsightGenerator::with_config(InsightGenConfig {
            bin_ref_probability: config.insight_bin_ref_probability,
            zone_probability: config.insight_zone_probability,
            bin_count: bins.len(),
            ..Default::default()
        })
        .generate_batch(config.insight_count, base_time, rng);
        debug!("Generated {} insights", insights.len());

        let waste_statistics =
            StatisticGenerator::new().generate_batch(config.statistic_days, base_time, rng);
        debug!("Generated {} daily statistics", waste_statistics.len());

        let dataset = Dataset {
            bins,
            vehicles,
            routes,
            alerts,
            citizen_reports,
            insights,
            waste_statistics,
        };

        let metrics = start_time.map(|start| BuildMetrics {
            generation_time_us: start.elapsed().as_micros() as u64,
            bin_count: dataset.bins.len(),
            vehicle_count: dataset.vehicles.len(),
            route_count: dataset.routes.len(),
            alert_count: dataset.alerts.len(),
            report_count: dataset.citizen_reports.len(),
            insight_count: dataset.insights.len(),
            statistic_count: dataset.waste_statistics.len(),
        });

        info!(
            bins = dataset.bins.len(),
            vehicles = dataset.vehicles.len(),
            routes = dataset.routes.len(),
            alerts = dataset.alerts.len(),
            "Dataset generated"
        );

        Ok(BuildResult { dataset, metrics })
    }

    // Preset configurations

    /// The standard demo dataset: 50 bins, 12 vehicles, 8 routes, 25 alerts,
    /// 15 citizen reports, 8 insights, and 30 days of statistics.
    pub fn demo() -> Self {
        Self::new()
    }

    /// A small dataset for quick interactive checks.
    pub fn small() -> Self {
        Self::new()
            .with_bins(10)
            .with_vehicles(3)
            .with_routes(2)
            .with_alerts(5)
            .with_reports(3)
            .with_insights(3)
            .with_statistic_days(7)
    }

    /// A city-scale dataset for exercising list and chart rendering.
    pub fn city_scale() -> Self {
        Self::new()
            .with_bins(2000)
            .with_vehicles(80)
            .with_routes(60)
            .with_alerts(500)
            .with_reports(300)
            .with_statistic_days(365)
            .with_metrics(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    #[test]
    fn test_build_demo() {
        let mut rng = rand::thread_rng();
        let result = DatasetBuilder::demo().build(&mut rng).unwrap();
        let data = &result.dataset;

        assert_eq!(data.bins.len(), 50);
        assert_eq!(data.vehicles.len(), 12);
        assert_eq!(data.routes.len(), 8);
        assert_eq!(data.alerts.len(), 25);
        assert_eq!(data.citizen_reports.len(), 15);
        assert_eq!(data.insights.len(), 8);
        assert_eq!(data.waste_statistics.len(), 30);
        assert!(result.metrics.is_none());
    }

    #[test]
    fn test_preset_small() {
        let builder = DatasetBuilder::small();
        assert_eq!(builder.config().bin_count, 10);
        assert_eq!(builder.config().statistic_days, 7);
        assert!(!builder.track_metrics);
    }

    #[test]
    fn test_preset_city_scale() {
        let builder = DatasetBuilder::city_scale();
        assert_eq!(builder.config().bin_count, 2000);
        assert_eq!(builder.config().statistic_days, 365);
        assert!(builder.track_metrics);
    }

    #[test]
    fn test_zero_counts_yield_empty_dataset() {
        let mut rng = rand::thread_rng();
        let result = DatasetBuilder::new()
            .with_config(DatasetConfig {
                bin_count: 0,
                vehicle_count: 0,
                route_count: 0,
                alert_count: 0,
                report_count: 0,
                insight_count: 0,
                statistic_days: 0,
                ..Default::default()
            })
            .build(&mut rng)
            .unwrap();

        assert_eq!(result.dataset, Dataset::default());
    }

    #[test]
    fn test_routes_without_vehicles() {
        let mut rng = rand::thread_rng();
        let result = DatasetBuilder::small()
            .with_vehicles(0)
            .with_routes(4)
            .build(&mut rng)
            .unwrap();

        assert!(
            result
                .dataset
                .routes
                .iter()
                .all(|r| r.vehicle_id.is_none())
        );
        assert!(
            result
                .dataset
                .alerts
                .iter()
                .all(|a| a.vehicle_id.is_none())
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut rng = rand::thread_rng();

        let reversed = DatasetBuilder::new()
            .with_region(BoundingBox::new(41.0, -74.0, 40.0, -75.0))
            .build(&mut rng);
        assert!(matches!(reversed, Err(ConfigError::InvalidRegion { .. })));

        let bad_probability = DatasetBuilder::new()
            .with_config(DatasetConfig {
                alert_resolved_probability: 2.0,
                ..Default::default()
            })
            .build(&mut rng);
        assert!(matches!(
            bad_probability,
            Err(ConfigError::InvalidProbability {
                field: "alert_resolved_probability",
                ..
            })
        ));
    }

    #[test]
    fn test_metrics_tracking() {
        let mut rng = StdRng::seed_from_u64(9);
        let result = DatasetBuilder::small()
            .with_base_time(datetime!(2025-06-01 12:00 UTC))
            .with_metrics(true)
            .build(&mut rng)
            .unwrap();

        let metrics = result.metrics.expect("metrics requested");
        assert_eq!(metrics.bin_count, 10);
        assert_eq!(metrics.vehicle_count, 3);
        assert_eq!(metrics.insight_count, 3);
        assert_eq!(metrics.statistic_count, 7);
    }
}
