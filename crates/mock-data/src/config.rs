//! Configuration types for dataset generation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Probability `{field}` must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },
    #[error("Invalid region {region:?}: bounds must be finite with min <= max")]
    InvalidRegion { region: BoundingBox },
}

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Box of `radius` degrees in each direction around a centre point.
    pub const fn around(lat: f64, lon: f64, radius: f64) -> Self {
        Self::new(lat - radius, lon - radius, lat + radius, lon + radius)
    }

    /// Returns a random point within the bounding box, rounded to six decimals.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = rng.gen_range(self.min_lat..=self.max_lat);
        let lon = rng.gen_range(self.min_lon..=self.max_lon);
        (
            round_to(lat, 6).clamp(self.min_lat, self.max_lat),
            round_to(lon, 6).clamp(self.min_lon, self.max_lon),
        )
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// True when every bound is finite and each minimum is at most its maximum.
    pub fn is_valid(&self) -> bool {
        [self.min_lat, self.min_lon, self.max_lat, self.max_lon]
            .iter()
            .all(|v| v.is_finite())
            && self.min_lat <= self.max_lat
            && self.min_lon <= self.max_lon
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

/// Pre-defined service areas.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Lower Manhattan and surroundings, 0.1 degrees around City Hall.
    pub const NEW_YORK: BoundingBox = BoundingBox::around(40.7128, -74.006, 0.1);
}

/// Rounds `value` to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Record counts and tunable probabilities for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub bin_count: usize,
    pub vehicle_count: usize,
    pub route_count: usize,
    pub alert_count: usize,
    pub report_count: usize,
    pub insight_count: usize,
    /// Number of daily statistics records, ending today.
    pub statistic_days: usize,

    /// Service area for bins, vehicles, and report locations.
    pub region: BoundingBox,

    /// Probability a bin's sensor is offline regardless of fill level.
    pub bin_offline_probability: f64,
    /// Probability a bin's sensor reports a malfunction.
    pub sensor_fault_probability: f64,
    /// Probability a bin has a recorded last collection.
    pub last_collection_probability: f64,
    pub alert_resolved_probability: f64,
    pub alert_bin_ref_probability: f64,
    pub alert_vehicle_ref_probability: f64,
    pub insight_bin_ref_probability: f64,
    pub insight_zone_probability: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            bin_count: 50,
            vehicle_count: 12,
            route_count: 8,
            alert_count: 25,
            report_count: 15,
            insight_count: 8,
            statistic_days: 30,
            region: Region::NEW_YORK,
            bin_offline_probability: 0.05,
            sensor_fault_probability: 0.05,
            last_collection_probability: 0.8,
            alert_resolved_probability: 0.6,
            alert_bin_ref_probability: 0.7,
            alert_vehicle_ref_probability: 0.3,
            insight_bin_ref_probability: 0.3,
            insight_zone_probability: 0.4,
        }
    }
}

impl DatasetConfig {
    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the region is well formed and every probability lies in
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.region.is_valid() {
            return Err(ConfigError::InvalidRegion {
                region: self.region,
            });
        }

        let probabilities = [
            ("bin_offline_probability", self.bin_offline_probability),
            ("sensor_fault_probability", self.sensor_fault_probability),
            (
                "last_collection_probability",
                self.last_collection_probability,
            ),
            ("alert_resolved_probability", self.alert_resolved_probability),
            ("alert_bin_ref_probability", self.alert_bin_ref_probability),
            (
                "alert_vehicle_ref_probability",
                self.alert_vehicle_ref_probability,
            ),
            (
                "insight_bin_ref_probability",
                self.insight_bin_ref_probability,
            ),
            ("insight_zone_probability", self.insight_zone_probability),
        ];

        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_region_center() {
        let (lat, lon) = Region::NEW_YORK.center();
        assert!((lat - 40.7128).abs() < 1e-9);
        assert!((lon + 74.006).abs() < 1e-9);
    }

    #[test]
    fn test_random_point_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let region = Region::NEW_YORK;
        for _ in 0..200 {
            let (lat, lon) = region.random_point(&mut rng);
            assert!(region.contains(lat, lon));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DatasetConfig::from_json_str(r#"{ "bin_count": 5 }"#).unwrap();
        assert_eq!(config.bin_count, 5);
        assert_eq!(config.vehicle_count, 12);
        assert_eq!(config.statistic_days, 30);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = DatasetConfig::from_json_str(r#"{ "alert_resolved_probability": 1.5 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidProbability {
                field: "alert_resolved_probability",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_reversed_region() {
        let err = DatasetConfig::from_json_str(
            r#"{ "region": { "min_lat": 41.0, "min_lon": -74.0, "max_lat": 40.0, "max_lon": -75.0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegion { .. }));
    }

    #[test]
    fn test_rejects_non_finite_region() {
        let config = DatasetConfig {
            region: BoundingBox::new(f64::NAN, -74.1, 40.8, -73.9),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRegion { .. })
        ));
        assert!(Region::NEW_YORK.is_valid());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wastewatch-no-such-config.json");
        assert!(matches!(
            DatasetConfig::from_json_file(&path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_loads_config_file() {
        let path = std::env::temp_dir().join(format!(
            "wastewatch-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "route_count": 3 }"#).unwrap();
        let config = DatasetConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.route_count, 3);
        assert_eq!(config.bin_count, 50);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            DatasetConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 2), 0.12);
        assert_eq!(round_to(-74.0060004, 6), -74.006);
    }
}
