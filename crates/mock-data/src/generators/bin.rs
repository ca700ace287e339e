//! Smart bin generation.

use rand::Rng;
use time::OffsetDateTime;

use wastewatch::models::{Bin, BinStatus, SensorStatus, Zone};

use super::{LOCATIONS, pick, random_past};
use crate::config::{BoundingBox, Region};

/// Configuration for bin generation.
#[derive(Debug, Clone)]
pub struct BinGenConfig {
    /// Area bins are scattered over.
    pub region: BoundingBox,
    /// Probability the bin is offline, overriding the fill-level status.
    pub offline_probability: f64,
    /// Probability the fill sensor reports a malfunction.
    pub sensor_fault_probability: f64,
    /// Probability the bin has a recorded last collection.
    pub last_collection_probability: f64,
    /// Recyclable share range (percent, inclusive).
    pub recyclable_range: (i32, i32),
    /// Organic share range (percent, inclusive).
    pub organic_range: (i32, i32),
    /// Hazardous share range (percent, inclusive).
    pub hazardous_range: (i32, i32),
}

impl Default for BinGenConfig {
    fn default() -> Self {
        Self {
            region: Region::NEW_YORK,
            offline_probability: 0.05,
            sensor_fault_probability: 0.05,
            last_collection_probability: 0.8,
            recyclable_range: (20, 40),
            organic_range: (15, 35),
            hazardous_range: (0, 5),
        }
    }
}

/// Generates bins with fill levels and waste composition.
pub struct BinGenerator {
    config: BinGenConfig,
}

impl BinGenerator {
    /// Creates a new bin generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: BinGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: BinGenConfig) -> Self {
        Self { config }
    }

    /// Generates the bin at zero-based position `index`.
    pub fn generate(&self, index: usize, base_time: OffsetDateTime, rng: &mut impl Rng) -> Bin {
        let number = index + 1;
        let fill_level: u8 = rng.gen_range(0..=100);

        let status = if rng.gen_bool(self.config.offline_probability) {
            BinStatus::Offline
        } else {
            BinStatus::from_fill_level(fill_level)
        };

        let (recyclable, organic, hazardous, general) = self.generate_composition(rng);
        let (latitude, longitude) = self.config.region.random_point(rng);

        let sensor_status = if rng.gen_bool(self.config.sensor_fault_probability) {
            SensorStatus::Malfunctioning
        } else {
            SensorStatus::Operational
        };

        let last_collection = rng
            .gen_bool(self.config.last_collection_probability)
            .then(|| random_past(rng, base_time, 7));

        Bin {
            id: format!("bin-{number}"),
            bin_id: format!("BIN-{number:04}"),
            location_name: pick(rng, LOCATIONS).to_string(),
            latitude,
            longitude,
            fill_level,
            recyclable_percentage: recyclable,
            organic_percentage: organic,
            general_percentage: general,
            hazardous_percentage: hazardous,
            status,
            sensor_status,
            zone: pick(rng, &Zone::ALL),
            last_collection,
            last_updated: base_time,
            created_at: random_past(rng, base_time, 180),
        }
    }

    /// Generates multiple bins numbered from 1.
    pub fn generate_batch(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<Bin> {
        (0..count)
            .map(|i| self.generate(i, base_time, rng))
            .collect()
    }

    /// Draws recyclable, organic, and hazardous shares independently; general
    /// takes the remainder so the four always sum to 100.
    ///
    /// The remainder is not clamped. With custom ranges whose maxima sum past
    /// 100 it can go negative.
    fn generate_composition(&self, rng: &mut impl Rng) -> (i32, i32, i32, i32) {
        let (r_min, r_max) = self.config.recyclable_range;
        let (o_min, o_max) = self.config.organic_range;
        let (h_min, h_max) = self.config.hazardous_range;

        let recyclable = rng.gen_range(r_min..=r_max);
        let organic = rng.gen_range(o_min..=o_max);
        let hazardous = rng.gen_range(h_min..=h_max);
        let general = 100 - recyclable - organic - hazardous;

        (recyclable, organic, hazardous, general)
    }
}

impl Default for BinGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    const BASE: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    #[test]
    fn test_generate_bin() {
        let bin_gen = BinGenerator::new();
        let mut rng = rand::thread_rng();
        let bin = bin_gen.generate(0, BASE, &mut rng);

        assert_eq!(bin.id, "bin-1");
        assert_eq!(bin.bin_id, "BIN-0001");
        assert!(bin.fill_level <= 100);
        assert!(Region::NEW_YORK.contains(bin.latitude, bin.longitude));
        assert_eq!(bin.last_updated, BASE);
        assert!(bin.created_at <= BASE);
    }

    #[test]
    fn test_composition_sums_to_100() {
        let bin_gen = BinGenerator::new();
        let mut rng = rand::thread_rng();

        for bin in bin_gen.generate_batch(500, BASE, &mut rng) {
            assert_eq!(bin.composition_total(), 100, "bin {}", bin.id);
            assert!((20..=40).contains(&bin.recyclable_percentage));
            assert!((15..=35).contains(&bin.organic_percentage));
            assert!((0..=5).contains(&bin.hazardous_percentage));
        }
    }

    #[test]
    fn test_adversarial_ranges_still_sum_to_100() {
        let bin_gen = BinGenerator::with_config(BinGenConfig {
            recyclable_range: (50, 60),
            organic_range: (40, 50),
            hazardous_range: (5, 10),
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(3);

        for bin in bin_gen.generate_batch(50, BASE, &mut rng) {
            assert_eq!(bin.composition_total(), 100);
            assert!(bin.general_percentage < 0);
        }
    }

    #[test]
    fn test_status_follows_fill_level_when_online() {
        let bin_gen = BinGenerator::new();
        let mut rng = rand::thread_rng();

        for bin in bin_gen.generate_batch(500, BASE, &mut rng) {
            if bin.status != BinStatus::Offline {
                assert_eq!(bin.status, BinStatus::from_fill_level(bin.fill_level));
            }
        }
    }

    #[test]
    fn test_offline_override() {
        let bin_gen = BinGenerator::with_config(BinGenConfig {
            offline_probability: 1.0,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(11);

        assert!(
            bin_gen
                .generate_batch(20, BASE, &mut rng)
                .iter()
                .all(|b| b.status == BinStatus::Offline)
        );
    }

    #[test]
    fn test_last_collection_within_a_week() {
        let bin_gen = BinGenerator::with_config(BinGenConfig {
            last_collection_probability: 1.0,
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        for bin in bin_gen.generate_batch(50, BASE, &mut rng) {
            let collected = bin.last_collection.unwrap();
            assert!(collected <= BASE);
            assert!(BASE - collected <= time::Duration::days(7));
        }
    }
}
