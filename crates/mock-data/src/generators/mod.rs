//! Entity generators for dashboard data.
//!
//! This module provides generators for creating realistic demo entities:
//! - [`BinGenerator`]: Smart bins with fill levels and waste composition
//! - [`VehicleGenerator`]: Fleet vehicles with status-dependent position and zone
//! - [`RouteGenerator`]: Collection routes cycling through the fleet
//! - [`AlertGenerator`]: Alerts with type-determined priority
//! - [`ReportGenerator`]: Citizen reports
//! - [`InsightGenerator`]: Analytics insights from a fixed template set
//! - [`StatisticGenerator`]: Daily collection statistics

pub mod alert;
pub mod bin;
pub mod insight;
pub mod report;
pub mod route;
pub mod statistic;
pub mod vehicle;

pub use alert::{AlertGenConfig, AlertGenerator};
pub use bin::{BinGenConfig, BinGenerator};
pub use insight::{InsightGenConfig, InsightGenerator};
pub use report::ReportGenerator;
pub use route::RouteGenerator;
pub use statistic::StatisticGenerator;
pub use vehicle::VehicleGenerator;

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::config::round_to;

/// Named places bins and reports are attached to.
pub const LOCATIONS: &[&str] = &[
    "Main Street & 5th Avenue",
    "Central Park Entrance",
    "City Hall Plaza",
    "Shopping District",
    "Residential Area A",
    "Industrial Zone B",
    "University Campus",
    "Hospital District",
    "Business Park",
    "Waterfront Promenade",
    "Market Square",
    "Transit Station",
    "Sports Complex",
    "Community Center",
    "Museum Quarter",
];

/// Uniform float in `[min, max)` rounded to `decimals` places.
pub(crate) fn random_float(rng: &mut impl Rng, min: f64, max: f64, decimals: i32) -> f64 {
    round_to(rng.gen_range(min..max), decimals)
}

/// `base_time` minus a whole number of days in `[0, max_days]`.
pub(crate) fn random_past(
    rng: &mut impl Rng,
    base_time: OffsetDateTime,
    max_days: i64,
) -> OffsetDateTime {
    base_time - Duration::days(rng.gen_range(0..=max_days))
}

/// Picks a uniformly random element. `items` must not be empty.
pub(crate) fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// A reference like `bin-17` into a collection of `count` records, or `None`
/// when the collection is empty.
pub(crate) fn random_ref(rng: &mut impl Rng, prefix: &str, count: usize) -> Option<String> {
    (count > 0).then(|| format!("{prefix}-{}", rng.gen_range(1..=count)))
}
