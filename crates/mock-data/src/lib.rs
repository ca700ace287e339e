//! Demo data generation for the WasteWatch dashboard.
//!
//! This crate generates a self-consistent dataset of smart bins, fleet vehicles,
//! collection routes, alerts, citizen reports, analytics insights, and daily
//! statistics. Every generator takes an explicit RNG, so a seeded RNG together
//! with a fixed base time reproduces the same dataset.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mock_data::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let result = DatasetBuilder::demo()
//!     .with_bins(120)
//!     .with_region(Region::NEW_YORK)
//!     .build(&mut rng)?;
//!
//! let stats = wastewatch::stats::calculate_dashboard_stats(&result.dataset.bins);
//! ```

pub mod builders;
pub mod config;
pub mod generators;

pub use wastewatch::models::Dataset;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::Dataset;
    pub use crate::builders::{BuildMetrics, BuildResult, DatasetBuilder};
    pub use crate::config::{BoundingBox, ConfigError, DatasetConfig, Region};
    pub use crate::generators::{
        AlertGenerator, BinGenerator, InsightGenerator, ReportGenerator, RouteGenerator,
        StatisticGenerator, VehicleGenerator,
    };
}
