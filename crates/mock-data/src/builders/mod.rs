//! Dataset builders for composing generators.

pub mod dataset;

pub use dataset::{BuildMetrics, BuildResult, DatasetBuilder};
