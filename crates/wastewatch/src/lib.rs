//! Data layer of the WasteWatch municipal waste-monitoring dashboard.
//!
//! - [`models`]: bins, vehicles, routes, alerts, citizen reports, insights,
//!   and daily statistics
//! - [`stats`]: headline counts and analytics reductions
//! - [`dashboard`]: view state with filters and transient edits
//! - [`format`]: display formatting for weights, distances, and money
//!
//! Records are produced by the `mock-data` crate.

pub mod dashboard;
pub mod errors;
pub mod format;
pub mod models;
pub mod stats;

pub use dashboard::{AlertQuery, BinQuery, Dashboard, NewReport};
pub use errors::DashboardError;
pub use models::Dataset;
