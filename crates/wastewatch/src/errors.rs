use thiserror::Error;

use crate::models::{ReportStatus, RouteStatus};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Citizen report not found: {0}")]
    ReportNotFound(String),

    #[error("Route cannot move from {} to {}", from.as_str(), to.as_str())]
    InvalidRouteTransition { from: RouteStatus, to: RouteStatus },

    #[error("Report cannot move from {} to {}", from.as_str(), to.as_str())]
    InvalidReportTransition {
        from: ReportStatus,
        to: ReportStatus,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
