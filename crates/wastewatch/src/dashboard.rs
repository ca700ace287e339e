//! Dashboard view state.
//!
//! [`Dashboard`] owns a [`Dataset`] for the lifetime of a page view and exposes
//! the filtered views the pages render plus the transient edits an operator
//! can make (resolving alerts, moving routes and reports through their
//! lifecycle, submitting new reports). Nothing here is persisted.

use time::OffsetDateTime;
use tracing::{info, warn};

use crate::errors::DashboardError;
use crate::models::{
    Alert, AlertPriority, Bin, BinStatus, CitizenReport, Dataset, ReportStatus, ReportType,
    Route, RouteStatus, Vehicle, Zone,
};
use crate::stats::{self, DashboardStats};

/// Bin list filter. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct BinQuery {
    /// Case-insensitive substring of `bin_id` or `location_name`.
    pub search: Option<String>,
    pub status: Option<BinStatus>,
    pub zone: Option<Zone>,
}

impl BinQuery {
    pub fn matches(&self, bin: &Bin) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                bin.bin_id.to_lowercase().contains(&term)
                    || bin.location_name.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let matches_status = self.status.is_none_or(|s| bin.status == s);
        let matches_zone = self.zone.is_none_or(|z| bin.zone == z);

        matches_search && matches_status && matches_zone
    }
}

/// Alert list filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertQuery {
    pub priority: Option<AlertPriority>,
    /// Resolved alerts are hidden unless this is set.
    pub include_resolved: bool,
}

impl AlertQuery {
    pub fn matches(&self, alert: &Alert) -> bool {
        self.priority.is_none_or(|p| alert.priority == p)
            && (self.include_resolved || !alert.is_resolved)
    }
}

/// Fields a citizen fills in on the report form.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub report_type: ReportType,
    pub description: String,
    pub location_name: String,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
}

impl NewReport {
    fn validate(&self) -> Result<(), DashboardError> {
        if self.description.trim().is_empty() {
            return Err(DashboardError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        if self.location_name.trim().is_empty() {
            return Err(DashboardError::InvalidInput(
                "location must not be empty".into(),
            ));
        }
        if let Some(email) = self.reporter_email.as_deref()
            && !email.contains('@')
        {
            return Err(DashboardError::InvalidInput(format!(
                "invalid reporter email: {email}"
            )));
        }
        Ok(())
    }
}

/// In-memory dashboard state built from a generated dataset.
#[derive(Debug, Clone)]
pub struct Dashboard {
    data: Dataset,
}

impl Dashboard {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    pub fn into_dataset(self) -> Dataset {
        self.data
    }

    pub fn bins(&self) -> &[Bin] {
        &self.data.bins
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.data.vehicles
    }

    pub fn routes(&self) -> &[Route] {
        &self.data.routes
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.data.alerts
    }

    pub fn citizen_reports(&self) -> &[CitizenReport] {
        &self.data.citizen_reports
    }

    pub fn stats(&self) -> DashboardStats {
        stats::calculate_dashboard_stats(&self.data.bins)
    }

    pub fn filter_bins(&self, query: &BinQuery) -> Vec<&Bin> {
        self.data.bins.iter().filter(|b| query.matches(b)).collect()
    }

    /// Zones that have at least one bin, in first-appearance order.
    pub fn zones(&self) -> Vec<Zone> {
        let mut zones = Vec::new();
        for bin in &self.data.bins {
            if !zones.contains(&bin.zone) {
                zones.push(bin.zone);
            }
        }
        zones
    }

    pub fn bins_requiring_collection(&self) -> Vec<&Bin> {
        self.filter_bins(&BinQuery {
            status: Some(BinStatus::RequiresCollection),
            ..Default::default()
        })
    }

    pub fn filter_alerts(&self, query: &AlertQuery) -> Vec<&Alert> {
        self.data.alerts.iter().filter(|a| query.matches(a)).collect()
    }

    /// The first `n` unresolved alerts in list order (newest first).
    pub fn recent_unresolved_alerts(&self, n: usize) -> Vec<&Alert> {
        self.data
            .alerts
            .iter()
            .filter(|a| !a.is_resolved)
            .take(n)
            .collect()
    }

    pub fn routes_with_status(&self, status: RouteStatus) -> Vec<&Route> {
        self.data
            .routes
            .iter()
            .filter(|r| r.status == status)
            .collect()
    }

    /// Looks up the vehicle assigned to `route`, if any.
    pub fn route_vehicle(&self, route: &Route) -> Option<&Vehicle> {
        let vehicle_id = route.vehicle_id.as_deref()?;
        self.data.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    /// Marks an alert resolved. Resolving twice keeps the first timestamp.
    pub fn resolve_alert(
        &mut self,
        alert_id: &str,
        now: OffsetDateTime,
    ) -> Result<&Alert, DashboardError> {
        let alert = self
            .data
            .alerts
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| DashboardError::AlertNotFound(alert_id.to_string()))?;

        if !alert.is_resolved {
            alert.is_resolved = true;
            alert.resolved_at = Some(now);
            info!(alert_id, "Resolved alert");
        }

        Ok(&*alert)
    }

    /// Dispatches a planned route.
    pub fn start_route(
        &mut self,
        route_id: &str,
        now: OffsetDateTime,
    ) -> Result<&Route, DashboardError> {
        self.transition_route(route_id, RouteStatus::Active, |route| {
            route.started_at = Some(now);
        })
    }

    /// Finishes an active route; every bin on it counts as collected.
    pub fn complete_route(
        &mut self,
        route_id: &str,
        now: OffsetDateTime,
    ) -> Result<&Route, DashboardError> {
        self.transition_route(route_id, RouteStatus::Completed, |route| {
            route.bins_collected = route.total_bins;
            route.completed_at = Some(now);
        })
    }

    pub fn cancel_route(&mut self, route_id: &str) -> Result<&Route, DashboardError> {
        self.transition_route(route_id, RouteStatus::Cancelled, |_| {})
    }

    fn transition_route(
        &mut self,
        route_id: &str,
        to: RouteStatus,
        apply: impl FnOnce(&mut Route),
    ) -> Result<&Route, DashboardError> {
        let route = self
            .data
            .routes
            .iter_mut()
            .find(|r| r.id == route_id)
            .ok_or_else(|| DashboardError::RouteNotFound(route_id.to_string()))?;

        let from = route.status;
        let allowed = matches!(
            (from, to),
            (RouteStatus::Planned, RouteStatus::Active)
                | (RouteStatus::Active, RouteStatus::Completed)
                | (RouteStatus::Planned, RouteStatus::Cancelled)
                | (RouteStatus::Active, RouteStatus::Cancelled)
        );
        if !allowed {
            warn!(
                route_id,
                from = from.as_str(),
                to = to.as_str(),
                "Rejected route transition"
            );
            return Err(DashboardError::InvalidRouteTransition { from, to });
        }

        route.status = to;
        apply(route);
        info!(route_id, status = to.as_str(), "Route status changed");

        Ok(&*route)
    }

    /// Moves a submitted report into review.
    pub fn start_review(&mut self, report_id: &str) -> Result<&CitizenReport, DashboardError> {
        self.transition_report(report_id, ReportStatus::UnderReview, |_| {})
    }

    pub fn reject_report(&mut self, report_id: &str) -> Result<&CitizenReport, DashboardError> {
        self.transition_report(report_id, ReportStatus::Rejected, |_| {})
    }

    pub fn resolve_report(
        &mut self,
        report_id: &str,
        now: OffsetDateTime,
    ) -> Result<&CitizenReport, DashboardError> {
        self.transition_report(report_id, ReportStatus::Resolved, |report| {
            report.resolved_at = Some(now);
        })
    }

    fn transition_report(
        &mut self,
        report_id: &str,
        to: ReportStatus,
        apply: impl FnOnce(&mut CitizenReport),
    ) -> Result<&CitizenReport, DashboardError> {
        let report = self
            .data
            .citizen_reports
            .iter_mut()
            .find(|r| r.id == report_id)
            .ok_or_else(|| DashboardError::ReportNotFound(report_id.to_string()))?;

        let from = report.status;
        let allowed = matches!(
            (from, to),
            (ReportStatus::Submitted, ReportStatus::UnderReview)
                | (ReportStatus::UnderReview, ReportStatus::Resolved)
                | (ReportStatus::Submitted, ReportStatus::Rejected)
                | (ReportStatus::UnderReview, ReportStatus::Rejected)
        );
        if !allowed {
            warn!(
                report_id,
                from = from.as_str(),
                to = to.as_str(),
                "Rejected report transition"
            );
            return Err(DashboardError::InvalidReportTransition { from, to });
        }

        report.status = to;
        apply(report);
        info!(report_id, status = to.as_str(), "Report status changed");

        Ok(&*report)
    }

    /// Adds a citizen report at the top of the list.
    pub fn submit_report(
        &mut self,
        new_report: NewReport,
        now: OffsetDateTime,
    ) -> Result<&CitizenReport, DashboardError> {
        new_report.validate()?;

        let id = format!("report-{}", self.next_report_number());
        let report = CitizenReport {
            id,
            report_type: new_report.report_type,
            description: new_report.description,
            location_name: new_report.location_name,
            position: None,
            photo_url: None,
            reporter_name: new_report.reporter_name,
            reporter_email: new_report.reporter_email,
            reporter_phone: new_report.reporter_phone,
            status: ReportStatus::Submitted,
            assigned_to: None,
            resolved_at: None,
            created_at: now,
        };
        info!(
            report_id = %report.id,
            report_type = report.report_type.as_str(),
            "Report submitted"
        );

        self.data.citizen_reports.insert(0, report);
        Ok(&self.data.citizen_reports[0])
    }

    /// One past the highest `report-N` suffix currently present.
    fn next_report_number(&self) -> usize {
        self.data
            .citizen_reports
            .iter()
            .filter_map(|r| r.id.strip_prefix("report-")?.parse::<usize>().ok())
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertType, SensorStatus};
    use time::macros::{date, datetime};

    const NOW: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    fn bin(id: usize, bin_id: &str, location: &str, fill_level: u8, zone: Zone) -> Bin {
        Bin {
            id: format!("bin-{id}"),
            bin_id: bin_id.into(),
            location_name: location.into(),
            latitude: 40.7,
            longitude: -74.0,
            fill_level,
            recyclable_percentage: 30,
            organic_percentage: 30,
            general_percentage: 38,
            hazardous_percentage: 2,
            status: BinStatus::from_fill_level(fill_level),
            sensor_status: SensorStatus::Operational,
            zone,
            last_collection: None,
            last_updated: NOW,
            created_at: NOW,
        }
    }

    fn alert(id: &str, alert_type: AlertType, is_resolved: bool) -> Alert {
        Alert {
            id: id.into(),
            alert_type,
            priority: alert_type.priority(),
            title: alert_type.title().into(),
            message: alert_type.title().into(),
            bin_id: None,
            vehicle_id: None,
            is_resolved,
            resolved_at: is_resolved.then_some(NOW),
            created_at: NOW,
        }
    }

    fn route(id: &str, status: RouteStatus, vehicle_id: Option<&str>) -> Route {
        Route {
            id: id.into(),
            route_id: "RT-001".into(),
            route_name: "Central Zone Route 1".into(),
            vehicle_id: vehicle_id.map(Into::into),
            status,
            total_bins: 12,
            bins_collected: 0,
            estimated_distance_km: Some(20.0),
            estimated_time_minutes: Some(120),
            estimated_fuel_cost: Some(30.0),
            route_date: date!(2025 - 06 - 01),
            started_at: None,
            completed_at: None,
            created_at: NOW,
        }
    }

    fn report(id: &str, status: ReportStatus) -> CitizenReport {
        CitizenReport {
            id: id.into(),
            report_type: ReportType::BinDamage,
            description: "Citizen reported bin damage issue".into(),
            location_name: "Market Square".into(),
            position: None,
            photo_url: None,
            reporter_name: None,
            reporter_email: None,
            reporter_phone: None,
            status,
            assigned_to: None,
            resolved_at: None,
            created_at: NOW,
        }
    }

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.into(),
            vehicle_id: "VH-001".into(),
            driver_name: "John Smith".into(),
            current_status: crate::models::VehicleStatus::Idle,
            position: None,
            assigned_zone: Some(Zone::East),
            capacity_kg: 5000,
            fuel_efficiency: 8.0,
            last_maintenance: None,
            created_at: NOW,
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(Dataset {
            bins: vec![
                bin(1, "BIN-0001", "City Hall Plaza", 90, Zone::North),
                bin(2, "BIN-0002", "Market Square", 40, Zone::South),
                bin(3, "BIN-0003", "Central Park Entrance", 60, Zone::North),
            ],
            vehicles: vec![vehicle("vehicle-1")],
            routes: vec![
                route("route-1", RouteStatus::Planned, Some("vehicle-1")),
                route("route-2", RouteStatus::Completed, None),
            ],
            alerts: vec![
                alert("alert-1", AlertType::BinOverflow, false),
                alert("alert-2", AlertType::RouteDelay, true),
                alert("alert-3", AlertType::UnusualPattern, false),
            ],
            citizen_reports: vec![
                report("report-2", ReportStatus::Submitted),
                report("report-1", ReportStatus::Resolved),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_filter_bins_by_search_status_and_zone() {
        let dash = dashboard();

        let hits = dash.filter_bins(&BinQuery {
            search: Some("plaza".into()),
            ..Default::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "bin-1");

        let hits = dash.filter_bins(&BinQuery {
            search: Some("bin-000".into()),
            zone: Some(Zone::North),
            ..Default::default()
        });
        assert_eq!(hits.len(), 2);

        let hits = dash.filter_bins(&BinQuery {
            status: Some(BinStatus::ApproachingFull),
            ..Default::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "bin-3");

        assert_eq!(dash.filter_bins(&BinQuery::default()).len(), 3);
        assert_eq!(dash.bins_requiring_collection().len(), 1);
    }

    #[test]
    fn test_zones_in_first_appearance_order() {
        assert_eq!(dashboard().zones(), vec![Zone::North, Zone::South]);
    }

    #[test]
    fn test_filter_alerts() {
        let dash = dashboard();

        assert_eq!(dash.filter_alerts(&AlertQuery::default()).len(), 2);
        assert_eq!(
            dash.filter_alerts(&AlertQuery {
                include_resolved: true,
                ..Default::default()
            })
            .len(),
            3
        );
        let critical = dash.filter_alerts(&AlertQuery {
            priority: Some(AlertPriority::Critical),
            include_resolved: false,
        });
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, "alert-1");

        let recent = dash.recent_unresolved_alerts(5);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].id, "alert-3");
    }

    #[test]
    fn test_resolve_alert() {
        let mut dash = dashboard();

        let resolved = dash.resolve_alert("alert-1", NOW).unwrap();
        assert!(resolved.is_resolved);
        assert_eq!(resolved.resolved_at, Some(NOW));

        // Resolving again keeps the first timestamp
        let later = datetime!(2025-06-02 12:00 UTC);
        let again = dash.resolve_alert("alert-1", later).unwrap();
        assert_eq!(again.resolved_at, Some(NOW));

        assert_eq!(
            dash.resolve_alert("alert-99", NOW),
            Err(DashboardError::AlertNotFound("alert-99".into()))
        );
    }

    #[test]
    fn test_route_lifecycle() {
        let mut dash = dashboard();

        let started = dash.start_route("route-1", NOW).unwrap();
        assert_eq!(started.status, RouteStatus::Active);
        assert_eq!(started.started_at, Some(NOW));

        let done = dash.complete_route("route-1", NOW).unwrap();
        assert_eq!(done.status, RouteStatus::Completed);
        assert_eq!(done.bins_collected, done.total_bins);
        assert_eq!(done.completed_at, Some(NOW));

        assert_eq!(
            dash.cancel_route("route-2").unwrap_err(),
            DashboardError::InvalidRouteTransition {
                from: RouteStatus::Completed,
                to: RouteStatus::Cancelled,
            }
        );
        assert!(matches!(
            dash.start_route("route-9", NOW),
            Err(DashboardError::RouteNotFound(_))
        ));
    }

    #[test]
    fn test_cancel_planned_route() {
        let mut dash = dashboard();
        let cancelled = dash.cancel_route("route-1").unwrap();
        assert_eq!(cancelled.status, RouteStatus::Cancelled);
        assert!(dash.start_route("route-1", NOW).is_err());
    }

    #[test]
    fn test_route_vehicle_lookup() {
        let dash = dashboard();
        let routes = dash.routes();
        assert_eq!(
            dash.route_vehicle(&routes[0]).map(|v| v.id.as_str()),
            Some("vehicle-1")
        );
        assert!(dash.route_vehicle(&routes[1]).is_none());
        assert_eq!(dash.routes_with_status(RouteStatus::Planned).len(), 1);
    }

    #[test]
    fn test_report_lifecycle() {
        let mut dash = dashboard();

        assert_eq!(
            dash.start_review("report-2").unwrap().status,
            ReportStatus::UnderReview
        );
        let resolved = dash.resolve_report("report-2", NOW).unwrap();
        assert_eq!(resolved.status, ReportStatus::Resolved);
        assert_eq!(resolved.resolved_at, Some(NOW));

        assert!(matches!(
            dash.reject_report("report-1"),
            Err(DashboardError::InvalidReportTransition { .. })
        ));
        assert!(matches!(
            dash.start_review("report-7"),
            Err(DashboardError::ReportNotFound(_))
        ));
    }

    #[test]
    fn test_reject_keeps_report() {
        let mut dash = dashboard();
        dash.reject_report("report-2").unwrap();

        assert_eq!(dash.citizen_reports().len(), 2);
        assert_eq!(dash.citizen_reports()[0].status, ReportStatus::Rejected);
    }

    #[test]
    fn test_submit_report() {
        let mut dash = dashboard();

        let submitted = dash
            .submit_report(
                NewReport {
                    report_type: ReportType::IllegalDumping,
                    description: "Mattresses left on the kerb".into(),
                    location_name: "Waterfront Promenade".into(),
                    reporter_name: Some("Alex".into()),
                    reporter_email: Some("alex@example.com".into()),
                    reporter_phone: None,
                },
                NOW,
            )
            .unwrap();

        assert_eq!(submitted.id, "report-3");
        assert_eq!(submitted.status, ReportStatus::Submitted);
        assert_eq!(dash.citizen_reports().len(), 3);
        assert_eq!(dash.citizen_reports()[0].id, "report-3");
    }

    #[test]
    fn test_submit_report_validation() {
        let mut dash = dashboard();
        let base = NewReport {
            report_type: ReportType::Other,
            description: "Overflowing bin".into(),
            location_name: "Museum Quarter".into(),
            reporter_name: None,
            reporter_email: None,
            reporter_phone: None,
        };

        let blank = NewReport {
            description: "   ".into(),
            ..base.clone()
        };
        assert!(matches!(
            dash.submit_report(blank, NOW),
            Err(DashboardError::InvalidInput(_))
        ));

        let bad_email = NewReport {
            reporter_email: Some("not-an-email".into()),
            ..base
        };
        assert!(dash.submit_report(bad_email, NOW).is_err());
        assert_eq!(dash.citizen_reports().len(), 2);
    }

    #[test]
    fn test_stats_delegates_to_calculator() {
        let stats = dashboard().stats();
        assert_eq!(stats.total_bins, 3);
        assert_eq!(stats.critical_bins, 1);
        assert_eq!(stats.moderate_bins, 1);
        assert_eq!(stats.low_bins, 1);
    }
}
