//! Aggregate counts and averages shown on the dashboard and analytics pages.
//!
//! Every function here is a pure reduction over borrowed records. None of them
//! depend on input order except [`period_totals`], which expects the
//! most-recent-first ordering the generator produces.

use serde::{Deserialize, Serialize};

use crate::models::{
    Alert, AlertPriority, Bin, CitizenReport, CRITICAL_FILL_LEVEL, MODERATE_FILL_LEVEL,
    ReportStatus, Route, RouteStatus, SensorStatus, Vehicle, VehicleStatus, WasteStatistic, Zone,
};

/// Headline bin counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_bins: usize,
    /// Bins with `fill_level >= 80`.
    pub critical_bins: usize,
    /// Bins with `50 <= fill_level < 80`.
    pub moderate_bins: usize,
    /// Bins with `fill_level < 50`.
    pub low_bins: usize,
    pub operational_sensors: usize,
    pub malfunctioning_sensors: usize,
}

/// Computes headline counts for a bin collection.
pub fn calculate_dashboard_stats(bins: &[Bin]) -> DashboardStats {
    bins.iter().fold(DashboardStats::default(), |mut stats, bin| {
        stats.total_bins += 1;

        if bin.fill_level >= CRITICAL_FILL_LEVEL {
            stats.critical_bins += 1;
        } else if bin.fill_level >= MODERATE_FILL_LEVEL {
            stats.moderate_bins += 1;
        } else {
            stats.low_bins += 1;
        }

        if bin.sensor_status == SensorStatus::Operational {
            stats.operational_sensors += 1;
        } else {
            stats.malfunctioning_sensors += 1;
        }

        stats
    })
}

/// Mean waste-category percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WasteComposition {
    pub recyclable: f64,
    pub organic: f64,
    pub general: f64,
    pub hazardous: f64,
}

/// Average composition of a group of bins, keyed by zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneComposition {
    pub zone: Zone,
    pub bin_count: usize,
    pub composition: WasteComposition,
}

/// Averages the category percentages across `bins`.
///
/// Returns `None` for an empty slice.
pub fn average_composition(bins: &[Bin]) -> Option<WasteComposition> {
    mean_composition(bins).map(|(_, composition)| composition)
}

/// Average composition per zone, in order of each zone's first appearance.
pub fn composition_by_zone(bins: &[Bin]) -> Vec<ZoneComposition> {
    let mut zones: Vec<Zone> = Vec::new();
    for bin in bins {
        if !zones.contains(&bin.zone) {
            zones.push(bin.zone);
        }
    }

    zones
        .into_iter()
        .filter_map(|zone| {
            mean_composition(bins.iter().filter(|b| b.zone == zone)).map(
                |(bin_count, composition)| ZoneComposition {
                    zone,
                    bin_count,
                    composition,
                },
            )
        })
        .collect()
}

fn mean_composition<'a>(
    bins: impl IntoIterator<Item = &'a Bin>,
) -> Option<(usize, WasteComposition)> {
    let mut count = 0usize;
    let mut sum = WasteComposition::default();
    for bin in bins {
        count += 1;
        sum.recyclable += f64::from(bin.recyclable_percentage);
        sum.organic += f64::from(bin.organic_percentage);
        sum.general += f64::from(bin.general_percentage);
        sum.hazardous += f64::from(bin.hazardous_percentage);
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some((
        count,
        WasteComposition {
            recyclable: sum.recyclable / n,
            organic: sum.organic / n,
            general: sum.general / n,
            hazardous: sum.hazardous / n,
        },
    ))
}

/// Totals over a window of daily statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Number of days actually summed (may be less than requested).
    pub days: usize,
    pub waste_collected_kg: f64,
    pub recyclable_kg: f64,
    pub collections_completed: u64,
    pub fuel_consumed_liters: f64,
    pub distance_traveled_km: f64,
}

/// Sums the first `days` records of a most-recent-first statistics list.
pub fn period_totals(statistics: &[WasteStatistic], days: usize) -> PeriodTotals {
    statistics
        .iter()
        .take(days)
        .fold(PeriodTotals::default(), |mut totals, stat| {
            totals.days += 1;
            totals.waste_collected_kg += stat.total_waste_collected_kg;
            totals.recyclable_kg += stat.recyclable_kg;
            totals.collections_completed += u64::from(stat.collections_completed);
            totals.fuel_consumed_liters += stat.fuel_consumed_liters;
            totals.distance_traveled_km += stat.distance_traveled_km;
            totals
        })
}

/// Route counts by status and summed estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub planned: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_distance_km: f64,
    pub total_fuel_cost: f64,
    pub total_bins: u64,
}

pub fn route_summary(routes: &[Route]) -> RouteSummary {
    routes
        .iter()
        .fold(RouteSummary::default(), |mut summary, route| {
            match route.status {
                RouteStatus::Planned => summary.planned += 1,
                RouteStatus::Active => summary.active += 1,
                RouteStatus::Completed => summary.completed += 1,
                RouteStatus::Cancelled => summary.cancelled += 1,
            }
            // Missing estimates count as zero
            summary.total_distance_km += route.estimated_distance_km.unwrap_or(0.0);
            summary.total_fuel_cost += route.estimated_fuel_cost.unwrap_or(0.0);
            summary.total_bins += u64::from(route.total_bins);
            summary
        })
}

/// Unresolved alert counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

pub fn unresolved_alert_counts(alerts: &[Alert]) -> AlertCounts {
    alerts
        .iter()
        .filter(|a| !a.is_resolved)
        .fold(AlertCounts::default(), |mut counts, alert| {
            match alert.priority {
                AlertPriority::Critical => counts.critical += 1,
                AlertPriority::Warning => counts.warning += 1,
                AlertPriority::Info => counts.info += 1,
            }
            counts
        })
}

/// Citizen report counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub submitted: usize,
    pub under_review: usize,
    pub resolved: usize,
    pub rejected: usize,
}

pub fn report_counts(reports: &[CitizenReport]) -> ReportCounts {
    reports
        .iter()
        .fold(ReportCounts::default(), |mut counts, report| {
            match report.status {
                ReportStatus::Submitted => counts.submitted += 1,
                ReportStatus::UnderReview => counts.under_review += 1,
                ReportStatus::Resolved => counts.resolved += 1,
                ReportStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}

/// The `n` fullest bins, fullest first. Ties keep their input order.
pub fn top_filled_bins(bins: &[Bin], n: usize) -> Vec<&Bin> {
    let mut sorted: Vec<&Bin> = bins.iter().collect();
    sorted.sort_by(|a, b| b.fill_level.cmp(&a.fill_level));
    sorted.truncate(n);
    sorted
}

pub fn active_vehicle_count(vehicles: &[Vehicle]) -> usize {
    vehicles
        .iter()
        .filter(|v| v.current_status == VehicleStatus::Active)
        .count()
}
