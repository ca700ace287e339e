//! Domain records for bins, fleet, routes, alerts, citizen reports, and analytics.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Fill level at or above which a bin needs collecting.
pub const CRITICAL_FILL_LEVEL: u8 = 80;

/// Fill level at or above which a bin is approaching full.
pub const MODERATE_FILL_LEVEL: u8 = 50;

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Collection zones of the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    North,
    South,
    East,
    West,
    Central,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::North,
        Zone::South,
        Zone::East,
        Zone::West,
        Zone::Central,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::North => "North",
            Zone::South => "South",
            Zone::East => "East",
            Zone::West => "West",
            Zone::Central => "Central",
        }
    }
}

/// Bin status derived from fill level and sensor availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinStatus {
    Normal,
    ApproachingFull,
    RequiresCollection,
    Offline,
}

impl BinStatus {
    /// Derives the status a reporting sensor would give for `fill_level`.
    pub fn from_fill_level(fill_level: u8) -> Self {
        if fill_level >= CRITICAL_FILL_LEVEL {
            BinStatus::RequiresCollection
        } else if fill_level >= MODERATE_FILL_LEVEL {
            BinStatus::ApproachingFull
        } else {
            BinStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinStatus::Normal => "normal",
            BinStatus::ApproachingFull => "approaching_full",
            BinStatus::RequiresCollection => "requires_collection",
            BinStatus::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BinStatus::Normal => "Normal",
            BinStatus::ApproachingFull => "Approaching Full",
            BinStatus::RequiresCollection => "Requires Collection",
            BinStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorStatus {
    Operational,
    Malfunctioning,
    Offline,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Operational => "operational",
            SensorStatus::Malfunctioning => "malfunctioning",
            SensorStatus::Offline => "offline",
        }
    }
}

/// A smart waste bin and its latest sensor reading.
///
/// The four category percentages are signed: `general_percentage` is the
/// remainder after the other three and is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub id: String,
    pub bin_id: String,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub fill_level: u8,
    pub recyclable_percentage: i32,
    pub organic_percentage: i32,
    pub general_percentage: i32,
    pub hazardous_percentage: i32,
    pub status: BinStatus,
    pub sensor_status: SensorStatus,
    pub zone: Zone,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_collection: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Bin {
    /// Sum of the four waste-category percentages.
    pub fn composition_total(&self) -> i32 {
        self.recyclable_percentage
            + self.organic_percentage
            + self.general_percentage
            + self.hazardous_percentage
    }

    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Active,
    Idle,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Idle,
        VehicleStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Idle => "idle",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Idle => "Idle",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

/// A collection vehicle.
///
/// `position` is only known while the vehicle is active, and a vehicle under
/// maintenance has no zone assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub current_status: VehicleStatus,
    pub position: Option<Position>,
    pub assigned_zone: Option<Zone>,
    pub capacity_kg: u32,
    pub fuel_efficiency: f64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_maintenance: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "planned",
            RouteStatus::Active => "active",
            RouteStatus::Completed => "completed",
            RouteStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "Planned",
            RouteStatus::Active => "Active",
            RouteStatus::Completed => "Completed",
            RouteStatus::Cancelled => "Cancelled",
        }
    }
}

/// A planned or executed collection route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub route_id: String,
    pub route_name: String,
    pub vehicle_id: Option<String>,
    pub status: RouteStatus,
    pub total_bins: u32,
    pub bins_collected: u32,
    pub estimated_distance_km: Option<f64>,
    pub estimated_time_minutes: Option<u32>,
    pub estimated_fuel_cost: Option<f64>,
    pub route_date: Date,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Route {
    /// Fraction of the route's bins already collected, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_bins == 0 {
            0.0
        } else {
            f64::from(self.bins_collected) / f64::from(self.total_bins)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    BinOverflow,
    SensorMalfunction,
    UnusualPattern,
    CollectionCompleted,
    RouteDelay,
    MaintenanceRequired,
}

impl AlertType {
    pub const ALL: [AlertType; 6] = [
        AlertType::BinOverflow,
        AlertType::SensorMalfunction,
        AlertType::UnusualPattern,
        AlertType::CollectionCompleted,
        AlertType::RouteDelay,
        AlertType::MaintenanceRequired,
    ];

    /// Priority is fixed per alert type.
    pub fn priority(&self) -> AlertPriority {
        match self {
            AlertType::BinOverflow => AlertPriority::Critical,
            AlertType::SensorMalfunction => AlertPriority::Warning,
            AlertType::UnusualPattern => AlertPriority::Info,
            AlertType::CollectionCompleted => AlertPriority::Info,
            AlertType::RouteDelay => AlertPriority::Warning,
            AlertType::MaintenanceRequired => AlertPriority::Warning,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AlertType::BinOverflow => "Bin Overflow Alert",
            AlertType::SensorMalfunction => "Sensor Malfunction Detected",
            AlertType::UnusualPattern => "Unusual Waste Pattern",
            AlertType::CollectionCompleted => "Collection Completed",
            AlertType::RouteDelay => "Route Delay",
            AlertType::MaintenanceRequired => "Maintenance Required",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::BinOverflow => "bin_overflow",
            AlertType::SensorMalfunction => "sensor_malfunction",
            AlertType::UnusualPattern => "unusual_pattern",
            AlertType::CollectionCompleted => "collection_completed",
            AlertType::RouteDelay => "route_delay",
            AlertType::MaintenanceRequired => "maintenance_required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Critical,
    Warning,
    Info,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Critical => "critical",
            AlertPriority::Warning => "warning",
            AlertPriority::Info => "info",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertPriority::Critical => "Critical",
            AlertPriority::Warning => "Warning",
            AlertPriority::Info => "Info",
        }
    }
}

/// An operational alert raised against a bin or vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    pub bin_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub is_resolved: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub resolved_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    MissedCollection,
    IllegalDumping,
    SpecialPickup,
    BinDamage,
    Other,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::MissedCollection,
        ReportType::IllegalDumping,
        ReportType::SpecialPickup,
        ReportType::BinDamage,
        ReportType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::MissedCollection => "missed_collection",
            ReportType::IllegalDumping => "illegal_dumping",
            ReportType::SpecialPickup => "special_pickup",
            ReportType::BinDamage => "bin_damage",
            ReportType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::MissedCollection => "Missed Collection",
            ReportType::IllegalDumping => "Illegal Dumping",
            ReportType::SpecialPickup => "Special Pickup",
            ReportType::BinDamage => "Bin Damage",
            ReportType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    UnderReview,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Submitted,
        ReportStatus::UnderReview,
        ReportStatus::Resolved,
        ReportStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::UnderReview => "under_review",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "Submitted",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Rejected => "Rejected",
        }
    }
}

/// An issue reported by a member of the public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenReport {
    pub id: String,
    pub report_type: ReportType,
    pub description: String,
    pub location_name: String,
    pub position: Option<Position>,
    pub photo_url: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub status: ReportStatus,
    pub assigned_to: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub resolved_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Prediction,
    Trend,
    Recommendation,
    Anomaly,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Prediction => "prediction",
            InsightType::Trend => "trend",
            InsightType::Recommendation => "recommendation",
            InsightType::Anomaly => "anomaly",
        }
    }
}

/// A model-produced observation shown on the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub confidence_score: Option<f64>,
    pub data_source: Option<String>,
    pub relevant_bin_id: Option<String>,
    pub relevant_zone: Option<Zone>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Collection totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteStatistic {
    pub id: String,
    pub stat_date: Date,
    pub total_waste_collected_kg: f64,
    pub recyclable_kg: f64,
    pub organic_kg: f64,
    pub general_kg: f64,
    pub hazardous_kg: f64,
    pub collections_completed: u32,
    pub fuel_consumed_liters: f64,
    pub distance_traveled_km: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl WasteStatistic {
    /// Sum of the four per-category weights.
    pub fn category_total_kg(&self) -> f64 {
        self.recyclable_kg + self.organic_kg + self.general_kg + self.hazardous_kg
    }
}

/// Every collection produced by one generator run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub bins: Vec<Bin>,
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<Route>,
    pub alerts: Vec<Alert>,
    pub citizen_reports: Vec<CitizenReport>,
    pub insights: Vec<Insight>,
    pub waste_statistics: Vec<WasteStatistic>,
}
