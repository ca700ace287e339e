//! Collection route generation.

use rand::Rng;
use time::OffsetDateTime;

use wastewatch::models::{Route, RouteStatus, Vehicle, Zone};

use super::{pick, random_float, random_past};

/// Statuses a freshly generated route can have. Cancellation only happens
/// through the dashboard.
const GENERATED_STATUSES: [RouteStatus; 3] = [
    RouteStatus::Planned,
    RouteStatus::Active,
    RouteStatus::Completed,
];

/// Generates routes assigned round-robin to a fleet.
pub struct RouteGenerator;

impl RouteGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the route at zero-based position `index`.
    ///
    /// The vehicle is `vehicles[index % vehicles.len()]`, or none for an empty
    /// fleet. `bins_collected` matches the status: all bins when completed,
    /// a random share when active, none when planned.
    pub fn generate(
        &self,
        index: usize,
        vehicles: &[Vehicle],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Route {
        let number = index + 1;
        let status = pick(rng, &GENERATED_STATUSES);
        let total_bins: u32 = rng.gen_range(5..=15);

        let bins_collected = match status {
            RouteStatus::Completed => total_bins,
            RouteStatus::Active => rng.gen_range(0..=total_bins),
            RouteStatus::Planned | RouteStatus::Cancelled => 0,
        };

        let vehicle_id =
            (!vehicles.is_empty()).then(|| vehicles[index % vehicles.len()].id.clone());

        Route {
            id: format!("route-{number}"),
            route_id: format!("RT-{number:03}"),
            route_name: format!("{} Zone Route {number}", pick(rng, &Zone::ALL).as_str()),
            vehicle_id,
            status,
            total_bins,
            bins_collected,
            estimated_distance_km: Some(random_float(rng, 15.0, 45.0, 2)),
            estimated_time_minutes: Some(rng.gen_range(90..=240)),
            estimated_fuel_cost: Some(random_float(rng, 25.0, 85.0, 2)),
            route_date: base_time.date(),
            started_at: (status != RouteStatus::Planned).then_some(base_time),
            completed_at: (status == RouteStatus::Completed).then_some(base_time),
            created_at: random_past(rng, base_time, 30),
        }
    }

    /// Generates multiple routes numbered from 1.
    pub fn generate_batch(
        &self,
        count: usize,
        vehicles: &[Vehicle],
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<Route> {
        (0..count)
            .map(|i| self.generate(i, vehicles, base_time, rng))
            .collect()
    }
}

impl Default for RouteGenerator {
    fn default() -> Self {
        Self::new()
    }
}
