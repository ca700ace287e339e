//! Fleet vehicle generation.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use time::OffsetDateTime;

use wastewatch::models::{Position, Vehicle, VehicleStatus, Zone};

use super::{pick, random_float, random_past};
use crate::config::{BoundingBox, Region};

/// Drivers assigned to the first vehicles, in order.
const DRIVER_ROSTER: &[&str] = &[
    "John Smith",
    "Maria Garcia",
    "Robert Chen",
    "Sarah Johnson",
    "Michael Brown",
    "Lisa Anderson",
    "David Wilson",
    "Jennifer Lee",
    "James Taylor",
    "Emily Martinez",
    "Daniel Rodriguez",
    "Jessica Davis",
];

/// Generates collection vehicles.
pub struct VehicleGenerator {
    region: BoundingBox,
}

impl VehicleGenerator {
    pub fn new() -> Self {
        Self {
            region: Region::NEW_YORK,
        }
    }

    /// Creates a generator that places active vehicles within `region`.
    pub fn for_region(region: BoundingBox) -> Self {
        Self { region }
    }

    /// Generates the vehicle at zero-based position `index`.
    ///
    /// Only active vehicles report a position, and vehicles in maintenance
    /// have no zone assignment.
    pub fn generate(&self, index: usize, base_time: OffsetDateTime, rng: &mut impl Rng) -> Vehicle {
        let number = index + 1;
        let current_status = pick(rng, &VehicleStatus::ALL);

        let position = (current_status == VehicleStatus::Active).then(|| {
            let (lat, lon) = self.region.random_point(rng);
            Position::new(lat, lon)
        });
        let assigned_zone =
            (current_status != VehicleStatus::Maintenance).then(|| pick(rng, &Zone::ALL));

        let driver_name: String = match DRIVER_ROSTER.get(index) {
            Some(name) => name.to_string(),
            None => Name().fake_with_rng(rng),
        };

        Vehicle {
            id: format!("vehicle-{number}"),
            vehicle_id: format!("VH-{number:03}"),
            driver_name,
            current_status,
            position,
            assigned_zone,
            capacity_kg: rng.gen_range(4000..=6000),
            fuel_efficiency: random_float(rng, 6.0, 10.0, 2),
            last_maintenance: Some(random_past(rng, base_time, 90)),
            created_at: random_past(rng, base_time, 365),
        }
    }

    /// Generates multiple vehicles numbered from 1.
    pub fn generate_batch(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<Vehicle> {
        (0..count)
            .map(|i| self.generate(i, base_time, rng))
            .collect()
    }
}

impl Default for VehicleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
