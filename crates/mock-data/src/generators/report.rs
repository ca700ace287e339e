//! Citizen report generation.

use rand::Rng;
use time::OffsetDateTime;

use wastewatch::models::{CitizenReport, Position, ReportStatus, ReportType};

use super::{LOCATIONS, pick, random_past};
use crate::config::{BoundingBox, Region};

/// Generates citizen reports.
pub struct ReportGenerator {
    region: BoundingBox,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            region: Region::NEW_YORK,
        }
    }

    pub fn for_region(region: BoundingBox) -> Self {
        Self { region }
    }

    /// Generates the report at zero-based position `index`.
    ///
    /// Contact fields are filled independently; `resolved_at` is set only for
    /// resolved reports.
    pub fn generate(
        &self,
        index: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> CitizenReport {
        let number = index + 1;
        let report_type = pick(rng, &ReportType::ALL);
        let (lat, lon) = self.region.random_point(rng);

        let photo_url = rng
            .gen_bool(0.4)
            .then(|| format!("https://picsum.photos/400/300?random={index}"));
        let reporter_name = rng.gen_bool(0.8).then(|| format!("Citizen {number}"));
        let reporter_email = rng
            .gen_bool(0.7)
            .then(|| format!("citizen{number}@email.com"));
        let reporter_phone = rng
            .gen_bool(0.6)
            .then(|| format!("555-{}", rng.gen_range(1000..=9999)));

        let status = pick(rng, &ReportStatus::ALL);
        let assigned_to = rng
            .gen_bool(0.5)
            .then(|| format!("worker-{}", rng.gen_range(1..=5)));
        let created_at = random_past(rng, base_time, 60);
        let resolved_at = (status == ReportStatus::Resolved)
            .then(|| random_past(rng, base_time, 14).max(created_at));

        CitizenReport {
            id: format!("report-{number}"),
            report_type,
            description: format!(
                "Citizen reported {} issue",
                report_type.as_str().replace('_', " ")
            ),
            location_name: pick(rng, LOCATIONS).to_string(),
            position: Some(Position::new(lat, lon)),
            photo_url,
            reporter_name,
            reporter_email,
            reporter_phone,
            status,
            assigned_to,
            resolved_at,
            created_at,
        }
    }

    /// Generates reports sorted newest first.
    pub fn generate_batch(
        &self,
        count: usize,
        base_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<CitizenReport> {
        let mut reports: Vec<CitizenReport> = (0..count)
            .map(|i| self.generate(i, base_time, rng))
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
