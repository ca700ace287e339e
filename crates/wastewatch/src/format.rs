//! Display formatting for dashboard values.

/// Formats a weight, switching to tons at 1000 kg.
pub fn format_weight(kg: f64) -> String {
    if kg >= 1000.0 {
        format!("{:.1} tons", kg / 1000.0)
    } else {
        format!("{kg:.0} kg")
    }
}

pub fn format_distance(km: f64) -> String {
    format!("{km:.1} km")
}

pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn format_fill_level(fill_level: u8) -> String {
    format!("{fill_level}%")
}
