//! Display helpers for lengths and money.

use crate::units::{Feet, Inches, INCHES_PER_FOOT};

/// Render feet as feet and whole inches, e.g. `12′-6″`.
///
/// The value is rounded to the nearest inch first, so 11.99 ft prints as
/// `12′-0″` rather than `11′-12″`.
pub fn feet_to_feet_inches(value_ft: f64) -> String {
    let total_in = Inches::from(Feet(value_ft)).value().round() as i64;
    let per_foot = INCHES_PER_FOOT as i64;
    let sign = if total_in < 0 { "-" } else { "" };
    let total_in = total_in.abs();
    format!("{sign}{}′-{}″", total_in / per_foot, total_in % per_foot)
}

/// Dollars with two decimals, e.g. `$56.00`
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_inches() {
        assert_eq!(feet_to_feet_inches(12.5), "12′-6″");
        assert_eq!(feet_to_feet_inches(8.0), "8′-0″");
        assert_eq!(feet_to_feet_inches(11.99), "12′-0″");
        assert_eq!(feet_to_feet_inches(0.0), "0′-0″");
        assert_eq!(feet_to_feet_inches(-1.5), "-1′-6″");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(15.5), "$15.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
