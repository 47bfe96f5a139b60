//! Cost calculator: board counts and unit prices to dollars.

use crate::pricing::PricingConfig;
use crate::wall::WallSpec;

pub fn stud_cost(studs_needed: u32, stud_unit_cost: f64) -> f64 {
    f64::from(studs_needed) * stud_unit_cost
}

/// Plate boards priced with the pressure-treated split.
///
/// A floating, pressure-treated bottom plate bills half the plate boards,
/// rounded up, at the pressure-treated price and the rest at the regular
/// plate price. Any other configuration bills every board at the regular
/// plate price.
pub fn plate_cost(
    plates_needed: u32,
    plate_unit_cost: f64,
    is_floating_wall: bool,
    is_pressure_treated: bool,
    pressure_treated_unit_cost: f64,
) -> f64 {
    if is_floating_wall && is_pressure_treated {
        let pressure_treated = plates_needed.div_ceil(2);
        let regular = plates_needed - pressure_treated;
        f64::from(pressure_treated) * pressure_treated_unit_cost + f64::from(regular) * plate_unit_cost
    } else {
        f64::from(plates_needed) * plate_unit_cost
    }
}

/// [`plate_cost`] with the flags and prices taken from a wall and pricing config
pub fn plate_cost_for(plates_needed: u32, wall: &WallSpec, pricing: &PricingConfig) -> f64 {
    plate_cost(
        plates_needed,
        pricing.plate_unit_cost,
        wall.is_floating(),
        wall.is_pressure_treated(),
        pricing.pressure_treated_plate_cost,
    )
}

pub fn total_cost(stud_cost: f64, plate_cost: f64) -> f64 {
    stud_cost + plate_cost
}
