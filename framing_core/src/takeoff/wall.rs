//! # Per-Wall Takeoff
//!
//! Runs the full pipeline for a single wall with its own stock lengths and
//! costs it on its own, independent of any other wall in the project.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "regular_studs": 12,
//!   "corner_studs": 0,
//!   "total_studs": 12,
//!   "total_plates": 2,
//!   "studs_needed": 12,
//!   "plates_needed": 4,
//!   "stud_linear_feet": 96.0,
//!   "plate_linear_feet": 32.0,
//!   "total_linear_feet": 128.0,
//!   "stud_cost": 42.0,
//!   "plate_cost": 14.0,
//!   "total_cost": 56.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::cost::{plate_cost_for, stud_cost, total_cost};
use super::dimensions::{bottom_plate_runs, corner_studs, feet_to_inches, plate_count, regular_studs, top_plate_runs};
use super::purchase::{plate_linear_feet, plates_needed, stud_linear_feet, studs_needed, total_linear_feet};
use crate::lumber::LumberChoice;
use crate::pricing::PricingConfig;
use crate::wall::WallSpec;

/// Quantities and costs for one wall.
///
/// Linear feet here are feet of stock bought (boards x stock length).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    pub regular_studs: u32,
    pub corner_studs: u32,
    pub total_studs: u32,
    pub total_plates: u32,
    pub studs_needed: u32,
    pub plates_needed: u32,
    pub stud_linear_feet: f64,
    pub plate_linear_feet: f64,
    pub total_linear_feet: f64,
    pub stud_cost: f64,
    pub plate_cost: f64,
    pub total_cost: f64,
}

impl CalculationResult {
    /// Boards to buy, studs and plates together
    pub fn total_boards(&self) -> u32 {
        self.studs_needed.saturating_add(self.plates_needed)
    }
}

/// Run the takeoff for one wall.
pub fn calculate(wall: &WallSpec, lumber: &LumberChoice, pricing: &PricingConfig) -> CalculationResult {
    let regular = regular_studs(feet_to_inches(wall.length_ft), wall.stud_spacing.inches());
    let corners = corner_studs(wall.left_corner, wall.right_corner).total;
    let total_studs = regular.saturating_add(corners);
    let total_plates = plate_count(wall.top_plate, wall.bottom_plate);

    let stud_length_ft = lumber.stud_length.feet();
    let plate_length_ft = lumber.plate_length.feet();
    let studs_to_buy = studs_needed(total_studs, wall.height_ft, stud_length_ft);
    let plates_to_buy = plates_needed(total_plates, wall.length_ft, plate_length_ft);

    let stud_lf = stud_linear_feet(studs_to_buy, stud_length_ft);
    let plate_lf = plate_linear_feet(plates_to_buy, plate_length_ft);

    let studs_dollars = stud_cost(studs_to_buy, pricing.stud_unit_cost);
    let plates_dollars = plate_cost_for(plates_to_buy, wall, pricing);

    CalculationResult {
        regular_studs: regular,
        corner_studs: corners,
        total_studs,
        total_plates,
        studs_needed: studs_to_buy,
        plates_needed: plates_to_buy,
        stud_linear_feet: stud_lf,
        plate_linear_feet: plate_lf,
        total_linear_feet: total_linear_feet(stud_lf, plate_lf),
        stud_cost: studs_dollars,
        plate_cost: plates_dollars,
        total_cost: total_cost(studs_dollars, plates_dollars),
    }
}

/// Footage of framing members a wall consumes, as cut pieces rather than
/// boards bought.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PieceFootage {
    /// Studs x wall height
    pub stud_linear_feet: f64,
    /// Top plate runs x wall length
    pub top_plate_linear_feet: f64,
    /// Bottom plate runs x wall length
    pub bottom_plate_linear_feet: f64,
    /// Runs that are pressure-treated sleepers (0 or 1)
    pub pressure_treated_runs: u32,
}

impl PieceFootage {
    pub fn plate_linear_feet(&self) -> f64 {
        self.top_plate_linear_feet + self.bottom_plate_linear_feet
    }

    pub fn total_linear_feet(&self) -> f64 {
        self.stud_linear_feet + self.plate_linear_feet()
    }
}

/// Regular plus corner studs for one wall
pub(crate) fn stud_pieces(wall: &WallSpec) -> u32 {
    regular_studs(feet_to_inches(wall.length_ft), wall.stud_spacing.inches())
        .saturating_add(corner_studs(wall.left_corner, wall.right_corner).total)
}

/// Piece footage for one wall; independent of stock length.
pub fn piece_footage(wall: &WallSpec) -> PieceFootage {
    let studs = stud_pieces(wall);

    PieceFootage {
        stud_linear_feet: f64::from(studs) * wall.height_ft,
        top_plate_linear_feet: f64::from(top_plate_runs(wall.top_plate)) * wall.length_ft,
        bottom_plate_linear_feet: f64::from(bottom_plate_runs(wall.bottom_plate)) * wall.length_ft,
        pressure_treated_runs: u32::from(wall.has_pressure_treated_sleeper()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lumber::{LumberSize, StockLength};
    use crate::wall::{BottomPlate, CornerType, PlateTreatment, StudSpacing, TopPlate};
    use proptest::prelude::*;

    fn simple_wall() -> WallSpec {
        WallSpec::new(15.0, 8.0).with_plates(TopPlate::Single, BottomPlate::Standard)
    }

    #[test]
    fn test_simple_wall() {
        let r = calculate(&simple_wall(), &LumberChoice::default(), &PricingConfig::default());
        // 180" / 16" = 11.25 -> 11 + 1
        assert_eq!(r.regular_studs, 12);
        assert_eq!(r.corner_studs, 0);
        assert_eq!(r.total_studs, 12);
        assert_eq!(r.total_plates, 2);
        assert_eq!(r.studs_needed, 12);
        // ceil(2 * 15 / 8)
        assert_eq!(r.plates_needed, 4);
        assert_eq!(r.stud_linear_feet, 96.0);
        assert_eq!(r.plate_linear_feet, 32.0);
        assert_eq!(r.total_linear_feet, 128.0);
        assert_eq!(r.stud_cost, 42.0);
        assert_eq!(r.plate_cost, 14.0);
        assert_eq!(r.total_cost, 56.0);
        assert_eq!(r.total_boards(), 16);
    }

    #[test]
    fn test_basement_floating_wall() {
        let wall = WallSpec::new(12.0, 8.0)
            .with_plates(TopPlate::Single, BottomPlate::Floating)
            .with_corners(Some(CornerType::California), Some(CornerType::California))
            .floating(2.0, PlateTreatment::PressureTreated);
        let r = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());

        // 144 / 16 = 9 -> 10 regular, 4 corner
        assert_eq!(r.total_studs, 14);
        assert_eq!(r.total_plates, 3);
        // ceil(3 * 12 / 8) = ceil(4.5)
        assert_eq!(r.plates_needed, 5);
        // 3 PT at 4.25, 2 regular at 3.50
        assert_eq!(r.plate_cost, 19.75);
        assert_eq!(r.total_cost, 14.0 * 3.5 + 19.75);
    }

    #[test]
    fn test_long_stock_cuts_multiple_studs() {
        let lumber = LumberChoice {
            stud_length: StockLength::Ft16,
            plate_length: StockLength::Ft16,
            lumber_size: LumberSize::L2x6,
        };
        let r = calculate(&simple_wall(), &lumber, &PricingConfig::default());
        assert_eq!(r.studs_needed, 6);
        assert_eq!(r.plates_needed, 2);
        assert_eq!(r.stud_linear_feet, 96.0);
        assert_eq!(r.plate_linear_feet, 32.0);
    }

    #[test]
    fn test_load_bearing_flag_does_not_change_quantities() {
        let mut wall = simple_wall().with_spacing(StudSpacing::OnCenter24);
        let plain = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
        wall.load_bearing = true;
        let bearing = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
        assert_eq!(plain, bearing);
    }

    #[test]
    fn test_huge_wall_with_corners_saturates() {
        let wall = WallSpec::new(1.0e10, 8.0).with_corners(Some(CornerType::Double), None);
        let r = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
        assert_eq!(r.regular_studs, u32::MAX);
        assert_eq!(r.corner_studs, 2);
        assert_eq!(r.total_studs, u32::MAX);
        assert_eq!(r.studs_needed, u32::MAX);
        assert_eq!(r.total_boards(), u32::MAX);
        assert!(r.total_cost.is_finite());

        let footage = piece_footage(&wall);
        assert_eq!(footage.stud_linear_feet, f64::from(u32::MAX) * 8.0);
    }

    #[test]
    fn test_zero_sized_wall_is_defined() {
        let r = calculate(&WallSpec::new(0.0, 0.0), &LumberChoice::default(), &PricingConfig::default());
        assert_eq!(r.regular_studs, 1);
        assert_eq!(r.studs_needed, 0);
        assert_eq!(r.plates_needed, 0);
        assert_eq!(r.total_cost, 0.0);
    }

    #[test]
    fn test_piece_footage() {
        let wall = WallSpec::new(12.0, 8.0)
            .with_plates(TopPlate::Double, BottomPlate::Floating)
            .floating(1.5, PlateTreatment::PressureTreated);
        let f = piece_footage(&wall);
        assert_eq!(f.stud_linear_feet, 80.0);
        assert_eq!(f.top_plate_linear_feet, 24.0);
        assert_eq!(f.bottom_plate_linear_feet, 24.0);
        assert_eq!(f.pressure_treated_runs, 1);
        assert_eq!(f.total_linear_feet(), 128.0);
    }

    fn arb_wall() -> impl Strategy<Value = WallSpec> {
        (
            0.0f64..100.0,
            0.0f64..20.0,
            proptest::sample::select(StudSpacing::ALL.to_vec()),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            proptest::option::of(proptest::sample::select(CornerType::ALL.to_vec())),
            proptest::option::of(proptest::sample::select(CornerType::ALL.to_vec())),
        )
            .prop_map(|(length, height, spacing, double_top, floating, treated, left, right)| {
                let mut spec = WallSpec::new(length, height)
                    .with_spacing(spacing)
                    .with_plates(
                        if double_top { TopPlate::Double } else { TopPlate::Single },
                        if floating { BottomPlate::Floating } else { BottomPlate::Standard },
                    )
                    .with_corners(left, right);
                if treated {
                    spec.bottom_plate_treatment = PlateTreatment::PressureTreated;
                }
                spec
            })
    }

    proptest! {
        #[test]
        fn result_invariants_hold(wall in arb_wall()) {
            let r = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
            prop_assert_eq!(r.total_studs, r.regular_studs + r.corner_studs);
            prop_assert_eq!(r.total_linear_feet, r.stud_linear_feet + r.plate_linear_feet);
            prop_assert_eq!(r.total_cost, r.stud_cost + r.plate_cost);
            prop_assert!(r.total_cost >= 0.0);
        }

        #[test]
        fn calculate_is_deterministic(wall in arb_wall()) {
            let a = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
            let b = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
            prop_assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
            prop_assert_eq!(a, b);
        }
    }
}
