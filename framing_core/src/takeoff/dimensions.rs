//! Dimension calculator: wall geometry to stud and plate piece counts.

use serde::{Deserialize, Serialize};

use super::count_from;
use crate::units::{Feet, Inches};
use crate::wall::{BottomPlate, CornerType, TopPlate};

/// Corner studs at each end of a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CornerStuds {
    pub left: u32,
    pub right: u32,
    pub total: u32,
}

/// Studs at fixed on-center spacing, plus the starting stud.
///
/// Returns `floor(length / spacing) + 1` for positive spacing and 0
/// otherwise. A zero-length run still gets its starting stud.
pub fn regular_studs(length_in: f64, spacing_in: f64) -> u32 {
    if !(spacing_in > 0.0) {
        return 0;
    }
    count_from((length_in / spacing_in).floor() + 1.0)
}

/// Studs added by one corner build-up
pub fn corner_stud_count(corner: Option<CornerType>) -> u32 {
    match corner {
        Some(CornerType::Double) => 2,
        Some(CornerType::ThreeStud) => 3,
        Some(CornerType::California) => 2,
        None => 0,
    }
}

/// Corner studs for both ends; each end is independent.
pub fn corner_studs(left: Option<CornerType>, right: Option<CornerType>) -> CornerStuds {
    let left = corner_stud_count(left);
    let right = corner_stud_count(right);
    CornerStuds {
        left,
        right,
        total: left + right,
    }
}

/// Plate runs along the top of the wall
pub fn top_plate_runs(top: TopPlate) -> u32 {
    match top {
        TopPlate::Single => 1,
        TopPlate::Double => 2,
    }
}

/// Plate runs along the bottom. Floating is sleeper plus plate.
pub fn bottom_plate_runs(bottom: BottomPlate) -> u32 {
    match bottom {
        BottomPlate::Standard => 1,
        BottomPlate::Floating => 2,
    }
}

/// Total plate runs, top plus bottom
pub fn plate_count(top: TopPlate, bottom: BottomPlate) -> u32 {
    top_plate_runs(top) + bottom_plate_runs(bottom)
}

pub fn feet_to_inches(feet: f64) -> f64 {
    Inches::from(Feet(feet)).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_regular_studs() {
        // 10 ft at 16" OC: 120 / 16 = 7.5 -> 7 + 1
        assert_eq!(regular_studs(120.0, 16.0), 8);
        // exact multiple keeps the end stud
        assert_eq!(regular_studs(192.0, 16.0), 13);
        assert_eq!(regular_studs(144.0, 24.0), 7);
    }

    #[test]
    fn test_regular_studs_degenerate_spacing() {
        assert_eq!(regular_studs(120.0, 0.0), 0);
        assert_eq!(regular_studs(120.0, -16.0), 0);
        assert_eq!(regular_studs(120.0, f64::NAN), 0);
    }

    #[test]
    fn test_zero_length_wall_gets_one_stud() {
        assert_eq!(regular_studs(0.0, 16.0), 1);
    }

    #[test]
    fn test_negative_length_never_negative() {
        assert_eq!(regular_studs(-10.0, 16.0), 0);
        assert_eq!(regular_studs(-100.0, 16.0), 0);
    }

    #[test]
    fn test_corner_studs() {
        let c = corner_studs(Some(CornerType::Double), Some(CornerType::ThreeStud));
        assert_eq!(c, CornerStuds { left: 2, right: 3, total: 5 });
        assert_eq!(corner_studs(None, None).total, 0);
        assert_eq!(corner_studs(Some(CornerType::California), None).total, 2);
    }

    #[test]
    fn test_plate_count() {
        assert_eq!(plate_count(TopPlate::Double, BottomPlate::Floating), 4);
        assert_eq!(plate_count(TopPlate::Single, BottomPlate::Standard), 2);
        assert_eq!(plate_count(TopPlate::Double, BottomPlate::Standard), 3);
    }

    #[test]
    fn test_feet_to_inches() {
        assert_eq!(feet_to_inches(8.0), 96.0);
        assert_eq!(feet_to_inches(0.25), 3.0);
    }

    proptest! {
        #[test]
        fn regular_studs_matches_formula(length_in in 0.0f64..2000.0, spacing in 1.0f64..48.0) {
            let expected = (length_in / spacing).floor() as u32 + 1;
            prop_assert_eq!(regular_studs(length_in, spacing), expected);
        }

        #[test]
        fn feet_inches_round_trip(x in -1.0e9f64..1.0e9) {
            let back = feet_to_inches(x) / 12.0;
            prop_assert!((back - x).abs() <= 2.0 * x.abs() * f64::EPSILON);
        }

        #[test]
        fn corner_total_is_sum(
            left in proptest::option::of(proptest::sample::select(CornerType::ALL.to_vec())),
            right in proptest::option::of(proptest::sample::select(CornerType::ALL.to_vec())),
        ) {
            let c = corner_studs(left, right);
            prop_assert_eq!(c.total, c.left + c.right);
        }
    }
}
