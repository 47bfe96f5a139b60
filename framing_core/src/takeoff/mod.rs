//! # Framing Takeoff
//!
//! The deterministic calculations that turn a wall into lumber quantities
//! and dollars. Data flows leaf-first:
//!
//! ```text
//! WallSpec ─► dimensions (piece counts)
//!          ─► purchase   (boards to buy, linear feet)
//!          ─► cost       (stud, plate, total dollars)
//! ```
//!
//! [`wall::calculate`] runs that pipeline for one wall and costs it on its
//! own. [`summary::summarize`] runs it across a project, sums the rounded
//! board counts, and only then applies the cost calculator once.
//!
//! Every function here is pure and total. Degenerate input (zero spacing,
//! zero-length stock, negative lengths) produces zeros, never a panic or an
//! error; validation lives on [`crate::wall::WallSpec::validate`].
//!
//! ## Example
//!
//! ```rust
//! use framing_core::lumber::LumberChoice;
//! use framing_core::pricing::PricingConfig;
//! use framing_core::takeoff::wall::calculate;
//! use framing_core::wall::{TopPlate, BottomPlate, WallSpec};
//!
//! let wall = WallSpec::new(15.0, 8.0).with_plates(TopPlate::Single, BottomPlate::Standard);
//! let result = calculate(&wall, &LumberChoice::default(), &PricingConfig::default());
//!
//! assert_eq!(result.total_studs, 12);
//! assert_eq!(result.plates_needed, 4);
//! assert_eq!(result.total_cost, 56.0);
//! ```

pub mod cost;
pub mod dimensions;
pub mod purchase;
pub mod summary;
pub mod wall;

pub use cost::{plate_cost, stud_cost, total_cost};
pub use dimensions::{corner_studs, feet_to_inches, plate_count, regular_studs, CornerStuds};
pub use purchase::{plates_needed, studs_needed};
pub use summary::{summarize, ProjectSummary, SummaryOptions};
pub use wall::{calculate, CalculationResult};

/// Convert an already-rounded float into a piece or board count.
///
/// NaN and negative values become 0; values past `u32::MAX` saturate.
pub(crate) fn count_from(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::count_from;

    #[test]
    fn test_count_from_clamps() {
        assert_eq!(count_from(3.0), 3);
        assert_eq!(count_from(-2.0), 0);
        assert_eq!(count_from(f64::NAN), 0);
        assert_eq!(count_from(f64::INFINITY), u32::MAX);
    }
}
