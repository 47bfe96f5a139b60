//! # Unit Types
//!
//! Lightweight length wrappers. Wall runs and heights are entered in feet,
//! stud spacing is entered in inches; these keep the two from being mixed up
//! at the boundaries while serializing as plain numbers.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::units::{Feet, Inches};
//!
//! let run = Feet(12.0);
//! let run_inches: Inches = run.into();
//! assert_eq!(run_inches.0, 144.0);
//! ```

use serde::{Deserialize, Serialize};

/// Inches in one foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl Inches {
    pub fn value(self) -> f64 {
        self.0
    }
}
