//! Stock Lumber
//!
//! Board sizes and stock lengths offered for wall framing, plus the
//! per-calculation [`LumberChoice`].
//!
//! ## Nominal vs Actual Dimensions
//!
//! - 2x4 = 1.5" x 3.5" actual
//! - 2x6 = 1.5" x 5.5" actual
//!
//! The size is carried for display and reporting only. Board quantities
//! depend on the stock length, never on the cross-section.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateError;

/// Framing lumber cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LumberSize {
    /// 2x4 (1.5" x 3.5")
    #[default]
    #[serde(rename = "2x4")]
    L2x4,
    /// 2x6 (1.5" x 5.5")
    #[serde(rename = "2x6")]
    L2x6,
}

impl LumberSize {
    /// All sizes for selection lists
    pub const ALL: [LumberSize; 2] = [LumberSize::L2x4, LumberSize::L2x6];

    /// Actual dimensions (width, depth) in inches
    pub fn actual_dimensions(&self) -> (f64, f64) {
        match self {
            LumberSize::L2x4 => (1.5, 3.5),
            LumberSize::L2x6 => (1.5, 5.5),
        }
    }

    /// Display name (e.g., "2x4")
    pub fn display_name(&self) -> &'static str {
        match self {
            LumberSize::L2x4 => "2x4",
            LumberSize::L2x6 => "2x6",
        }
    }

    /// Parse a display name back into a size
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.display_name() == name.trim())
    }
}

impl fmt::Display for LumberSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// STOCK LENGTH
// ============================================================================

/// Length of a board as sold, in whole feet.
///
/// Serializes as the plain number of feet (`8`, `10`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum StockLength {
    #[default]
    Ft8,
    Ft10,
    Ft12,
    Ft14,
    Ft16,
}

impl StockLength {
    /// All stock lengths, shortest first
    pub const ALL: [StockLength; 5] = [
        StockLength::Ft8,
        StockLength::Ft10,
        StockLength::Ft12,
        StockLength::Ft14,
        StockLength::Ft16,
    ];

    /// Whole feet
    pub fn whole_feet(&self) -> u8 {
        match self {
            StockLength::Ft8 => 8,
            StockLength::Ft10 => 10,
            StockLength::Ft12 => 12,
            StockLength::Ft14 => 14,
            StockLength::Ft16 => 16,
        }
    }

    /// Length in feet as used by the purchase calculator
    pub fn feet(&self) -> f64 {
        f64::from(self.whole_feet())
    }
}

impl TryFrom<u8> for StockLength {
    type Error = EstimateError;

    fn try_from(feet: u8) -> Result<Self, Self::Error> {
        StockLength::ALL
            .into_iter()
            .find(|s| s.whole_feet() == feet)
            .ok_or_else(|| {
                EstimateError::invalid_input(
                    "stock_length",
                    feet.to_string(),
                    "Stock length must be one of 8, 10, 12, 14 or 16 ft",
                )
            })
    }
}

impl From<StockLength> for u8 {
    fn from(length: StockLength) -> Self {
        length.whole_feet()
    }
}

impl fmt::Display for StockLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'", self.whole_feet())
    }
}

// ============================================================================
// LUMBER CHOICE
// ============================================================================

/// Stock chosen for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LumberChoice {
    /// Stock length bought for studs
    pub stud_length: StockLength,
    /// Stock length bought for plates
    pub plate_length: StockLength,
    /// Cross-section (display only)
    pub lumber_size: LumberSize,
}

impl LumberChoice {
    /// Same stock length for studs and plates
    pub fn uniform(length: StockLength, lumber_size: LumberSize) -> Self {
        Self {
            stud_length: length,
            plate_length: length,
            lumber_size,
        }
    }
}
