//! # Wall Definitions
//!
//! The persisted description of a framed wall. A [`WallSpec`] carries every
//! field the takeoff engine reads; a [`Wall`] adds identity and a name for
//! use inside a project.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length_ft": 14.0,
//!   "height_ft": 8.0,
//!   "stud_spacing": "16",
//!   "top_plate": "double",
//!   "bottom_plate": "floating",
//!   "bottom_plate_treatment": "pressure-treated",
//!   "left_corner": "california",
//!   "right_corner": null,
//!   "load_bearing": false,
//!   "floor_gap_in": 2.0
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EstimateError, EstimateResult};

/// Longest wall accepted by validation, in feet
pub const MAX_WALL_LENGTH_FT: f64 = 100.0;

/// Tallest wall accepted by validation, in feet
pub const MAX_WALL_HEIGHT_FT: f64 = 20.0;

/// Longest wall name accepted by validation
pub const MAX_WALL_NAME_LEN: usize = 50;

// ============================================================================
// FRAMING OPTIONS
// ============================================================================

/// On-center stud spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StudSpacing {
    #[serde(rename = "12")]
    OnCenter12,
    #[default]
    #[serde(rename = "16")]
    OnCenter16,
    #[serde(rename = "24")]
    OnCenter24,
}

impl StudSpacing {
    pub const ALL: [StudSpacing; 3] = [
        StudSpacing::OnCenter12,
        StudSpacing::OnCenter16,
        StudSpacing::OnCenter24,
    ];

    /// Spacing in inches
    pub fn inches(&self) -> f64 {
        match self {
            StudSpacing::OnCenter12 => 12.0,
            StudSpacing::OnCenter16 => 16.0,
            StudSpacing::OnCenter24 => 24.0,
        }
    }

    /// Parse from whole inches
    pub fn from_inches(inches: u32) -> Option<Self> {
        match inches {
            12 => Some(StudSpacing::OnCenter12),
            16 => Some(StudSpacing::OnCenter16),
            24 => Some(StudSpacing::OnCenter24),
            _ => None,
        }
    }
}

impl fmt::Display for StudSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\" OC", self.inches())
    }
}

/// Top plate build-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TopPlate {
    Single,
    #[default]
    Double,
}

impl fmt::Display for TopPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TopPlate::Single => "single",
            TopPlate::Double => "double",
        })
    }
}

/// Bottom plate style.
///
/// A floating bottom plate hangs above the slab and is framed as two runs:
/// a sleeper on the floor and the plate carried by the studs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BottomPlate {
    #[default]
    Standard,
    Floating,
}

impl fmt::Display for BottomPlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BottomPlate::Standard => "standard",
            BottomPlate::Floating => "floating",
        })
    }
}

/// Bottom plate treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlateTreatment {
    #[default]
    None,
    PressureTreated,
}

/// Corner stud build-up at one end of a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerType {
    Double,
    ThreeStud,
    California,
}

impl CornerType {
    pub const ALL: [CornerType; 3] = [CornerType::Double, CornerType::ThreeStud, CornerType::California];

    /// Kebab-case name as used in project files
    pub fn name(&self) -> &'static str {
        match self {
            CornerType::Double => "double",
            CornerType::ThreeStud => "three-stud",
            CornerType::California => "california",
        }
    }

    /// Parse a kebab-case name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name.trim())
    }
}

impl fmt::Display for CornerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// WALL SPEC
// ============================================================================

/// Geometry and framing configuration of one wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    /// Wall run length in feet
    pub length_ft: f64,

    /// Wall height in feet
    pub height_ft: f64,

    pub stud_spacing: StudSpacing,

    pub top_plate: TopPlate,

    pub bottom_plate: BottomPlate,

    #[serde(default)]
    pub bottom_plate_treatment: PlateTreatment,

    #[serde(default)]
    pub left_corner: Option<CornerType>,

    #[serde(default)]
    pub right_corner: Option<CornerType>,

    /// Informational; never changes the takeoff arithmetic
    #[serde(default)]
    pub load_bearing: bool,

    /// Gap under a floating plate, in inches
    #[serde(default)]
    pub floor_gap_in: Option<f64>,
}

impl WallSpec {
    /// A plain wall: 16" OC, double top plate, standard bottom, no corners.
    pub fn new(length_ft: f64, height_ft: f64) -> Self {
        WallSpec {
            length_ft,
            height_ft,
            stud_spacing: StudSpacing::default(),
            top_plate: TopPlate::default(),
            bottom_plate: BottomPlate::default(),
            bottom_plate_treatment: PlateTreatment::default(),
            left_corner: None,
            right_corner: None,
            load_bearing: false,
            floor_gap_in: None,
        }
    }

    pub fn with_spacing(mut self, spacing: StudSpacing) -> Self {
        self.stud_spacing = spacing;
        self
    }

    pub fn with_plates(mut self, top: TopPlate, bottom: BottomPlate) -> Self {
        self.top_plate = top;
        self.bottom_plate = bottom;
        self
    }

    pub fn with_corners(mut self, left: Option<CornerType>, right: Option<CornerType>) -> Self {
        self.left_corner = left;
        self.right_corner = right;
        self
    }

    /// Floating bottom plate with the given gap and treatment
    pub fn floating(mut self, floor_gap_in: f64, treatment: PlateTreatment) -> Self {
        self.bottom_plate = BottomPlate::Floating;
        self.floor_gap_in = Some(floor_gap_in);
        self.bottom_plate_treatment = treatment;
        self
    }

    pub fn is_floating(&self) -> bool {
        self.bottom_plate == BottomPlate::Floating
    }

    pub fn is_pressure_treated(&self) -> bool {
        self.bottom_plate_treatment == PlateTreatment::PressureTreated
    }

    /// Whether the bottom plate boards are billed with the pressure-treated split
    pub fn has_pressure_treated_sleeper(&self) -> bool {
        self.is_floating() && self.is_pressure_treated()
    }

    /// Check dimensions and framing rules.
    ///
    /// Every failing rule is reported, not just the first.
    pub fn validate(&self) -> EstimateResult<()> {
        EstimateError::from_messages(self.rule_violations())
    }

    fn rule_violations(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.length_ft.is_finite() || self.length_ft <= 0.0 {
            errors.push("Wall length must be positive".to_string());
        } else if self.length_ft > MAX_WALL_LENGTH_FT {
            errors.push("Wall length must be less than 100 feet".to_string());
        }

        if !self.height_ft.is_finite() || self.height_ft <= 0.0 {
            errors.push("Wall height must be positive".to_string());
        } else if self.height_ft > MAX_WALL_HEIGHT_FT {
            errors.push("Wall height must be less than 20 feet".to_string());
        }

        if matches!(self.floor_gap_in, Some(gap) if gap < 0.0) {
            errors.push("Floor gap cannot be negative".to_string());
        }

        if self.load_bearing && self.stud_spacing == StudSpacing::OnCenter24 {
            errors.push("Load bearing walls cannot use 24\" stud spacing".to_string());
        }

        if self.is_floating() && self.floor_gap_in.is_none() {
            errors.push("Floor gap is required for floating bottom plates".to_string());
        }

        errors
    }
}

impl Default for WallSpec {
    fn default() -> Self {
        WallSpec::new(0.0, 0.0)
    }
}

// ============================================================================
// WALL RECORD
// ============================================================================

/// A named wall inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub spec: WallSpec,
}

impl Wall {
    pub fn new(name: impl Into<String>, spec: WallSpec) -> Self {
        Wall {
            id: Uuid::new_v4(),
            name: name.into(),
            spec,
        }
    }

    /// Validate the name and the wall spec together.
    pub fn validate(&self) -> EstimateResult<()> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Wall name is required".to_string());
        } else if name.chars().count() > MAX_WALL_NAME_LEN {
            errors.push("Wall name must be less than 50 characters".to_string());
        }
        errors.extend(self.spec.rule_violations());
        EstimateError::from_messages(errors)
    }
}

// ============================================================================
// PRESETS
// ============================================================================

/// Quick wall configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallPreset {
    LoadBearing,
    NonLoadBearing,
    BasementFloating,
}

impl WallPreset {
    pub const ALL: [WallPreset; 3] = [
        WallPreset::LoadBearing,
        WallPreset::NonLoadBearing,
        WallPreset::BasementFloating,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WallPreset::LoadBearing => "Load Bearing Wall",
            WallPreset::NonLoadBearing => "Non-Load Bearing Wall",
            WallPreset::BasementFloating => "Basement Floating Wall",
        }
    }

    /// Apply this preset on top of an existing spec.
    ///
    /// Length is always kept. Load-bearing and non-load-bearing presets keep a
    /// positive height and only fill in 9 ft / 8 ft when none is set; the
    /// basement preset always sets 8 ft.
    pub fn apply(&self, spec: WallSpec) -> WallSpec {
        let keep_height = |default_ft: f64| {
            if spec.height_ft > 0.0 {
                spec.height_ft
            } else {
                default_ft
            }
        };

        match self {
            WallPreset::LoadBearing => WallSpec {
                height_ft: keep_height(9.0),
                stud_spacing: StudSpacing::OnCenter16,
                top_plate: TopPlate::Double,
                bottom_plate: BottomPlate::Standard,
                bottom_plate_treatment: PlateTreatment::None,
                left_corner: Some(CornerType::California),
                right_corner: Some(CornerType::California),
                load_bearing: true,
                ..spec
            },
            WallPreset::NonLoadBearing => WallSpec {
                height_ft: keep_height(8.0),
                stud_spacing: StudSpacing::OnCenter16,
                top_plate: TopPlate::Single,
                bottom_plate: BottomPlate::Standard,
                bottom_plate_treatment: PlateTreatment::None,
                left_corner: Some(CornerType::California),
                right_corner: None,
                load_bearing: false,
                ..spec
            },
            WallPreset::BasementFloating => WallSpec {
                height_ft: 8.0,
                stud_spacing: StudSpacing::OnCenter16,
                top_plate: TopPlate::Single,
                bottom_plate: BottomPlate::Floating,
                bottom_plate_treatment: PlateTreatment::PressureTreated,
                floor_gap_in: Some(2.0),
                left_corner: Some(CornerType::California),
                right_corner: Some(CornerType::California),
                load_bearing: false,
                ..spec
            },
        }
    }

    /// A fresh spec of the given length with this preset applied
    pub fn spec(&self, length_ft: f64) -> WallSpec {
        self.apply(WallSpec::new(length_ft, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_spec_json_names() {
        let spec = WallSpec::new(14.0, 8.0)
            .with_spacing(StudSpacing::OnCenter24)
            .with_corners(Some(CornerType::ThreeStud), None)
            .floating(2.0, PlateTreatment::PressureTreated);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"stud_spacing\":\"24\""));
        assert!(json.contains("\"bottom_plate\":\"floating\""));
        assert!(json.contains("\"bottom_plate_treatment\":\"pressure-treated\""));
        assert!(json.contains("\"left_corner\":\"three-stud\""));

        let roundtrip: WallSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, spec);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "length_ft": 10.0,
            "height_ft": 8.0,
            "stud_spacing": "16",
            "top_plate": "single",
            "bottom_plate": "standard"
        }"#;
        let spec: WallSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.bottom_plate_treatment, PlateTreatment::None);
        assert_eq!(spec.left_corner, None);
        assert!(!spec.load_bearing);
    }

    #[test]
    fn test_valid_wall_passes() {
        let wall = Wall::new("North", WallSpec::new(12.0, 8.0));
        assert!(wall.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_every_message() {
        let mut spec = WallSpec::new(0.0, 25.0).with_spacing(StudSpacing::OnCenter24);
        spec.load_bearing = true;
        spec.bottom_plate = BottomPlate::Floating;

        let err = spec.validate().unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "Wall length must be positive".to_string(),
                "Wall height must be less than 20 feet".to_string(),
                "Load bearing walls cannot use 24\" stud spacing".to_string(),
                "Floor gap is required for floating bottom plates".to_string(),
            ]
        );
    }

    #[test]
    fn test_negative_floor_gap_rejected() {
        let spec = WallSpec::new(10.0, 8.0).floating(-1.0, PlateTreatment::None);
        let err = spec.validate().unwrap_err();
        assert_eq!(err.messages(), &["Floor gap cannot be negative".to_string()]);
    }

    #[test]
    fn test_wall_name_rules() {
        let blank = Wall::new("   ", WallSpec::new(10.0, 8.0));
        assert_eq!(blank.validate().unwrap_err().messages(), &["Wall name is required".to_string()]);

        let long = Wall::new("x".repeat(51), WallSpec::new(10.0, 8.0));
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_wall_flattens_spec() {
        let wall = Wall::new("East", WallSpec::new(10.0, 8.0));
        let value = serde_json::to_value(&wall).unwrap();
        assert_eq!(value["name"], "East");
        assert_eq!(value["length_ft"], 10.0);
        let roundtrip: Wall = serde_json::from_value(value).unwrap();
        assert_eq!(roundtrip, wall);
    }

    #[test]
    fn test_load_bearing_preset_keeps_height() {
        let spec = WallPreset::LoadBearing.apply(WallSpec::new(20.0, 10.0));
        assert_eq!(spec.length_ft, 20.0);
        assert_eq!(spec.height_ft, 10.0);
        assert!(spec.load_bearing);
        assert_eq!(spec.top_plate, TopPlate::Double);
        assert_eq!(spec.right_corner, Some(CornerType::California));

        assert_eq!(WallPreset::LoadBearing.spec(12.0).height_ft, 9.0);
        assert_eq!(WallPreset::NonLoadBearing.spec(12.0).height_ft, 8.0);
    }

    #[test]
    fn test_basement_preset_is_valid_floating_wall() {
        let spec = WallPreset::BasementFloating.apply(WallSpec::new(16.0, 10.0));
        assert_eq!(spec.height_ft, 8.0);
        assert!(spec.has_pressure_treated_sleeper());
        assert_eq!(spec.floor_gap_in, Some(2.0));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_every_preset_yields_a_valid_wall() {
        for preset in WallPreset::ALL {
            let spec = preset.spec(12.0);
            assert_eq!(spec.length_ft, 12.0);
            assert!(spec.validate().is_ok(), "{} should validate", preset.display_name());
        }
    }

    #[test]
    fn test_spacing_lookup() {
        assert_eq!(StudSpacing::from_inches(24), Some(StudSpacing::OnCenter24));
        assert_eq!(StudSpacing::from_inches(18), None);
        assert_eq!(CornerType::from_name("three-stud"), Some(CornerType::ThreeStud));
    }
}
