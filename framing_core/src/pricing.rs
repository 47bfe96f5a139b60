//! # Pricing
//!
//! Per-board unit costs used by the cost calculator, with regional presets
//! and JSON loading for pricing files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Unit costs above this are flagged as unreasonable
pub const MAX_UNIT_COST: f64 = 100.0;

/// Dollars per board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub stud_unit_cost: f64,
    pub plate_unit_cost: f64,
    pub pressure_treated_plate_cost: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            stud_unit_cost: 3.5,
            plate_unit_cost: 3.5,
            pressure_treated_plate_cost: 4.25,
        }
    }
}

static REGIONAL_PRESETS: Lazy<BTreeMap<&'static str, PricingConfig>> = Lazy::new(|| {
    let preset = |stud: f64, pt: f64| PricingConfig {
        stud_unit_cost: stud,
        plate_unit_cost: stud,
        pressure_treated_plate_cost: pt,
    };
    BTreeMap::from([
        ("US-Northeast", preset(4.2, 5.1)),
        ("US-Southwest", preset(3.1, 3.8)),
        ("US-West", preset(3.8, 4.6)),
        ("US-Midwest", preset(3.3, 4.0)),
    ])
});

impl PricingConfig {
    /// Pricing for a named region, e.g. `"US-West"`.
    pub fn for_region(region: &str) -> EstimateResult<Self> {
        REGIONAL_PRESETS
            .get(region)
            .copied()
            .ok_or_else(|| EstimateError::not_found("Pricing region", region))
    }

    /// All regional presets, sorted by region name
    pub fn regional_presets() -> impl Iterator<Item = (&'static str, PricingConfig)> {
        REGIONAL_PRESETS.iter().map(|(name, cfg)| (*name, *cfg))
    }

    /// Read and validate a pricing JSON file.
    pub fn from_json_file(path: &Path) -> EstimateResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EstimateError::file_error("read pricing", path.display().to_string(), e.to_string()))?;
        let config: PricingConfig = serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
            reason: format!("Invalid pricing JSON in {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Each cost must be within 0..=100 dollars.
    pub fn validate(&self) -> EstimateResult<()> {
        let mut errors = Vec::new();
        for (label, value) in [
            ("Stud unit cost", self.stud_unit_cost),
            ("Plate unit cost", self.plate_unit_cost),
            ("Pressure treated plate cost", self.pressure_treated_plate_cost),
        ] {
            if value.is_nan() || value < 0.0 {
                errors.push(format!("{label} cannot be negative"));
            } else if value > MAX_UNIT_COST {
                errors.push(format!("{label} seems unreasonably high"));
            }
        }
        EstimateError::from_messages(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_pricing() {
        let p = PricingConfig::default();
        assert_eq!(p.stud_unit_cost, 3.5);
        assert_eq!(p.plate_unit_cost, 3.5);
        assert_eq!(p.pressure_treated_plate_cost, 4.25);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_regional_presets() {
        let west = PricingConfig::for_region("US-West").unwrap();
        assert_eq!(west.stud_unit_cost, 3.8);
        assert_eq!(west.pressure_treated_plate_cost, 4.6);
        assert_eq!(PricingConfig::regional_presets().count(), 4);
        assert_eq!(
            PricingConfig::for_region("EU-North").unwrap_err().error_code(),
            "NOT_FOUND"
        );
    }

    #[test]
    fn test_validation_bounds() {
        let p = PricingConfig {
            stud_unit_cost: -1.0,
            plate_unit_cost: 150.0,
            pressure_treated_plate_cost: 4.0,
        };
        let err = p.validate().unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "Stud unit cost cannot be negative".to_string(),
                "Plate unit cost seems unreasonably high".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"stud_unit_cost": 4.0, "plate_unit_cost": 4.5, "pressure_treated_plate_cost": 6.0}}"#
        )
        .unwrap();

        let p = PricingConfig::from_json_file(file.path()).unwrap();
        assert_eq!(p.plate_unit_cost, 4.5);
    }

    #[test]
    fn test_from_json_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = PricingConfig::from_json_file(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
