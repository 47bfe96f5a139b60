//! # Project Data Structures
//!
//! The `Project` struct is the root container for an estimate. Projects
//! serialize to `.frm` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, name, timestamps, archived)
//! ├── settings: EstimateSettings (pricing, lumber, summary stock length)
//! └── walls: Vec<Wall> (in entry order)
//! ```
//!
//! Only wall definitions are stored. Quantities and costs are recomputed
//! from them every time.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::project::Project;
//! use framing_core::wall::{Wall, WallSpec};
//!
//! let mut project = Project::new("Basement finish");
//! project.add_wall(Wall::new("North", WallSpec::new(15.0, 8.0))).unwrap();
//!
//! let summary = project.summary();
//! assert_eq!(summary.total_walls, 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EstimateError, EstimateResult};
use crate::lumber::LumberChoice;
use crate::pricing::PricingConfig;
use crate::takeoff::summary::{summarize, ProjectSummary, SummaryOptions};
use crate::takeoff::wall::{calculate, CalculationResult};
use crate::wall::Wall;

/// Current schema version for .frm files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Longest project name accepted by validation
pub const MAX_PROJECT_NAME_LEN: usize = 100;

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: EstimateSettings,

    /// Walls in the order they were entered
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use framing_core::project::Project;
    ///
    /// let project = Project::new("Garage");
    /// assert_eq!(project.meta.name, "Garage");
    /// assert!(!project.meta.archived);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                name: name.into(),
                created: now,
                modified: now,
                archived: false,
            },
            settings: EstimateSettings::default(),
            walls: Vec::new(),
        }
    }

    /// Validate and append a wall. Returns its id.
    pub fn add_wall(&mut self, wall: Wall) -> EstimateResult<Uuid> {
        wall.validate()?;
        let id = wall.id;
        self.walls.push(wall);
        self.touch();
        Ok(id)
    }

    /// Remove a wall by id, returning it if present.
    pub fn remove_wall(&mut self, id: &Uuid) -> Option<Wall> {
        let index = self.walls.iter().position(|w| &w.id == id)?;
        let wall = self.walls.remove(index);
        self.touch();
        Some(wall)
    }

    pub fn get_wall(&self, id: &Uuid) -> Option<&Wall> {
        self.walls.iter().find(|w| &w.id == id)
    }

    /// Replace a wall's name and spec after validating them. The id is kept.
    pub fn update_wall(&mut self, id: &Uuid, mut updated: Wall) -> EstimateResult<()> {
        updated.id = *id;
        updated.validate()?;
        let slot = self
            .walls
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| EstimateError::not_found("Wall", id))?;
        *slot = updated;
        self.touch();
        Ok(())
    }

    /// Copy a wall under a new id, inserted right after the original.
    pub fn duplicate_wall(&mut self, id: &Uuid) -> EstimateResult<Uuid> {
        let index = self
            .walls
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| EstimateError::not_found("Wall", id))?;

        let original = &self.walls[index];
        let copy = Wall::new(format!("{} (copy)", original.name), original.spec);
        let copy_id = copy.id;
        self.walls.insert(index + 1, copy);
        self.touch();
        Ok(copy_id)
    }

    /// Rename the project. The name is checked before anything changes.
    pub fn rename(&mut self, name: impl Into<String>) -> EstimateResult<()> {
        let name = name.into();
        EstimateError::from_messages(name_violations(&name))?;
        self.meta.name = name;
        self.touch();
        Ok(())
    }

    /// Check the project name and every wall, collecting all messages.
    ///
    /// Wall messages are prefixed with the wall's name, or its id when the
    /// name is blank.
    pub fn validate(&self) -> EstimateResult<()> {
        let mut errors = name_violations(&self.meta.name);
        for wall in &self.walls {
            if let Err(e) = wall.validate() {
                let label = match wall.name.trim() {
                    "" => wall.id.to_string(),
                    name => name.to_string(),
                };
                errors.extend(e.messages().iter().map(|m| format!("{label}: {m}")));
            }
        }
        EstimateError::from_messages(errors)
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.meta.archived = archived;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Sum of wall lengths in feet
    pub fn total_length_ft(&self) -> f64 {
        self.walls.iter().map(|w| w.spec.length_ft).sum()
    }

    /// Mean wall height in feet, 0 for a project without walls
    pub fn average_wall_height_ft(&self) -> f64 {
        if self.walls.is_empty() {
            return 0.0;
        }
        let total: f64 = self.walls.iter().map(|w| w.spec.height_ft).sum();
        total / self.walls.len() as f64
    }

    /// Per-wall takeoff using the project's lumber and pricing settings.
    pub fn wall_result(&self, wall: &Wall) -> CalculationResult {
        calculate(&wall.spec, &self.settings.lumber, &self.settings.pricing)
    }

    /// Project-wide totals using the project's settings.
    pub fn summary(&self) -> ProjectSummary {
        summarize(
            self.walls.iter().map(|w| &w.spec),
            &self.settings.pricing,
            &self.settings.summary,
        )
    }
}

fn name_violations(name: &str) -> Vec<String> {
    let name = name.trim();
    if name.is_empty() {
        vec!["Project name is required".to_string()]
    } else if name.chars().count() > MAX_PROJECT_NAME_LEN {
        vec!["Project name must be less than 100 characters".to_string()]
    } else {
        Vec::new()
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    pub name: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,

    #[serde(default)]
    pub archived: bool,
}

/// Estimate settings stored with the project.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateSettings {
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Stock used by the per-wall view
    #[serde(default)]
    pub lumber: LumberChoice,

    /// Stock used uniformly by the project summary
    #[serde(default)]
    pub summary: SummaryOptions,
}
