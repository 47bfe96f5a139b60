//! # framing_core - Wall Framing Takeoff Engine
//!
//! `framing_core` is the computational heart of Framewise. It turns wall
//! definitions into stud and plate counts, boards to buy, linear footage and
//! estimated lumber cost. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the takeoff functions are pure and never fail
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Validation at the edges**: walls and pricing validate separately from
//!   the arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use framing_core::project::Project;
//! use framing_core::wall::{Wall, WallPreset};
//!
//! let mut project = Project::new("Basement");
//! project.add_wall(Wall::new("East", WallPreset::BasementFloating.spec(22.0))).unwrap();
//!
//! let summary = project.summary();
//! println!("{} boards, ${:.2}", summary.total_boards(), summary.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`takeoff`] - Dimension, purchase and cost calculators, per-wall and project pipelines
//! - [`wall`] - Wall definitions, validation and presets
//! - [`lumber`] - Lumber sizes and stock lengths
//! - [`pricing`] - Unit costs and regional presets
//! - [`project`] - Project container and settings
//! - [`file_io`] - Atomic project saves and loads
//! - [`units`] - Length wrappers
//! - [`format`] - Display helpers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod file_io;
pub mod format;
pub mod lumber;
pub mod pricing;
pub mod project;
pub mod takeoff;
pub mod units;
pub mod wall;

// Re-export commonly used types at crate root for convenience
pub use errors::{EstimateError, EstimateResult};
pub use file_io::{load_project, save_project};
pub use lumber::{LumberChoice, LumberSize, StockLength};
pub use pricing::PricingConfig;
pub use project::{EstimateSettings, Project, ProjectMetadata};
pub use takeoff::{calculate, summarize, CalculationResult, ProjectSummary, SummaryOptions};
pub use wall::{BottomPlate, CornerType, PlateTreatment, StudSpacing, TopPlate, Wall, WallPreset, WallSpec};
