//! # Project Summary
//!
//! Folds the per-wall pipeline across every wall of a project.
//!
//! Board counts are rounded per wall and then summed. Costs are applied once,
//! to the summed board counts. That includes the pressure-treated split: the
//! bottom-plate boards of every floating, pressure-treated wall are pooled
//! and half of the pool (rounded up) is billed at the PT price. Costing each
//! wall first and summing the dollars gives a different answer; this module
//! never does that. [`super::wall::calculate`] remains the per-wall view.
//!
//! Linear feet here are piece footage (studs x height, runs x length), not
//! stock footage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cost::{plate_cost, stud_cost, total_cost};
use super::dimensions::{bottom_plate_runs, top_plate_runs};
use super::purchase::{plates_needed, studs_needed};
use super::wall::{piece_footage, stud_pieces};
use crate::lumber::StockLength;
use crate::pricing::PricingConfig;
use crate::wall::WallSpec;

/// Project-wide takeoff options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Stock length bought for every stud and plate in the project
    pub stock_length: StockLength,
}

/// Totals for a whole project.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total_walls: u32,
    pub total_length_ft: f64,
    pub load_bearing_count: u32,

    pub stud_pieces: u32,
    pub stud_linear_feet: f64,
    pub top_plate_linear_feet: f64,
    pub bottom_plate_linear_feet: f64,
    pub total_plate_linear_feet: f64,
    pub total_linear_feet: f64,

    pub stud_boards: u32,
    pub top_plate_boards: u32,
    /// Bottom-plate boards billed at the regular plate price
    pub bottom_plate_boards: u32,
    /// Bottom-plate boards of floating, pressure-treated walls, before the split
    pub bottom_pt_boards: u32,

    pub stud_cost: f64,
    pub plate_cost: f64,
    pub total_cost: f64,
}

impl ProjectSummary {
    pub fn plate_boards(&self) -> u32 {
        self.top_plate_boards
            .saturating_add(self.bottom_plate_boards)
            .saturating_add(self.bottom_pt_boards)
    }

    pub fn total_boards(&self) -> u32 {
        self.stud_boards.saturating_add(self.plate_boards())
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    total_walls: u32,
    total_length_ft: f64,
    load_bearing_count: u32,
    stud_pieces: u32,
    stud_linear_feet: f64,
    top_plate_linear_feet: f64,
    bottom_plate_linear_feet: f64,
    stud_boards: u32,
    top_plate_boards: u32,
    bottom_plate_boards: u32,
    bottom_pt_boards: u32,
}

impl Accumulator {
    fn add_wall(mut self, wall: &WallSpec, stock_ft: f64) -> Self {
        let studs = stud_pieces(wall);
        let footage = piece_footage(wall);

        self.total_walls = self.total_walls.saturating_add(1);
        self.total_length_ft += wall.length_ft;
        self.load_bearing_count = self.load_bearing_count.saturating_add(u32::from(wall.load_bearing));

        self.stud_pieces = self.stud_pieces.saturating_add(studs);
        self.stud_linear_feet += footage.stud_linear_feet;
        self.top_plate_linear_feet += footage.top_plate_linear_feet;
        self.bottom_plate_linear_feet += footage.bottom_plate_linear_feet;

        let stud_boards = studs_needed(studs, wall.height_ft, stock_ft);
        let top_boards = plates_needed(top_plate_runs(wall.top_plate), wall.length_ft, stock_ft);
        self.stud_boards = self.stud_boards.saturating_add(stud_boards);
        self.top_plate_boards = self.top_plate_boards.saturating_add(top_boards);

        let bottom_boards = plates_needed(bottom_plate_runs(wall.bottom_plate), wall.length_ft, stock_ft);
        if wall.has_pressure_treated_sleeper() {
            self.bottom_pt_boards = self.bottom_pt_boards.saturating_add(bottom_boards);
        } else {
            self.bottom_plate_boards = self.bottom_plate_boards.saturating_add(bottom_boards);
        }

        self
    }

    fn finish(self, pricing: &PricingConfig) -> ProjectSummary {
        let total_plate_linear_feet = self.top_plate_linear_feet + self.bottom_plate_linear_feet;

        let studs_dollars = stud_cost(self.stud_boards, pricing.stud_unit_cost);
        let regular_plates_dollars = plate_cost(
            self.top_plate_boards.saturating_add(self.bottom_plate_boards),
            pricing.plate_unit_cost,
            false,
            false,
            pricing.pressure_treated_plate_cost,
        );
        let pt_plates_dollars = plate_cost(
            self.bottom_pt_boards,
            pricing.plate_unit_cost,
            true,
            true,
            pricing.pressure_treated_plate_cost,
        );
        let plates_dollars = regular_plates_dollars + pt_plates_dollars;

        ProjectSummary {
            total_walls: self.total_walls,
            total_length_ft: self.total_length_ft,
            load_bearing_count: self.load_bearing_count,
            stud_pieces: self.stud_pieces,
            stud_linear_feet: self.stud_linear_feet,
            top_plate_linear_feet: self.top_plate_linear_feet,
            bottom_plate_linear_feet: self.bottom_plate_linear_feet,
            total_plate_linear_feet,
            total_linear_feet: self.stud_linear_feet + total_plate_linear_feet,
            stud_boards: self.stud_boards,
            top_plate_boards: self.top_plate_boards,
            bottom_plate_boards: self.bottom_plate_boards,
            bottom_pt_boards: self.bottom_pt_boards,
            stud_cost: studs_dollars,
            plate_cost: plates_dollars,
            total_cost: total_cost(studs_dollars, plates_dollars),
        }
    }
}

/// Summarize a project's walls.
///
/// Re-running over the same walls always gives the same summary.
pub fn summarize<'a, I>(walls: I, pricing: &PricingConfig, options: &SummaryOptions) -> ProjectSummary
where
    I: IntoIterator<Item = &'a WallSpec>,
{
    let stock_ft = options.stock_length.feet();
    let summary = walls
        .into_iter()
        .fold(Accumulator::default(), |acc, wall| acc.add_wall(wall, stock_ft))
        .finish(pricing);

    debug!(
        walls = summary.total_walls,
        boards = summary.total_boards(),
        total_cost = summary.total_cost,
        "Project summarized"
    );

    summary
}
