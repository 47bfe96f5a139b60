//! Plain-text output for the CLI.

use framing_core::format::{feet_to_feet_inches, format_currency};
use framing_core::lumber::LumberChoice;
use framing_core::pricing::PricingConfig;
use framing_core::project::Project;
use framing_core::takeoff::{CalculationResult, ProjectSummary};
use framing_core::wall::{CornerType, Wall, WallSpec};

const RULE: &str = "═══════════════════════════════════════";

fn corner_name(corner: Option<CornerType>) -> String {
    corner.map_or_else(|| "none".to_string(), |c| c.to_string())
}

pub fn print_wall(spec: &WallSpec, lumber: &LumberChoice, r: &CalculationResult) {
    println!("{RULE}");
    println!("  WALL TAKEOFF");
    println!("{RULE}");
    println!();
    println!("Wall:");
    println!(
        "  Size:     {} x {}",
        feet_to_feet_inches(spec.length_ft),
        feet_to_feet_inches(spec.height_ft)
    );
    println!("  Spacing:  {}", spec.stud_spacing);
    println!("  Plates:   {} top, {} bottom", spec.top_plate, spec.bottom_plate);
    if let Some(gap) = spec.floor_gap_in.filter(|_| spec.is_floating()) {
        println!("  Gap:      {gap}\"");
    }
    println!(
        "  Corners:  L {} / R {}",
        corner_name(spec.left_corner),
        corner_name(spec.right_corner)
    );
    println!(
        "  Lumber:   {} (studs {}, plates {})",
        lumber.lumber_size, lumber.stud_length, lumber.plate_length
    );
    if spec.load_bearing {
        println!("  Load bearing");
    }
    println!();
    println!("Pieces:");
    println!(
        "  Studs:    {} ({} regular + {} corner)",
        r.total_studs, r.regular_studs, r.corner_studs
    );
    println!("  Plates:   {} runs", r.total_plates);
    println!();
    println!("Purchase:");
    println!("  Studs:    {} boards ({:.1} ft)", r.studs_needed, r.stud_linear_feet);
    println!("  Plates:   {} boards ({:.1} ft)", r.plates_needed, r.plate_linear_feet);
    println!("  Total:    {} boards ({:.1} ft)", r.total_boards(), r.total_linear_feet);
    println!();
    println!("Cost:");
    println!("  Studs:    {}", format_currency(r.stud_cost));
    println!("  Plates:   {}", format_currency(r.plate_cost));
    println!("{RULE}");
    println!("  ESTIMATE: {}", format_currency(r.total_cost));
    println!("{RULE}");
}

pub fn print_summary(project: &Project, s: &ProjectSummary) {
    println!("{RULE}");
    println!("  PROJECT: {}", project.meta.name);
    if project.meta.archived {
        println!("  (archived)");
    }
    println!("{RULE}");
    println!();
    println!(
        "  Walls:        {} ({} load bearing)",
        s.total_walls, s.load_bearing_count
    );
    println!("  Wall length:  {:.2} ft", s.total_length_ft);
    println!("  Avg height:   {:.2} ft", project.average_wall_height_ft());
    println!("  Stock:        {}", project.settings.summary.stock_length);
    println!();
    println!("  Studs:        {} pieces, {:.1} ft", s.stud_pieces, s.stud_linear_feet);
    println!(
        "  Plates:       {:.1} ft ({:.1} top, {:.1} bottom)",
        s.total_plate_linear_feet, s.top_plate_linear_feet, s.bottom_plate_linear_feet
    );
    println!("  Lumber:       {:.1} ft", s.total_linear_feet);
    println!();
    println!("  Stud boards:  {}", s.stud_boards);
    println!("  Top plates:   {}", s.top_plate_boards);
    println!("  Bottom:       {}", s.bottom_plate_boards);
    if s.bottom_pt_boards > 0 {
        println!("  Bottom (PT):  {}", s.bottom_pt_boards);
    }
    println!();
    println!("  Stud cost:    {}", format_currency(s.stud_cost));
    println!("  Plate cost:   {}", format_currency(s.plate_cost));
    println!("{RULE}");
    println!("  ESTIMATE: {}", format_currency(s.total_cost));
    println!("{RULE}");
}

pub fn print_wall_line(wall: &Wall, r: &CalculationResult) {
    println!(
        "  {:<24} {:>9} x {:<8} {:>4} boards  {:>10}",
        wall.name,
        feet_to_feet_inches(wall.spec.length_ft),
        feet_to_feet_inches(wall.spec.height_ft),
        r.total_boards(),
        format_currency(r.total_cost)
    );
}

pub fn print_pricing(label: &str, p: &PricingConfig) {
    println!(
        "{:<14} stud {}  plate {}  PT plate {}",
        label,
        format_currency(p.stud_unit_cost),
        format_currency(p.plate_unit_cost),
        format_currency(p.pressure_treated_plate_cost)
    );
}
