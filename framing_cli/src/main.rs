//! # Framewise CLI
//!
//! Terminal front end for the wall framing takeoff engine.
//!
//! ```text
//! framewise wall --length 15 --height 8 --top single
//! framewise wall --length 22 --preset basement-floating --json
//! framewise new basement.frm --name "Basement"
//! framewise add-wall basement.frm --name East --length 22 --preset basement-floating
//! framewise summary basement.frm
//! framewise rename basement.frm --name "Basement finish"
//! framewise archive basement.frm
//! framewise pricing
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use framing_core::file_io::{load_project, save_project};
use framing_core::lumber::{LumberChoice, LumberSize, StockLength};
use framing_core::pricing::PricingConfig;
use framing_core::project::Project;
use framing_core::takeoff::calculate;
use framing_core::wall::{BottomPlate, CornerType, PlateTreatment, StudSpacing, TopPlate, Wall, WallPreset, WallSpec};

mod report;

/// Framewise - wall framing lumber estimates
#[derive(Parser, Debug)]
#[command(name = "framewise")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate a single wall
    Wall {
        #[command(flatten)]
        wall: WallArgs,

        #[command(flatten)]
        lumber: LumberArgs,

        #[command(flatten)]
        pricing: PricingArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize every wall in a project file
    Summary {
        /// Project file (.frm)
        path: PathBuf,

        #[command(flatten)]
        pricing: PricingArgs,

        /// Also list each wall's own takeoff
        #[arg(long)]
        walls: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an empty project file
    New {
        /// Project file to create (.frm)
        path: PathBuf,

        /// Project name
        #[arg(long)]
        name: String,
    },

    /// Validate a wall and append it to a project file
    AddWall {
        /// Project file (.frm)
        path: PathBuf,

        /// Wall name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        wall: WallArgs,
    },

    /// Rename a project
    Rename {
        /// Project file (.frm)
        path: PathBuf,

        /// New project name
        #[arg(long)]
        name: String,
    },

    /// Archive a project, or restore it with --restore
    Archive {
        /// Project file (.frm)
        path: PathBuf,

        #[arg(long)]
        restore: bool,
    },

    /// Show default and regional unit prices
    Pricing {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct WallArgs {
    /// Wall length in feet
    #[arg(long)]
    length: f64,

    /// Wall height in feet (required unless a preset supplies one)
    #[arg(long, required_unless_present = "preset")]
    height: Option<f64>,

    /// Start from a preset; explicit flags override it
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Stud spacing in inches on center (12, 16 or 24)
    #[arg(long)]
    spacing: Option<u32>,

    #[arg(long, value_enum)]
    top: Option<TopArg>,

    #[arg(long, value_enum)]
    bottom: Option<BottomArg>,

    #[arg(long, value_enum)]
    treatment: Option<TreatmentArg>,

    #[arg(long, value_enum)]
    left_corner: Option<CornerArg>,

    #[arg(long, value_enum)]
    right_corner: Option<CornerArg>,

    /// Gap under a floating bottom plate, in inches
    #[arg(long)]
    floor_gap: Option<f64>,

    #[arg(long)]
    load_bearing: bool,
}

impl WallArgs {
    fn to_spec(&self) -> Result<WallSpec> {
        let mut spec = match (self.preset, self.height) {
            (Some(preset), _) => WallPreset::from(preset).spec(self.length),
            (None, Some(height)) => WallSpec::new(self.length, height),
            (None, None) => anyhow::bail!("--height is required unless --preset is given"),
        };

        if let Some(height) = self.height {
            spec.height_ft = height;
        }

        if let Some(inches) = self.spacing {
            spec.stud_spacing = StudSpacing::from_inches(inches)
                .with_context(|| format!("unsupported stud spacing {inches}\" (use 12, 16 or 24)"))?;
        }
        if let Some(top) = self.top {
            spec.top_plate = top.into();
        }
        if let Some(bottom) = self.bottom {
            spec.bottom_plate = bottom.into();
        }
        if let Some(treatment) = self.treatment {
            spec.bottom_plate_treatment = treatment.into();
        }
        if let Some(corner) = self.left_corner {
            spec.left_corner = corner.into();
        }
        if let Some(corner) = self.right_corner {
            spec.right_corner = corner.into();
        }
        if self.floor_gap.is_some() {
            spec.floor_gap_in = self.floor_gap;
        }
        if self.load_bearing {
            spec.load_bearing = true;
        }

        Ok(spec)
    }
}

#[derive(Args, Debug)]
struct LumberArgs {
    /// Stud stock length in feet (8, 10, 12, 14, 16)
    #[arg(long, default_value_t = 8)]
    stud_length: u8,

    /// Plate stock length in feet (8, 10, 12, 14, 16)
    #[arg(long, default_value_t = 8)]
    plate_length: u8,

    /// Lumber size (2x4 or 2x6)
    #[arg(long, default_value = "2x4")]
    size: String,
}

impl LumberArgs {
    fn to_choice(&self) -> Result<LumberChoice> {
        Ok(LumberChoice {
            stud_length: StockLength::try_from(self.stud_length)?,
            plate_length: StockLength::try_from(self.plate_length)?,
            lumber_size: LumberSize::from_name(&self.size)
                .with_context(|| format!("unknown lumber size '{}'", self.size))?,
        })
    }
}

#[derive(Args, Debug)]
struct PricingArgs {
    /// Pricing JSON file with stud_unit_cost, plate_unit_cost, pressure_treated_plate_cost
    #[arg(long, conflicts_with = "region")]
    pricing: Option<PathBuf>,

    /// Regional price preset (e.g. US-West)
    #[arg(long)]
    region: Option<String>,
}

impl PricingArgs {
    /// Explicit file or region wins over the fallback
    fn resolve(&self, fallback: PricingConfig) -> Result<PricingConfig> {
        if let Some(path) = &self.pricing {
            return PricingConfig::from_json_file(path)
                .with_context(|| format!("failed to load pricing from {}", path.display()));
        }
        if let Some(region) = &self.region {
            return Ok(PricingConfig::for_region(region)?);
        }
        Ok(fallback)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    LoadBearing,
    NonLoadBearing,
    BasementFloating,
}

impl From<PresetArg> for WallPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::LoadBearing => WallPreset::LoadBearing,
            PresetArg::NonLoadBearing => WallPreset::NonLoadBearing,
            PresetArg::BasementFloating => WallPreset::BasementFloating,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TopArg {
    Single,
    Double,
}

impl From<TopArg> for TopPlate {
    fn from(arg: TopArg) -> Self {
        match arg {
            TopArg::Single => TopPlate::Single,
            TopArg::Double => TopPlate::Double,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BottomArg {
    Standard,
    Floating,
}

impl From<BottomArg> for BottomPlate {
    fn from(arg: BottomArg) -> Self {
        match arg {
            BottomArg::Standard => BottomPlate::Standard,
            BottomArg::Floating => BottomPlate::Floating,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TreatmentArg {
    None,
    PressureTreated,
}

impl From<TreatmentArg> for PlateTreatment {
    fn from(arg: TreatmentArg) -> Self {
        match arg {
            TreatmentArg::None => PlateTreatment::None,
            TreatmentArg::PressureTreated => PlateTreatment::PressureTreated,
        }
    }
}

/// `none` clears a corner set by a preset
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CornerArg {
    None,
    Double,
    ThreeStud,
    California,
}

impl From<CornerArg> for Option<CornerType> {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::None => None,
            CornerArg::Double => Some(CornerType::Double),
            CornerArg::ThreeStud => Some(CornerType::ThreeStud),
            CornerArg::California => Some(CornerType::California),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Wall {
            wall,
            lumber,
            pricing,
            json,
        } => run_wall(&wall, &lumber, &pricing, json),
        Commands::Summary {
            path,
            pricing,
            walls,
            json,
        } => run_summary(&path, &pricing, walls, json),
        Commands::New { path, name } => run_new(&path, name),
        Commands::AddWall { path, name, wall } => run_add_wall(&path, name, &wall),
        Commands::Rename { path, name } => run_rename(&path, name),
        Commands::Archive { path, restore } => run_archive(&path, !restore),
        Commands::Pricing { json } => run_pricing(json),
    }
}

fn run_wall(args: &WallArgs, lumber: &LumberArgs, pricing: &PricingArgs, json: bool) -> Result<()> {
    let spec = args.to_spec()?;
    let lumber = lumber.to_choice()?;
    let pricing = pricing.resolve(PricingConfig::default())?;

    // Invalid walls are still estimated
    if let Err(e) = spec.validate() {
        for message in e.messages() {
            warn!("{message}");
        }
    }

    let result = calculate(&spec, &lumber, &pricing);
    debug!(?spec, "Wall calculated");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_wall(&spec, &lumber, &result);
    }
    Ok(())
}

fn run_summary(path: &Path, pricing: &PricingArgs, list_walls: bool, json: bool) -> Result<()> {
    let mut project = load_project(path).with_context(|| format!("failed to open {}", path.display()))?;
    project.settings.pricing = pricing.resolve(project.settings.pricing)?;
    if let Err(e) = project.validate() {
        for message in e.messages() {
            warn!("{message}");
        }
    }

    let summary = project.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    report::print_summary(&project, &summary);
    if list_walls {
        for wall in &project.walls {
            report::print_wall_line(wall, &project.wall_result(wall));
        }
    }
    Ok(())
}

fn run_new(path: &Path, name: String) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    let project = Project::new(name);
    project.validate()?;
    save_project(&project, path).with_context(|| format!("failed to create {}", path.display()))?;
    println!("Created project '{}' at {}", project.meta.name, path.display());
    Ok(())
}

fn run_add_wall(path: &Path, name: String, args: &WallArgs) -> Result<()> {
    let mut project = load_project(path).with_context(|| format!("failed to open {}", path.display()))?;
    let wall = Wall::new(name, args.to_spec()?);
    let wall_name = wall.name.clone();

    project.add_wall(wall)?;
    save_project(&project, path).with_context(|| format!("failed to save {}", path.display()))?;

    println!(
        "Added '{}' to '{}' ({} walls)",
        wall_name,
        project.meta.name,
        project.wall_count()
    );
    Ok(())
}

fn run_rename(path: &Path, name: String) -> Result<()> {
    let mut project = load_project(path).with_context(|| format!("failed to open {}", path.display()))?;
    let old = project.meta.name.clone();
    project.rename(name)?;
    save_project(&project, path).with_context(|| format!("failed to save {}", path.display()))?;
    println!("Renamed '{}' to '{}'", old, project.meta.name);
    Ok(())
}

fn run_archive(path: &Path, archived: bool) -> Result<()> {
    let mut project = load_project(path).with_context(|| format!("failed to open {}", path.display()))?;
    project.set_archived(archived);
    save_project(&project, path).with_context(|| format!("failed to save {}", path.display()))?;
    let state = if archived { "Archived" } else { "Restored" };
    println!("{} '{}'", state, project.meta.name);
    Ok(())
}

fn run_pricing(json: bool) -> Result<()> {
    let default = PricingConfig::default();
    if json {
        let presets: serde_json::Map<String, serde_json::Value> = PricingConfig::regional_presets()
            .map(|(name, cfg)| serde_json::to_value(cfg).map(|value| (name.to_string(), value)))
            .collect::<Result<_, serde_json::Error>>()?;
        let out = serde_json::json!({ "default": default, "regions": presets });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    report::print_pricing("Default", &default);
    for (name, cfg) in PricingConfig::regional_presets() {
        report::print_pricing(name, &cfg);
    }
    Ok(())
}
