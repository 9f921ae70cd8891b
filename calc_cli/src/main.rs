//! # crackcheck
//!
//! Command-line driver for the calc_core crack control engine.
//!
//! ```text
//! crackcheck check --width 300 --height 500 --depth 460 --cover 35 \
//!     --grade C30/37 --bars 4 --diameter 16 --moment 120 --limit 0.3
//! crackcheck solve --width 300 --height 500 --depth 460 --cover 35 \
//!     --diameter 16 --stress 200 --limit 0.3
//! crackcheck check --input beam.json --json
//! crackcheck grades
//! ```
//!
//! Every calculation prints a text report, or the result JSON with `--json`.
//! The exit code is 2 when a check fails or the search does not converge.

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser, Subcommand};
use serde::de::DeserializeOwned;

use calc_core::calculations::{
    crack_width, min_reinforcement, CrackCheckInput, MinReinforcementInput, SolverSettings, StrainMode,
};
use calc_core::loads::{LoadDuration, LoadType, ServiceAction};
use calc_core::materials::{
    BarDiameter, ConcreteGrade, ConcreteStrength, MaterialProperties, ReinforcementLayout, SteelGrade,
};
use calc_core::{CalcError, SectionGeometry};

#[derive(Debug, Parser)]
#[command(name = "crackcheck", version, about = "EN 1992-1-1 crack width and minimum reinforcement")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the crack width of a reinforced section
    Check(CheckArgs),

    /// Find the minimum reinforcement area for a crack width limit
    Solve(SolveArgs),

    /// List the concrete strength classes
    Grades {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Section and material flags shared by `check` and `solve`
#[derive(Debug, clap::Args)]
struct SectionArgs {
    /// Read the whole input from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Label shown in the report
    #[arg(long, default_value = "")]
    label: String,

    /// Section width b (mm)
    #[arg(long, required_unless_present = "input")]
    width: Option<f64>,

    /// Overall height h (mm)
    #[arg(long, required_unless_present = "input")]
    height: Option<f64>,

    /// Effective depth d (mm)
    #[arg(long, required_unless_present = "input")]
    depth: Option<f64>,

    /// Cover c to the bars (mm)
    #[arg(long, required_unless_present = "input")]
    cover: Option<f64>,

    /// Concrete strength class (e.g. C30/37 or C30)
    #[arg(long, value_parser = parse_grade, conflicts_with = "fck")]
    grade: Option<ConcreteGrade>,

    /// Characteristic concrete strength f_ck (MPa), instead of a class
    #[arg(long)]
    fck: Option<f64>,

    /// Steel yield strength f_yk (MPa)
    #[arg(long, default_value_t = 500.0)]
    fyk: f64,

    /// Bar diameter φ (mm)
    #[arg(long, value_parser = parse_diameter, required_unless_present = "input")]
    diameter: Option<BarDiameter>,

    /// Bending or tension
    #[arg(long, value_parser = parse_load_type, default_value = "bending")]
    load_type: LoadType,

    /// Use short term loading (k_t = 0.6)
    #[arg(long)]
    short_term: bool,

    /// Limiting crack width (mm)
    #[arg(long, required_unless_present = "input")]
    limit: Option<f64>,

    /// Strain formula: moment-based or stress-based
    #[arg(long, value_parser = parse_strain_mode)]
    strain_mode: Option<StrainMode>,
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    #[command(flatten)]
    common: SectionArgs,

    /// Number of bars
    #[arg(long, conflicts_with = "area")]
    bars: Option<u32>,

    /// Total steel area A_s (mm²), instead of a bar count
    #[arg(long)]
    area: Option<f64>,

    /// Service moment (kN·m)
    #[arg(long, conflicts_with = "stress")]
    moment: Option<f64>,

    /// Steel stress under service load (MPa)
    #[arg(long)]
    stress: Option<f64>,
}

#[derive(Debug, clap::Args)]
struct SolveArgs {
    #[command(flatten)]
    common: SectionArgs,

    /// Permitted steel stress σ_s (MPa)
    #[arg(long, required_unless_present = "input")]
    stress: Option<f64>,

    /// Number of increments above the seed area
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Accepted excess over the limit (mm)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Increment as a fraction of the seed area
    #[arg(long)]
    step_fraction: Option<f64>,
}

fn parse_grade(s: &str) -> Result<ConcreteGrade, String> {
    ConcreteGrade::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_diameter(s: &str) -> Result<BarDiameter, String> {
    let mm: u32 = s
        .trim()
        .trim_start_matches(['Ø', 'ø'])
        .parse()
        .map_err(|_| format!("'{s}' is not a bar diameter in mm"))?;
    BarDiameter::from_mm(mm).map_err(|e| e.to_string())
}

fn parse_load_type(s: &str) -> Result<LoadType, String> {
    LoadType::from_str_flexible(s).ok_or_else(|| format!("unknown load type '{s}' (bending, tension)"))
}

fn parse_strain_mode(s: &str) -> Result<StrainMode, String> {
    StrainMode::from_str_flexible(s)
        .ok_or_else(|| format!("unknown strain mode '{s}' (moment-based, stress-based)"))
}

fn required<T>(value: Option<T>, flag: &str) -> anyhow::Result<T> {
    value.ok_or_else(|| anyhow!("--{flag} is required unless --input is given"))
}

fn read_input<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let input = serde_json::from_str(&text)
        .map_err(CalcError::from)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!("Loaded input from {}", path.display());
    Ok(input)
}

impl SectionArgs {
    fn section(&self) -> anyhow::Result<SectionGeometry> {
        Ok(SectionGeometry::new(
            required(self.width, "width")?,
            required(self.height, "height")?,
            required(self.depth, "depth")?,
            required(self.cover, "cover")?,
        ))
    }

    fn materials(&self) -> MaterialProperties {
        let concrete = match (self.grade, self.fck) {
            (_, Some(fck_mpa)) => ConcreteStrength::characteristic(fck_mpa),
            (Some(grade), None) => ConcreteStrength::grade(grade),
            (None, None) => ConcreteStrength::grade(ConcreteGrade::C30_37),
        };
        let steel = SteelGrade::STANDARD
            .into_iter()
            .find(|s| s.fyk_mpa() == self.fyk)
            .unwrap_or(SteelGrade::Custom { fyk_mpa: self.fyk });
        MaterialProperties::new(concrete, steel)
    }

    fn duration(&self) -> LoadDuration {
        if self.short_term {
            LoadDuration::ShortTerm
        } else {
            LoadDuration::LongTerm
        }
    }
}

impl CheckArgs {
    fn to_input(&self) -> anyhow::Result<CrackCheckInput> {
        let common = &self.common;
        if let Some(path) = &common.input {
            return read_input(path);
        }

        let diameter = required(common.diameter, "diameter")?;
        let reinforcement = match (self.bars, self.area) {
            (Some(count), _) => ReinforcementLayout::bars(diameter, count),
            (None, Some(area_mm2)) => ReinforcementLayout::area(diameter, area_mm2),
            (None, None) => anyhow::bail!("one of --bars or --area is required"),
        };
        let action = match (self.moment, self.stress) {
            (Some(moment_knm), _) => ServiceAction::moment(moment_knm),
            (None, Some(stress_mpa)) => ServiceAction::steel_stress(stress_mpa),
            (None, None) => anyhow::bail!("one of --moment or --stress is required"),
        };

        Ok(CrackCheckInput {
            label: common.label.clone(),
            section: common.section()?,
            materials: common.materials(),
            reinforcement,
            load_type: common.load_type,
            duration: common.duration(),
            action,
            crack_width_limit_mm: required(common.limit, "limit")?,
            strain_mode: common.strain_mode,
        })
    }
}

impl SolveArgs {
    fn to_input(&self) -> anyhow::Result<MinReinforcementInput> {
        let common = &self.common;
        if let Some(path) = &common.input {
            return read_input(path);
        }

        let defaults = SolverSettings::default();
        let settings = SolverSettings {
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            tolerance_mm: self.tolerance.unwrap_or(defaults.tolerance_mm),
            step_fraction: self.step_fraction.unwrap_or(defaults.step_fraction),
        };

        let mut input = MinReinforcementInput::new(
            common.section()?,
            required(common.diameter, "diameter")?,
            required(self.stress, "stress")?,
            required(common.limit, "limit")?,
        );
        input.label = common.label.clone();
        input.materials = common.materials();
        input.load_type = common.load_type;
        input.duration = common.duration();
        input.settings = settings;
        if let Some(mode) = common.strain_mode {
            input.strain_mode = mode;
        }
        Ok(input)
    }
}

/// Print a calculation error as text, and as JSON when requested
fn report_error(e: CalcError, json: bool) -> anyhow::Error {
    if json {
        if let Ok(text) = serde_json::to_string_pretty(&e) {
            eprintln!("{}", text);
        }
    }
    anyhow::Error::new(e).context("calculation failed")
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

impl Cli {
    fn run(self) -> anyhow::Result<ExitCode> {
        Self::setup_logging(self.verbose);

        match self.command {
            Command::Check(args) => {
                let input = args.to_input()?;
                let result = crack_width::calculate(&input).map_err(|e| report_error(e, args.common.json))?;
                if args.common.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    report::print_check(&input, &result);
                }
                Ok(exit_code(result.passes()))
            }
            Command::Solve(args) => {
                let input = args.to_input()?;
                let result = min_reinforcement::solve(&input).map_err(|e| report_error(e, args.common.json))?;
                if args.common.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    report::print_solve(&input, &result);
                }
                Ok(exit_code(result.is_converged()))
            }
            Command::Grades { json } => {
                let rows = report::grade_rows();
                if json {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    report::print_grades(&rows);
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    Cli::parse().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_from_flags() {
        let cli = Cli::try_parse_from([
            "crackcheck", "check", "--width", "300", "--height", "500", "--depth", "460", "--cover", "35",
            "--grade", "c30/37", "--bars", "4", "--diameter", "16", "--moment", "120", "--limit", "0.3",
        ])
        .unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        let input = args.to_input().unwrap();
        assert_eq!(input.reinforcement, ReinforcementLayout::bars(BarDiameter::D16, 4));
        assert_eq!(input.materials.steel, SteelGrade::B500);
        assert_eq!(input.action, ServiceAction::moment(120.0));
        assert_eq!(input.load_type, LoadType::Bending);
    }

    #[test]
    fn test_solve_settings_from_flags() {
        let cli = Cli::try_parse_from([
            "crackcheck", "-vv", "solve", "--width", "300", "--height", "500", "--depth", "460", "--cover",
            "35", "--diameter", "Ø16", "--stress", "200", "--limit", "0.2", "--load-type", "tension",
            "--fyk", "450", "--max-iterations", "50",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        let input = args.to_input().unwrap();
        assert_eq!(input.settings.max_iterations, 50);
        assert_eq!(input.settings.tolerance_mm, 0.01);
        assert_eq!(input.load_type, LoadType::Tension);
        assert_eq!(input.strain_mode, StrainMode::StressBased);
        assert_eq!(input.materials.steel, SteelGrade::Custom { fyk_mpa: 450.0 });
    }

    #[test]
    fn test_missing_section_flags_rejected() {
        let err = Cli::try_parse_from(["crackcheck", "solve", "--diameter", "16", "--stress", "200"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(parse_grade("C90/105").is_err());
        assert!(parse_diameter("14").is_err());
        assert_eq!(parse_diameter("ø20").unwrap(), BarDiameter::D20);
        assert!(parse_load_type("shear").is_err());
    }
}
