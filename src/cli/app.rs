//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{report_cmd, shape_cmd};
use crate::domain::{constants, Shape, ShapeKind};
use crate::storage::{Config, MAX_PRECISION};

#[derive(Parser)]
#[command(name = "geometry")]
#[command(author, version, about = "Geometry utilities: shape measurements and reports")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "GEOMETRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal places for areas and perimeters
    #[arg(long, short = 'p', global = true)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure a circle
    Circle {
        /// Circle radius
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
    },

    /// Measure a rectangle
    Rectangle {
        /// Rectangle width
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        /// Rectangle height
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Measure a square
    Square {
        /// Square side length
        #[arg(long, allow_negative_numbers = true)]
        side: f64,
    },

    /// Export a shape as serialized data
    Export {
        /// Shape kind (circle, rectangle, square)
        kind: ShapeKind,

        /// Shape parameters as a JSON object, e.g. '{"radius": 5}'
        #[arg(long)]
        params: String,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate a report for a file of serialized shapes
    Report {
        /// JSON or YAML file containing a list of shapes
        file: PathBuf,

        /// Write the report to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Order shapes by ascending area
        #[arg(long)]
        sort: bool,
    },

    /// Show the shape with the largest area in a file
    Largest {
        /// JSON or YAML file containing a list of shapes
        file: PathBuf,
    },

    /// List mathematical constants
    Constants,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose);

    output.verbose("Geometry CLI starting");
    match &cli.config {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "Using default configuration location"),
    }

    let precision = cli.precision.unwrap_or(config.precision);
    if precision > MAX_PRECISION {
        anyhow::bail!("Precision must be at most {}, got {}", MAX_PRECISION, precision);
    }
    output.verbose_ctx("config", &format!("Precision: {}", precision));

    match cli.command {
        Commands::Circle { radius } => {
            shape_cmd::show(&output, &Shape::circle(radius)?, precision)?
        }
        Commands::Rectangle { width, height } => {
            shape_cmd::show(&output, &Shape::rectangle(width, height)?, precision)?
        }
        Commands::Square { side } => shape_cmd::show(&output, &Shape::square(side)?, precision)?,

        Commands::Export { kind, params, output: path } => {
            shape_cmd::export(&output, kind, &params, path.as_deref())?
        }

        Commands::Report { file, output: path, sort } => {
            report_cmd::report(&output, &file, path.as_deref(), sort, precision)?
        }
        Commands::Largest { file } => report_cmd::largest_shape(&output, &file, precision)?,

        Commands::Constants => list_constants(&output),
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn list_constants(output: &Output) {
    if output.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = constants::all()
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
            .collect();
        output.data(&map);
    } else {
        for (name, value) in constants::all() {
            println!("{:<14} {}", name, value);
        }
    }
}
