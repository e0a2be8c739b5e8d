use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pcbpath_core::{Point, Settings};
use pcbpath_shapes::MeanderParams;
use pcbpath_svgpath::{PathCache, TransformParams};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod error;

use commands::ShapeRequest;
use error::{exit, CliError};

#[derive(Parser)]
#[command(version, about = "SVG path engine for PCB artwork", long_about = None)]
struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Digits kept after the decimal point, overriding the settings file
    #[arg(long, global = true, value_name = "N")]
    precision: Option<u32>,

    /// Fail on an out-of-range precision instead of using the default
    #[arg(long, global = true)]
    strict: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the relative form of a path
    Relative {
        path: String,
        /// Print the parsed relative commands as JSON instead
        #[arg(long)]
        commands: bool,
    },
    /// Print the size and bounding box of a path as JSON
    Bbox { path: String },
    /// Scale, rotate, mirror and centre a path
    Transform {
        path: String,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Clockwise rotation in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rotate: f64,
        /// Rotation pivot
        #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
        pivot: Option<Point>,
        #[arg(long)]
        mirror: bool,
        /// Keep the path where it is instead of centring it on the origin
        #[arg(long)]
        no_center: bool,
    },
    /// Flatten a path into point runs, one per subpath
    Points {
        path: String,
        /// Samples per curve before thinning [default: from settings]
        #[arg(long)]
        steps: Option<usize>,
        /// Target distance between kept points [default: from settings]
        #[arg(long)]
        length: Option<f64>,
    },
    /// Generate the path of a standard shape
    Shape {
        #[command(subcommand)]
        shape: ShapeCommand,
    },
}

#[derive(Subcommand)]
enum ShapeCommand {
    /// Rectangle centred on the origin
    Rect {
        width: f64,
        height: f64,
        /// Same radius on every corner
        #[arg(long)]
        radius: Option<f64>,
        /// Per-corner radii as a YAML mapping, e.g. "{tl: 1, br: 0.5}"
        #[arg(long)]
        radii: Option<String>,
    },
    Circle { diameter: f64 },
    /// Ring between two diameters, in either order
    Ring { d1: f64, d2: f64 },
    /// Drill hole symbol
    Drill { diameter: f64 },
    /// Component placement marker
    Marker,
    /// Meandering trace, printed with its measurements as JSON
    Meander {
        #[arg(long)]
        radius: f64,
        /// Shoulder angle in degrees
        #[arg(long, default_value_t = 0.0)]
        theta: f64,
        #[arg(long, default_value_t = 0.0)]
        trace_width: f64,
        /// Number of parallel traces
        #[arg(long, default_value_t = 1)]
        bus_width: u32,
        #[arg(long, default_value_t = 0.0)]
        pitch: f64,
    },
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = match &cli.settings {
        Some(path) => commands::load_settings(path).map_err(CliError::SettingsFile)?,
        None => Settings::default(),
    };
    if let Some(digits) = cli.precision {
        settings.significant_digits = digits;
    }
    if cli.strict {
        settings.apply()?;
    } else {
        settings.apply_lenient()?;
    }
    tracing::debug!(?settings, "settings applied");
    Ok(settings)
}

fn run(cli: Cli) -> Result<String, CliError> {
    let settings = load_settings(&cli)?;
    let cache = PathCache::new();

    match cli.command {
        Commands::Relative {
            path,
            commands: as_commands,
        } => commands::run_relative(cache.grammar(), &path, as_commands),
        Commands::Bbox { path } => commands::run_bbox(&cache, &path),
        Commands::Transform {
            path,
            scale,
            rotate,
            pivot,
            mirror,
            no_center,
        } => {
            let params = TransformParams::scaled(scale)
                .rotated(rotate, pivot.unwrap_or(Point::ORIGIN))
                .mirrored(mirror)
                .centered(!no_center);
            commands::run_transform(&cache, &path, &params)
        }
        Commands::Points {
            path,
            steps,
            length,
        } => commands::run_points(
            &cache,
            &path,
            steps.unwrap_or(settings.bezier_steps),
            length.unwrap_or(settings.segment_length),
        ),
        Commands::Shape { shape } => {
            let request = match shape {
                ShapeCommand::Rect {
                    width,
                    height,
                    radius,
                    radii,
                } => ShapeRequest::Rect {
                    width,
                    height,
                    radius,
                    radii,
                },
                ShapeCommand::Circle { diameter } => ShapeRequest::Circle { diameter },
                ShapeCommand::Ring { d1, d2 } => ShapeRequest::Ring { d1, d2 },
                ShapeCommand::Drill { diameter } => ShapeRequest::Drill { diameter },
                ShapeCommand::Marker => ShapeRequest::Marker,
                ShapeCommand::Meander {
                    radius,
                    theta,
                    trace_width,
                    bus_width,
                    pitch,
                } => ShapeRequest::Meander(MeanderParams {
                    radius,
                    theta,
                    trace_width,
                    bus_width,
                    pitch,
                }),
            };
            commands::run_shape(&cache, request)
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { exit::USAGE } else { 0 };
            // Nothing more useful to do if the terminal is gone.
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            let code = err.exit_code();
            tracing::debug!(code, "command failed");
            eprintln!("Error: {err}");
            std::process::exit(code);
        }
    }
}
