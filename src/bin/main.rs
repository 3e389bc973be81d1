use clap::Parser;
use log::{error, info};
use naca_geo::airfoil::{DEFAULT_SURFACE_POINTS, DEFAULT_TE_DROP};
use naca_geo::input::{PromptParams, ReaderLines};
use naca_geo::run::{run, OutputFormat, RunConfig};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a NACA airfoil .geo file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cosine-spaced points per surface (TE→LE).
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Fallback points per surface when no input is provided.
    #[arg(long, default_value_t = DEFAULT_SURFACE_POINTS)]
    default: usize,

    /// Number of extra cosine-spaced points to trim from each side near the trailing edge.
    #[arg(long, default_value_t = DEFAULT_TE_DROP, allow_negative_numbers = true)]
    te_drop: i64,

    /// Airfoil description whose first line holds the 4-digit code
    #[arg(short, long, default_value = "airfoil.dat")]
    input: PathBuf,

    /// Geometry file to write
    #[arg(short, long, default_value = "airfoil.geo")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Geo)]
    format: OutputFormat,
}

impl Args {
    fn into_config(self) -> RunConfig {
        RunConfig {
            input: self.input,
            output: self.output,
            points: self.points,
            prompt: PromptParams::new(self.default),
            te_drop: self.te_drop,
            format: self.format,
        }
    }
}

fn main() -> ExitCode {
    naca_geo::logging::init();
    let config = Args::parse().into_config();

    let mut source = ReaderLines::new(io::stdin().lock());
    match run(&config, &mut source, &mut io::stdout()) {
        Ok(summary) => {
            info!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
