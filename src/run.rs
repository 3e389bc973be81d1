//! The end to end pipeline: read the description file, decode its NACA code, settle the point
//! count, and write the closed outline to the output file.

use crate::airfoil::{parse_code, NacaCode, ProfileParams, DEFAULT_TE_DROP};
use crate::errors::AirfoilError;
use crate::geo::write_geo;
use crate::input::{resolve_point_count, LineSource, PromptParams};
use crate::serialize::write_json;
use crate::Result;
use log::debug;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Gmsh geometry script
    Geo,

    /// Points and curve indices as JSON
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,

    /// Explicit points per surface. When absent the user is prompted.
    pub points: Option<usize>,
    pub prompt: PromptParams,
    pub te_drop: i64,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from("airfoil.dat"),
            output: PathBuf::from("airfoil.geo"),
            points: None,
            prompt: PromptParams::default(),
            te_drop: DEFAULT_TE_DROP,
            format: OutputFormat::Geo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub code: NacaCode,
    pub output: PathBuf,
    pub n_surface_pts: usize,
    pub total: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} regenerated using {} with {} points per surface ({} points total).",
            self.output.display(),
            self.code,
            self.n_surface_pts,
            self.total
        )
    }
}

/// Reads the first line of the description file at `path`.
pub fn read_header(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AirfoilError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => AirfoilError::Io(e),
    })?;

    Ok(text.lines().next().unwrap_or_default().to_string())
}

/// Runs the whole pipeline. The description is read and its code decoded before anything else
/// happens, so a bad input never touches the output file. `source` and `prompt_out` are only
/// used when the config carries no explicit point count.
pub fn run<S: LineSource, W: Write>(
    config: &RunConfig,
    source: &mut S,
    prompt_out: &mut W,
) -> Result<RunSummary> {
    let header = read_header(&config.input)?;
    let code = parse_code(&header)?;
    debug!(
        "Parsed {} from {}: m={}, p={}, t={}",
        code,
        config.input.display(),
        code.m,
        code.p,
        code.t
    );

    let n_surface_pts = resolve_point_count(config.points, &config.prompt, source, prompt_out)?;
    let boundary = ProfileParams::new(n_surface_pts, config.te_drop).boundary_loop(&code);
    if let Some(min) = boundary.min_segment_length() {
        debug!("Shortest boundary segment is {:.3e}", min);
    }

    let mut w = BufWriter::new(File::create(&config.output)?);
    match config.format {
        OutputFormat::Geo => write_geo(&boundary, &mut w)?,
        OutputFormat::Json => write_json(&code, &boundary, &mut w)?,
    }
    w.flush()?;

    Ok(RunSummary {
        code,
        output: config.output.clone(),
        n_surface_pts,
        total: boundary.len(),
    })
}
