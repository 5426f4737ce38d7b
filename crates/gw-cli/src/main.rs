// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `gw`: command-line front end for gw-math.
//!
//! Draws from the WELL512 generator, runs the sampling routines and prints
//! view/projection data, so seeds and camera setups can be checked without
//! writing a harness.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use gw_math::{sequence, Mat4, Vec3, POPULATION_MAX};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{GwConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "gw", author, version, about = "gw-math PRNG, sampling and camera tool")]
struct Cli {
    /// JSON config file (seed, seed_u64, format, log_filter)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Hex seed of at least 64 bytes; overrides the config file
    #[arg(long, global = true)]
    seed: Option<String>,
    /// Output format; overrides the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Raw 32-bit words
    Bits {
        /// Number of values
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,
    },
    /// Doubles in [0, 1)
    Draw {
        /// Number of values
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,
    },
    /// Uniform integers in [min, max)
    Range {
        /// Inclusive lower bound
        min: u64,
        /// Exclusive upper bound (at most 2^32)
        max: u64,
        /// Number of values
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,
    },
    /// Random permutation of 0..len
    Shuffle {
        /// Number of elements
        len: u32,
    },
    /// k distinct values from [0, population), ascending
    Choose {
        /// Population size (at most 2^32)
        population: u64,
        /// Sample size
        k: usize,
    },
    /// k values from [0, population) with repeats, ascending
    ChooseReplace {
        /// Population size (at most 2^32)
        population: u64,
        /// Sample size
        k: usize,
    },
    /// Frustum planes of a perspective projection
    Frustum {
        /// Vertical field of view in degrees
        #[arg(long, default_value_t = 90.0)]
        fovy: f32,
        /// Width over height
        #[arg(long, default_value_t = 1.0)]
        aspect: f32,
        /// Near plane distance
        #[arg(long, default_value_t = 0.1)]
        near: f32,
        /// Far plane distance
        #[arg(long, default_value_t = 100.0)]
        far: f32,
        /// Scale each plane so its normal has unit length
        #[arg(long)]
        normalize: bool,
    },
    /// View matrix for a camera at EYE looking at TARGET
    LookAt {
        /// Camera position as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        eye: Vec3,
        /// Point to look at as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
        target: Vec3,
        /// Up direction as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,1,0")]
        up: Vec3,
    },
}

fn parse_vec3(text: &str) -> Result<Vec3, String> {
    let lanes: Vec<f32> = text
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|err| format!("invalid component in {text:?}: {err}"))?;
    match lanes.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {} components", lanes.len())),
    }
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GwConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GwConfig::default(),
    };
    init_tracing(&config.log_filter)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &mut out)?;
    out.flush().context("flushing stdout")
}

fn run(cli: &Cli, config: &GwConfig, out: &mut impl Write) -> Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let mut prng = config
        .prng(cli.seed.as_deref())
        .context("resolving seed")?;
    debug!(?format, command = ?cli.command, "running");

    match &cli.command {
        Command::Bits { count } => {
            let values: Vec<u32> = (0..*count).map(|_| prng.bits()).collect();
            emit_list(out, format, &values)
        }
        Command::Draw { count } => {
            let values: Vec<f64> = (0..*count).map(|_| prng.draw()).collect();
            emit_list(out, format, &values)
        }
        Command::Range { min, max, count } => {
            if min >= max || *max > POPULATION_MAX {
                bail!("range needs min < max <= {POPULATION_MAX}, got {min}..{max}");
            }
            let values: Vec<u32> = (0..*count).map(|_| prng.range(*min, *max)).collect();
            emit_list(out, format, &values)
        }
        Command::Shuffle { len } => {
            let mut values = vec![0u32; usize::try_from(*len)?];
            sequence(&mut values, 0);
            prng.shuffle(&mut values);
            emit_list(out, format, &values)
        }
        Command::Choose { population, k } => {
            check_population(*population)?;
            if u64::try_from(*k)? > *population {
                bail!("cannot choose {k} distinct values from a population of {population}");
            }
            let mut values = vec![0u32; *k];
            prng.choose(*population, &mut values);
            emit_list(out, format, &values)
        }
        Command::ChooseReplace { population, k } => {
            check_population(*population)?;
            if *population == 0 && *k > 0 {
                bail!("cannot sample from an empty population");
            }
            let mut values = vec![0u32; *k];
            prng.choose_with_replacement(*population, &mut values);
            emit_list(out, format, &values)
        }
        Command::Frustum {
            fovy,
            aspect,
            near,
            far,
            normalize,
        } => {
            let projection = Mat4::perspective_degrees(*fovy, *aspect, *near, *far);
            emit_frustum(out, format, &projection, *normalize)
        }
        Command::LookAt { eye, target, up } => {
            emit_matrix(out, format, &Mat4::look_at(eye, target, up))
        }
    }
}

fn check_population(population: u64) -> Result<()> {
    if population > POPULATION_MAX {
        bail!("population {population} exceeds {POPULATION_MAX}");
    }
    Ok(())
}

fn emit_list<T>(out: &mut impl Write, format: OutputFormat, values: &[T]) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    match format {
        OutputFormat::Json => writeln!(out, "{}", json!({ "values": values }))?,
        OutputFormat::Text => {
            for v in values {
                writeln!(out, "{v}")?;
            }
        }
    }
    Ok(())
}

const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

fn emit_frustum(
    out: &mut impl Write,
    format: OutputFormat,
    projection: &Mat4,
    normalize: bool,
) -> Result<()> {
    let frustum = if normalize {
        projection.extract_frustum_n()
    } else {
        projection.extract_frustum_u()
    };
    let planes = frustum.planes();
    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = PLANE_NAMES
                .iter()
                .zip(planes.iter())
                .map(|(name, p)| ((*name).to_owned(), json!(p.to_array())))
                .collect();
            writeln!(out, "{}", json!({ "planes": map }))?;
        }
        OutputFormat::Text => {
            let mut table = Table::new();
            table.set_header(vec!["plane", "a", "b", "c", "d"]);
            for (name, p) in PLANE_NAMES.iter().zip(planes.iter()) {
                let [a, b, c, d] = p.to_array();
                table.add_row(vec![
                    (*name).to_owned(),
                    a.to_string(),
                    b.to_string(),
                    c.to_string(),
                    d.to_string(),
                ]);
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}

fn emit_matrix(out: &mut impl Write, format: OutputFormat, m: &Mat4) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", json!({ "matrix": m.to_array() }))?,
        OutputFormat::Text => {
            let mut table = Table::new();
            for i in 0..4 {
                table.add_row(m.row(i).to_array().iter().map(f32::to_string));
            }
            writeln!(out, "{table}")?;
        }
    }
    Ok(())
}
