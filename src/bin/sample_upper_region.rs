//! Sample placement points above scene objects and print them as JSON.
//!
//! Usage: cargo run --bin sample_upper_region -- --scene <FILE> [OPTIONS]
//!
//! Options:
//!   --scene <FILE>    Scene description (JSON, required)
//!   --config <FILE>   Sampler configuration (JSON, default: all defaults)
//!   --count <N>       Number of points (default: 1)
//!   --seed <SEED>     Random seed (default: from entropy)
//!
//! Output: a JSON array of `[x, y, z]` points on stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use upper_region::core::logging;
use upper_region::{SamplerConfig, Scene, UpperRegionSampler};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(scene_path) = parse_str_arg(&args, "--scene").map(PathBuf::from) else {
        eprintln!("Usage: sample_upper_region --scene <FILE> [--config <FILE>] [--count <N>] [--seed <SEED>]");
        return ExitCode::FAILURE;
    };
    let config_path = parse_str_arg(&args, "--config").map(PathBuf::from);
    let count = parse_arg::<usize>(&args, "--count").unwrap_or(1);
    let seed = parse_arg::<u64>(&args, "--seed");

    match run(scene_path, config_path, count, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    scene_path: PathBuf,
    config_path: Option<PathBuf>,
    count: usize,
    seed: Option<u64>,
) -> upper_region::Result<()> {
    let scene = Scene::load(&scene_path)?;
    let config = match config_path {
        Some(path) => SamplerConfig::load(&path)?,
        None => SamplerConfig::default(),
    };
    log::info!(
        "Loaded {} objects from {}",
        scene.len(),
        scene_path.display()
    );

    let sampler = UpperRegionSampler::from_scene(&scene, config)?;
    log::info!(
        "Sampling {} points over {} regions, up {:?}",
        count,
        sampler.len(),
        sampler.upper_dir()
    );
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let points = sampler.sample_many(&mut rng, count)?;
    let out = json!(points.iter().map(|p| p.to_array()).collect::<Vec<_>>());
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Value following `flag`. Warns and returns `None` if it is missing or invalid.
fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    let i = args.iter().position(|a| a == flag)?;
    let Some(raw) = args.get(i + 1) else {
        log::warn!("{} given without a value, using the default", flag);
        return None;
    };
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid value '{}' for {}, using the default", raw, flag);
            None
        }
    }
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
