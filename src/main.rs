//! NakshaGrid - Occupancy grid mapping from odometry and laser range logs
//!
//! Reads a CARMEN-style robot log, replays the recorded trajectory through
//! the occupancy grid, and writes the resulting probability map as a PGM
//! image.
//!
//! # Usage
//!
//! ```bash
//! # With default config
//! cargo run --release -- --log datasets/intel.log
//!
//! # With custom config file and output path
//! cargo run --release -- --config naksha-grid.toml --log datasets/intel.log --output intel.pgm
//! ```

use std::fs;
use std::io::Write;

use serde::{Deserialize, Serialize};

use naksha_grid::core::types::Pose2D;
use naksha_grid::io::carmen;
use naksha_grid::mapping::{GridConfig, OccupancyGrid};
use naksha_grid::pipeline::{TrajectoryConfig, TrajectoryProcessor, recenter_trajectory};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    map: GridConfig,
    laser: TrajectoryConfig,
}

// ============================================================================
// Argument Parsing
// ============================================================================

struct Args {
    config_path: Option<String>,
    log_path: Option<String>,
    output_path: String,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        config_path: None,
        log_path: None,
        output_path: "map.pgm".to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-l" | "--log" => {
                if i + 1 < args.len() {
                    result.log_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-o" | "--output" => {
                if i + 1 < args.len() {
                    result.output_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("naksha-grid - occupancy grid mapping from robot logs");
    println!();
    println!("USAGE:");
    println!("    naksha-grid --log <FILE> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -l, --log <FILE>        CARMEN-style log with FLASER records (required)");
    println!("    -c, --config <FILE>     Configuration file (default: naksha-grid.toml)");
    println!("    -o, --output <FILE>     Output PGM image (default: map.pgm)");
    println!("    -h, --help              Print help information");
    println!();
    println!("CONFIGURATION:");
    println!("    All settings are configured via the TOML config file:");
    println!("    - [map] size, resolution, prob_occ, log_odds_min/max");
    println!("    - [laser] max_range: readings are clipped to this");
}

fn load_config(args: &Args) -> Config {
    match &args.config_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => match basic_toml::from_str(&contents) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path);
                    cfg
                }
                Err(e) => {
                    log::error!("Failed to parse config {}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Failed to read config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            if let Ok(contents) = fs::read_to_string("naksha-grid.toml") {
                match basic_toml::from_str(&contents) {
                    Ok(cfg) => {
                        log::info!("Loaded config from naksha-grid.toml");
                        return cfg;
                    }
                    Err(e) => {
                        log::error!("Failed to parse naksha-grid.toml: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            Config::default()
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let config = load_config(&args);

    let Some(log_path) = args.log_path.clone() else {
        log::error!("No log file given (--log <FILE>)");
        print_help();
        std::process::exit(1);
    };

    log::info!("naksha-grid starting");
    log::info!("  Log: {}", log_path);
    log::info!(
        "  Map: {}x{} at resolution {}",
        config.map.size[0],
        config.map.size[1],
        config.map.resolution
    );
    log::info!("  Laser: max range {}", config.laser.max_range);
    log::info!("  Output: {}", args.output_path);

    if let Err(e) = run(&config, &log_path, &args.output_path) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("naksha-grid done");
}

fn run(config: &Config, log_path: &str, output_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (mut poses, scans) = carmen::read_log(log_path)?;
    log::info!("Read {} trajectory steps", poses.len());

    recenter_trajectory(&mut poses, config.map.size);

    let mut grid = OccupancyGrid::new(config.map.clone())?;
    let processor = TrajectoryProcessor::new(config.laser.clone())?;

    let total = poses.len();
    let mut observer = move |step: usize, _pose: &Pose2D, _grid: &OccupancyGrid| {
        if (step + 1) % 100 == 0 || step + 1 == total {
            log::info!("Processed {}/{} steps", step + 1, total);
        }
    };

    processor.run(&mut grid, &poses, &scans, &mut observer)?;

    grid.save_pgm(output_path)?;
    log::info!("Saved map to {}", output_path);
    Ok(())
}
