//! Mapping module.
//!
//! Provides occupancy grid mapping from laser sweeps.
//!
//! # Components
//!
//! - [`OccupancyGrid`]: fixed-size 2D grid map with log-odds evidence
//! - [`raster`]: hit-point projection and integer line rasterization

mod occupancy_grid;
pub mod raster;

pub use occupancy_grid::{ConfigError, GridConfig, GridError, OccupancyGrid};
