//! Occupancy grid map with log-odds evidence accumulation.
//!
//! Each cell holds a log-odds value, 0 meaning unknown (p = 0.5).
//! Updates add evidence per cell, which keeps the Bayesian combination
//! of observations a plain sum:
//!
//! ```text
//! log_odds_new = log_odds_old + evidence
//! ```
//!
//! # Evidence signs
//!
//! With A = prob_occ and B = 1 - A, a laser hit contributes ln(B/A) and a
//! traversed (free) cell contributes ln(A/B). For prob_occ > 0.5 hits
//! therefore drive log-odds *negative* and free space positive, and the
//! probability view `1 - 1/(1 + exp(x))` renders hits near 0 and free space
//! near 1. The two increments are exact negations of each other.

mod config;
mod export;

pub use config::{ConfigError, GridConfig};

use std::collections::HashSet;

use thiserror::Error;

use super::raster;
use crate::core::types::{Pose2D, RangeScan};

/// A computed cell index fell outside the allocated grid.
///
/// Contract violation by the caller: the configured map is too small for
/// the trajectory, or the odometry was not recentered into grid bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cell ({cx}, {cy}) outside grid 0..={max_x} x 0..={max_y}")]
pub struct GridError {
    pub cx: i32,
    pub cy: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// 2D occupancy grid map.
///
/// Dimensions are fixed at construction: `size[0] * resolution + 1` by
/// `size[1] * resolution + 1` cells, so cell indices run over
/// `[0, size * resolution]` inclusive on each axis. The grid owns its
/// cells exclusively; all mutation goes through [`OccupancyGrid::update`].
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    config: GridConfig,

    /// Log-odds cells, row-major: index = cy * width + cx.
    cells: Vec<f32>,

    /// Grid width in cells.
    width: usize,

    /// Grid height in cells.
    height: usize,
}

impl OccupancyGrid {
    /// Create a new occupancy grid, all cells unknown.
    ///
    /// Fails fast on any invalid configuration parameter.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let width = (config.size[0] * config.resolution + 1) as usize;
        let height = (config.size[1] * config.resolution + 1) as usize;

        Ok(Self {
            config,
            cells: vec![0.0; width * height], // 0.0 = unknown
            width,
            height,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions in cells.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cells per map unit.
    pub fn resolution(&self) -> u32 {
        self.config.resolution
    }

    /// Check if signed cell indices fall inside the grid.
    #[inline]
    pub fn is_valid_cell(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height
    }

    #[inline]
    fn cell_index(&self, cx: usize, cy: usize) -> usize {
        cy * self.width + cx
    }

    /// Log-odds value at a cell.
    #[inline]
    pub fn log_odds_at(&self, cx: usize, cy: usize) -> f32 {
        self.cells[self.cell_index(cx, cy)]
    }

    /// Evidence increment for one observation of a cell.
    ///
    /// Returns ln(B/A) for a hit and ln(A/B) for a traversed cell, with
    /// A = prob_occ and B = 1 - A. `log_odds_increment(true)` equals
    /// `-log_odds_increment(false)` exactly.
    #[inline]
    pub fn log_odds_increment(&self, occupied: bool) -> f32 {
        let a = self.config.prob_occ;
        let b = 1.0 - a;
        if occupied { (b / a).ln() } else { (a / b).ln() }
    }

    /// Resolve a sweep into occupied and free cell lists.
    ///
    /// Occupied cells are the laser hit points scaled by the resolution and
    /// rounded to the nearest cell. Free cells are seeded with the robot's
    /// own cell twice, then extended with the full rasterized line from the
    /// robot cell to every hit cell, both endpoints included. The robot
    /// cell and the hit cells are therefore members of the free list.
    /// Duplicates are preserved; each occurrence is one piece of evidence.
    ///
    /// No bounds checking happens here; [`OccupancyGrid::update`] validates
    /// before touching the grid.
    pub fn check_cells(
        &self,
        pose: &Pose2D,
        scan: &RangeScan,
    ) -> (Vec<(i32, i32)>, Vec<(i32, i32)>) {
        let res = self.config.resolution as f32;

        let occupied: Vec<(i32, i32)> = raster::laser_sweep(pose, scan)
            .iter()
            .map(|p| ((p.x * res).round() as i32, (p.y * res).round() as i32))
            .collect();

        let robot = (
            (pose.x * res).round() as i32,
            (pose.y * res).round() as i32,
        );

        // Pre-size from the Chebyshev length of each beam's line.
        let capacity: usize = 2 + occupied
            .iter()
            .map(|&(hx, hy)| ((hx - robot.0).abs().max((hy - robot.1).abs()) + 1) as usize)
            .sum::<usize>();

        let mut free = Vec::with_capacity(capacity);
        free.push(robot);
        free.push(robot);
        for &hit in &occupied {
            free.extend(raster::cells_between(robot, hit));
        }

        (occupied, free)
    }

    /// Apply one sweep of evidence to the grid.
    ///
    /// Every computed cell is validated up front; an out-of-bounds cell
    /// fails the whole step before any mutation, leaving the grid exactly
    /// as it was. On success, free evidence is applied first, then occupied
    /// evidence; a cell that is both on a beam's path and a hit point of
    /// this sweep receives only the occupied evidence. Duplicate
    /// occurrences within a list accumulate.
    pub fn update(&mut self, pose: &Pose2D, scan: &RangeScan) -> Result<(), GridError> {
        let (occupied, free) = self.check_cells(pose, scan);

        for &(cx, cy) in occupied.iter().chain(free.iter()) {
            if !self.is_valid_cell(cx, cy) {
                return Err(GridError {
                    cx,
                    cy,
                    max_x: self.width as i32 - 1,
                    max_y: self.height as i32 - 1,
                });
            }
        }

        let hits: HashSet<(i32, i32)> = occupied.iter().copied().collect();
        let free_delta = self.log_odds_increment(false);
        let occupied_delta = self.log_odds_increment(true);

        for &(cx, cy) in &free {
            if hits.contains(&(cx, cy)) {
                continue;
            }
            let idx = self.cell_index(cx as usize, cy as usize);
            self.cells[idx] += free_delta;
        }
        for &(cx, cy) in &occupied {
            let idx = self.cell_index(cx as usize, cy as usize);
            self.cells[idx] += occupied_delta;
        }

        Ok(())
    }

    /// Occupancy probability at a cell, in [0, 1].
    #[inline]
    pub fn probability_at(&self, cx: usize, cy: usize) -> f32 {
        self.to_probability(self.log_odds_at(cx, cy))
    }

    /// The whole grid as probabilities, row-major (index = cy * width + cx).
    ///
    /// Read-only; safe to call between any two updates.
    pub fn probability_map(&self) -> Vec<f32> {
        self.cells
            .iter()
            .map(|&log_odds| self.to_probability(log_odds))
            .collect()
    }

    /// Clamp (when configured) and apply `1 - 1/(1 + exp(x))`.
    #[inline]
    fn to_probability(&self, log_odds: f32) -> f32 {
        let x = match (self.config.log_odds_min, self.config.log_odds_max) {
            (Some(lo), Some(hi)) => log_odds.clamp(lo, hi),
            _ => log_odds,
        };
        1.0 - 1.0 / (1.0 + x.exp())
    }
}
