//! Trajectory processing: drives the occupancy grid across a recorded run.
//!
//! The processor owns no map state. It validates the pose and scan
//! sequences, clips every range reading to the sensor maximum once up
//! front, then replays the trajectory strictly in order. The grid after
//! step i depends on every step before it, so steps are never reordered.
//!
//! Presentation is decoupled through [`MapObserver`]: after each update
//! the observer sees the grid, so a consumer can render, log, or snapshot
//! the map live without the loop knowing about it.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Pose2D, RangeScan};
use crate::mapping::{ConfigError, GridError, OccupancyGrid};

/// Sequence validation or per-step failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("poses ({poses}) and scans ({scans}) differ in length")]
    LengthMismatch { poses: usize, scans: usize },

    #[error("scan width changed at step {step}: expected {expected}, got {got}")]
    ScanWidthMismatch {
        step: usize,
        expected: usize,
        got: usize,
    },

    /// Update failed mid-run. The grid still holds every step before
    /// `step` and stays readable.
    #[error("update failed at step {step}: {source}")]
    Step { step: usize, source: GridError },
}

/// Per-step consumer of the evolving map.
pub trait MapObserver {
    /// Called after step `step` has been applied to the grid.
    fn on_step(&mut self, step: usize, pose: &Pose2D, grid: &OccupancyGrid);
}

impl<F: FnMut(usize, &Pose2D, &OccupancyGrid)> MapObserver for F {
    fn on_step(&mut self, step: usize, pose: &Pose2D, grid: &OccupancyGrid) {
        self(step, pose, grid)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Default)]
pub struct NullObserver;

impl MapObserver for NullObserver {
    fn on_step(&mut self, _step: usize, _pose: &Pose2D, _grid: &OccupancyGrid) {}
}

/// Configuration for trajectory processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Maximum sensor range in map units; readings are clipped to it.
    pub max_range: f32,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self { max_range: 50.0 }
    }
}

/// Replays a pose/scan log into an occupancy grid.
#[derive(Debug, Clone)]
pub struct TrajectoryProcessor {
    config: TrajectoryConfig,
}

impl TrajectoryProcessor {
    /// Create a processor, rejecting a negative max range.
    pub fn new(config: TrajectoryConfig) -> Result<Self, ConfigError> {
        if !(config.max_range >= 0.0) {
            return Err(ConfigError::InvalidMaxRange(config.max_range));
        }
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Run the whole trajectory through the grid.
    ///
    /// Both sequences are validated before the first update: equal length,
    /// and a constant scan width across the run. All ranges are clipped to
    /// `[0, max_range]` in one pass over the sequence, then each step
    /// updates the grid and is handed to the observer.
    ///
    /// Returns the number of steps applied. On a per-step error the
    /// remaining trajectory is abandoned; the grid keeps the state of all
    /// prior steps.
    pub fn run(
        &self,
        grid: &mut OccupancyGrid,
        poses: &[Pose2D],
        scans: &[RangeScan],
        observer: &mut dyn MapObserver,
    ) -> Result<usize, PipelineError> {
        if poses.len() != scans.len() {
            return Err(PipelineError::LengthMismatch {
                poses: poses.len(),
                scans: scans.len(),
            });
        }
        if let Some(first) = scans.first() {
            for (step, scan) in scans.iter().enumerate() {
                if scan.len() != first.len() {
                    return Err(PipelineError::ScanWidthMismatch {
                        step,
                        expected: first.len(),
                        got: scan.len(),
                    });
                }
            }
        }

        let clipped: Vec<RangeScan> = scans
            .iter()
            .map(|scan| scan.clamped(self.config.max_range))
            .collect();

        for (step, (pose, scan)) in poses.iter().zip(clipped.iter()).enumerate() {
            grid.update(pose, scan)
                .map_err(|source| PipelineError::Step { step, source })?;
            debug!("step {}: pose ({:.2}, {:.2})", step, pose.x, pose.y);
            observer.on_step(step, pose, grid);
        }

        Ok(poses.len())
    }
}

/// Shift a trajectory recorded around the origin into grid bounds.
///
/// Moves x to the horizontal center of the map and y to one third of its
/// height. The bounds contract of [`OccupancyGrid::update`] is the
/// caller's to keep; this is the usual way to keep it for datasets whose
/// odometry starts near (0, 0).
pub fn recenter_trajectory(poses: &mut [Pose2D], map_size: [u32; 2]) {
    let dx = map_size[0] as f32 / 2.0;
    let dy = map_size[1] as f32 / 3.0;
    for pose in poses.iter_mut() {
        pose.x += dx;
        pose.y += dy;
    }
}
