//! NakshaGrid - Occupancy grid mapping from odometry and laser range logs
//!
//! Builds a 2D probabilistic map of an environment from a recorded robot
//! trajectory: each step pairs an odometry pose with a laser sweep, and the
//! map accumulates evidence about which grid cells are occupied or free.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      main                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Infrastructure
//! │              (carmen log reading)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   pipeline/                         │  ← Orchestration
//! │          (trajectory driver, observers)             │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   mapping/                          │  ← Core algorithms
//! │        (occupancy grid, raster, sensor model)       │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! 1. [`io::carmen`] extracts aligned pose and range sequences from a log.
//! 2. [`pipeline::TrajectoryProcessor`] clips ranges to the sensor maximum
//!    and replays the trajectory in order.
//! 3. [`mapping::OccupancyGrid`] converts each sweep into occupied and free
//!    cells and accumulates log-odds evidence.
//! 4. The probability view of the grid can be read between any two steps.

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Mapping algorithms (depends on core)
pub mod mapping;

// Layer 3: Trajectory orchestration (depends on core, mapping)
pub mod pipeline;

// Layer 4: Dataset infrastructure (depends on core)
pub mod io;
