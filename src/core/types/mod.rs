//! Core data types for occupancy mapping.
//!
//! - [`Point2D`]: 2D point in map units
//! - [`Pose2D`]: Robot pose (x, y, theta) in map units and radians
//! - [`RangeScan`]: One laser sweep as a vector of range readings

mod pose;
mod scan;

pub use pose::{Point2D, Pose2D};
pub use scan::RangeScan;
