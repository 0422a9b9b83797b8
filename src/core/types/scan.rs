//! Laser range scan type.

use serde::{Deserialize, Serialize};

/// One laser sweep as an ordered vector of range readings.
///
/// Readings are non-negative distances in map units, one per angular
/// sample. Samples are evenly spaced over the sensor's field of view
/// (-90° to +90° relative to the robot heading); the vector length
/// defines the angular resolution and must stay constant within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RangeScan {
    /// Range readings in map units.
    pub ranges: Vec<f32>,
}

impl RangeScan {
    /// Create a scan from raw range readings.
    pub fn new(ranges: Vec<f32>) -> Self {
        Self { ranges }
    }

    /// Number of range readings.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the scan has no readings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Copy of this scan with every reading clipped to [0, max_range].
    ///
    /// A reading exactly equal to `max_range` is kept as-is.
    pub fn clamped(&self, max_range: f32) -> RangeScan {
        RangeScan {
            ranges: self
                .ranges
                .iter()
                .map(|r| r.clamp(0.0, max_range))
                .collect(),
        }
    }
}
