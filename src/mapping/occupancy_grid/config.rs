//! Occupancy grid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration parameter.
///
/// Raised once, at construction time; an invalid parameter is never
/// silently replaced with a default.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("map size must be positive in both dimensions, got {0}x{1}")]
    InvalidMapSize(u32, u32),

    #[error("resolution must be a positive integer, got {0}")]
    InvalidResolution(u32),

    #[error("prob_occ must lie strictly inside (0, 1), got {0}")]
    InvalidProbability(f32),

    #[error("log-odds clamp requires min < max, got [{0}, {1}]")]
    InvalidClamp(f32, f32),

    #[error("log-odds clamp requires both min and max")]
    IncompleteClamp,

    #[error("max_range must be non-negative, got {0}")]
    InvalidMaxRange(f32),
}

/// Configuration for the occupancy grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Map extent in map units (x, y).
    pub size: [u32; 2],

    /// Cells per map unit.
    pub resolution: u32,

    /// Prior probability that a cell reported as a laser hit is occupied.
    ///
    /// Must lie strictly inside (0, 1). A value of 0.5 is legal but
    /// degenerates every update to a no-op.
    pub prob_occ: f32,

    /// Lower clamp on log-odds before the probability transform.
    pub log_odds_min: Option<f32>,

    /// Upper clamp on log-odds before the probability transform.
    pub log_odds_max: Option<f32>,
}

impl GridConfig {
    /// Check every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size[0] == 0 || self.size[1] == 0 {
            return Err(ConfigError::InvalidMapSize(self.size[0], self.size[1]));
        }
        if self.resolution == 0 {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !(self.prob_occ > 0.0 && self.prob_occ < 1.0) {
            return Err(ConfigError::InvalidProbability(self.prob_occ));
        }
        match (self.log_odds_min, self.log_odds_max) {
            (Some(lo), Some(hi)) if lo >= hi => {
                return Err(ConfigError::InvalidClamp(lo, hi));
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::IncompleteClamp);
            }
            _ => {}
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: [100, 100],
            resolution: 1,
            prob_occ: 0.9,
            log_odds_min: Some(-10.0),
            log_odds_max: Some(10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = GridConfig {
            size: [0, 100],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidMapSize(0, 100)));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let config = GridConfig {
            resolution: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidResolution(0)));
    }

    #[test]
    fn test_probability_bounds_rejected() {
        for bad in [0.0, 1.0, -0.2, 1.5, f32::NAN] {
            let config = GridConfig {
                prob_occ: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "prob_occ {} accepted", bad);
        }
    }

    #[test]
    fn test_inverted_clamp_rejected() {
        let config = GridConfig {
            log_odds_min: Some(5.0),
            log_odds_max: Some(-5.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidClamp(5.0, -5.0))
        );
    }

    #[test]
    fn test_one_sided_clamp_rejected() {
        let config = GridConfig {
            log_odds_min: Some(-5.0),
            log_odds_max: None,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::IncompleteClamp));
    }

    #[test]
    fn test_unclamped_config_is_valid() {
        let config = GridConfig {
            log_odds_min: None,
            log_odds_max: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
