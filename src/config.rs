use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Host-recognized engine parameters.
///
/// `marker_radius` is cosmetic (marker sphere size) and never feeds
/// geometry; `wire_radius` offsets picked surface points off the scanned
/// surface; the two counts bound path simplification and smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Wire/tube radius in length-units. Must be positive.
    pub wire_radius: f64,
    /// Marker sphere radius in length-units. Must be positive.
    pub marker_radius: f64,
    /// Maximum control points kept when simplifying a traced path (3–20).
    pub control_point_cap: usize,
    /// Sample count of smoothed output curves (5–200).
    pub smooth_sample_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            wire_radius: 0.4,
            marker_radius: 0.4,
            control_point_cap: 10,
            smooth_sample_count: 50,
        }
    }
}

impl EngineConfig {
    /// Checks every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wire_radius <= 0.0 {
            return Err(ConfigError::OutOfRange {
                parameter: "wire_radius",
                value: self.wire_radius,
                min: f64::MIN_POSITIVE,
                max: f64::INFINITY,
            });
        }
        if self.marker_radius <= 0.0 {
            return Err(ConfigError::OutOfRange {
                parameter: "marker_radius",
                value: self.marker_radius,
                min: f64::MIN_POSITIVE,
                max: f64::INFINITY,
            });
        }
        if !(3..=20).contains(&self.control_point_cap) {
            #[allow(clippy::cast_precision_loss)]
            return Err(ConfigError::OutOfRange {
                parameter: "control_point_cap",
                value: self.control_point_cap as f64,
                min: 3.0,
                max: 20.0,
            });
        }
        if !(5..=200).contains(&self.smooth_sample_count) {
            #[allow(clippy::cast_precision_loss)]
            return Err(ConfigError::OutOfRange {
                parameter: "smooth_sample_count",
                value: self.smooth_sample_count as f64,
                min: 5.0,
                max: 200.0,
            });
        }
        Ok(())
    }
}
