//! Camera mounting geometry used for distance estimates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Physical mounting constants, in consistent units (meters, degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MountGeometry {
    /// Height of the camera lens above the floor.
    pub camera_height: f64,
    /// Upward tilt of the camera from horizontal, in degrees.
    pub camera_angle: f64,
    /// Height of the tracked target above the floor.
    pub target_height: f64,
}

impl MountGeometry {
    pub fn new(camera_height: f64, camera_angle: f64, target_height: f64) -> Self {
        Self {
            camera_height,
            camera_angle,
            target_height,
        }
    }
}
