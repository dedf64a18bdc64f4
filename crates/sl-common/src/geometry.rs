//! Pose value types.
//!
//! These are plain containers for the components the camera reports. No
//! pose arithmetic lives here; downstream code converts them into whatever
//! geometry library it uses.

use serde::{Deserialize, Serialize};

/// Position in 3D space, in the units the sensor reports (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Translation3d {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation as three angle components, in the units the sensor reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation3d {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Rotation3d {
    pub const fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }
}

/// A 3D pose (translation + rotation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose3d {
    pub translation: Translation3d,
    pub rotation: Rotation3d,
}

impl Pose3d {
    pub const fn new(translation: Translation3d, rotation: Rotation3d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Build a pose from `[x, y, z, roll, pitch, yaw]`.
    pub const fn from_components(c: [f64; 6]) -> Self {
        Self {
            translation: Translation3d::new(c[0], c[1], c[2]),
            rotation: Rotation3d::new(c[3], c[4], c[5]),
        }
    }

    /// Flatten back to `[x, y, z, roll, pitch, yaw]`.
    pub fn to_components(&self) -> [f64; 6] {
        [
            self.translation.x,
            self.translation.y,
            self.translation.z,
            self.rotation.roll,
            self.rotation.pitch,
            self.rotation.yaw,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_map_to_translation_then_rotation() {
        let pose = Pose3d::from_components([1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        assert_eq!(pose.translation, Translation3d::new(1.0, 2.0, 3.0));
        assert_eq!(pose.rotation, Rotation3d::new(10.0, 20.0, 30.0));
        assert_eq!(pose.to_components(), [1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn serializes_with_named_axes() {
        let pose = Pose3d::from_components([1.0, 0.0, 0.0, 0.0, 0.0, 90.0]);
        let json = serde_json::to_value(pose).unwrap();
        assert_eq!(json["translation"]["x"], 1.0);
        assert_eq!(json["rotation"]["yaw"], 90.0);
    }
}
