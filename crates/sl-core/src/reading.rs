//! One-shot collection of every telemetry field.

use serde::{Deserialize, Serialize};
use sl_common::Pose3d;

/// Values of every accessor, read one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetReading {
    pub has_target: bool,
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
    pub area: f64,
    pub rotation: f64,
    pub latency: f64,
    pub shortest: f64,
    pub longest: f64,
    pub horizontal_length: f64,
    pub vertical_length: f64,
    pub current_pipeline: f64,
    pub target_id: f64,
    pub detector_class: f64,
    pub target_3d: Vec<f64>,
    pub color: Vec<f64>,
    pub camera_pose: Option<Pose3d>,
    pub bot_pose: Option<Pose3d>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub json: Option<serde_json::Value>,
}

impl TargetReading {
    /// Offsets are only meaningful while a target is visible.
    pub fn offsets(&self) -> Option<(f64, f64)> {
        self.has_target
            .then_some((self.horizontal_offset, self.vertical_offset))
    }
}
