//! Sensor construction parameters and validation.

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sl_common::{Error, Result};

use crate::modes::{CameraMode, LedMode, SnapshotMode, StreamMode};

/// Valid pipeline indices.
pub const PIPELINE_RANGE: RangeInclusive<i32> = 0..=9;

/// Number of bounds in a crop rectangle: `[x0, x1, y0, y1]`.
pub const CROP_LEN: usize = 4;

/// Construction-time configuration for one sensor table.
///
/// Missing fields deserialize to the sensor's power-on defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SensorConfig {
    /// Name of the telemetry table the sensor publishes under.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub led_mode: LedMode,

    #[serde(default)]
    pub camera_mode: CameraMode,

    /// Pipeline index, 0 through 9.
    #[serde(default)]
    pub pipeline: i32,

    #[serde(default)]
    pub stream_mode: StreamMode,

    #[serde(default)]
    pub snapshot_mode: SnapshotMode,

    /// Crop bounds; must hold exactly four values.
    #[serde(default = "default_crop")]
    pub crop: Vec<f64>,
}

fn default_name() -> String {
    "limelight".to_string()
}

fn default_crop() -> Vec<f64> {
    vec![0.0; CROP_LEN]
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new(default_name())
    }
}

impl SensorConfig {
    /// Config for the named table with every other field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            led_mode: LedMode::default(),
            camera_mode: CameraMode::default(),
            pipeline: 0,
            stream_mode: StreamMode::default(),
            snapshot_mode: SnapshotMode::default(),
            crop: default_crop(),
        }
    }

    pub fn with_led_mode(mut self, mode: LedMode) -> Self {
        self.led_mode = mode;
        self
    }

    pub fn with_camera_mode(mut self, mode: CameraMode) -> Self {
        self.camera_mode = mode;
        self
    }

    pub fn with_pipeline(mut self, pipeline: i32) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_stream_mode(mut self, mode: StreamMode) -> Self {
        self.stream_mode = mode;
        self
    }

    pub fn with_snapshot_mode(mut self, mode: SnapshotMode) -> Self {
        self.snapshot_mode = mode;
        self
    }

    pub fn with_crop(mut self, crop: impl Into<Vec<f64>>) -> Self {
        self.crop = crop.into();
        self
    }

    /// Check the configuration without touching any table.
    ///
    /// Checks run in order name, pipeline, crop; the first failure is
    /// returned.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidConfiguration {
                field: "name",
                reason: "table name must not be empty".to_string(),
            });
        }

        if !PIPELINE_RANGE.contains(&self.pipeline) {
            return Err(Error::InvalidConfiguration {
                field: "pipeline",
                reason: format!(
                    "must be in {}..={}, got {}",
                    PIPELINE_RANGE.start(),
                    PIPELINE_RANGE.end(),
                    self.pipeline
                ),
            });
        }

        if self.crop.len() != CROP_LEN {
            return Err(Error::InvalidConfiguration {
                field: "crop",
                reason: format!(
                    "expected {} bounds, got {}",
                    CROP_LEN,
                    self.crop.len()
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field_of(err: Error) -> &'static str {
        match err {
            Error::InvalidConfiguration { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = SensorConfig::default();
        assert_eq!(config.name, "limelight");
        assert_eq!(config.crop, vec![0.0, 0.0, 0.0, 0.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pipeline_bounds() {
        for pipeline in [0, 5, 9] {
            assert!(SensorConfig::default()
                .with_pipeline(pipeline)
                .validate()
                .is_ok());
        }
        for pipeline in [-1, 10] {
            let err = SensorConfig::default()
                .with_pipeline(pipeline)
                .validate()
                .unwrap_err();
            assert_eq!(field_of(err), "pipeline");
        }
    }

    #[test]
    fn crop_length_must_be_four() {
        assert!(SensorConfig::default()
            .with_crop([0.0, 0.0, 1.0, 1.0])
            .validate()
            .is_ok());
        for len in [0, 3, 5] {
            let err = SensorConfig::default()
                .with_crop(vec![0.0; len])
                .validate()
                .unwrap_err();
            assert_eq!(field_of(err), "crop");
        }
    }

    #[test]
    fn empty_name_rejected_first() {
        let err = SensorConfig::new("")
            .with_pipeline(42)
            .validate()
            .unwrap_err();
        assert_eq!(field_of(err), "name");
    }

    #[test]
    fn pipeline_checked_before_crop() {
        let err = SensorConfig::default()
            .with_pipeline(-3)
            .with_crop(vec![])
            .validate()
            .unwrap_err();
        assert_eq!(field_of(err), "pipeline");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: SensorConfig = serde_json::from_str(r#"{"pipeline": 4}"#).unwrap();
        assert_eq!(config.name, "limelight");
        assert_eq!(config.pipeline, 4);
        assert_eq!(config.led_mode, LedMode::Pipeline);
        assert_eq!(config.crop.len(), CROP_LEN);
    }

    #[test]
    fn modes_parse_from_snake_case() {
        let config: SensorConfig = serde_json::from_str(
            r#"{"name": "limelight-front", "led_mode": "blink", "camera_mode": "driver_camera",
                "stream_mode": "pip_main", "snapshot_mode": "single"}"#,
        )
        .unwrap();
        assert_eq!(config.led_mode, LedMode::Blink);
        assert_eq!(config.camera_mode, CameraMode::DriverCamera);
        assert_eq!(config.stream_mode, StreamMode::PipMain);
        assert_eq!(config.snapshot_mode, SnapshotMode::Single);
    }

    proptest! {
        #[test]
        fn pipeline_valid_iff_in_range(pipeline in -100i32..100) {
            let ok = SensorConfig::default().with_pipeline(pipeline).validate().is_ok();
            prop_assert_eq!(ok, (0..=9).contains(&pipeline));
        }

        #[test]
        fn crop_valid_iff_four(crop in proptest::collection::vec(-1.0f64..1.0, 0..10)) {
            let len = crop.len();
            let ok = SensorConfig::default().with_crop(crop).validate().is_ok();
            prop_assert_eq!(ok, len == 4);
        }
    }
}
