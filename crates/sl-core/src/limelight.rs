//! Typed access to one vision sensor's telemetry table.
//!
//! Construction validates the configuration, resolves the table once and
//! pushes the initial mode/pipeline/crop entries. After that every accessor
//! is a fresh, infallible read: missing or mistyped entries yield the
//! documented default, and "no target", "no pose" and "no distance" are
//! ordinary return values.
//!
//! # Example
//!
//! ```
//! use sl_config::SensorConfig;
//! use sl_core::Limelight;
//! use sl_store::{MemoryRegistry, TableRegistry, TelemetryTable};
//!
//! let registry = MemoryRegistry::new();
//! let limelight = Limelight::new(&registry, SensorConfig::new("limelight").with_pipeline(2))?;
//!
//! registry.table("limelight").set_number("tv", 1.0);
//! registry.table("limelight").set_number("ty", 10.0);
//! assert!(limelight.has_target());
//! assert!(limelight.find_target_distance(1.0, 0.0, 0.2) > 0.0);
//! # Ok::<(), sl_common::Error>(())
//! ```

use std::fmt;
use std::sync::Arc;

use sl_common::{Pose3d, Result};
use sl_config::{MountGeometry, SensorConfig};
use sl_store::{TableRegistry, TelemetryTable};
use tracing::{debug, info};

use crate::keys;
use crate::pose::{pose_from_array, NO_POSE};
use crate::reading::TargetReading;

/// Returned by the distance estimator when no target is visible.
pub const NO_DISTANCE: f64 = -1.0;

/// Default for [`Limelight::color`] when nothing is published.
const NO_COLOR: [f64; 1] = [-1.0];

/// A bound vision sensor.
///
/// Cloning shares the underlying table handle.
#[derive(Clone)]
pub struct Limelight {
    table: Arc<dyn TelemetryTable>,
    config: SensorConfig,
}

impl fmt::Debug for Limelight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limelight")
            .field("table", &self.table.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Limelight {
    /// Validate `config`, look up its table in `registry` and write the
    /// initial configuration entries.
    ///
    /// Nothing is looked up or written when validation fails.
    pub fn new(registry: &dyn TableRegistry, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        let table = registry.table(&config.name);
        Ok(Self::bind(table, config))
    }

    /// Like [`Limelight::new`], for a table handle resolved by the caller.
    pub fn with_table(table: Arc<dyn TelemetryTable>, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::bind(table, config))
    }

    fn bind(table: Arc<dyn TelemetryTable>, config: SensorConfig) -> Self {
        let limelight = Self { table, config };
        limelight.write_config();
        info!(
            table = limelight.table.name(),
            pipeline = limelight.config.pipeline,
            "limelight bound"
        );
        limelight
    }

    fn write_config(&self) {
        let c = &self.config;
        debug!(
            table = self.table.name(),
            led_mode = %c.led_mode,
            camera_mode = %c.camera_mode,
            stream_mode = %c.stream_mode,
            snapshot_mode = %c.snapshot_mode,
            crop = ?c.crop,
            "writing initial configuration"
        );
        self.table.set_number(keys::LED_MODE, f64::from(c.led_mode.ordinal()));
        self.table.set_number(keys::CAMERA_MODE, f64::from(c.camera_mode.ordinal()));
        self.table.set_number(keys::PIPELINE, f64::from(c.pipeline));
        self.table.set_number(keys::STREAM, f64::from(c.stream_mode.ordinal()));
        self.table.set_number(keys::SNAPSHOT, f64::from(c.snapshot_mode.ordinal()));
        self.table.set_number_array(keys::CROP, &c.crop);
    }

    /// Configuration written at construction.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    fn number(&self, key: &str) -> f64 {
        self.table.get_number(key, 0.0)
    }

    // ── Targeting ───────────────────────────────────────────────────────

    /// Whether the sensor has any valid target. Only an exact `1.0` counts.
    pub fn has_target(&self) -> bool {
        self.number(keys::HAS_TARGET) == 1.0
    }

    /// Horizontal offset from crosshair to target, in degrees.
    pub fn horizontal_offset(&self) -> f64 {
        self.number(keys::HORIZONTAL_OFFSET)
    }

    /// Vertical offset from crosshair to target, in degrees.
    pub fn vertical_offset(&self) -> f64 {
        self.number(keys::VERTICAL_OFFSET)
    }

    /// Target area as a percentage of the image.
    pub fn area(&self) -> f64 {
        self.number(keys::AREA)
    }

    /// Skew or rotation of the target, in degrees.
    pub fn rotation(&self) -> f64 {
        self.number(keys::ROTATION)
    }

    /// Pipeline latency, in milliseconds.
    pub fn latency(&self) -> f64 {
        self.number(keys::LATENCY)
    }

    /// Shortest side of the fitted bounding box, in pixels.
    pub fn shortest(&self) -> f64 {
        self.number(keys::SHORTEST)
    }

    /// Longest side of the fitted bounding box, in pixels.
    pub fn longest(&self) -> f64 {
        self.number(keys::LONGEST)
    }

    pub fn horizontal_length(&self) -> f64 {
        self.number(keys::HORIZONTAL_LENGTH)
    }

    pub fn vertical_length(&self) -> f64 {
        self.number(keys::VERTICAL_LENGTH)
    }

    /// Pipeline the sensor reports as active. May differ from the
    /// configured one if it was changed on the sensor.
    pub fn current_pipeline(&self) -> f64 {
        self.number(keys::CURRENT_PIPELINE)
    }

    /// Fiducial ID of the primary target.
    pub fn target_id(&self) -> f64 {
        self.number(keys::TARGET_ID)
    }

    /// Class index from the neural detector.
    pub fn detector_class(&self) -> f64 {
        self.number(keys::DETECTOR_CLASS)
    }

    // ── Arrays and blobs ────────────────────────────────────────────────

    /// 3D transform of the target; empty when not published.
    pub fn target_3d(&self) -> Vec<f64> {
        self.table.get_number_array(keys::TARGET_3D, &[])
    }

    /// Color under the crosshair; empty when not published.
    pub fn color_under_crosshair(&self) -> Vec<f64> {
        self.table.get_number_array(keys::COLOR, &[])
    }

    /// Color under the crosshair; `[-1.0]` when not published.
    pub fn color(&self) -> Vec<f64> {
        self.table.get_number_array(keys::COLOR, &NO_COLOR)
    }

    /// Raw JSON dump of the full result set; empty when not published.
    pub fn json(&self) -> Vec<u8> {
        self.table.get_raw(keys::JSON, &[])
    }

    /// The JSON dump parsed, or `None` if empty or malformed.
    pub fn json_value(&self) -> Option<serde_json::Value> {
        let bytes = self.json();
        if bytes.is_empty() {
            return None;
        }
        serde_json::from_slice(&bytes).ok()
    }

    // ── Poses ───────────────────────────────────────────────────────────

    /// Camera pose in target space, or `None` if the sensor has no solution.
    pub fn camera_pose(&self) -> Option<Pose3d> {
        self.pose(keys::CAMERA_POSE)
    }

    /// Robot pose in field space, or `None` if the sensor has no solution.
    pub fn bot_pose(&self) -> Option<Pose3d> {
        self.pose(keys::BOT_POSE)
    }

    fn pose(&self, key: &str) -> Option<Pose3d> {
        pose_from_array(&self.table.get_double_array(key, &NO_POSE))
    }

    // ── Derived ─────────────────────────────────────────────────────────

    /// Distance to the target from the camera's mounting geometry.
    ///
    /// Returns [`NO_DISTANCE`] when no target is visible. Angles are in
    /// degrees; heights in any consistent unit. Total angles near 90° give
    /// unbounded results and are not guarded.
    pub fn find_target_distance(
        &self,
        camera_height: f64,
        camera_angle: f64,
        target_height: f64,
    ) -> f64 {
        if !self.has_target() {
            return NO_DISTANCE;
        }
        (camera_height - target_height) * (self.vertical_offset() + camera_angle).to_radians().tan()
    }

    /// [`Limelight::find_target_distance`] with constants from config.
    pub fn distance_with(&self, geometry: &MountGeometry) -> f64 {
        self.find_target_distance(
            geometry.camera_height,
            geometry.camera_angle,
            geometry.target_height,
        )
    }

    /// Read every field once. Fields are independent reads and may straddle
    /// a sensor update.
    pub fn reading(&self) -> TargetReading {
        TargetReading {
            has_target: self.has_target(),
            horizontal_offset: self.horizontal_offset(),
            vertical_offset: self.vertical_offset(),
            area: self.area(),
            rotation: self.rotation(),
            latency: self.latency(),
            shortest: self.shortest(),
            longest: self.longest(),
            horizontal_length: self.horizontal_length(),
            vertical_length: self.vertical_length(),
            current_pipeline: self.current_pipeline(),
            target_id: self.target_id(),
            detector_class: self.detector_class(),
            target_3d: self.target_3d(),
            color: self.color(),
            camera_pose: self.camera_pose(),
            bot_pose: self.bot_pose(),
            json: self.json_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_config::{CameraMode, LedMode, SnapshotMode, StreamMode};
    use sl_store::{EntryValue, MemoryRegistry, MemoryTable};

    fn bound(config: SensorConfig) -> (Arc<MemoryTable>, Limelight) {
        let registry = MemoryRegistry::new();
        let table = registry.memory_table(&config.name);
        let limelight = Limelight::new(&registry, config).unwrap();
        (table, limelight)
    }

    #[test]
    fn binding_writes_all_six_entries() {
        let config = SensorConfig::new("limelight")
            .with_led_mode(LedMode::On)
            .with_camera_mode(CameraMode::DriverCamera)
            .with_pipeline(3)
            .with_stream_mode(StreamMode::PipSecondary)
            .with_snapshot_mode(SnapshotMode::Single)
            .with_crop([-1.0, 1.0, -0.5, 0.5]);
        let (table, _limelight) = bound(config);

        assert_eq!(table.get_number(keys::LED_MODE, -1.0), 3.0);
        assert_eq!(table.get_number(keys::CAMERA_MODE, -1.0), 1.0);
        assert_eq!(table.get_number(keys::PIPELINE, -1.0), 3.0);
        assert_eq!(table.get_number(keys::STREAM, -1.0), 2.0);
        assert_eq!(table.get_number(keys::SNAPSHOT, -1.0), 1.0);
        assert_eq!(
            table.get_number_array(keys::CROP, &[]),
            vec![-1.0, 1.0, -0.5, 0.5]
        );
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let registry = MemoryRegistry::new();
        let err = Limelight::new(&registry, SensorConfig::new("limelight").with_pipeline(10))
            .unwrap_err();
        assert_eq!(err.code(), 10);
        assert!(registry.table_names().is_empty());

        let table = Arc::new(MemoryTable::new("limelight"));
        let result = Limelight::with_table(
            table.clone(),
            SensorConfig::new("limelight").with_crop(vec![0.0; 3]),
        );
        assert!(result.is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn presence_requires_exact_one() {
        let (table, limelight) = bound(SensorConfig::default());
        assert!(!limelight.has_target());
        for (raw, expected) in [(1.0, true), (0.0, false), (0.5, false), (-1.0, false), (1.0000001, false)] {
            table.set_number(keys::HAS_TARGET, raw);
            assert_eq!(limelight.has_target(), expected, "tv = {raw}");
        }
    }

    #[test]
    fn scalar_accessors_default_to_zero() {
        let (_table, limelight) = bound(SensorConfig::default());
        let reading = limelight.reading();
        assert_eq!(reading.horizontal_offset, 0.0);
        assert_eq!(reading.vertical_offset, 0.0);
        assert_eq!(reading.area, 0.0);
        assert_eq!(reading.rotation, 0.0);
        assert_eq!(reading.latency, 0.0);
        assert_eq!(reading.shortest, 0.0);
        assert_eq!(reading.longest, 0.0);
        assert_eq!(reading.horizontal_length, 0.0);
        assert_eq!(reading.vertical_length, 0.0);
        assert_eq!(reading.current_pipeline, 0.0);
        assert_eq!(reading.target_id, 0.0);
        assert_eq!(reading.detector_class, 0.0);
    }

    #[test]
    fn scalar_accessors_read_their_own_keys() {
        let (table, limelight) = bound(SensorConfig::default());
        let keyed: [(&str, fn(&Limelight) -> f64); 12] = [
            (keys::HORIZONTAL_OFFSET, Limelight::horizontal_offset),
            (keys::VERTICAL_OFFSET, Limelight::vertical_offset),
            (keys::AREA, Limelight::area),
            (keys::ROTATION, Limelight::rotation),
            (keys::LATENCY, Limelight::latency),
            (keys::SHORTEST, Limelight::shortest),
            (keys::LONGEST, Limelight::longest),
            (keys::HORIZONTAL_LENGTH, Limelight::horizontal_length),
            (keys::VERTICAL_LENGTH, Limelight::vertical_length),
            (keys::CURRENT_PIPELINE, Limelight::current_pipeline),
            (keys::TARGET_ID, Limelight::target_id),
            (keys::DETECTOR_CLASS, Limelight::detector_class),
        ];
        for (i, (key, _)) in keyed.iter().enumerate() {
            table.set_number(key, i as f64 + 0.25);
        }
        for (i, (key, read)) in keyed.iter().enumerate() {
            assert_eq!(read(&limelight), i as f64 + 0.25, "key {key}");
        }
    }

    #[test]
    fn color_accessors_keep_distinct_defaults() {
        let (table, limelight) = bound(SensorConfig::default());
        assert_eq!(limelight.color(), vec![-1.0]);
        assert!(limelight.color_under_crosshair().is_empty());

        table.set_number_array(keys::COLOR, &[255.0, 128.0, 0.0]);
        assert_eq!(limelight.color(), vec![255.0, 128.0, 0.0]);
        assert_eq!(limelight.color_under_crosshair(), vec![255.0, 128.0, 0.0]);
    }

    #[test]
    fn mistyped_entries_fall_back() {
        let (table, limelight) = bound(SensorConfig::default());
        table.set_value(keys::HAS_TARGET, EntryValue::Raw(vec![1]));
        table.set_value(keys::TARGET_3D, EntryValue::Number(2.0));
        table.set_value(keys::BOT_POSE, EntryValue::Number(2.0));
        table.set_value(keys::JSON, EntryValue::NumberArray(vec![1.0]));

        assert!(!limelight.has_target());
        assert!(limelight.target_3d().is_empty());
        assert!(limelight.bot_pose().is_none());
        assert!(limelight.json().is_empty());
    }

    #[test]
    fn json_value_parses_blob() {
        let (table, limelight) = bound(SensorConfig::default());
        assert!(limelight.json_value().is_none());

        table.set_raw(keys::JSON, b"not json");
        assert!(limelight.json_value().is_none());

        table.set_raw(keys::JSON, br#"{"Results": {"pID": 2}}"#);
        let value = limelight.json_value().unwrap();
        assert_eq!(value["Results"]["pID"], 2);
    }

    #[test]
    fn poses_use_zero_sentinel() {
        let (table, limelight) = bound(SensorConfig::default());
        assert!(limelight.camera_pose().is_none());
        assert!(limelight.bot_pose().is_none());

        table.set_number_array(keys::BOT_POSE, &[0.0; 6]);
        assert!(limelight.bot_pose().is_none());

        table.set_number_array(keys::BOT_POSE, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        let pose = limelight.bot_pose().unwrap();
        assert_eq!(pose.translation.x, 1.0);
        assert_eq!(pose.translation.y, 2.0);
        assert_eq!(pose.translation.z, 3.0);
        assert!(limelight.camera_pose().is_none());

        table.set_number_array(keys::CAMERA_POSE, &[0.1, -0.2, -1.5, 5.0, 10.0, -15.0]);
        let cam = limelight.camera_pose().unwrap();
        assert_eq!(cam.rotation.roll, 5.0);
        assert_eq!(cam.rotation.pitch, 10.0);
        assert_eq!(cam.rotation.yaw, -15.0);
    }

    #[test]
    fn distance_sentinel_without_target() {
        let (table, limelight) = bound(SensorConfig::default());
        table.set_number(keys::VERTICAL_OFFSET, 20.0);
        assert_eq!(limelight.find_target_distance(1.0, 30.0, 0.0), NO_DISTANCE);
        assert_eq!(
            limelight.distance_with(&MountGeometry::new(5.0, 5.0, 1.0)),
            NO_DISTANCE
        );
    }

    #[test]
    fn distance_at_forty_five_degrees() {
        let (table, limelight) = bound(SensorConfig::default());
        table.set_number(keys::HAS_TARGET, 1.0);
        table.set_number(keys::VERTICAL_OFFSET, 45.0);
        let d = limelight.find_target_distance(1.0, 0.0, 0.0);
        assert!((d - 1.0).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn camera_angle_adds_to_offset() {
        let (table, limelight) = bound(SensorConfig::default());
        table.set_number(keys::HAS_TARGET, 1.0);
        table.set_number(keys::VERTICAL_OFFSET, 15.0);
        let d = limelight.distance_with(&MountGeometry::new(2.0, 30.0, 0.5));
        assert!((d - 1.5).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn reads_reflect_external_pipeline_change() {
        let (table, limelight) = bound(SensorConfig::default().with_pipeline(1));
        table.set_number(keys::CURRENT_PIPELINE, 4.0);
        assert_eq!(limelight.current_pipeline(), 4.0);
        assert_eq!(limelight.config().pipeline, 1);
    }

    #[test]
    fn debug_names_table() {
        let (_table, limelight) = bound(SensorConfig::new("limelight-front"));
        let dbg = format!("{limelight:?}");
        assert!(dbg.contains("limelight-front"));
    }
}
