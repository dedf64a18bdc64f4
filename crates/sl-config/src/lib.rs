//! Swolight configuration loading and validation.
//!
//! This crate provides:
//! - Typed mode enums written to the sensor as ordinals
//! - `SensorConfig` with construction-time validation
//! - Optional camera mounting geometry for distance estimates
//! - Config resolution (CLI → env → XDG → defaults)

pub mod geometry;
pub mod modes;
pub mod resolve;
pub mod sensor;

pub use geometry::MountGeometry;
pub use modes::{CameraMode, LedMode, SnapshotMode, StreamMode};
pub use resolve::{config_schema, resolve_config, ConfigFile, ConfigSource, ResolvedConfig};
pub use sensor::{SensorConfig, CROP_LEN, PIPELINE_RANGE};
