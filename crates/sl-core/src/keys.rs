//! Entry names the sensor publishes and listens on.

// Configuration, written once at binding.
pub const LED_MODE: &str = "ledMode";
pub const CAMERA_MODE: &str = "camMode";
pub const PIPELINE: &str = "pipeline";
pub const STREAM: &str = "stream";
pub const SNAPSHOT: &str = "snapshot";
pub const CROP: &str = "crop";

// Targeting scalars.
pub const HAS_TARGET: &str = "tv";
pub const HORIZONTAL_OFFSET: &str = "tx";
pub const VERTICAL_OFFSET: &str = "ty";
pub const AREA: &str = "ta";
pub const ROTATION: &str = "ts";
pub const LATENCY: &str = "tl";
pub const SHORTEST: &str = "tshort";
pub const LONGEST: &str = "tlong";
pub const HORIZONTAL_LENGTH: &str = "thor";
pub const VERTICAL_LENGTH: &str = "tvert";
pub const CURRENT_PIPELINE: &str = "getpipe";
pub const TARGET_ID: &str = "tid";
pub const DETECTOR_CLASS: &str = "tclass";

// Arrays and blobs.
pub const TARGET_3D: &str = "camtran";
pub const COLOR: &str = "tc";
pub const JSON: &str = "json";

// 6-element poses: [x, y, z, roll, pitch, yaw].
pub const CAMERA_POSE: &str = "camerapose_targetspace";
pub const BOT_POSE: &str = "botpose";
