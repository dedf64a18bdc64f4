//! Sensor operating modes.
//!
//! Each mode is written to the sensor table as its ordinal, so the variant
//! order here is part of the wire contract and must not be rearranged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// LED behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LedMode {
    /// Use the LED mode set in the active pipeline.
    #[default]
    Pipeline,
    Off,
    Blink,
    On,
}

/// Camera processing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    #[default]
    VisionProcessor,
    /// Raises exposure and disables vision processing.
    DriverCamera,
}

/// Video stream layout when a secondary camera is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StreamMode {
    /// Side-by-side streams.
    #[default]
    Standard,
    /// Secondary stream placed in the lower-right corner of the primary.
    PipMain,
    /// Primary stream placed in the lower-right corner of the secondary.
    PipSecondary,
}

/// Snapshot capture control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotMode {
    #[default]
    Reset,
    /// Take a single snapshot.
    Single,
}

macro_rules! ordinal_mode {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in ordinal order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Position of this variant, as written to the sensor table.
            pub fn ordinal(self) -> u8 {
                self as u8
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($ty::$variant => write!(f, $name),)+
                }
            }
        }
    };
}

ordinal_mode!(LedMode {
    Pipeline => "pipeline",
    Off => "off",
    Blink => "blink",
    On => "on",
});

ordinal_mode!(CameraMode {
    VisionProcessor => "vision_processor",
    DriverCamera => "driver_camera",
});

ordinal_mode!(StreamMode {
    Standard => "standard",
    PipMain => "pip_main",
    PipSecondary => "pip_secondary",
});

ordinal_mode!(SnapshotMode {
    Reset => "reset",
    Single => "single",
});
