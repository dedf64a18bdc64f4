//! Swolight core: typed access to vision-sensor telemetry.
//!
//! Binds a [`Limelight`] to a telemetry table and exposes every published
//! field as a typed, infallible read, plus pose reconstruction and a
//! trigonometric distance estimate.

pub mod exit_codes;
pub mod keys;
pub mod limelight;
pub mod logging;
pub mod pose;
pub mod reading;
pub mod replay;

pub use limelight::{Limelight, NO_DISTANCE};
pub use pose::pose_from_array;
pub use reading::TargetReading;
pub use replay::TableSnapshot;
