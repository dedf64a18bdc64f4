//! Pose reconstruction from flat telemetry arrays.
//!
//! The sensor publishes poses as `[x, y, z, roll, pitch, yaw]` and reports
//! "no solution" by leaving every component at zero. This module is the
//! only place that convention is interpreted; everything above it sees
//! `Option<Pose3d>`.

use sl_common::Pose3d;

/// Number of components in a published pose.
pub const POSE_LEN: usize = 6;

/// Default written in place of a pose when the sensor has no solution.
pub const NO_POSE: [f64; POSE_LEN] = [0.0; POSE_LEN];

/// Interpret a pose array.
///
/// Returns `None` when `data` is exactly the all-zero sentinel. A real pose
/// that is zero in every component is indistinguishable from that and is
/// also reported as `None`. Arrays shorter than six components are treated
/// as absent; extra trailing components (latency on newer firmware) are
/// ignored. Rotation units are passed through unconverted.
pub fn pose_from_array(data: &[f64]) -> Option<Pose3d> {
    if data == NO_POSE.as_slice() {
        return None;
    }
    let components: [f64; POSE_LEN] = data.get(..POSE_LEN)?.try_into().ok()?;
    Some(Pose3d::from_components(components))
}
