//! Swolight common types and errors.
//!
//! This crate provides foundational types shared across the sl-* crates:
//! - Unified error type with stable numeric codes
//! - Pose value types reconstructed from sensor telemetry
//! - Schema versioning for recorded snapshots

pub mod error;
pub mod geometry;
pub mod schema;

pub use error::{Error, Result};
pub use geometry::{Pose3d, Rotation3d, Translation3d};
pub use schema::SCHEMA_VERSION;
