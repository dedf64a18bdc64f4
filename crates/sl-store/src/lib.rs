//! Swolight telemetry table access.
//!
//! This crate provides:
//! - `TelemetryTable`, the key-value interface a sensor publishes through
//! - `TableRegistry`, name-based table lookup
//! - An in-memory implementation of both, for replay and tests

pub mod memory;
pub mod table;

pub use memory::{MemoryRegistry, MemoryTable};
pub use table::{EntryValue, TableRegistry, TelemetryTable};
