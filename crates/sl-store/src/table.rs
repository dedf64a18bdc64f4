//! Telemetry table interface.
//!
//! A table maps string keys to loosely typed values. Typed reads take a
//! caller default that is returned when the entry is missing or holds a
//! different type; they never fail.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EntryValue {
    Number(f64),
    NumberArray(Vec<f64>),
    Raw(Vec<u8>),
}

impl EntryValue {
    /// Short type name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EntryValue::Number(_) => "number",
            EntryValue::NumberArray(_) => "number_array",
            EntryValue::Raw(_) => "raw",
        }
    }
}

impl From<f64> for EntryValue {
    fn from(v: f64) -> Self {
        EntryValue::Number(v)
    }
}

impl From<Vec<f64>> for EntryValue {
    fn from(v: Vec<f64>) -> Self {
        EntryValue::NumberArray(v)
    }
}

impl From<Vec<u8>> for EntryValue {
    fn from(v: Vec<u8>) -> Self {
        EntryValue::Raw(v)
    }
}

/// A named key-value table shared with the sensor.
///
/// Implementations handle their own synchronization; callers may read and
/// write from any thread.
pub trait TelemetryTable: Send + Sync {
    /// Table name used for lookup and logs.
    fn name(&self) -> &str;

    /// Current value of an entry, if present.
    fn get_value(&self, key: &str) -> Option<EntryValue>;

    /// Publish a value. Fire-and-forget: implementations drop writes they
    /// cannot perform.
    fn set_value(&self, key: &str, value: EntryValue);

    fn get_number(&self, key: &str, default: f64) -> f64 {
        match self.get_value(key) {
            Some(EntryValue::Number(v)) => v,
            _ => default,
        }
    }

    fn get_number_array(&self, key: &str, default: &[f64]) -> Vec<f64> {
        match self.get_value(key) {
            Some(EntryValue::NumberArray(v)) => v,
            _ => default.to_vec(),
        }
    }

    /// Double array read; shares storage with number arrays.
    fn get_double_array(&self, key: &str, default: &[f64]) -> Vec<f64> {
        self.get_number_array(key, default)
    }

    fn get_raw(&self, key: &str, default: &[u8]) -> Vec<u8> {
        match self.get_value(key) {
            Some(EntryValue::Raw(v)) => v,
            _ => default.to_vec(),
        }
    }

    fn set_number(&self, key: &str, value: f64) {
        self.set_value(key, EntryValue::Number(value));
    }

    fn set_number_array(&self, key: &str, values: &[f64]) {
        self.set_value(key, EntryValue::NumberArray(values.to_vec()));
    }

    fn set_raw(&self, key: &str, bytes: &[u8]) {
        self.set_value(key, EntryValue::Raw(bytes.to_vec()));
    }
}

/// Name-based table lookup.
pub trait TableRegistry {
    /// Handle for the named table, created on first lookup.
    fn table(&self, name: &str) -> Arc<dyn TelemetryTable>;
}
