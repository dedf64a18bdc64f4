//! Recorded table snapshots.
//!
//! A snapshot is a JSON file holding every entry of one table. Loading it
//! into a [`MemoryRegistry`] lets the typed accessors run against recorded
//! sensor output, for bug reproduction and tests.
//!
//! ```ignore
//! use sl_core::replay::TableSnapshot;
//!
//! let snapshot = TableSnapshot::load("match42_auto.json")?;
//! let registry = MemoryRegistry::new();
//! snapshot.install(&registry);
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sl_common::schema::{is_compatible, SCHEMA_VERSION};
use sl_common::{Error, Result};
use sl_store::{EntryValue, MemoryRegistry, MemoryTable, TelemetryTable};
use tracing::debug;

/// Every entry of one table at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub schema_version: String,
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<String>,
    #[serde(default)]
    pub entries: BTreeMap<String, EntryValue>,
}

impl TableSnapshot {
    /// Empty snapshot for the named table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            table: table.into(),
            recorded_at: None,
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<EntryValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Capture the current contents of a table.
    pub fn record(table: &MemoryTable) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            table: table.name().to_string(),
            recorded_at: Some(Utc::now().to_rfc3339()),
            entries: table.entries(),
        }
    }

    /// Parse and check a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: TableSnapshot =
            serde_json::from_str(json).map_err(|e| Error::SnapshotCorrupted(e.to_string()))?;
        snapshot.verify()?;
        Ok(snapshot)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            table = %snapshot.table,
            entries = snapshot.entries.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn verify(&self) -> Result<()> {
        if !is_compatible(&self.schema_version) {
            return Err(Error::UnsupportedSchema {
                version: self.schema_version.clone(),
            });
        }
        if self.table.is_empty() {
            return Err(Error::SnapshotCorrupted("table name is empty".to_string()));
        }
        Ok(())
    }

    /// Build a standalone table holding the recorded entries.
    pub fn into_table(self) -> MemoryTable {
        MemoryTable::with_entries(self.table, self.entries)
    }

    /// Register the recorded table in `registry`, replacing any table of the
    /// same name.
    pub fn install(self, registry: &MemoryRegistry) -> Arc<MemoryTable> {
        registry.insert(self.into_table())
    }
}
