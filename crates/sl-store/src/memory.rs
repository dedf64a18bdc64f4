//! In-memory telemetry tables.
//!
//! Entries live behind an `RwLock`. A poisoned lock degrades reads to
//! "missing" and drops writes, so a panicked writer elsewhere can never
//! take down a reader.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use tracing::{trace, warn};

use crate::table::{EntryValue, TableRegistry, TelemetryTable};

/// A table held entirely in process memory.
#[derive(Debug)]
pub struct MemoryTable {
    name: String,
    entries: RwLock<HashMap<String, EntryValue>>,
}

impl MemoryTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Table pre-populated with the given entries.
    pub fn with_entries<I, K>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, EntryValue)>,
        K: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            name: name.into(),
            entries: RwLock::new(map),
        }
    }

    /// Remove an entry, returning its last value.
    pub fn remove(&self, key: &str) -> Option<EntryValue> {
        match self.entries.write() {
            Ok(mut guard) => guard.remove(key),
            Err(_) => None,
        }
    }

    /// Copy of every entry, ordered by key.
    pub fn entries(&self) -> BTreeMap<String, EntryValue> {
        match self.entries.read() {
            Ok(guard) => guard
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            Err(_) => BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TelemetryTable for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, key: &str) -> Option<EntryValue> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set_value(&self, key: &str, value: EntryValue) {
        match self.entries.write() {
            Ok(mut guard) => {
                trace!(table = %self.name, key, kind = value.kind(), "entry set");
                guard.insert(key.to_string(), value);
            }
            Err(_) => warn!(table = %self.name, key, "table lock poisoned, write dropped"),
        }
    }
}

/// Registry of in-memory tables, keyed by name.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    tables: RwLock<HashMap<String, Arc<MemoryTable>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table, replacing any existing table with the same name.
    pub fn insert(&self, table: MemoryTable) -> Arc<MemoryTable> {
        let table = Arc::new(table);
        if let Ok(mut guard) = self.tables.write() {
            guard.insert(table.name.clone(), Arc::clone(&table));
        }
        table
    }

    /// Concrete handle for the named table, created on first lookup.
    pub fn memory_table(&self, name: &str) -> Arc<MemoryTable> {
        if let Some(existing) = self
            .tables
            .read()
            .ok()
            .and_then(|guard| guard.get(name).cloned())
        {
            return existing;
        }

        match self.tables.write() {
            Ok(mut guard) => Arc::clone(
                guard
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(MemoryTable::new(name))),
            ),
            // Detached table: reads default, writes go nowhere shared.
            Err(_) => Arc::new(MemoryTable::new(name)),
        }
    }

    /// Names of registered tables, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tables
            .read()
            .map(|g| g.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl TableRegistry for MemoryRegistry {
    fn table(&self, name: &str) -> Arc<dyn TelemetryTable> {
        self.memory_table(name)
    }
}
