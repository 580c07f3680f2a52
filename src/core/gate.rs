//! Unlock flag for gated projections.
//!
//! The flag lives in whatever store the caller hands in, so the engine never
//! reaches for ambient storage itself.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Key whose value must be `"true"` for gated features to be available
pub const UNLOCK_FLAG: &str = "unlocked";

/// Read-only access to persisted feature flags
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// Whether gated features are unlocked in `store`
pub fn is_feature_unlocked(store: &dyn FlagStore) -> bool {
    store.get(UNLOCK_FLAG).is_some_and(|value| value == "true")
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    values: HashMap<String, String>,
}

impl MemoryFlagStore {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Store with the unlock flag already set
    pub fn unlocked() -> Self {
        let mut store = MemoryFlagStore::default();
        store.set(UNLOCK_FLAG, "true");
        store
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Flags read from a JSON object on disk, e.g. `{"unlocked": true}`
#[derive(Debug, Clone, Default)]
pub struct JsonFileFlagStore {
    values: HashMap<String, serde_json::Value>,
}

impl JsonFileFlagStore {
    /// Load flags from `path`; a missing file means no flags are set
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No flag file at {}", path.display());
                return Ok(JsonFileFlagStore::default());
            }
            Err(e) => return Err(e.into()),
        };
        let values = serde_json::from_reader(BufReader::new(file))?;
        Ok(JsonFileFlagStore { values })
    }
}

impl FlagStore for JsonFileFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
