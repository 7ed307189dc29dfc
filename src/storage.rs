//! Key-value preference storage
//!
//! Only one value is stored today (the fill fraction), but the store is a
//! plain string-keyed map of floats so the file stays readable.

use crate::{Result, WaterlineError};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key under which the fill fraction is persisted
pub const FILL_FRACTION_KEY: &str = "waterFillLevel";

/// Float-valued preference store shared between the UI and the tick thread
pub trait PreferenceStore: Send + Sync {
    fn get_f64(&self, key: &str) -> Result<Option<f64>>;
    fn set_f64(&self, key: &str, value: f64) -> Result<()>;

    /// Read a value, falling back to `default` when missing or unreadable
    fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        match self.get_f64(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to read preference {}: {}", key, e);
                default
            }
        }
    }
}

/// In-memory store, used by tests and when no config dir is available
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<RwLock<BTreeMap<String, f64>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.values.read().get(key).copied())
    }

    fn set_f64(&self, key: &str, value: f64) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON-file-backed store. Values are cached and the file is rewritten on set.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, f64>>,
}

impl FilePreferenceStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!("No preferences file at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Default location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("waterline").join("preferences.json"))
    }

    fn flush(&self, values: &BTreeMap<String, f64>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        // Write to a sibling file first so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            WaterlineError::StorageError(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.values.read().get(key).copied())
    }

    fn set_f64(&self, key: &str, value: f64) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value);
        self.flush(&values)
    }
}
