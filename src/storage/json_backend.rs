use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

use super::StorageBackend;

const DEFAULT_DIR_NAME: &str = ".kas_core";
const TMP_SUFFIX: &str = "tmp";

/// File-per-key JSON backend. Each key maps to `<root>/<key>.json`; writes
/// are staged to a temporary file and renamed into place.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens a backend rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens the default data root: `$KAS_CORE_HOME`, or `~/.kas_core`.
    pub fn new_default() -> Result<Self> {
        Self::new(default_root())
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

/// Application data directory, honoring the `KAS_CORE_HOME` override.
pub fn default_root() -> PathBuf {
    if let Some(custom) = env::var_os("KAS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl StorageBackend for JsonStorage {
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.key_path(key);
        if !path.exists() {
            return T::default();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read stored payload, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "discarding corrupt stored payload");
                let _ = fs::remove_file(&path);
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(&self.key_path(key), &json)
    }
}
