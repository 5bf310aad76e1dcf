//! Small persistent key-value store for boolean flags.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tracing::debug;

use crate::error::{Context, Result};

/// Set once the user has finished onboarding and an identity exists.
pub const KEY_HAS_IDENTITY: &str = "has_identity";

/// Trait for persisting boolean preferences. Missing keys read as `false`.
pub trait PreferencesStore: Send + Sync {
    fn get_bool(&self, key: &str) -> Result<bool>;
    fn set_bool(&self, key: &str, value: bool) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

// ── TOML file-backed implementation ──────────────────────────────────

#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct PrefsFile {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// Stores preferences in the `[flags]` table of a TOML file.
pub struct TomlPreferencesStore {
    path: PathBuf,
}

impl TomlPreferencesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<PrefsFile> {
        if !self.path.exists() {
            return Ok(PrefsFile::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(toml::from_str(&data)?)
    }

    fn write_file(&self, file: &PrefsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(file)?)?;
        debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

impl PreferencesStore for TomlPreferencesStore {
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self
            .read_file()?
            .flags
            .get(key)
            .copied()
            .unwrap_or(false))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut file = self.read_file()?;
        file.flags.insert(key.to_string(), value);
        self.write_file(&file)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut file = self.read_file()?;
        if file.flags.remove(key).is_some() {
            self.write_file(&file)?;
        }
        Ok(())
    }
}

// ── In-memory implementation ─────────────────────────────────────────

/// Keeps preferences for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryPreferencesStore {
    flags: Mutex<BTreeMap<String, bool>>,
}

impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn flags(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, bool>> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferencesStore for MemoryPreferencesStore {
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self.flags().get(key).copied().unwrap_or(false))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.flags().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.flags().remove(key);
        Ok(())
    }
}
