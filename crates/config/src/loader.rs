use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    schema::PursueConfig,
};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["pursue.toml", "pursue.yaml", "pursue.yml", "pursue.json"];

static CONFIG_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);
static DATA_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

fn read_override(slot: &Mutex<Option<PathBuf>>) -> Option<PathBuf> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

fn write_override(slot: &Mutex<Option<PathBuf>>, value: Option<PathBuf>) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = value;
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "pursue")
}

/// Use `dir` instead of `~/.config/pursue/` for the rest of the process.
pub fn set_config_dir(dir: PathBuf) {
    write_override(&CONFIG_DIR_OVERRIDE, Some(dir));
}

pub fn clear_config_dir() {
    write_override(&CONFIG_DIR_OVERRIDE, None);
}

/// Use `dir` instead of the platform data dir for the rest of the process.
pub fn set_data_dir(dir: PathBuf) {
    write_override(&DATA_DIR_OVERRIDE, Some(dir));
}

pub fn clear_data_dir() {
    write_override(&DATA_DIR_OVERRIDE, None);
}

/// Returns the user-global config directory (`~/.config/pursue/`).
pub fn config_dir() -> Option<PathBuf> {
    read_override(&CONFIG_DIR_OVERRIDE)
        .or_else(|| project_dirs().map(|d| d.config_dir().to_path_buf()))
}

/// Returns the data directory, falling back to `.` when the platform has none.
pub fn data_dir() -> PathBuf {
    read_override(&DATA_DIR_OVERRIDE)
        .or_else(|| project_dirs().map(|d| d.data_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> Result<PursueConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./pursue.{toml,yaml,yml,json}` (project-local)
/// 2. `<config_dir>/pursue.{toml,yaml,yml,json}` (user-global)
///
/// Returns `PursueConfig::default()` if no config file is found or the one
/// found cannot be parsed.
pub fn discover_and_load() -> PursueConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    PursueConfig::default()
}

fn find_config_file() -> Option<PathBuf> {
    if let Some(p) = CONFIG_FILENAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
    {
        return Some(p);
    }
    find_in_dir(&config_dir()?)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn parse_config(raw: &str, path: &Path) -> Result<PursueConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => Err(Error::UnsupportedFormat {
            ext: ext.to_string(),
        }),
    }
}
