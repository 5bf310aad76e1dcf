//! Configuration loading, directory resolution, and the preferences store.
//!
//! Config files: `pursue.toml`, `pursue.yaml`, or `pursue.json`
//! Searched in `./` then `~/.config/pursue/`.

pub mod error;
pub mod loader;
pub mod prefs;
pub mod schema;

pub use {
    error::{Context, Error, Result},
    loader::{
        clear_config_dir, clear_data_dir, config_dir, data_dir, discover_and_load, load_config,
        set_config_dir, set_data_dir,
    },
    prefs::{KEY_HAS_IDENTITY, MemoryPreferencesStore, PreferencesStore, TomlPreferencesStore},
    schema::{OnboardingConfig, PursueConfig, SeedSourceKind},
};
