//! Config schema types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::data_dir;

/// File name of the preferences store inside the data dir.
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Where freshly created identities get their seed words from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSourceKind {
    /// The fixed twelve-word phrase shipped with the app.
    #[default]
    Placeholder,
    /// Twelve words drawn from the embedded word list with the thread RNG.
    Random,
}

/// `[onboarding]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub seed_source: SeedSourceKind,
    /// Overrides `<data_dir>/preferences.toml`.
    pub preferences_file: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PursueConfig {
    pub onboarding: OnboardingConfig,
}

impl PursueConfig {
    /// Path of the preferences file the onboarding flow writes its flag to.
    pub fn preferences_path(&self) -> PathBuf {
        self.onboarding
            .preferences_file
            .clone()
            .unwrap_or_else(|| data_dir().join(PREFERENCES_FILENAME))
    }
}
