//! User preferences.
//!
//! Preferences are layered: the defaults embedded in this crate are loaded
//! first, and then the user's preferences file (if any) overrides them field
//! by field.

#[macro_use]
extern crate lazy_static;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use cubeswap_core::{ColorPalette, TurnFace};
use eyre::Result;
use serde::{Deserialize, Serialize};

mod paths;

pub use paths::{move_to_backup_file, prefs_file};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Map from key character to the face it turns.
pub type Keybinds = BTreeMap<char, TurnFace>;

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Display color for each label.
    pub colors: ColorPalette,
    /// Scramble settings.
    pub scramble: ScramblePreferences,
    /// Solver playback settings.
    pub solver: SolverPreferences,
    /// Keys that turn each face. Lookup ignores case.
    pub keybinds: Keybinds,
}
impl Default for Preferences {
    fn default() -> Self {
        Self {
            colors: ColorPalette::default(),
            scramble: ScramblePreferences::default(),
            solver: SolverPreferences::default(),
            keybinds: TurnFace::ALL
                .into_iter()
                .map(|face| (face.letter().to_ascii_lowercase(), face))
                .collect(),
        }
    }
}
impl Preferences {
    /// Loads preferences from `path`, or from [`prefs_file()`] if `path` is
    /// `None`. A missing file is not an error. If loading fails, the file is
    /// backed up and the default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        let mut config = config::Config::builder().add_source(default_config_source.clone());

        let user_file = match path {
            Some(p) => Some(p),
            None => prefs_file()
                .inspect_err(|e| log::warn!("error locating user preferences: {e}"))
                .ok(),
        };
        if let Some(p) = user_file {
            log::info!("loading preferences from {}", p.display());
            let user_config_source = config::File::from(p)
                .format(PREFS_FILE_FORMAT)
                .required(false);
            config = config.add_source(user_config_source);
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("error loading preferences: {e}");

                if let Some(p) = user_file {
                    move_to_backup_file(p);
                }

                config::Config::builder()
                    .add_source(default_config_source)
                    .build()
                    .and_then(|c| c.try_deserialize())
                    .unwrap_or_default()
            })
    }

    /// Saves preferences to `path`, or to [`prefs_file()`] if `path` is
    /// `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p,
            None => prefs_file()?,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the face bound to `key`, ignoring case.
    pub fn keybind(&self, key: char) -> Option<TurnFace> {
        let lower = key.to_ascii_lowercase();
        let upper = key.to_ascii_uppercase();
        self.keybinds
            .get(&lower)
            .or_else(|| self.keybinds.get(&upper))
            .copied()
    }
}

/// Settings for random scrambles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of twists in a scramble.
    pub length: usize,
    /// Pause after each scramble twist, in milliseconds.
    pub twist_delay_ms: u64,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: cubeswap_core::SCRAMBLE_LENGTH,
            twist_delay_ms: 100,
        }
    }
}
impl ScramblePreferences {
    /// Returns the pause after each scramble twist.
    pub fn twist_delay(&self) -> Duration {
        Duration::from_millis(self.twist_delay_ms)
    }
}

/// Settings for solver playback.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverPreferences {
    /// Pause after each solver twist, in milliseconds.
    pub twist_delay_ms: u64,
}
impl Default for SolverPreferences {
    fn default() -> Self {
        Self {
            twist_delay_ms: 500,
        }
    }
}
impl SolverPreferences {
    /// Returns the pause after each solver twist.
    pub fn twist_delay(&self) -> Duration {
        Duration::from_millis(self.twist_delay_ms)
    }
}
