use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
#[cfg(feature = "debug")]
use sharksound_debug::logging::{print_debug, Colorize};

use crate::error::SettingsError;

/// Persisted mute flag and volume of a
/// [`SoundController`](crate::SoundController).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// Whether sounds may be heard at all.
    pub sound_on: bool,
    /// The volume as chosen by the user, before the controller divides it.
    pub global_volume: f32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            sound_on: true,
            global_volume: 1.0,
        }
    }
}

impl SoundSettings {
    /// Loads the settings, falling back to the defaults if the file is
    /// missing or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|_error| {
            #[cfg(feature = "debug")]
            print_debug!(
                "[{}] failed to load sound settings from {}: {}",
                "error".red(),
                path.as_ref().display().magenta(),
                _error
            );

            Default::default()
        })
    }

    /// Loads the settings from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        #[cfg(feature = "debug")]
        print_debug!("loading sound settings from {}", path.as_ref().display().magenta());

        let data = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&data)?)
    }

    /// Writes the settings as pretty RON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        #[cfg(feature = "debug")]
        print_debug!("saving sound settings to {}", path.as_ref().display().magenta());

        let data = ron::ser::to_string_pretty(self, PrettyConfig::new())?;
        std::fs::write(path, data)?;

        Ok(())
    }
}
