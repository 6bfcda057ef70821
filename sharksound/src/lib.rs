//! Sound resource management. A [`SoundController`] shares one sound per
//! file name between all requesters and applies the global mute flag and
//! volume to every sound it owns.
#![warn(missing_docs)]

#[cfg(feature = "kira")]
mod backend;
mod controller;
mod error;
mod settings;
mod sound;
pub mod volume;

#[cfg(feature = "kira")]
pub use backend::{KiraSound, KiraSoundController, KiraSoundFactory};
pub use controller::{SoundController, SoundKey};
pub use error::{SettingsError, SoundLoadError};
pub use settings::SoundSettings;
pub use sharksound_util::{FileLoader, FileNotFoundError, FsFileLoader};
pub use sound::{Sound, SoundFactory};
