use std::error::Error;
use std::fmt::{Display, Formatter};

use sharksound_util::FileNotFoundError;

/// Errors that can occur when reading or writing the sound settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    Io(std::io::Error),
    /// The settings file is not valid RON.
    Parse(ron::error::SpannedError),
    /// The settings could not be serialized.
    Serialize(ron::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(error) => write!(f, "can't access settings file: {error}"),
            SettingsError::Parse(error) => write!(f, "can't parse settings file: {error}"),
            SettingsError::Serialize(error) => write!(f, "can't serialize settings: {error}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettingsError::Io(error) => Some(error),
            SettingsError::Parse(error) => Some(error),
            SettingsError::Serialize(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(error: ron::error::SpannedError) -> Self {
        Self::Parse(error)
    }
}

impl From<ron::Error> for SettingsError {
    fn from(error: ron::Error) -> Self {
        Self::Serialize(error)
    }
}

/// Errors that can occur when a sound is created from a file.
#[derive(Debug)]
pub enum SoundLoadError {
    /// The sound file could not be found.
    FileNotFound(FileNotFoundError),
    /// The audio backend failed.
    Backend(String),
    /// The sound file could not be decoded.
    #[cfg(feature = "kira")]
    Decode(kira::sound::FromFileError),
}

impl Display for SoundLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SoundLoadError::FileNotFound(error) => write!(f, "can't load sound: {error}"),
            SoundLoadError::Backend(message) => write!(f, "audio backend error: {message}"),
            #[cfg(feature = "kira")]
            SoundLoadError::Decode(error) => write!(f, "can't decode sound: {error:?}"),
        }
    }
}

impl Error for SoundLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SoundLoadError::FileNotFound(error) => Some(error),
            SoundLoadError::Backend(_) => None,
            #[cfg(feature = "kira")]
            SoundLoadError::Decode(_) => None,
        }
    }
}

impl From<FileNotFoundError> for SoundLoadError {
    fn from(error: FileNotFoundError) -> Self {
        Self::FileNotFound(error)
    }
}

#[cfg(feature = "kira")]
impl From<kira::sound::FromFileError> for SoundLoadError {
    fn from(error: kira::sound::FromFileError) -> Self {
        Self::Decode(error)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use sharksound_util::FileNotFoundError;

    use super::{SettingsError, SoundLoadError};

    #[test]
    fn test_sound_load_error_message() {
        let error = SoundLoadError::from(FileNotFoundError::new("wav\\missing.wav".to_string()));

        assert_eq!(error.to_string(), "can't load sound: can't find file 'wav\\missing.wav'");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_settings_error_source() {
        let error = SettingsError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("can't access settings file"));
    }
}
