use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Error that is thrown when a file loader can't provide the requested file.
#[derive(Debug)]
pub struct FileNotFoundError {
    path: String,
    cause: Option<std::io::Error>,
}

impl FileNotFoundError {
    /// Create a new [`FileNotFoundError`] with a given path.
    pub fn new(path: String) -> Self {
        Self { path, cause: None }
    }

    /// Create a new [`FileNotFoundError`] that keeps the I/O error which
    /// prevented reading the file.
    pub fn with_cause(path: String, cause: std::io::Error) -> Self {
        Self { path, cause: Some(cause) }
    }

    /// The path that could not be loaded.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Display for FileNotFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "can't find file '{}': {}", self.path, cause),
            None => write!(f, "can't find file '{}'", self.path),
        }
    }
}

impl std::error::Error for FileNotFoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Trait for general file loading.
pub trait FileLoader: 'static {
    /// Returns the file content of the requested file.
    fn get(&self, path: &str) -> Result<Vec<u8>, FileNotFoundError>;
}

/// Loads files relative to a base directory on the local file system.
///
/// Asset names may use `\` as separator. It is translated to the platform
/// separator on hosts that don't understand it.
pub struct FsFileLoader {
    base_directory: PathBuf,
}

impl FsFileLoader {
    /// Creates a loader that resolves every path inside `base_directory`.
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match cfg!(target_os = "windows") {
            true => self.base_directory.join(path),
            false => self.base_directory.join(path.replace('\\', "/")),
        }
    }
}

impl FileLoader for FsFileLoader {
    fn get(&self, path: &str) -> Result<Vec<u8>, FileNotFoundError> {
        std::fs::read(self.resolve(path)).map_err(|error| FileNotFoundError::with_cause(path.to_string(), error))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::error::Error;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use crate::{FileLoader, FileNotFoundError, FsFileLoader};

    fn scratch_directory(name: &str) -> PathBuf {
        let directory = std::env::temp_dir().join(format!("sharksound-util-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(directory.join("wav")).unwrap();
        directory
    }

    #[test]
    fn test_load_relative_to_base() {
        let directory = scratch_directory("relative");
        std::fs::write(directory.join("wav").join("click.wav"), [1, 2, 3]).unwrap();

        let loader = FsFileLoader::new(&directory);

        assert_eq!(loader.get("wav/click.wav").unwrap(), vec![1, 2, 3]);
        #[cfg(not(target_os = "windows"))]
        assert_eq!(loader.get("wav\\click.wav").unwrap(), vec![1, 2, 3]);

        std::fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let directory = scratch_directory("missing");
        let loader = FsFileLoader::new(&directory);

        let error = loader.get("wav/missing.wav").unwrap_err();
        assert_eq!(error.path(), "wav/missing.wav");
        assert!(error.to_string().starts_with("can't find file 'wav/missing.wav': "));

        let cause = error.source().unwrap().downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::NotFound);

        std::fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn test_unreadable_path_keeps_cause() {
        let directory = scratch_directory("directory");
        let loader = FsFileLoader::new(&directory);

        let error = loader.get("wav").unwrap_err();
        let cause = error.source().unwrap().downcast_ref::<std::io::Error>().unwrap();

        assert_ne!(cause.kind(), ErrorKind::NotFound);
        assert!(error.to_string().ends_with(&cause.to_string()));

        std::fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn test_error_without_cause() {
        let error = FileNotFoundError::new("wav/click.wav".to_string());

        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "can't find file 'wav/click.wav'");
    }
}
