//! Utility crate that contains the containers and file loading shared by the
//! sound crates.
#![warn(missing_docs)]

pub mod container;
mod loader;

pub use loader::{FileLoader, FileNotFoundError, FsFileLoader};
