//! Terminal logging for debug builds of the sound crates.

#[macro_use]
pub mod logging;
