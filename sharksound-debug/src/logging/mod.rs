//! Indented, colored debug output.

mod colors;
mod stack;
mod symbols;
#[macro_use]
mod print;
mod timer;

pub use self::colors::{Colorize, Colorized};
pub use self::print::print_indented;
pub use self::timer::Timer;
pub use crate::print_debug;
