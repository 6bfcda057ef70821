use std::fmt::{Debug, Display, Formatter};

const GREEN: &str = "\x1B[32m";
const RED: &str = "\x1B[31m";
const CYAN: &str = "\x1B[36m";
const YELLOW: &str = "\x1B[33m";
const MAGENTA: &str = "\x1B[35m";
const RESET: &str = "\x1B[0m";

/// A borrowed value printed between an ANSI color code and a reset.
pub struct Colorized<'a, T> {
    wrapped: &'a T,
    color: &'static str,
}

impl<T: Display> Display for Colorized<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{RESET}", self.color, self.wrapped)
    }
}

impl<T: Debug> Debug for Colorized<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:?}{RESET}", self.color, self.wrapped)
    }
}

/// Colors for log messages. Implemented for every type.
pub trait Colorize: Sized {
    /// Wraps the value in the given ANSI color code.
    fn paint(&self, color: &'static str) -> Colorized<'_, Self> {
        Colorized { wrapped: self, color }
    }

    /// Completed operations.
    fn green(&self) -> Colorized<'_, Self> {
        self.paint(GREEN)
    }

    /// Errors and failed operations.
    fn red(&self) -> Colorized<'_, Self> {
        self.paint(RED)
    }

    /// Durations and counts.
    fn cyan(&self) -> Colorized<'_, Self> {
        self.paint(CYAN)
    }

    /// Toggled state.
    fn yellow(&self) -> Colorized<'_, Self> {
        self.paint(YELLOW)
    }

    /// File names and paths.
    fn magenta(&self) -> Colorized<'_, Self> {
        self.paint(MAGENTA)
    }
}

impl<T> Colorize for T {}

#[cfg(test)]
mod tests {
    use super::Colorize;

    #[test]
    fn test_wraps_display_and_debug() {
        assert_eq!(format!("{}", "a.wav".magenta()), "\x1B[35ma.wav\x1B[0m");
        assert_eq!(format!("{:?}", "a.wav".green()), "\x1B[32m\"a.wav\"\x1B[0m");
        assert_eq!(format!("{}", 3.cyan()), "\x1B[36m3\x1B[0m");
    }
}
