use super::stack::{get_message_count, increment_message_count, message_offset, stack_size};
use super::symbols::{ARROW, NEWLINE};

/// Prints a message at the indentation of the innermost running [`Timer`].
///
/// [`Timer`]: crate::logging::Timer
#[macro_export]
macro_rules! print_debug {
    ($format:expr) => ($crate::logging::print_indented(String::from($format), true));
    ($format:expr, $($arguments:tt)*) => ($crate::logging::print_indented(format!($format, $($arguments)*), true));
}

macro_rules! print_debug_prefix {
    ($format:expr) => ($crate::logging::print_indented(String::from($format), false));
    ($format:expr, $($arguments:tt)*) => ($crate::logging::print_indented(format!($format, $($arguments)*), false));
}

/// Prints a message, indented by the sizes of all running timers. Use
/// [`print_debug!`](crate::print_debug) instead of calling this directly.
pub fn print_indented(message: String, newline: bool) {
    let offset = message_offset();

    if stack_size() > 0 {
        if get_message_count() == 0 {
            println!(" {ARROW} started");
        }

        increment_message_count();
    }

    for _ in 0..offset {
        print!(" ");
    }

    if offset != 0 {
        print!("{NEWLINE} ");
    }

    print!("{message}");

    if newline {
        println!();
    }
}
