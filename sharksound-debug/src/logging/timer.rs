use std::time::Instant;

use super::colors::Colorize;
use super::print::print_indented;
use super::stack::{decrement_stack, get_message_count, increment_stack, stack_size};
use super::symbols::ARROW;

/// Logs the start of a named operation and its duration once it is stopped.
/// Messages printed while the timer runs are indented below it. A timer that
/// is dropped without being stopped reports the operation as failed.
pub struct Timer {
    start_time: Instant,
    completed: bool,
    name: String,
}

impl Timer {
    /// Starts a timer with a static name.
    pub fn new(name: &'static str) -> Self {
        Self::new_dynamic(String::from(name))
    }

    /// Starts a timer with a formatted name.
    pub fn new_dynamic(name: String) -> Self {
        if stack_size() == 0 {
            let timestamp = chrono::offset::Local::now().time().format("%H:%M:%S").to_string();
            print_debug_prefix!("[{}] {}", timestamp.red(), name);
        } else {
            print_debug_prefix!("{}", name);
        }

        increment_stack(2);

        Self {
            start_time: Instant::now(),
            completed: false,
            name,
        }
    }

    /// Stops the timer and reports the operation as completed.
    pub fn stop(mut self) {
        self.finish("completed".green().to_string());
        self.completed = true;
    }

    fn finish(&self, outcome: String) {
        let elapsed = format!("{}ms", self.start_time.elapsed().as_millis());

        if stack_size() > 0 && get_message_count() == 0 {
            decrement_stack();
            println!(" ({})", elapsed.cyan());
        } else {
            decrement_stack();
            print_indented(format!("{} {} {} ({})", self.name, ARROW, outcome, elapsed.cyan()), true);
        }

        if stack_size() == 0 {
            println!();
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if !self.completed {
            self.finish("failed".red().to_string());
        }
    }
}
