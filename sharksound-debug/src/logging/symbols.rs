pub const ARROW: &str = "->";
pub const NEWLINE: &str = "\\";
