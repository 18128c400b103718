/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// Value as-is, or `placeholder` in grey when the value is blank.
pub fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
