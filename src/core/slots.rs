//! Time-slot label heuristic.
//!
//! New schedule rows are labelled two hours after each other starting at
//! 6 AM: `hour = 6 + 2 * existing_rows`, wrapped once it exceeds 24 and shown
//! as a 12-hour label. It is a placeholder, not a scheduler: after twelve rows
//! the labels start repeating.

use regex::Regex;
use std::sync::LazyLock;

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(1[0-2]|[1-9]):[0-5][0-9] (AM|PM)$").expect("slot label pattern is valid")
});

/// Label for a new row appended after `existing` rows.
pub fn slot_label(existing: usize) -> String {
    format_hour(6 + 2 * existing)
}

/// Format an hour as "H:00 AM|PM". Hours above 24 wrap back into 1..=24;
/// 24 itself stays on the afternoon side and shows as "12:00 PM".
pub fn format_hour(hour: usize) -> String {
    let h = if hour > 24 { (hour - 1) % 24 + 1 } else { hour };
    let display = match h {
        0 => 12,
        13..=24 => h - 12,
        _ => h,
    };
    let ampm = if h >= 12 { "PM" } else { "AM" };
    format!("{display}:00 {ampm}")
}

/// True if `label` looks like a display label ("6:00 AM", "12:30 PM").
pub fn is_valid_label(label: &str) -> bool {
    LABEL_RE.is_match(label)
}
