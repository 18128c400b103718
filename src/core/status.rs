//! Save-button status text. Purely cosmetic: a save flashes a label for a
//! while, then the idle label comes back.

use chrono::{DateTime, Local, TimeDelta};

pub const IDLE_LABEL: &str = "Save Sheet";
pub const SAVED_LABEL: &str = "Saved!";
pub const FAILED_LABEL: &str = "Not saved";

#[derive(Debug, Clone)]
pub struct StatusIndicator {
    duration: TimeDelta,
    // `None` deadline: the flash outlasts any representable time
    flash: Option<(&'static str, Option<DateTime<Local>>)>,
}

impl StatusIndicator {
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            flash: None,
        }
    }

    pub fn flash(&mut self, label: &'static str, now: DateTime<Local>) {
        self.flash = Some((label, now.checked_add_signed(self.duration)));
    }

    pub fn label(&self, now: DateTime<Local>) -> &'static str {
        match self.flash {
            Some((label, None)) => label,
            Some((label, Some(until))) if now < until => label,
            _ => IDLE_LABEL,
        }
    }
}
