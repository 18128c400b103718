//! Yes/no gate in front of destructive actions.

use crate::ui::messages::warning;
use std::io::{self, Write};

pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Ask on the terminal. Anything but "y"/"yes" declines.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        warning(prompt);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        if io::stdin().read_line(&mut s).is_ok() {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
        } else {
            false
        }
    }
}

/// Fixed answer (`--yes`, tests).
#[derive(Debug, Clone, Copy)]
pub struct Preset(pub bool);

impl Confirm for Preset {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
