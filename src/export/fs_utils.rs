// src/export/fs_utils.rs

use crate::core::confirm::Confirm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force` → ask `gate`
pub(crate) fn ensure_writable(path: &Path, force: bool, gate: &mut dyn Confirm) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    if gate.confirm(&prompt) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
