use crate::errors::AppResult;
use crate::export::model::SheetExport;

/// Write the sheet as pretty-printed JSON.
pub fn write_json(path: &str, sheet: &SheetExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, json)?;
    Ok(())
}
