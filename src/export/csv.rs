use crate::errors::AppResult;
use crate::export::model::{SheetExport, get_headers, sheet_to_table};
use csv::Writer;

/// Write one CSV row per filled item of the sheet.
pub fn write_csv(path: &str, sheet: &SheetExport) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in sheet_to_table(sheet) {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
