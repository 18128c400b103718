use crate::core::confirm::Confirm;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::{SheetExport, sheet_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one day's sheet to `file`.
    ///
    /// An existing file is only overwritten with `force` or when `gate`
    /// agrees.
    pub fn export(
        sheet: &SheetExport,
        format: ExportFormat,
        file: &str,
        force: bool,
        gate: &mut dyn Confirm,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force, gate)?;

        info(format!(
            "Exporting {} to {}: {}",
            sheet.date,
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => {
                write_csv(file, sheet)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(file, sheet)?;
                notify_export_success("JSON", path);
            }
            ExportFormat::Pdf => {
                Self::export_pdf(sheet, path)?;
                notify_export_success("PDF", path);
            }
        }

        Ok(())
    }

    fn export_pdf(sheet: &SheetExport, path: &Path) -> AppResult<()> {
        let rows = sheet_to_table(sheet);
        let section = |name: &str| -> Vec<(String, String)> {
            rows.iter()
                .filter(|r| r[0] == name)
                .map(|r| (r[1].clone(), r[2].clone()))
                .collect()
        };

        let mut pdf = PdfManager::new();
        pdf.title(&sheet.title());

        for (name, heading) in [
            ("goal", "Goals"),
            ("priority", "Today's Priorities"),
            ("schedule", "Schedule"),
            ("notes", "Notes"),
        ] {
            let entries = section(name);
            if !entries.is_empty() {
                pdf.section(heading, &entries);
            }
        }

        pdf.save(path)
            .map_err(|e| AppError::Export(format!("PDF export error: {e}")))
    }
}
