use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::confirm::StdinConfirm;
use crate::errors::AppResult;
use crate::export::{ExportLogic, SheetExport};
use crate::utils::path::expand_tilde;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;
        let form = session.form();

        let record = form.collect(session.today(), Local::now());
        let sheet = SheetExport::new(record, form.goals.as_goals());

        let path = expand_tilde(file).to_string_lossy().to_string();
        ExportLogic::export(&sheet, *format, &path, *force, &mut StdinConfirm)?;

        session.store().log(
            "export",
            format.as_str(),
            &format!("Exported sheet for {} to {}", sheet.date, path),
        );
    }
    Ok(())
}
