use crate::cli::commands::{close_session, open_session};
use crate::config::Config;
use crate::core::reconciler::SaveOutcome;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;

    match session.save() {
        SaveOutcome::Saved(record) => {
            success(format!(
                "{} Day sheet for {} saved ({} priorities, {} slots)",
                session.reconciler().status_label(),
                record.date_str(),
                record.priorities.len(),
                record.schedule.len()
            ));
            session
                .store()
                .log("save", "daySheet", &format!("Saved sheet for {}", record.date_str()));
        }
        SaveOutcome::Failed(reason) => {
            warning(format!("Day sheet not saved: {}", reason));
        }
    }

    close_session(session, "save");
    Ok(())
}
