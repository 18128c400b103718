use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::confirm::{Confirm, Preset, StdinConfirm};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut gate: Box<dyn Confirm> = if *yes {
            Box::new(Preset(true))
        } else {
            Box::new(StdinConfirm)
        };

        let mut session = open_session(cfg)?;

        if !session.clear(gate.as_mut()) {
            info("Operation cancelled.");
            return Ok(());
        }

        let day = session.today();
        session
            .store()
            .log("clear", "daySheet", &format!("Cleared sheet for {}", day));
        success("Day sheet cleared.");
        close_session(session, "clear");
    }

    Ok(())
}
