use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::goals::GoalKind;
use crate::ui::messages::success;
use crate::ui::render::{View, render};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { revenue, patients } = cmd {
        let mut session = open_session(cfg)?;

        let updates = [(GoalKind::Revenue, revenue), (GoalKind::Patients, patients)];
        let mut changed = false;

        for (kind, value) in updates {
            if let Some(v) = value {
                let stored = session.set_goal(kind, v)?;
                session
                    .store()
                    .log("goal", kind.key(), &format!("{} set to '{}'", kind.label(), stored));
                success(format!("{} set: {}", kind.label(), stored));
                changed = true;
            }
        }

        if !changed {
            print!("{}", render(session.form(), session.today(), View::Goals));
        }
    }

    Ok(())
}
