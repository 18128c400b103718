use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { view } = cmd {
        let session = open_session(cfg)?;

        print!("{}", render(session.form(), session.today(), *view));

        if !session.restored() {
            info("Nothing saved for today yet.");
        }
    }

    Ok(())
}
