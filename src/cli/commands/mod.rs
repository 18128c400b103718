pub mod clear;
pub mod config;
pub mod edit;
pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod save;
pub mod show;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::session::DaySheetSession;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

pub(crate) type CliSession = DaySheetSession<SqliteStore, SystemClock>;

/// Open today's sheet against the configured database.
pub(crate) fn open_session(cfg: &Config) -> AppResult<CliSession> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(DaySheetSession::open(store, SystemClock, cfg))
}

/// End the session, writing any pending auto-save, and record it.
pub(crate) fn close_session(mut session: CliSession, target: &str) {
    if session.finish() {
        let day = session.today();
        session
            .store()
            .log("autosave", target, &format!("Auto-saved sheet for {}", day));
    }
}
