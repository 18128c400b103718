use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::schema_version;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with every pending migration
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing daysheet…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let store = SqliteStore::open(&db_path)?;
    let version = schema_version(store.conn())?;

    println!("✅ Database initialized at {} (schema v{})", &db_path, version);

    store.log(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 daysheet initialization completed!");
    Ok(())
}
