//! Schema migrations, tracked with `PRAGMA user_version`.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use rusqlite::Connection;

struct Migration {
    version: i32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_kv_store",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
];

/// Current schema version stored in the database header.
pub fn schema_version(conn: &Connection) -> AppResult<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

/// Apply every migration newer than the stored schema version, in order.
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    apply_migrations(conn, MIGRATIONS)
}

/// Each migration runs in its own transaction together with the version
/// bump; a failing one is rolled back and stops the run.
fn apply_migrations(conn: &Connection, migrations: &[Migration]) -> AppResult<usize> {
    let current = schema_version(conn)?;
    let mut applied = 0;

    for m in migrations.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.pragma_update(None, "user_version", m.version)?;
        tx.commit()?;
        ttlog(
            conn,
            "migration_applied",
            m.name,
            &format!("Schema upgraded to version {}", m.version),
        )?;
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert_eq!(schema_version(&conn).unwrap(), 2);

        let logged: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(logged, 2);
    }

    #[test]
    fn failing_migration_rolls_back() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let broken = [Migration {
            version: 3,
            name: "broken",
            sql: "CREATE TABLE extra (id INTEGER); INSERT INTO missing VALUES (1);",
        }];
        assert!(apply_migrations(&conn, &broken).is_err());

        assert!(conn.is_autocommit());
        assert_eq!(schema_version(&conn).unwrap(), 2);
        let extra: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'extra'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(extra, 0);
    }
}
