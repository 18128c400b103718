//! SQLite-backed key-value store (`kv_store` table).

use super::KeyValueStore;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Append a line to the internal log. Never fails the caller.
    pub fn log(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    /// All keys currently stored, sorted.
    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT key FROM kv_store ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .with_conn(|conn| conn.execute("DELETE FROM kv_store WHERE key = ?1", [key]))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_db(name: &str) -> String {
        let path = env::temp_dir().join(format!("{}_daysheet_store.sqlite", name));
        std::fs::remove_file(&path).ok();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn upsert_and_remove() {
        let mut store = SqliteStore::open(&temp_db("upsert_and_remove")).unwrap();

        store.set("daySheet", "{}").unwrap();
        store.set("daySheet", "{\"v\":2}").unwrap();
        assert_eq!(store.get("daySheet").unwrap().as_deref(), Some("{\"v\":2}"));
        assert_eq!(store.keys().unwrap(), ["daySheet"]);

        store.remove("daySheet").unwrap();
        assert_eq!(store.get("daySheet").unwrap(), None);
        // removing a missing key is fine
        store.remove("daySheet").unwrap();
    }

    #[test]
    fn reopen_keeps_values() {
        let path = temp_db("reopen_keeps_values");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("revenueGoal", "15000").unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("revenueGoal").unwrap().as_deref(), Some("15000"));
    }
}
