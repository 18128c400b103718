#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Local;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated HOME per test so no user config is picked up.
fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daysheet_home", name));
    fs::create_dir_all(&path).ok();
    path
}

pub fn ds(name: &str) -> Command {
    let home = test_home(name);
    let mut cmd = cargo_bin_cmd!("daysheet");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daysheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema in test mode (no config file written).
pub fn init_db(name: &str, db_path: &str) {
    ds(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Write a raw value straight into the key-value table.
pub fn put_raw(db_path: &str, key: &str, value: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    daysheet::db::initialize::init_db(&conn).expect("init db");
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        rusqlite::params![key, value, Local::now().to_rfc3339()],
    )
    .expect("insert raw value");
}

pub fn get_raw(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |r| {
        r.get(0)
    })
    .ok()
}

pub fn count_log(db_path: &str, operation: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation],
        |r| r.get(0),
    )
    .expect("count log rows")
}
