use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

const OP_WIDTH: usize = 48;

/// Colour for each operation written by the day sheet.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "autosave" => Colour::Cyan,
        "clear" => Colour::Red,
        "goal" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct Entry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

fn load_entries(store: &SqliteStore) -> AppResult<Vec<Entry>> {
    let mut stmt = store.conn().prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%F %T").to_string())
            .unwrap_or(raw_date);

        Ok(Entry {
            id: row.get(0)?,
            date,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// "op (target)" with only the operation coloured, cut to `OP_WIDTH` columns.
fn op_cell(e: &Entry) -> String {
    let plain = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    let visible = if plain.chars().count() > OP_WIDTH {
        let mut s: String = plain.chars().take(OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&e.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let store = SqliteStore::open(&cfg.database)?;
    let entries = load_entries(&store)?;

    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in &entries {
        let op = op_cell(e);
        let padding = " ".repeat(OP_WIDTH.saturating_sub(visible_width(&op)));
        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            op,
            padding,
            strip_ansi(&e.message),
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
