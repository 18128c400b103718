//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns (`unicode-width`), ignoring ANSI
//! colour sequences. Cells wider than their column's `max_width` wrap onto
//! continuation lines.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern is valid"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Display width of `s` without its colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width: Some(max_width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell_lines(&self, col: usize, cell: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if visible_width(cell) > w => textwrap::wrap(&strip_ansi(cell), w)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![cell.to_string()],
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cells = self
                    .rows
                    .iter()
                    .flat_map(|r| self.cell_lines(i, &r[i]))
                    .map(|l| visible_width(&l));
                cells.fold(visible_width(&col.header), usize::max)
            })
            .collect()
    }

    fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(c, w)| {
                let pad = w.saturating_sub(visible_width(c));
                format!("{}{}", c, " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        Self::push_line(&mut out, &headers, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        Self::push_line(&mut out, &rule, &widths);

        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| self.cell_lines(i, cell))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let cells: Vec<String> = wrapped
                    .iter()
                    .map(|lines| lines.get(line).cloned().unwrap_or_default())
                    .collect();
                Self::push_line(&mut out, &cells, &widths);
            }
        }

        out
    }
}
