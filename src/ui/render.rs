//! Terminal projection of the form, with a view switcher.

use crate::models::form::FormState;
use crate::models::goals::GoalKind;
use crate::utils::colors::{CYAN, or_placeholder, paint};
use crate::utils::date::long_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use clap::ValueEnum;

const TEXT_WIDTH: usize = 60;

/// Which part of the sheet to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    #[default]
    All,
    Priorities,
    Schedule,
    Notes,
    Goals,
}

impl View {
    fn shows(&self, section: View) -> bool {
        *self == View::All || *self == section
    }
}

fn priorities_section(form: &FormState) -> String {
    let mut t = Table::new(vec![Column::new("#"), Column::wrapped("Priority", TEXT_WIDTH)]);
    for (i, p) in form.priorities.iter().enumerate() {
        t.add_row(vec![(i + 1).to_string(), or_placeholder(p, "New priority")]);
    }
    t.render()
}

fn schedule_section(form: &FormState) -> String {
    let mut t = Table::new(vec![
        Column::new("Time"),
        Column::wrapped("Activity", TEXT_WIDTH),
    ]);
    for slot in &form.schedule {
        t.add_row(vec![
            slot.label.clone(),
            or_placeholder(&slot.activity, "Add activity"),
        ]);
    }
    t.render()
}

fn notes_section(form: &FormState) -> String {
    if form.notes.trim().is_empty() {
        return format!("{}\n", or_placeholder("", "No notes"));
    }
    let mut out = String::new();
    for line in form.notes.lines() {
        for wrapped in textwrap::wrap(line, TEXT_WIDTH) {
            out.push_str(&wrapped);
            out.push('\n');
        }
    }
    out
}

fn goals_section(form: &FormState) -> String {
    let mut out = String::new();
    for kind in GoalKind::all() {
        let field = match kind {
            GoalKind::Revenue => &form.goals.revenue,
            GoalKind::Patients => &form.goals.patients,
        };
        // goal inputs that are not rendered are not shown
        if let Some(value) = field {
            out.push_str(&format!("{:<14} {}\n", kind.label(), or_placeholder(value, "not set")));
        }
    }
    out
}

/// Render `form` for `day`, limited to `view`.
pub fn render(form: &FormState, day: NaiveDate, view: View) -> String {
    let mut out = format!("{}\n\n", paint(CYAN, &long_date(day)));

    let sections: [(View, &str, fn(&FormState) -> String); 4] = [
        (View::Goals, "Goals", goals_section),
        (View::Priorities, "Today's Priorities", priorities_section),
        (View::Schedule, "Schedule", schedule_section),
        (View::Notes, "Notes", notes_section),
    ];

    for (section, title, draw) in sections {
        if view.shows(section) {
            out.push_str(&format!("{}\n", paint(CYAN, title)));
            out.push_str(&draw(form));
            out.push('\n');
        }
    }

    out
}
