//! In-memory model of the day-sheet form.
//!
//! The form is the single source of truth for what the user currently sees;
//! terminal output and exports are projections of it. Rows may be empty.

use crate::core::slots::slot_label;
use crate::models::goals::{GoalKind, Goals};
use crate::models::record::{DaySheetRecord, ScheduleEntry};
use chrono::{DateTime, Local, NaiveDate};

/// A schedule row: read-only time label plus a free-text activity input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub activity: String,
}

impl TimeSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            activity: String::new(),
        }
    }
}

/// Goal inputs present on the form. `None` means the input is not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalFields {
    pub revenue: Option<String>,
    pub patients: Option<String>,
}

impl GoalFields {
    pub fn rendered() -> Self {
        Self {
            revenue: Some(String::new()),
            patients: Some(String::new()),
        }
    }

    pub fn field_mut(&mut self, kind: GoalKind) -> Option<&mut String> {
        match kind {
            GoalKind::Revenue => self.revenue.as_mut(),
            GoalKind::Patients => self.patients.as_mut(),
        }
    }

    pub fn as_goals(&self) -> Goals {
        let keep = |v: &Option<String>| v.as_ref().filter(|s| !s.is_empty()).cloned();
        Goals {
            revenue: keep(&self.revenue),
            patients: keep(&self.patients),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub priorities: Vec<String>,
    pub schedule: Vec<TimeSlot>,
    pub notes: String,
    pub goals: GoalFields,
}

impl FormState {
    /// Fresh form with `priorities` blank priority rows and `slots` schedule
    /// rows labelled by the slot heuristic.
    pub fn baseline(priorities: usize, slots: usize) -> Self {
        Self {
            priorities: vec![String::new(); priorities],
            schedule: (0..slots).map(|i| TimeSlot::new(slot_label(i))).collect(),
            notes: String::new(),
            goals: GoalFields::rendered(),
        }
    }

    pub fn add_priority(&mut self, text: impl Into<String>) -> usize {
        self.priorities.push(text.into());
        self.priorities.len() - 1
    }

    /// Set priority row `idx` (0-based). Returns false if the row does not exist.
    pub fn set_priority(&mut self, idx: usize, text: impl Into<String>) -> bool {
        match self.priorities.get_mut(idx) {
            Some(row) => {
                *row = text.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_priority(&mut self, idx: usize) -> Option<String> {
        (idx < self.priorities.len()).then(|| self.priorities.remove(idx))
    }

    /// Append a schedule row. Without an explicit label the next heuristic
    /// label is used, based on how many rows already exist.
    pub fn add_slot(&mut self, label: Option<String>, activity: impl Into<String>) -> usize {
        let label = label.unwrap_or_else(|| slot_label(self.schedule.len()));
        self.schedule.push(TimeSlot {
            label,
            activity: activity.into(),
        });
        self.schedule.len() - 1
    }

    /// Set the activity of every row labelled exactly `label`.
    /// Returns how many rows matched.
    pub fn set_slot_activity(&mut self, label: &str, activity: &str) -> usize {
        let mut matched = 0;
        for slot in self.schedule.iter_mut().filter(|s| s.label == label) {
            slot.activity = activity.to_string();
            matched += 1;
        }
        matched
    }

    /// Empty every input value, keeping the rows.
    pub fn reset_values(&mut self) {
        self.priorities.iter_mut().for_each(String::clear);
        self.schedule.iter_mut().for_each(|s| s.activity.clear());
        self.notes.clear();
    }

    /// Drop rows beyond the given baseline counts.
    pub fn truncate_rows(&mut self, priorities: usize, slots: usize) {
        self.priorities.truncate(priorities);
        self.schedule.truncate(slots);
    }

    /// Collect the persisted view of the form: trimmed, empty rows dropped.
    pub fn collect(&self, date: NaiveDate, saved_at: DateTime<Local>) -> DaySheetRecord {
        let priorities = self
            .priorities
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let schedule = self
            .schedule
            .iter()
            .filter_map(|slot| {
                let activity = slot.activity.trim();
                (!activity.is_empty()).then(|| ScheduleEntry {
                    time: slot.label.clone(),
                    activity: activity.to_string(),
                })
            })
            .collect();

        DaySheetRecord {
            date,
            priorities,
            schedule,
            notes: self.notes.trim().to_string(),
            saved_at,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.priorities.iter().all(|p| p.trim().is_empty())
            && self.schedule.iter().all(|s| s.activity.trim().is_empty())
            && self.notes.trim().is_empty()
    }
}
