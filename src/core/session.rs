//! One page session of the day sheet: the form, its reconciler and the goals,
//! built once and driven by input events.
//!
//! Every edit goes through `input`, which schedules an auto-save of the new
//! form state. `finish` ends the session and writes whatever is still
//! pending.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::confirm::Confirm;
use crate::core::goals::{apply_goals, load_goals, save_goal};
use crate::core::reconciler::{PersistenceReconciler, SaveOutcome};
use crate::core::slots::is_valid_label;
use crate::errors::{AppError, AppResult};
use crate::models::form::FormState;
use crate::models::goals::GoalKind;
use crate::storage::KeyValueStore;
use chrono::NaiveDate;

pub struct DaySheetSession<S, C> {
    reconciler: PersistenceReconciler<S, C>,
    form: FormState,
    restored: bool,
}

impl<S: KeyValueStore, C: Clock> DaySheetSession<S, C> {
    /// Render the baseline form, fill in the goals, then merge today's
    /// saved record (if any).
    pub fn open(store: S, clock: C, cfg: &Config) -> Self {
        let reconciler = PersistenceReconciler::from_config(store, clock, cfg);
        let mut form = FormState::baseline(cfg.baseline_priorities, cfg.baseline_slots);

        let goals = load_goals(reconciler.store());
        apply_goals(&goals, &mut form.goals);

        let restored = reconciler.load_into(&mut form);

        Self {
            reconciler,
            form,
            restored,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// True when today's saved data was merged in on open.
    pub fn restored(&self) -> bool {
        self.restored
    }

    pub fn store(&self) -> &S {
        self.reconciler.store()
    }

    pub fn reconciler(&self) -> &PersistenceReconciler<S, C> {
        &self.reconciler
    }

    pub fn today(&self) -> NaiveDate {
        self.reconciler.clock().today()
    }

    fn input<R>(&mut self, edit: impl FnOnce(&mut FormState) -> R) -> R {
        let out = edit(&mut self.form);
        self.reconciler.auto_save(&self.form);
        self.reconciler.tick();
        out
    }

    fn priority_index(&self, number: usize) -> AppResult<usize> {
        if number == 0 || number > self.form.priorities.len() {
            return Err(AppError::InvalidRow {
                kind: "priority",
                index: number,
            });
        }
        Ok(number - 1)
    }

    /// Append a priority row; returns its 1-based number.
    pub fn add_priority(&mut self, text: &str) -> usize {
        self.input(|f| f.add_priority(text)) + 1
    }

    pub fn set_priority(&mut self, number: usize, text: &str) -> AppResult<()> {
        let idx = self.priority_index(number)?;
        self.input(|f| f.set_priority(idx, text));
        Ok(())
    }

    pub fn remove_priority(&mut self, number: usize) -> AppResult<String> {
        let idx = self.priority_index(number)?;
        let removed = self.input(|f| f.remove_priority(idx));
        removed.ok_or(AppError::InvalidRow {
            kind: "priority",
            index: number,
        })
    }

    /// Append a schedule row, with the next heuristic label unless one is
    /// given. Returns the label used.
    pub fn add_slot(&mut self, label: Option<&str>, activity: &str) -> AppResult<String> {
        if let Some(l) = label
            && !is_valid_label(l)
        {
            return Err(AppError::InvalidTimeLabel(l.to_string()));
        }
        let idx = self.input(|f| f.add_slot(label.map(str::to_string), activity));
        Ok(self.form.schedule[idx].label.clone())
    }

    /// Set the activity of the slot(s) labelled `label`.
    pub fn set_slot(&mut self, label: &str, activity: &str) -> AppResult<usize> {
        if !self.form.schedule.iter().any(|s| s.label == label) {
            return Err(AppError::SlotNotFound(label.to_string()));
        }
        Ok(self.input(|f| f.set_slot_activity(label, activity)))
    }

    pub fn set_notes(&mut self, text: &str) {
        self.input(|f| f.notes = text.to_string());
    }

    pub fn append_notes(&mut self, text: &str) {
        self.input(|f| {
            if !f.notes.trim().is_empty() {
                f.notes.push('\n');
            }
            f.notes.push_str(text);
        });
    }

    /// Store a goal and show it on the form when the field is rendered.
    pub fn set_goal(&mut self, kind: GoalKind, value: &str) -> AppResult<String> {
        let stored = save_goal(self.reconciler.store_mut(), kind, value)?;
        if let Some(field) = self.form.goals.field_mut(kind) {
            *field = stored.clone();
        }
        Ok(stored)
    }

    pub fn save(&mut self) -> SaveOutcome {
        self.reconciler.save(&self.form)
    }

    pub fn clear(&mut self, gate: &mut dyn Confirm) -> bool {
        self.reconciler.clear(&mut self.form, gate)
    }

    /// End of the session: write a pending auto-save, if any.
    pub fn finish(&mut self) -> bool {
        self.reconciler.flush()
    }
}
