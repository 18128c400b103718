//! Day-sheet persistence and reconciliation.
//!
//! Two slots hold a JSON `DaySheetRecord`: the manual slot written by an
//! explicit save, and the auto-save slot written after input settles. Loading
//! prefers the auto-save slot and ignores records from another day.
//!
//! Nothing in here propagates storage errors: failed reads mean "nothing to
//! load", failed writes are reported with a warning and otherwise dropped.

use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::confirm::Confirm;
use crate::core::debounce::PendingWrite;
use crate::core::status::{FAILED_LABEL, SAVED_LABEL, StatusIndicator};
use crate::errors::AppResult;
use crate::models::form::{FormState, TimeSlot};
use crate::models::record::DaySheetRecord;
use crate::storage::KeyValueStore;
use crate::ui::messages::warning;
use chrono::TimeDelta;

/// Manual save slot.
pub const MANUAL_SLOT: &str = "daySheet";
/// Auto-save slot, read first on load.
pub const AUTO_SLOT: &str = "daySheet_auto";

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all data? This cannot be undone.";

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(DaySheetRecord),
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Milliseconds as a `TimeDelta`, saturating at `TimeDelta::MAX`.
fn millis(ms: u64) -> TimeDelta {
    i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX)
}

pub struct PersistenceReconciler<S, C> {
    store: S,
    clock: C,
    autosave: PendingWrite<FormState>,
    status: StatusIndicator,
    /// Row counts kept by `clear`; `None` keeps every row.
    clear_baseline: Option<(usize, usize)>,
}

impl<S: KeyValueStore, C: Clock> PersistenceReconciler<S, C> {
    pub fn new(store: S, clock: C, autosave_delay: TimeDelta, status_flash: TimeDelta) -> Self {
        Self {
            store,
            clock,
            autosave: PendingWrite::new(autosave_delay),
            status: StatusIndicator::new(status_flash),
            clear_baseline: None,
        }
    }

    pub fn from_config(store: S, clock: C, cfg: &Config) -> Self {
        let delay = millis(cfg.autosave_delay_ms);
        let flash = millis(cfg.status_flash_ms);
        let mut r = Self::new(store, clock, delay, flash);
        if cfg.trim_rows_on_clear {
            r.clear_baseline = Some((cfg.baseline_priorities, cfg.baseline_slots));
        }
        r
    }

    /// Keep only `priorities` / `slots` rows when clearing.
    pub fn with_clear_baseline(mut self, priorities: usize, slots: usize) -> Self {
        self.clear_baseline = Some((priorities, slots));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Text the save button currently shows.
    pub fn status_label(&self) -> &'static str {
        self.status.label(self.clock.now())
    }

    // ---------------------------
    // Writing
    // ---------------------------

    fn write_slot(&mut self, key: &str, form: &FormState) -> AppResult<DaySheetRecord> {
        let record = form.collect(self.clock.today(), self.clock.now());
        let json = record.to_json()?;
        self.store.set(key, &json)?;
        Ok(record)
    }

    /// Explicit save to the manual slot. A pending auto-save is left alone.
    pub fn save(&mut self, form: &FormState) -> SaveOutcome {
        let now = self.clock.now();
        match self.write_slot(MANUAL_SLOT, form) {
            Ok(record) => {
                self.status.flash(SAVED_LABEL, now);
                SaveOutcome::Saved(record)
            }
            Err(e) => {
                self.status.flash(FAILED_LABEL, now);
                warning(format!("Could not save the day sheet: {}", e));
                SaveOutcome::Failed(e.to_string())
            }
        }
    }

    /// Debounced save to the auto-save slot: replaces any pending snapshot
    /// with this one and restarts the quiet window.
    pub fn auto_save(&mut self, form: &FormState) {
        self.autosave.schedule(self.clock.now(), form.clone());
    }

    pub fn has_pending_auto_save(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Write the pending snapshot if its quiet window has elapsed.
    /// Returns true if the auto-save slot was written.
    pub fn tick(&mut self) -> bool {
        match self.autosave.poll(self.clock.now()) {
            Some(snapshot) => self.write_auto(&snapshot),
            None => false,
        }
    }

    /// Write the pending snapshot now, whatever its due time.
    pub fn flush(&mut self) -> bool {
        match self.autosave.flush() {
            Some(snapshot) => self.write_auto(&snapshot),
            None => false,
        }
    }

    fn write_auto(&mut self, snapshot: &FormState) -> bool {
        match self.write_slot(AUTO_SLOT, snapshot) {
            Ok(_) => true,
            Err(e) => {
                warning(format!("Auto-save skipped: {}", e));
                false
            }
        }
    }

    // ---------------------------
    // Reading
    // ---------------------------

    fn read_slot(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(v) => v,
            Err(e) => {
                warning(format!("Could not read saved data ({}): {}", key, e));
                None
            }
        }
    }

    /// Today's saved record, if any. Auto-save slot first, then manual.
    /// Unparseable or stale records count as nothing to load and stay in
    /// storage untouched.
    pub fn load(&self) -> Option<DaySheetRecord> {
        let raw = self
            .read_slot(AUTO_SLOT)
            .or_else(|| self.read_slot(MANUAL_SLOT))?;

        let record = match DaySheetRecord::from_json(&raw) {
            Ok(r) => r,
            Err(e) => {
                warning(format!("Could not load saved data: {}", e));
                return None;
            }
        };

        record.is_for(self.clock.today()).then_some(record)
    }

    /// Load today's record and merge it into `form`.
    /// Returns false when there was nothing to load.
    pub fn load_into(&self, form: &mut FormState) -> bool {
        match self.load() {
            Some(record) => {
                reconcile(&record, form);
                true
            }
            None => false,
        }
    }

    // ---------------------------
    // Clearing
    // ---------------------------

    /// Empty the form and both slots once `gate` agrees.
    /// Returns false (and changes nothing) when the gate declines.
    pub fn clear(&mut self, form: &mut FormState, gate: &mut dyn Confirm) -> bool {
        if !gate.confirm(CLEAR_PROMPT) {
            return false;
        }

        form.reset_values();
        if let Some((priorities, slots)) = self.clear_baseline {
            form.truncate_rows(priorities, slots);
        }

        // a snapshot taken before the clear must not resurrect the data
        self.autosave.cancel();

        for key in [MANUAL_SLOT, AUTO_SLOT] {
            if let Err(e) = self.store.remove(key) {
                warning(format!("Could not remove saved data ({}): {}", key, e));
            }
        }

        true
    }
}

/// Merge `record` into the rows currently on the form.
///
/// Priorities are positional: entry *i* fills row *i*, extra entries append
/// rows. Schedule entries are keyed by their time label: every row with an
/// equal label takes the activity, and an unknown label appends a new row.
pub fn reconcile(record: &DaySheetRecord, form: &mut FormState) {
    for (idx, priority) in record.priorities.iter().enumerate() {
        if !form.set_priority(idx, priority.as_str()) {
            form.add_priority(priority.as_str());
        }
    }

    for entry in &record.schedule {
        if form.set_slot_activity(&entry.time, &entry.activity) == 0 {
            form.schedule.push(TimeSlot {
                label: entry.time.clone(),
                activity: entry.activity.clone(),
            });
        }
    }

    form.notes = record.notes.clone();
}
