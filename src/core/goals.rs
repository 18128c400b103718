//! Revenue / patient goals: one plain string per key, no date envelope, loaded
//! on every session whatever day they were written.

use crate::errors::AppResult;
use crate::models::form::GoalFields;
use crate::models::goals::{GoalKind, Goals};
use crate::storage::KeyValueStore;
use crate::ui::messages::warning;

/// Read both goals. Unreadable keys count as unset.
pub fn load_goals<S: KeyValueStore + ?Sized>(store: &S) -> Goals {
    let mut goals = Goals::default();
    for kind in GoalKind::all() {
        match store.get(kind.key()) {
            Ok(value) => goals.set(kind, value),
            Err(e) => warning(format!("Could not read {}: {}", kind.key(), e)),
        }
    }
    goals
}

/// Persist one goal (trimmed) under its key.
pub fn save_goal<S: KeyValueStore + ?Sized>(
    store: &mut S,
    kind: GoalKind,
    value: &str,
) -> AppResult<String> {
    let value = value.trim().to_string();
    store.set(kind.key(), &value)?;
    Ok(value)
}

/// Copy stored goals into the goal inputs that exist on the form.
/// Inputs that are not rendered are skipped.
pub fn apply_goals(goals: &Goals, fields: &mut GoalFields) {
    for kind in GoalKind::all() {
        if let (Some(value), Some(field)) = (goals.get(kind), fields.field_mut(kind)) {
            *field = value.to_string();
        }
    }
}
