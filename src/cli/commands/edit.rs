use crate::cli::commands::{close_session, open_session};
use crate::cli::parser::{Commands, PriorityAction, SlotAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle `priority`, `slot` and `notes`: each change is an input event on
/// today's sheet and schedules an auto-save.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;

    let target = match cmd {
        Commands::Priority { action } => {
            match action {
                PriorityAction::Add { texts } => {
                    for text in texts {
                        let n = session.add_priority(text);
                        success(format!("Priority #{} added: {}", n, text));
                    }
                }
                PriorityAction::Set { number, text } => {
                    session.set_priority(*number, text)?;
                    success(format!("Priority #{} set: {}", number, text));
                }
                PriorityAction::Remove { number } => {
                    let removed = session.remove_priority(*number)?;
                    success(format!("Priority #{} removed: {}", number, removed));
                }
            }
            "priorities"
        }
        Commands::Slot { action } => {
            match action {
                SlotAction::Add { activity, label } => {
                    let used = session.add_slot(label.as_deref(), activity)?;
                    success(format!("Time slot {} added", used));
                    if activity.trim().is_empty() {
                        warning(format!(
                            "Empty time slots are not saved: {} is gone after this command. Add it with an activity to keep it.",
                            used
                        ));
                    }
                }
                SlotAction::Set { label, activity } => {
                    let n = session.set_slot(label, activity)?;
                    if n > 1 {
                        success(format!("{} slots at {} set: {}", n, label, activity));
                    } else {
                        success(format!("{} set: {}", label, activity));
                    }
                }
            }
            "schedule"
        }
        Commands::Notes { text, append } => {
            if *append {
                session.append_notes(text);
            } else {
                session.set_notes(text);
            }
            success("Notes updated");
            "notes"
        }
        _ => return Ok(()),
    };

    close_session(session, target);
    Ok(())
}
