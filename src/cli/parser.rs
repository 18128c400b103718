use crate::export::ExportFormat;
use crate::ui::render::View;
use clap::{Parser, Subcommand};

/// Command-line interface definition for daysheet
#[derive(Parser)]
#[command(
    name = "daysheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Front-desk day sheet: priorities, schedule, notes and goals, auto-saved locally",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show today's sheet
    Show {
        #[arg(long, value_enum, default_value = "all", help = "Part of the sheet to show")]
        view: View,
    },

    /// Edit today's priorities
    Priority {
        #[command(subcommand)]
        action: PriorityAction,
    },

    /// Edit today's schedule
    Slot {
        #[command(subcommand)]
        action: SlotAction,
    },

    /// Set today's notes
    Notes {
        /// Note text
        text: String,

        #[arg(long, help = "Append as a new line instead of replacing")]
        append: bool,
    },

    /// Save the sheet explicitly
    Save,

    /// Clear today's sheet and saved data
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set or print the daily goals
    Goal {
        #[arg(long, help = "Revenue goal")]
        revenue: Option<String>,

        #[arg(long, help = "Patient goal")]
        patients: Option<String>,
    },

    /// Export today's sheet
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum PriorityAction {
    /// Append one priority row per text
    Add {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Replace the text of a priority row
    Set {
        /// Row number (1-based)
        number: usize,
        text: String,
    },
    /// Remove a priority row
    Remove {
        /// Row number (1-based)
        number: usize,
    },
}

#[derive(Subcommand)]
pub enum SlotAction {
    /// Append a time slot
    Add {
        /// Activity for the new slot
        #[arg(default_value = "")]
        activity: String,

        #[arg(long, help = "Time label, e.g. \"7:30 AM\" (default: next slot)")]
        label: Option<String>,
    },
    /// Set the activity of an existing time slot
    Set {
        /// Time label of the slot, e.g. "8:00 AM"
        label: String,
        activity: String,
    },
}
