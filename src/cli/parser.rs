use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlogger
#[derive(Parser)]
#[command(
    name = "shiftlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track support shifts, clock-in/out reminders and per-category case productivity",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Manage the database (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import and show shift schedules
    Shifts {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Clock-in / clock-out reminders
    Remind {
        #[arg(long = "on", conflicts_with = "off", help = "Enable reminders")]
        on: bool,

        #[arg(long = "off", help = "Disable reminders and cancel pending ones")]
        off: bool,

        #[arg(
            long = "watch",
            conflicts_with = "off",
            help = "Stay in the foreground and fire reminders when due"
        )]
        watch: bool,
    },

    /// Maintain the case log
    Cases {
        #[command(subcommand)]
        action: CaseAction,
    },

    /// Productivity report for a shift
    Report {
        /// Row of `shifts list` to report on (default: current or most recent shift)
        #[arg(long = "shift", value_name = "N")]
        shift: Option<usize>,

        /// Minutes to deduct for meetings, outages, etc.
        #[arg(long = "deduct", value_name = "MINUTES", allow_hyphen_values = true)]
        deduct: Option<i64>,

        /// Override a category multiplier, e.g. `--multiplier new=1.2`
        #[arg(long = "multiplier", value_name = "CATEGORY=VALUE")]
        multipliers: Vec<String>,
    },

    /// Remove stored shifts, case log and reminder state
    Reset {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ShiftAction {
    /// Parse a calendar export and store its shifts
    Import {
        /// Calendar file, or `-` to read from stdin
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show the current and upcoming shifts
    List {
        /// Number of rows to show (default from config)
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum CaseAction {
    /// Log a completed case
    Add {
        case_id: String,

        /// Category: new, update, support, or the queue name
        category: String,
    },

    /// List logged cases
    List,

    /// Change the category of a logged case
    Set {
        /// Position shown by `cases list`
        index: usize,

        category: String,
    },

    /// Delete a logged case
    Del {
        /// Position shown by `cases list`
        index: usize,
    },

    /// Remove every logged case
    Clear {
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print case ids grouped by category
    Copy,

    /// Export the case log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
