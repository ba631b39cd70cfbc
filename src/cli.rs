use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command line interface for the application
#[derive(Parser)]
pub struct Cli {
    /// Path to the YAML configuration file; defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the day's tasks and assignments for every uncovered active room
    Generate {
        /// Target date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Advance an assignment's status
    Transition {
        /// Assignment id
        #[arg(long)]
        assignment: String,
        /// Target status: not_started, in_progress or completed
        #[arg(long)]
        to: String,
    },
    /// Print the per-worker workload summary for a date range as JSON
    Rotation {
        /// First date of the range, YYYY-MM-DD
        #[arg(long)]
        from: NaiveDate,
        /// Last date of the range, inclusive, YYYY-MM-DD
        #[arg(long)]
        to: NaiveDate,
    },
    /// Check whether a worker can be scheduled on a date
    Availability {
        /// Worker id
        #[arg(long)]
        worker: String,
        /// Date to check, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Mark or clear a recurring day off for a worker
    DayOff {
        /// Worker id
        #[arg(long)]
        worker: String,
        /// Weekday index, 0=Sunday..6=Saturday
        #[arg(long)]
        weekday: i32,
        /// Remove the rule instead of setting it
        #[arg(long)]
        clear: bool,
    },
    /// Re-grade the cleaning level required by a task
    Regrade {
        /// Task id
        #[arg(long)]
        task: String,
        /// Rank code: L1, L2 or L3
        #[arg(long)]
        level: String,
    },
}
