use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rAttendance.
/// Every command prints a single JSON payload on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log meeting attendance and compute totals, leaderboards and streaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretty-print the JSON payload
    #[arg(global = true, long = "pretty")]
    pub pretty: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize the ledger and configuration
    Init,

    /// Log attendance for a participant
    #[command(aliases = ["logMe", "logme"])]
    Log {
        /// Participant name
        name: String,

        /// Log as if it were this moment (YYYY-MM-DDTHH:MM[:SS]) instead of now
        #[arg(long = "at", value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Show the total attendance of a participant
    Attendance {
        /// Participant name
        name: String,
    },

    /// Show total attendance for every participant
    Stats,

    /// Show the top participants by hours, visits and consecutive days
    Top,

    /// Check whether a participant appears in the ledger
    Check {
        /// Participant name
        name: String,
    },

    /// Erase all attendance data (irreversible). Asks on stdin unless --yes is given
    Clear {
        #[arg(
            long = "yes",
            short = 'y',
            help = "Do not ask for confirmation; required for non-interactive callers"
        )]
        yes: bool,
    },

    /// Print the locator of the ledger
    #[command(alias = "getlink")]
    Link,

    /// Export the ledger as CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the ledger database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the effective configuration
    Config,

    /// Print the internal audit trail
    Audit,
}
