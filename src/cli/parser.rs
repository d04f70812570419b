use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rHousekeeper
#[derive(Parser)]
#[command(
    name = "rhousekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track the housekeeping status of hotel rooms and common areas, with a once-per-day reset",
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

/// Which backing table a command works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    Rooms,
    Areas,
    Staff,
}

/// Fields shared by the `room` and `area` commands.
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Row number in the table (row 1 is the header)
    #[arg(long)]
    pub id: i64,

    /// New status: dirty, in-progress, clean (default: dirty)
    #[arg(long)]
    pub status: Option<String>,

    /// Assign to a staff member ("" clears the assignment)
    #[arg(long = "assign", value_name = "NAME")]
    pub assign: Option<String>,

    /// Stamp time in with the current time (clears time out)
    #[arg(long = "time-in")]
    pub time_in: bool,

    /// Stamp time out with the current time
    #[arg(long = "time-out")]
    pub time_out: bool,

    /// Clear assignment and both stamps
    #[arg(long)]
    pub reset: bool,

    /// Print the refreshed board as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, the three tables and the configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields and rename legacy ones")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

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

        #[arg(long = "limit", help = "Only show the last N rows")]
        limit: Option<usize>,
    },

    /// Show rooms, areas, staff and counts (runs the daily reset if due)
    Show {
        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update one room
    Room(UpdateArgs),

    /// Update one common area
    Area(UpdateArgs),

    /// Reset every room and area to Dirty (for the daily scheduler)
    Reset {
        /// Only reset if it has not happened yet today
        #[arg(long = "if-due")]
        if_due: bool,
    },

    /// Repair misplaced or structured values in the area time columns
    Repair,

    /// Replace a table with the content of a CSV file (first line = header)
    Import {
        #[arg(long, value_enum)]
        table: TableKind,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the board
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
