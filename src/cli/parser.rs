use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rsheetlog
/// Keep one spreadsheet table with an append-only change log
#[derive(Parser)]
#[command(
    name = "rsheetlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple data-entry CLI: edit one table and keep an append-only change log using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (relative names live in the config directory)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// User recorded as the actor of changes (required when users are configured)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the current table
    Show,

    /// Add a row
    Add {
        /// Cell values as COLUMN=VALUE (repeatable)
        #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
        set: Vec<String>,
    },

    /// Edit cells of an existing row
    Edit {
        /// Row number as shown by `show` (1-based)
        row: usize,

        /// Cell values as COLUMN=VALUE (repeatable)
        #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
        set: Vec<String>,
    },

    /// Delete a row
    Del {
        /// Row number as shown by `show` (1-based)
        row: usize,
    },

    /// Remove every row, keeping the headers
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the change log
    Log {
        #[arg(long = "print", help = "Print rows from the change log")]
        print: bool,
    },

    /// Export the table (or the change log)
    Export {
        #[arg(long, value_enum, help = "Export format: csv, json or xlsx")]
        format: ExportFormat,

        #[arg(long, help = "Absolute path of the output file")]
        file: String,

        #[arg(long = "log", help = "Export the change log instead of the table")]
        log: bool,

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Copy the database file
    Backup {
        #[arg(long = "file", help = "Destination file")]
        file: String,

        #[arg(long = "compress", help = "Zip the backup")]
        compress: bool,

        #[arg(long, help = "Overwrite the destination without asking")]
        force: bool,
    },

    /// Move a damaged database aside and start from an empty table
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
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

    /// Print a password hash line for the `users` map of the configuration
    Passwd {
        /// User name
        user: String,
    },
}

impl Commands {
    /// Commands reachable without passing the auth gate.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Commands::Init | Commands::Config { .. } | Commands::Passwd { .. }
        )
    }
}
