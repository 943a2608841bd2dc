//! Statement-generating subcommands (drop, truncate, insert-template, ...)

pub mod handler;

use clap::Args;
use std::path::PathBuf;

use crate::batch::StatementOptions;
use crate::config::StatementDefaults;

pub use handler::handle_batch_command;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Path to the schema JSON file
    pub schema_file: PathBuf,

    /// Write statements to this SQL file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use CASCADE (DROP/TRUNCATE)
    #[arg(long)]
    pub cascade: bool,

    /// Use RESTART IDENTITY (TRUNCATE)
    #[arg(long)]
    pub restart_identity: bool,

    /// Omit column names from INSERT templates
    #[arg(long)]
    pub no_columns: bool,

    /// PostgreSQL connection string for execution (falls back to DATABASE_URL)
    #[arg(short, long)]
    pub connection: Option<String>,

    /// Execute statements (requires a connection)
    #[arg(long)]
    pub execute: bool,

    /// Only show statements when executing; pass `--dry-run false` to run them
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub dry_run: bool,
}

impl BatchArgs {
    /// Statement options from flags layered over configured defaults
    pub fn statement_options(&self, defaults: &StatementDefaults) -> StatementOptions {
        defaults.apply(self.cascade, self.restart_identity, self.no_columns)
    }
}
