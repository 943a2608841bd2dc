//! Command line interface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::analyze::{AnalyzeArgs, OrderArgs};
use commands::batch::BatchArgs;

/// Order batch table operations by foreign key dependencies
#[derive(Debug, Parser)]
#[command(name = "tableorder", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze dependencies and show recommended operation orders
    Analyze(AnalyzeArgs),
    /// Show only the INSERT and DROP table orders
    Order(OrderArgs),
    /// Generate DROP TABLE statements (dependents first)
    Drop(BatchArgs),
    /// Generate TRUNCATE statements (dependents first)
    Truncate(BatchArgs),
    /// Generate INSERT statement templates (dependencies first)
    InsertTemplate(BatchArgs),
    /// Generate statements disabling all triggers (FK checks) per table
    DisableFk(BatchArgs),
    /// Generate statements re-enabling triggers in dependency order
    EnableFk(BatchArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_drop_with_flags() {
        let cli = Cli::try_parse_from([
            "tableorder", "drop", "schema.json", "--cascade", "-o", "drop.sql",
        ])
        .unwrap();

        match cli.command {
            Commands::Drop(args) => {
                assert!(args.cascade);
                assert_eq!(args.output.unwrap().to_str(), Some("drop.sql"));
                assert!(args.dry_run);
                assert!(!args.execute);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dry_run_can_be_disabled() {
        let cli = Cli::try_parse_from([
            "tableorder", "truncate", "schema.json", "--execute", "--dry-run", "false",
        ])
        .unwrap();

        match cli.command {
            Commands::Truncate(args) => {
                assert!(args.execute);
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bare_dry_run_flag() {
        let cli = Cli::try_parse_from(["tableorder", "drop", "schema.json", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Drop(args) => assert!(args.dry_run),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_insert_template_subcommand_name() {
        let cli = Cli::try_parse_from(["tableorder", "insert-template", "s.json", "--no-columns"])
            .unwrap();
        assert!(matches!(cli.command, Commands::InsertTemplate(ref args) if args.no_columns));
    }

    #[test]
    fn test_schema_file_is_required() {
        assert!(Cli::try_parse_from(["tableorder", "order"]).is_err());
    }
}
