mod batch;
mod cli;
mod config;
mod graph;
mod schema;

use anyhow::Result;
use clap::Parser;
use colored::*;

use batch::BatchOperation;
use cli::commands::{analyze, batch as batch_cmd};
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze(args) => analyze::handle_analyze_command(args).await,
        Commands::Order(args) => analyze::handle_order_command(args).await,
        Commands::Drop(args) => {
            batch_cmd::handle_batch_command(BatchOperation::Drop, args, &config).await
        }
        Commands::Truncate(args) => {
            batch_cmd::handle_batch_command(BatchOperation::Truncate, args, &config).await
        }
        Commands::InsertTemplate(args) => {
            batch_cmd::handle_batch_command(BatchOperation::InsertTemplate, args, &config).await
        }
        Commands::DisableFk(args) => {
            batch_cmd::handle_batch_command(BatchOperation::DisableFk, args, &config).await
        }
        Commands::EnableFk(args) => {
            batch_cmd::handle_batch_command(BatchOperation::EnableFk, args, &config).await
        }
    }
}
