//! Batch statement command handler

use anyhow::{Context, Result};
use colored::*;

use super::BatchArgs;
use crate::batch::{BatchOperation, BatchOperations, ExecutionReport};
use crate::config::Config;

/// Handle drop / truncate / insert-template / disable-fk / enable-fk
pub async fn handle_batch_command(
    operation: BatchOperation,
    args: BatchArgs,
    config: &Config,
) -> Result<()> {
    let connection = config.resolve_connection(args.connection.clone());

    // Validate arguments before touching the schema
    if args.execute && operation == BatchOperation::InsertTemplate {
        anyhow::bail!(
            "INSERT templates contain value placeholders and cannot be executed; use --output to save them"
        );
    }
    if args.execute && connection.is_none() {
        anyhow::bail!("--connection required when using --execute (or set DATABASE_URL)");
    }

    let options = args.statement_options(&config.defaults);
    let ops = BatchOperations::from_schema_file(&args.schema_file, connection)?;

    let statements = ops
        .generate(operation, &options)
        .with_context(|| format!("Failed to generate {} statements", operation.label()))?;

    log::info!(
        "Generated {} {} statements from {}",
        statements.len(),
        operation.label(),
        args.schema_file.display()
    );

    if let Some(output_path) = &args.output {
        let summary = ops.save_sql_script(operation, output_path, &options)?;
        println!(
            "{} {} statements saved to: {}",
            summary.statement_count,
            operation.label(),
            summary.path.display().to_string().bright_green()
        );
    }

    if args.execute {
        let report = ops.execute_statements(&statements, args.dry_run).await?;
        print_execution_report(&report);
    } else if args.output.is_none() {
        println!("Generated {} statements:", operation.label().bold());
        for statement in &statements {
            println!("  {}", statement);
        }
    }

    Ok(())
}

fn print_execution_report(report: &ExecutionReport) {
    if report.dry_run {
        println!(
            "{}",
            "DRY RUN - The following statements would be executed:".yellow()
        );
        println!("{}", "-".repeat(60));
        for (i, statement) in report.statements.iter().enumerate() {
            println!("{:2}. {}", i + 1, statement);
        }
        println!("{}", "-".repeat(60));
    } else {
        println!(
            "{} All {} statements executed successfully",
            "✓".green(),
            report.executed
        );
    }
}
