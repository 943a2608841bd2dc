//! Graph analysis and ordering commands

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::batch::{BatchOperations, TableOrderInfo};
use crate::graph::{GraphSummary, TableDependency, TableDependencyGraph, TraversalOrder};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to the schema JSON file
    pub schema_file: PathBuf,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Path to the schema JSON file
    pub schema_file: PathBuf,
}

/// Machine-readable analysis output
#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    schema_file: String,
    summary: &'a GraphSummary,
    order: &'a TableOrderInfo,
}

/// Print the dependency analysis for a schema
///
/// A cycle is part of the analysis, not a failure: it is printed and the
/// command still succeeds.
pub async fn handle_analyze_command(args: AnalyzeArgs) -> Result<()> {
    let ops = BatchOperations::from_schema_file(&args.schema_file, None)?;
    let summary = ops.graph().summary();
    let order = ops.get_table_order_info();

    if args.json {
        let report = AnalysisReport {
            schema_file: args.schema_file.display().to_string(),
            summary: &summary,
            order: &order,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize analysis")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", "Table Dependency Analysis".bold());
    println!("{}", "=".repeat(50));
    if ops.graph().is_empty() {
        println!("No tables found in {}", args.schema_file.display());
        return Ok(());
    }
    for line in summary_lines(&summary) {
        println!("{}", line);
    }

    println!();
    println!("{}", "Detailed Dependencies:".bold());
    println!("{}", "-".repeat(30));
    for line in dependency_lines(ops.graph()) {
        println!("{}", line);
    }

    println!();
    match &order {
        TableOrderInfo::Ordered {
            insert_order,
            drop_order,
            ..
        } => {
            println!("{}", "Operation Orders:".bold());
            println!("{}", "-".repeat(20));
            println!("{}", order_line(TraversalOrder::Insert, insert_order, " order:"));
            println!("{}", order_line(TraversalOrder::Drop, drop_order, " order:  "));
        }
        TableOrderInfo::Cyclic { cycle_path, .. } => {
            println!(
                "{} {}",
                "Circular dependency detected:".red().bold(),
                format_order(cycle_path)
            );
            println!("Insert and drop orders cannot be computed until the cycle is broken.");
        }
    }

    Ok(())
}

/// Print insert and drop orders; fails on a cycle
pub async fn handle_order_command(args: OrderArgs) -> Result<()> {
    let ops = BatchOperations::from_schema_file(&args.schema_file, None)?;

    match ops.get_table_order_info() {
        TableOrderInfo::Ordered {
            insert_order,
            drop_order,
            ..
        } => {
            println!("{}", "Table Operation Orders:".bold());
            println!("{}", order_line(TraversalOrder::Insert, &insert_order, ":"));
            println!("{}", order_line(TraversalOrder::Drop, &drop_order, ":  "));
            Ok(())
        }
        TableOrderInfo::Cyclic { error, .. } => anyhow::bail!(error),
    }
}

fn format_order(tables: &[String]) -> String {
    tables.join(" -> ")
}

fn order_line(traversal: TraversalOrder, tables: &[String], separator: &str) -> String {
    format!("{}{} {}", traversal.label(), separator, format_order(tables))
}

fn format_list(tables: &[String]) -> String {
    if tables.is_empty() {
        "(none)".to_string()
    } else {
        tables.join(", ")
    }
}

fn summary_lines(summary: &GraphSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total tables: {}", summary.total_tables),
        format!("Total relationships: {}", summary.total_relationships),
        format!("Total foreign keys: {}", summary.total_foreign_keys),
        format!("Root tables (no dependencies): {}", format_list(&summary.root_tables)),
        format!("Leaf tables (no dependents): {}", format_list(&summary.leaf_tables)),
        format!(
            "Self-referencing tables: {}",
            format_list(&summary.self_referencing_tables)
        ),
    ];

    lines.push(match &summary.cycle_path {
        Some(path) => format!("Has cycles: yes ({})", format_order(path)),
        None => "Has cycles: no".to_string(),
    });

    lines
}

/// One FK edge as `column -> target.column [ON DELETE ..] (constraint)`
fn foreign_key_line(edge: &TableDependency) -> String {
    let mut line = format!(
        "{} -> {}.{}",
        edge.source_column.as_deref().unwrap_or("?"),
        edge.target_table,
        edge.target_column.as_deref().unwrap_or("?")
    );
    if let Some(action) = &edge.on_delete {
        line.push_str(&format!(" ON DELETE {}", action));
    }
    if let Some(action) = &edge.on_update {
        line.push_str(&format!(" ON UPDATE {}", action));
    }
    if let Some(name) = &edge.constraint_name {
        line.push_str(&format!(" ({})", name));
    }
    if edge.is_self_reference() {
        line.push_str(" [self]");
    }
    line
}

fn dependency_lines(graph: &TableDependencyGraph) -> Vec<String> {
    let info = graph.get_dependency_info();
    let mut foreign_keys: BTreeMap<&str, Vec<&TableDependency>> = BTreeMap::new();
    for edge in graph.edges() {
        foreign_keys
            .entry(edge.source_table.as_str())
            .or_default()
            .push(edge);
    }

    let mut lines = Vec::new();

    for (table, details) in &info {
        let dependencies: Vec<String> = details
            .dependencies
            .iter()
            .filter(|d| *d != table)
            .cloned()
            .collect();
        let dependents: Vec<String> = details
            .dependents
            .iter()
            .filter(|d| *d != table)
            .cloned()
            .collect();

        let mut header = table.clone();
        if graph.is_self_referencing(table) {
            header.push_str(" (self-referencing)");
        }

        lines.push(format!("{}:", header));
        lines.push(format!("  depends on: {}", format_list(&dependencies)));
        lines.push(format!("  referenced by: {}", format_list(&dependents)));
        for edge in foreign_keys.get(table.as_str()).into_iter().flatten() {
            lines.push(format!("  fk: {}", foreign_key_line(edge)));
        }
    }

    lines
}
