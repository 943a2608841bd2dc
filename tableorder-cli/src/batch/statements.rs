//! SQL statement generation in dependency order
//!
//! Every generator is pure with respect to the graph: orderings are read,
//! never modified. Ordering-dependent generators refuse to guess when the
//! graph has a cycle between distinct tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::BatchOperationError;
use super::operation::{BatchOperation, StatementOptions};
use crate::graph::{DependencyInfo, TableDependencyGraph, TraversalOrder};
use crate::schema::{SchemaDescription, load_schema_file};

/// Placeholder used for each value in INSERT templates
pub const VALUE_PLACEHOLDER: &str = "%s";

/// Ordering overview, or the cycle that prevented it
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TableOrderInfo {
    Ordered {
        insert_order: Vec<String>,
        drop_order: Vec<String>,
        dependency_info: BTreeMap<String, DependencyInfo>,
        total_tables: usize,
        has_cycles: bool,
    },
    Cyclic {
        error: String,
        cycle_path: Vec<String>,
        has_cycles: bool,
    },
}

/// Batch statement generator bound to one schema description
#[derive(Debug, Clone)]
pub struct BatchOperations {
    schema_path: PathBuf,
    schema: SchemaDescription,
    graph: TableDependencyGraph,
    connection_string: Option<String>,
}

impl BatchOperations {
    /// Create a generator from an already loaded schema description
    pub fn new(
        schema_path: impl Into<PathBuf>,
        schema: SchemaDescription,
        connection_string: Option<String>,
    ) -> Self {
        let graph = TableDependencyGraph::from_schema(&schema);
        Self {
            schema_path: schema_path.into(),
            schema,
            graph,
            connection_string,
        }
    }

    /// Load the schema file and build the dependency graph
    pub fn from_schema_file(
        path: &Path,
        connection_string: Option<String>,
    ) -> Result<Self, BatchOperationError> {
        let schema = load_schema_file(path)?;
        Ok(Self::new(path, schema, connection_string))
    }

    pub fn graph(&self) -> &TableDependencyGraph {
        &self.graph
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.connection_string.as_deref()
    }

    fn ordered_tables(
        &self,
        operation: BatchOperation,
        traversal: TraversalOrder,
    ) -> Result<Vec<String>, BatchOperationError> {
        self.graph
            .order(traversal)
            .map_err(|source| BatchOperationError::Cycle { operation, source })
    }

    /// DROP TABLE statements, dependents first
    pub fn generate_drop_statements(&self, cascade: bool) -> Result<Vec<String>, BatchOperationError> {
        let cascade_clause = if cascade { " CASCADE" } else { "" };

        Ok(self
            .ordered_tables(BatchOperation::Drop, TraversalOrder::Drop)?
            .into_iter()
            .map(|table| format!("DROP TABLE IF EXISTS {}{};", table, cascade_clause))
            .collect())
    }

    /// TRUNCATE statements, same order as DROP
    pub fn generate_truncate_statements(
        &self,
        cascade: bool,
        restart_identity: bool,
    ) -> Result<Vec<String>, BatchOperationError> {
        let mut options = Vec::new();
        if restart_identity {
            options.push("RESTART IDENTITY");
        }
        if cascade {
            options.push("CASCADE");
        }
        let options_clause = if options.is_empty() {
            String::new()
        } else {
            format!(" {}", options.join(" "))
        };

        Ok(self
            .ordered_tables(BatchOperation::Truncate, TraversalOrder::Drop)?
            .into_iter()
            .map(|table| format!("TRUNCATE TABLE {}{};", table, options_clause))
            .collect())
    }

    /// Parameterised INSERT templates, dependencies first
    ///
    /// Tables without column metadata get a generic `VALUES (...)` template
    /// instead of failing the batch.
    pub fn generate_insert_template_statements(
        &self,
        include_columns: bool,
    ) -> Result<Vec<String>, BatchOperationError> {
        let insert_order = self.ordered_tables(BatchOperation::InsertTemplate, TraversalOrder::Insert)?;

        let statements = insert_order
            .into_iter()
            .map(|table| {
                let columns = self
                    .schema
                    .table(&table)
                    .and_then(|t| t.column_names())
                    .filter(|cols| !cols.is_empty());

                match columns {
                    Some(columns) => {
                        let placeholders = vec![VALUE_PLACEHOLDER; columns.len()].join(", ");
                        if include_columns {
                            format!(
                                "INSERT INTO {} ({}) VALUES ({});",
                                table,
                                columns.join(", "),
                                placeholders
                            )
                        } else {
                            format!("INSERT INTO {} VALUES ({});", table, placeholders)
                        }
                    }
                    None => {
                        log::debug!("No column metadata for {}, using generic template", table);
                        format!("INSERT INTO {} VALUES (...);", table)
                    }
                }
            })
            .collect();

        Ok(statements)
    }

    /// Disable all triggers (and with them FK checks) on every table
    ///
    /// Disabling is not order sensitive; tables are emitted by name.
    pub fn generate_disable_constraints_statements(&self) -> Vec<String> {
        self.graph
            .get_tables()
            .into_iter()
            .map(|table| format!("ALTER TABLE {} DISABLE TRIGGER ALL;", table))
            .collect()
    }

    /// Re-enable triggers in insert order
    pub fn generate_enable_constraints_statements(&self) -> Result<Vec<String>, BatchOperationError> {
        Ok(self
            .ordered_tables(BatchOperation::EnableFk, TraversalOrder::Insert)?
            .into_iter()
            .map(|table| format!("ALTER TABLE {} ENABLE TRIGGER ALL;", table))
            .collect())
    }

    /// Generate statements for any batch operation
    pub fn generate(
        &self,
        operation: BatchOperation,
        options: &StatementOptions,
    ) -> Result<Vec<String>, BatchOperationError> {
        match operation {
            BatchOperation::Drop => self.generate_drop_statements(options.cascade),
            BatchOperation::Truncate => {
                self.generate_truncate_statements(options.cascade, options.restart_identity)
            }
            BatchOperation::InsertTemplate => {
                self.generate_insert_template_statements(options.include_columns)
            }
            BatchOperation::DisableFk => Ok(self.generate_disable_constraints_statements()),
            BatchOperation::EnableFk => self.generate_enable_constraints_statements(),
        }
    }

    /// Both orderings plus per-table counts
    ///
    /// A cycle is reported inside the result, so exploratory callers can
    /// inspect it without handling an error.
    pub fn get_table_order_info(&self) -> TableOrderInfo {
        let orders = self
            .graph
            .get_insert_order()
            .and_then(|insert| self.graph.get_drop_order().map(|reversed| (insert, reversed)));

        match orders {
            Ok((insert_order, drop_order)) => TableOrderInfo::Ordered {
                insert_order,
                drop_order,
                dependency_info: self.graph.get_dependency_info(),
                total_tables: self.graph.len(),
                has_cycles: false,
            },
            Err(err) => TableOrderInfo::Cyclic {
                error: err.to_string(),
                cycle_path: err.path,
                has_cycles: true,
            },
        }
    }
}
