//! SQL script rendering and persistence

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tempfile::NamedTempFile;

use super::error::BatchOperationError;
use super::operation::{BatchOperation, StatementOptions};
use super::statements::BatchOperations;

/// Result of writing a script to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSummary {
    pub path: PathBuf,
    pub operation: BatchOperation,
    pub statement_count: usize,
}

impl BatchOperations {
    /// Render the statements for an operation as a commented SQL script
    pub fn render_sql_script(
        &self,
        operation: BatchOperation,
        options: &StatementOptions,
    ) -> Result<(String, usize), BatchOperationError> {
        let statements = self.generate(operation, options)?;
        let script = render_script(operation, self.schema_path(), Local::now(), &statements);
        Ok((script, statements.len()))
    }

    /// Write the statements for an operation to `destination`
    ///
    /// The file is written in full or not at all: content goes to a temporary
    /// file next to the destination and is renamed into place.
    pub fn save_sql_script(
        &self,
        operation: BatchOperation,
        destination: &Path,
        options: &StatementOptions,
    ) -> Result<ScriptSummary, BatchOperationError> {
        let (script, statement_count) = self.render_sql_script(operation, options)?;

        write_atomically(destination, &script)?;

        log::info!(
            "Saved {} {} statements to {}",
            statement_count,
            operation.label(),
            destination.display()
        );

        Ok(ScriptSummary {
            path: destination.to_path_buf(),
            operation,
            statement_count,
        })
    }
}

/// Build the script text: header block, then one numbered statement per entry
pub fn render_script(
    operation: BatchOperation,
    schema_path: &Path,
    generated_at: DateTime<Local>,
    statements: &[String],
) -> String {
    let mut script = String::new();

    script.push_str(&format!("-- Generated {} statements\n", operation.label()));
    script.push_str(&format!(
        "-- Based on schema analysis from: {}\n",
        schema_path.display()
    ));
    script.push_str(&format!(
        "-- Generated on: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    script.push_str(&format!("-- Order: {}\n", operation.rationale()));
    script.push_str(&format!("-- Total statements: {}\n\n", statements.len()));

    for (i, statement) in statements.iter().enumerate() {
        script.push_str(&format!("-- Statement {}\n{}\n\n", i + 1, statement));
    }

    script
}

fn write_atomically(destination: &Path, content: &str) -> Result<(), BatchOperationError> {
    let io_err = |source: std::io::Error| BatchOperationError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(destination).map_err(|err| io_err(err.error))?;

    Ok(())
}
