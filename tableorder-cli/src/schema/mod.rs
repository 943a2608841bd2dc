//! Schema description loading
//!
//! Reads the JSON schema export from disk. Input problems are reported here,
//! before any dependency graph is built.

pub mod models;

pub use models::SchemaDescription;

use std::fs;
use std::path::{Path, PathBuf};

/// Error loading a schema description
#[derive(Debug)]
pub enum SchemaError {
    /// Schema file does not exist
    NotFound(PathBuf),
    /// Schema file exists but could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Schema file is not a valid schema description document
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::NotFound(path) => {
                write!(f, "Schema file '{}' not found", path.display())
            }
            SchemaError::Read { path, source } => {
                write!(f, "Failed to read schema file '{}': {}", path.display(), source)
            }
            SchemaError::Parse { path, source } => {
                write!(f, "Malformed schema file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::NotFound(_) => None,
            SchemaError::Read { source, .. } => Some(source),
            SchemaError::Parse { source, .. } => Some(source),
        }
    }
}

/// Parse a schema description from a JSON string
pub fn parse_schema(content: &str) -> Result<SchemaDescription, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load a schema description from a JSON file
pub fn load_schema_file(path: &Path) -> Result<SchemaDescription, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let schema = parse_schema(&content).map_err(|source| SchemaError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded schema description from {} ({} tables)",
        path.display(),
        schema.tables.len()
    );

    if !schema.failed_tables.is_empty() {
        log::warn!(
            "Schema export reports {} table(s) with failed metadata: {}",
            schema.failed_tables.len(),
            schema.failed_tables.join(", ")
        );
    }

    Ok(schema)
}
