//! Batch operation errors

use std::path::PathBuf;

use super::operation::BatchOperation;
use crate::graph::CycleDetectionError;
use crate::schema::SchemaError;

/// Error generating, persisting or executing batch statements
#[derive(Debug)]
pub enum BatchOperationError {
    /// Ordering required by the operation could not be computed
    Cycle {
        operation: BatchOperation,
        source: CycleDetectionError,
    },
    /// Operation name not recognised
    UnknownOperation(String),
    /// Live execution requested without a connection string
    MissingConnection,
    /// Schema description could not be loaded
    Schema(SchemaError),
    /// Script could not be written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Could not connect to the database
    Connection(sqlx::Error),
    /// A statement failed; the transaction was rolled back
    Execution {
        /// 1-based position of the failing statement
        index: usize,
        statement: String,
        source: sqlx::Error,
    },
    /// Begin or commit failed
    Transaction(sqlx::Error),
}

impl std::fmt::Display for BatchOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchOperationError::Cycle { operation, source } => write!(
                f,
                "Cannot generate {} statements due to circular dependencies: {}",
                operation.label(),
                source
            ),
            BatchOperationError::UnknownOperation(name) => {
                write!(f, "Unknown operation: {}", name)
            }
            BatchOperationError::MissingConnection => {
                write!(f, "Connection string required for statement execution")
            }
            BatchOperationError::Schema(err) => write!(f, "{}", err),
            BatchOperationError::Io { path, source } => {
                write!(f, "Failed to write SQL script '{}': {}", path.display(), source)
            }
            BatchOperationError::Connection(err) => {
                write!(f, "Failed to connect to database: {}", err)
            }
            BatchOperationError::Execution {
                index,
                statement,
                source,
            } => write!(
                f,
                "Statement {} failed, transaction rolled back: {} ({})",
                index, statement, source
            ),
            BatchOperationError::Transaction(err) => {
                write!(f, "Transaction error: {}", err)
            }
        }
    }
}

impl std::error::Error for BatchOperationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchOperationError::Cycle { source, .. } => Some(source),
            BatchOperationError::Schema(err) => Some(err),
            BatchOperationError::Io { source, .. } => Some(source),
            BatchOperationError::Connection(err) => Some(err),
            BatchOperationError::Execution { source, .. } => Some(source),
            BatchOperationError::Transaction(err) => Some(err),
            BatchOperationError::UnknownOperation(_) | BatchOperationError::MissingConnection => {
                None
            }
        }
    }
}

impl From<SchemaError> for BatchOperationError {
    fn from(err: SchemaError) -> Self {
        BatchOperationError::Schema(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_cycle_error_keeps_cause_chain() {
        let err = BatchOperationError::Cycle {
            operation: BatchOperation::Drop,
            source: CycleDetectionError {
                path: vec!["a".into(), "b".into(), "a".into()],
                unresolved: vec!["a".into(), "b".into()],
            },
        };

        assert_eq!(
            err.to_string(),
            "Cannot generate DROP statements due to circular dependencies: \
             Circular dependency detected: a -> b -> a"
        );
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn test_missing_connection_message() {
        let err = BatchOperationError::MissingConnection;
        assert!(err.source().is_none());
        assert!(err.to_string().contains("Connection string required"));
    }
}
