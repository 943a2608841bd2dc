//! Batch operation kinds and statement options

use std::str::FromStr;

use serde::Serialize;

use super::error::BatchOperationError;
use crate::graph::TraversalOrder;

/// A batch operation that renders one statement per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOperation {
    Drop,
    Truncate,
    InsertTemplate,
    DisableFk,
    EnableFk,
}

impl BatchOperation {
    /// Uppercase name used in script headers and messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drop => "DROP",
            Self::Truncate => "TRUNCATE",
            Self::InsertTemplate => "INSERT_TEMPLATE",
            Self::DisableFk => "DISABLE_FK",
            Self::EnableFk => "ENABLE_FK",
        }
    }

    /// Ordering the statements follow, `None` when any order is safe
    pub fn traversal(&self) -> Option<TraversalOrder> {
        match self {
            Self::Drop | Self::Truncate => Some(TraversalOrder::Drop),
            Self::InsertTemplate | Self::EnableFk => Some(TraversalOrder::Insert),
            Self::DisableFk => None,
        }
    }

    /// One-line ordering note for script headers
    pub fn rationale(&self) -> &'static str {
        match self.traversal() {
            Some(TraversalOrder::Drop) => "dependencies last (safe for deletion)",
            Some(TraversalOrder::Insert) => "dependencies first (safe for insertion)",
            None => "any order (no dependency constraint applies)",
        }
    }

    pub fn all_variants() -> &'static [BatchOperation] {
        &[
            Self::Drop,
            Self::Truncate,
            Self::InsertTemplate,
            Self::DisableFk,
            Self::EnableFk,
        ]
    }
}

impl FromStr for BatchOperation {
    type Err = BatchOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase().replace('-', "_");
        Self::all_variants()
            .iter()
            .copied()
            .find(|op| op.label() == name)
            .ok_or_else(|| BatchOperationError::UnknownOperation(s.to_string()))
    }
}

impl std::fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Options shaping generated statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementOptions {
    /// Append CASCADE to DROP / TRUNCATE
    pub cascade: bool,
    /// Append RESTART IDENTITY to TRUNCATE
    pub restart_identity: bool,
    /// Name columns in INSERT templates
    pub include_columns: bool,
}

impl Default for StatementOptions {
    fn default() -> Self {
        Self {
            cascade: false,
            restart_identity: false,
            include_columns: true,
        }
    }
}
