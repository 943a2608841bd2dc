//! Batch statement generation
//!
//! This module turns the dependency graph's orderings into:
//! - DROP / TRUNCATE statements (dependents first)
//! - INSERT templates and trigger re-enabling (dependencies first)
//! - Saved SQL scripts with an explanatory header
//! - Optional transactional execution, dry run by default

pub mod error;
pub mod execution;
pub mod operation;
pub mod script;
pub mod statements;

pub use execution::ExecutionReport;
pub use operation::{BatchOperation, StatementOptions};
pub use statements::{BatchOperations, TableOrderInfo};
