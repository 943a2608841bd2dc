//! Subcommand arguments and handlers

pub mod analyze;
pub mod batch;
