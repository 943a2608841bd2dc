//! Foreign key dependency analysis
//!
//! Pure, synchronous graph logic: construction, cycle detection and the
//! insert/drop orderings consumed by the batch statement generator.

pub mod dependency_graph;

pub use dependency_graph::*;
