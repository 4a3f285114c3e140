// src/order/mod.rs

//! The ordering engine.
//!
//! - [`graph`] builds the per-call dependency graph and rejects unknown
//!   dependencies and duplicate names.
//! - [`engine`] runs the frontier-by-frontier topological sort.
//! - [`cycle`] names the tasks on a cycle once the sort has stalled.

pub mod cycle;
pub mod engine;
pub mod graph;

pub use engine::{OrderingEngine, Plan};
pub use graph::DependencyGraph;
