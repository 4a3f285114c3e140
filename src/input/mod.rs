// src/input/mod.rs

//! Task files: the on-disk form of a scheduling request.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Read a task file from disk or stdin (`loader.rs`).
//! - Check field-level invariants before the engine runs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str};
pub use model::{ConfigSection, RawTaskFile, TaskFile};
