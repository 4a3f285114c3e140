// src/input/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::input::model::{ConfigSection, RawTaskFile, TaskFile};
use crate::types::InputFormat;

/// Load a task file and return the raw `RawTaskFile`.
///
/// A path of `-` reads from stdin. This only performs deserialization; it
/// does **not** check names or efforts. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>, format: InputFormat) -> Result<RawTaskFile> {
    let path = path.as_ref();
    let format = format.resolve(path);

    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    debug!(?path, ?format, bytes = contents.len(), "read task file");
    parse_str(&contents, format)
}

/// Deserialize task file contents. `Auto` is treated as TOML.
///
/// JSON input may also be a bare array of tasks, which is read with the
/// default `[config]`.
pub fn parse_str(contents: &str, format: InputFormat) -> Result<RawTaskFile> {
    let raw: RawTaskFile = match format {
        InputFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(contents)?;
            if value.is_array() {
                RawTaskFile {
                    config: ConfigSection::default(),
                    task: serde_json::from_value(value)?,
                }
            } else {
                serde_json::from_value(value)?
            }
        }
        InputFormat::Toml | InputFormat::Auto => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a task file and run field-level validation.
///
/// This is the entry point used by the CLI:
///
/// - Reads TOML or JSON.
/// - Applies `[config]` defaults.
/// - Trims names, drops or rejects blank ones, checks efforts and that at
///   least one task remains.
///
/// Unknown dependencies, duplicate names and cycles are reported later by
/// the ordering engine.
pub fn load_and_validate(path: impl AsRef<Path>, format: InputFormat) -> Result<TaskFile> {
    let raw = load_from_path(path, format)?;
    let file = TaskFile::try_from(raw)?;
    Ok(file)
}
