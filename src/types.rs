use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

/// How many violations the ordering engine collects before failing.
///
/// - `First`: stop at the first violation found (default).
/// - `All`: keep scanning and report every unknown dependency and every
///   duplicated name. Cycle detection only runs once the graph is known to
///   be well-formed, so a cycle is never reported next to an unknown
///   dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorReporting {
    First,
    All,
}

impl Default for ErrorReporting {
    fn default() -> Self {
        ErrorReporting::First
    }
}

/// Serialization format of a task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Pick from the file extension; stdin is read as JSON.
    Auto,
    Toml,
    Json,
}

impl Default for InputFormat {
    fn default() -> Self {
        InputFormat::Auto
    }
}

impl InputFormat {
    /// Resolve `Auto` against a path. Unknown extensions fall back to TOML.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                if path.as_os_str() == "-" {
                    return InputFormat::Json;
                }
                match path.extension().and_then(|ext| ext.to_str()) {
                    Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
                    _ => InputFormat::Toml,
                }
            }
            explicit => explicit,
        }
    }
}
