use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;

pub use reader::load_document;

pub const DEFAULT_INPUT_PATH: &str = "session-test-data/group-workouts/latest-group-workout.json";

pub const INPUT_ENV_VAR: &str = "SCORECHECK_INPUT";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// Argument, then env value, then the default. An empty env value counts as unset.
pub fn resolve_input_path(explicit: Option<&Path>, env_value: Option<&OsStr>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path.to_path_buf();
    }
    match env_value.filter(|v| !v.is_empty()) {
        Some(value) => PathBuf::from(value),
        None => PathBuf::from(DEFAULT_INPUT_PATH),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
