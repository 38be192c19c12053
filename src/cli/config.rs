//! Runtime configuration for a self-play run

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for one self-play run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Debug-level logs on stderr
    pub verbose: bool,

    /// Where to write the finished game as JSON
    pub export: Option<PathBuf>,
}

impl PlayConfig {
    /// Set the export path.
    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
