//! Configuration data structures.

use std::path::PathBuf;

/// Input files of one generator run, in the order they are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name the binary was invoked as, used in the usage line.
    pub program: String,
    /// `manifest.uuid`
    pub checkin_path: PathBuf,
    /// `manifest`
    pub manifest_path: PathBuf,
    /// `VERSION`
    pub version_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Diagnostics always go to stderr; stdout carries the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `mkversion=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}
