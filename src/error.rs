use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which mandatory single-line source turned out to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `manifest.uuid`, the check-in identifier file.
    CheckinId,
    /// `VERSION`, the release version file.
    ReleaseVersion,
}

impl SourceKind {
    pub fn file_label(self) -> &'static str {
        match self {
            SourceKind::CheckinId => "manifest.uuid",
            SourceKind::ReleaseVersion => "VERSION",
        }
    }
}

/// Fatal failures of a generator run. Every variant exits with `ExitCode::FAILURE`.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Usage: {program} manifest.uuid manifest VERSION")]
    Usage { program: String },

    #[error("cannot open \"{}\" for reading", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {} file: {}", kind.file_label(), path.display())]
    MalformedInput { path: PathBuf, kind: SourceKind },
}

impl VersionError {
    /// Offending path, when the failure is tied to one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            VersionError::Usage { .. } => None,
            VersionError::UnreadableSource { path, .. } | VersionError::MalformedInput { path, .. } => {
                Some(path)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
