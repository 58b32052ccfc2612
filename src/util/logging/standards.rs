//! Centralised logging metadata (event names, shared keys, etc.).

/// Canonical event names used across the generator.
pub mod events {
    /// Logging bootstrap.
    pub const LOG_INIT: &str = "log.init";

    /// Input sources.
    pub const SOURCE_OPEN: &str = "source.open";
    pub const SOURCE_READ: &str = "source.read";
    pub const SOURCE_FAILED: &str = "source.failed";

    /// Manifest scan.
    pub const MANIFEST_DATE_FOUND: &str = "manifest.date_found";
    pub const MANIFEST_DATE_MISSING: &str = "manifest.date_missing";

    /// Header output.
    pub const HEADER_RENDERED: &str = "header.rendered";
    pub const HEADER_WRITTEN: &str = "header.written";
    pub const HEADER_WRITE_FAILED: &str = "header.write_failed";
}
