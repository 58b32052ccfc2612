//! Readers over the three input files.
//!
//! Each source is opened, consumed up to the line it needs and closed
//! before the caller moves on to the next one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SourceKind, VersionError};
use crate::model::{CheckinId, ManifestDateRecord, ReleaseVersion};
use crate::util::logging::standards::events;

/// Cuts a line at its first `\r` or `\n`.
pub fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(line.len());
    &line[..end]
}

fn open(path: &Path) -> Result<BufReader<File>> {
    debug!(event = events::SOURCE_OPEN, path = %path.display());
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| VersionError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })
}

fn read_err(path: &Path, source: std::io::Error) -> VersionError {
    VersionError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    }
}

/// First line of `reader` as raw bytes, terminator stripped; `None` on empty input.
pub fn first_line<R: BufRead>(mut reader: R) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let end = trim_line_terminator(&buf).len();
    buf.truncate(end);
    Ok(Some(buf))
}

/// First `D ` record of a manifest, if any.
pub fn scan_for_date<R: BufRead>(mut reader: R) -> std::io::Result<Option<ManifestDateRecord>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if let Some(record) = ManifestDateRecord::decode(trim_line_terminator(&buf)) {
            return Ok(Some(record));
        }
    }
}

fn read_required_line(path: &Path, kind: SourceKind) -> Result<Vec<u8>> {
    let line = first_line(open(path)?).map_err(|e| read_err(path, e))?;
    let line = line.ok_or_else(|| VersionError::MalformedInput {
        path: path.to_path_buf(),
        kind,
    })?;
    debug!(
        event = events::SOURCE_READ,
        path = %path.display(),
        line = %String::from_utf8_lossy(&line)
    );
    Ok(line)
}

pub fn read_checkin_id(path: &Path) -> Result<CheckinId> {
    read_required_line(path, SourceKind::CheckinId).map(CheckinId::new)
}

pub fn read_release_version(path: &Path) -> Result<ReleaseVersion> {
    read_required_line(path, SourceKind::ReleaseVersion).map(ReleaseVersion::new)
}

/// A manifest without a date record is not an error.
pub fn scan_manifest_for_date(path: &Path) -> Result<Option<ManifestDateRecord>> {
    let record = scan_for_date(open(path)?).map_err(|e| read_err(path, e))?;
    match &record {
        Some(record) => debug!(
            event = events::MANIFEST_DATE_FOUND,
            path = %path.display(),
            date = %String::from_utf8_lossy(&record.date_time())
        ),
        None => debug!(event = events::MANIFEST_DATE_MISSING, path = %path.display()),
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn trims_at_first_terminator() {
        assert_eq!(trim_line_terminator(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_terminator(b"abc\n"), b"abc");
        assert_eq!(trim_line_terminator(b"a\rb\n"), b"a");
        assert_eq!(trim_line_terminator(b"abc"), b"abc");
    }

    #[test]
    fn first_line_only() {
        let line = first_line(Cursor::new("2.25.1\r\nsecond\n")).unwrap();
        assert_eq!(line.as_deref(), Some(&b"2.25.1"[..]));
        assert_eq!(first_line(Cursor::new("")).unwrap(), None);
        // a lone newline is still a line
        assert_eq!(first_line(Cursor::new("\n")).unwrap().as_deref(), Some(&b""[..]));
    }

    #[test]
    fn scan_takes_first_date_record() {
        let manifest = "C initial\\scheck-in\nD 2024-03-07T14:05:22.000\nD 1999-01-01T00:00:00\nU drh\n";
        let record = scan_for_date(Cursor::new(manifest)).unwrap().unwrap();
        assert_eq!(record.date_time(), b"2024-03-07 14:05:22");
    }

    #[test]
    fn scan_without_date_record() {
        let manifest = "C comment\nF src/main.c abc123\nU drh\n";
        assert!(scan_for_date(Cursor::new(manifest)).unwrap().is_none());
        assert!(scan_for_date(Cursor::new("")).unwrap().is_none());
    }

    #[test]
    fn empty_required_file_is_malformed() {
        let file = NamedTempFile::new().unwrap();
        let err = read_release_version(file.path()).unwrap_err();
        assert!(matches!(
            err,
            VersionError::MalformedInput {
                kind: SourceKind::ReleaseVersion,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.uuid");
        let err = read_checkin_id(&path).unwrap_err();
        assert!(matches!(err, VersionError::UnreadableSource { .. }));
        assert_eq!(err.path(), Some(&path));
    }

    #[test]
    fn reads_checkin_id_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0123456789abcdef").unwrap();
        let id = read_checkin_id(file.path()).unwrap();
        assert_eq!(id.as_bytes(), b"0123456789abcdef");
    }

    #[test]
    fn invalid_utf8_is_read_verbatim() {
        let line = first_line(Cursor::new(&b"ab\xffcd\r\nnext"[..])).unwrap();
        assert_eq!(line.as_deref(), Some(&b"ab\xffcd"[..]));
    }

    #[test]
    fn empty_identifier_file_is_malformed() {
        let file = NamedTempFile::new().unwrap();
        let err = read_checkin_id(file.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("malformed manifest.uuid file: {}", file.path().display())
        );
    }
}
