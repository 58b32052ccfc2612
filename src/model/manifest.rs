//! Fixed-offset decoder for the manifest's date record.
//!
//! A date record is a line tagged `D ` followed by an ISO-ish timestamp:
//!
//! ```text
//! D 2024-03-07T14:05:22.123
//!   ^         ^        ^
//!   2         12       21
//! ```
//!
//! Fields are sliced by position, never by delimiter, and are not validated
//! as a calendar date.

use std::ops::Range;

/// Line prefix marking the date record.
pub const RECORD_TAG: &[u8] = b"D ";

/// Positions of the timestamp within the line.
const STAMP: Range<usize> = 2..21;

// Offsets below are relative to `STAMP.start`.
const DATE: Range<usize> = 0..10;
const YEAR: Range<usize> = 0..4;
const TIME: Range<usize> = 11..19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDateRecord {
    stamp: Vec<u8>,
}

impl ManifestDateRecord {
    /// Decodes a manifest line, `None` unless it carries the `D ` tag.
    ///
    /// The line must already be stripped of its terminator. Offsets past the
    /// end of a short line yield shorter fields.
    pub fn decode(line: &[u8]) -> Option<Self> {
        if !line.starts_with(RECORD_TAG) {
            return None;
        }
        Some(Self {
            stamp: slice(line, STAMP).to_vec(),
        })
    }

    /// `YYYY-MM-DD`
    pub fn date(&self) -> &[u8] {
        slice(&self.stamp, DATE)
    }

    /// `HH:MM:SS`
    pub fn time(&self) -> &[u8] {
        slice(&self.stamp, TIME)
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn date_time(&self) -> Vec<u8> {
        [self.date(), &b" "[..], self.time()].concat()
    }

    pub fn year(&self) -> &[u8] {
        slice(&self.stamp, YEAR)
    }

    /// Every digit of the timestamp, punctuation dropped.
    pub fn iso_date(&self) -> String {
        digits(&self.stamp)
    }

    /// `YYYYMMDD`
    pub fn numeric_date(&self) -> String {
        digits(slice(&self.stamp, DATE))
    }

    /// `HHMMSS` without leading zeros; midnight strips to an empty string.
    pub fn numeric_time(&self) -> String {
        digits(slice(&self.stamp, TIME))
            .trim_start_matches('0')
            .to_string()
    }
}

fn slice(bytes: &[u8], range: Range<usize>) -> &[u8] {
    let end = range.end.min(bytes.len());
    let start = range.start.min(end);
    &bytes[start..end]
}

fn digits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii_digit())
        .map(|&b| char::from(b))
        .collect()
}
