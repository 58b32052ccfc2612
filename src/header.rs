//! Assembles the parsed inputs into the `#define` header.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::build_info;
use crate::error::Result;
use crate::model::{CheckinId, ManifestDateRecord, ReleaseVersion};
use crate::source;
use crate::util::config::GeneratorConfig;
use crate::util::logging::standards::events;

/// Values are raw bytes: identifier and version lines are copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineValue {
    /// Emitted between double quotes.
    Text(Vec<u8>),
    /// Emitted as a bare token.
    Number(Vec<u8>),
}

/// One `#define NAME value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: &'static str,
    pub value: DefineValue,
}

impl Define {
    fn text(name: &'static str, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name,
            value: DefineValue::Text(value.into()),
        }
    }

    fn number(name: &'static str, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name,
            value: DefineValue::Number(value.into()),
        }
    }

    /// Appends the line, newline included.
    pub fn write_line(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"#define ");
        out.extend_from_slice(self.name.as_bytes());
        out.push(b' ');
        match &self.value {
            DefineValue::Text(value) => {
                out.push(b'"');
                out.extend_from_slice(value);
                out.push(b'"');
            }
            DefineValue::Number(value) => out.extend_from_slice(value),
        }
        out.push(b'\n');
    }
}

/// Everything the header is derived from, gathered before anything is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHeader {
    pub checkin: CheckinId,
    pub manifest_date: Option<ManifestDateRecord>,
    pub release: ReleaseVersion,
    pub compiler: String,
}

impl VersionHeader {
    pub fn new(
        checkin: CheckinId,
        manifest_date: Option<ManifestDateRecord>,
        release: ReleaseVersion,
    ) -> Self {
        Self {
            checkin,
            manifest_date,
            release,
            compiler: build_info::COMPILER.to_string(),
        }
    }

    /// Reads the three sources in order: identifier, manifest, version.
    pub fn collect(config: &GeneratorConfig) -> Result<Self> {
        let checkin = source::read_checkin_id(&config.checkin_path)?;
        let manifest_date = source::scan_manifest_for_date(&config.manifest_path)?;
        let release = source::read_release_version(&config.version_path)?;
        Ok(Self::new(checkin, manifest_date, release))
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Definitions in output order.
    pub fn defines(&self) -> Vec<Define> {
        let mut defines = vec![
            Define::text("MANIFEST_UUID", self.checkin.as_bytes()),
            Define::text(
                "MANIFEST_VERSION",
                [&b"["[..], self.checkin.short_form(), &b"]"[..]].concat(),
            ),
        ];

        if let Some(date) = &self.manifest_date {
            defines.extend([
                Define::text("MANIFEST_DATE", date.date_time()),
                Define::text("MANIFEST_YEAR", date.year()),
                Define::text("MANIFEST_ISODATE", date.iso_date()),
                Define::number("MANIFEST_NUMERIC_DATE", date.numeric_date()),
                Define::number("MANIFEST_NUMERIC_TIME", date.numeric_time()),
            ]);
        }

        let components = self.release.components();
        defines.extend([
            Define::text("RELEASE_VERSION", self.release.as_bytes()),
            Define::number("RELEASE_VERSION_NUMBER", components.version_number()),
            Define::number(
                "RELEASE_RESOURCE_VERSION",
                self.release.resource_version().as_bytes(),
            ),
            Define::text("COMPILER", self.compiler.as_str()),
        ]);

        debug!(
            event = events::HEADER_RENDERED,
            defines = defines.len(),
            has_date = self.manifest_date.is_some()
        );
        defines
    }

    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for define in self.defines() {
            define.write_line(&mut out);
        }
        out
    }

    /// Writes the whole header with a single write, then flushes.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let rendered = self.render();
        out.write_all(&rendered)?;
        out.flush()?;
        info!(event = events::HEADER_WRITTEN, bytes = rendered.len());
        Ok(())
    }
}

/// Full pipeline: read every source, then render the header bytes.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<u8>> {
    VersionHeader::collect(config).map(|header| header.render())
}
