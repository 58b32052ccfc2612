use std::iter;

/// Numeric components kept from the release version.
pub const COMPONENT_COUNT: usize = 3;

/// Comma-separated fields of a resource version.
const RESOURCE_FIELDS: usize = 4;

/// Human-assigned release version (first line of `VERSION`), e.g. `2.25.1-beta`.
///
/// Kept as raw bytes so the header reproduces the file exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion(Vec<u8>);

impl ReleaseVersion {
    pub fn new(line: impl Into<Vec<u8>>) -> Self {
        Self(line.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn components(&self) -> ReleaseVersionComponents {
        ReleaseVersionComponents::parse(&self.0)
    }

    pub fn resource_version(&self) -> ResourceVersionString {
        ResourceVersionString::build(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseVersionComponents {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseVersionComponents {
    /// Folds digit runs into integers; any other byte, and the end of the
    /// text, closes the running component. Only the first three are kept.
    pub fn parse(text: impl AsRef<[u8]>) -> Self {
        let mut parts = [0u64; COMPONENT_COUNT];
        let mut closed = 0;
        let mut acc: u64 = 0;

        for byte in text.as_ref().iter().copied().map(Some).chain(iter::once(None)) {
            match byte {
                Some(digit @ b'0'..=b'9') => {
                    acc = acc
                        .saturating_mul(10)
                        .saturating_add(u64::from(digit - b'0'));
                }
                _ => {
                    if closed < COMPONENT_COUNT {
                        parts[closed] = acc;
                        closed += 1;
                    }
                    acc = 0;
                }
            }
        }

        let [major, minor, patch] = parts;
        Self {
            major,
            minor,
            patch,
        }
    }

    /// `%d%02d%02d` rendering, e.g. `2.25.1` -> `22501`.
    pub fn version_number(&self) -> String {
        format!("{}{:02}{:02}", self.major, self.minor, self.patch)
    }
}

/// Four-field comma-separated version, e.g. `2,25,1,0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceVersionString(Vec<u8>);

/// Scanner state: `Copying` counts the dots already turned into commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceScan {
    Copying { replaced: usize },
    Truncated { replaced: usize },
}

impl ResourceScan {
    fn step(self, byte: u8, out: &mut Vec<u8>) -> Self {
        match self {
            ResourceScan::Truncated { .. } => self,
            ResourceScan::Copying { replaced } => match byte {
                // a dash ends the version regardless of dots seen so far
                b'-' => ResourceScan::Truncated { replaced },
                b'.' if replaced < RESOURCE_FIELDS - 1 => {
                    out.push(b',');
                    ResourceScan::Copying {
                        replaced: replaced + 1,
                    }
                }
                b'.' => ResourceScan::Truncated { replaced },
                other => {
                    out.push(other);
                    self
                }
            },
        }
    }

    fn replaced(self) -> usize {
        match self {
            ResourceScan::Copying { replaced } | ResourceScan::Truncated { replaced } => replaced,
        }
    }
}

impl ResourceVersionString {
    pub fn build(version: impl AsRef<[u8]>) -> Self {
        let version = version.as_ref();
        let mut out = Vec::with_capacity(version.len() + 6);
        let mut state = ResourceScan::Copying { replaced: 0 };
        for &byte in version {
            state = state.step(byte, &mut out);
            if matches!(state, ResourceScan::Truncated { .. }) {
                break;
            }
        }
        for _ in state.replaced()..RESOURCE_FIELDS - 1 {
            out.extend_from_slice(b",0");
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
