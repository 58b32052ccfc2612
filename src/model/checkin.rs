/// Bytes of the identifier kept in `MANIFEST_VERSION`.
pub const SHORT_FORM_LEN: usize = 10;

/// Opaque identifier of the recorded source snapshot (first line of `manifest.uuid`).
///
/// Kept as raw bytes so the header reproduces the file exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinId(Vec<u8>);

impl CheckinId {
    pub fn new(line: impl Into<Vec<u8>>) -> Self {
        Self(line.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Leading bytes of the identifier, fewer when it is shorter.
    pub fn short_form(&self) -> &[u8] {
        &self.0[..self.0.len().min(SHORT_FORM_LEN)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_takes_ten_bytes() {
        let id = CheckinId::new("a1b2c3d4e5f60718293a4b5c6d7e8f9012345678");
        assert_eq!(id.short_form(), b"a1b2c3d4e5");
        assert_eq!(id.as_bytes().len(), 40);
    }

    #[test]
    fn short_form_of_short_identifier_is_unpadded() {
        assert_eq!(CheckinId::new("abc").short_form(), b"abc");
        assert_eq!(CheckinId::new("").short_form(), b"");
        assert_eq!(CheckinId::new("0123456789").short_form(), b"0123456789");
    }

    #[test]
    fn non_utf8_bytes_are_kept() {
        let id = CheckinId::new(&b"ab\xffcd0123456789"[..]);
        assert_eq!(id.as_bytes(), b"ab\xffcd0123456789");
        assert_eq!(id.short_form(), b"ab\xffcd01234");
    }
}
