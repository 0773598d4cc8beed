//! Target wide encoding for YMO keys and payloads
//!
//! The runtime consuming a YMO table works with 2-byte wide strings, so
//! both lookup keys and stored translations are encoded as UTF-16 code
//! units before hashing and serialization. Little-endian is the wire
//! default; big-endian exists for hosts whose wide strings are stored
//! that way.

/// Size in bytes of one encoded code unit (and of the payload terminator).
pub const CODE_UNIT_SIZE: usize = 2;

/// Byte encoding applied to keys and translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WideEncoding {
    /// UTF-16, little-endian code units (the format default).
    #[default]
    Utf16Le,
    /// UTF-16, big-endian code units.
    Utf16Be,
}

impl WideEncoding {
    /// Encode a string into its wide byte form.
    ///
    /// Hashing operates on these bytes, not on characters, so the
    /// encoding chosen here must match the runtime's.
    pub fn encode(self, s: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(s.len() * CODE_UNIT_SIZE);
        for unit in s.encode_utf16() {
            match self {
                Self::Utf16Le => out.extend_from_slice(&unit.to_le_bytes()),
                Self::Utf16Be => out.extend_from_slice(&unit.to_be_bytes()),
            }
        }
        out
    }

    /// Decode wide bytes back into a string.
    ///
    /// Returns `None` if the slice length is odd or the code units do
    /// not form valid UTF-16.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        if bytes.len() % CODE_UNIT_SIZE != 0 {
            return None;
        }
        let units: Vec<u16> = bytes
            .chunks_exact(CODE_UNIT_SIZE)
            .map(|pair| match self {
                Self::Utf16Le => u16::from_le_bytes([pair[0], pair[1]]),
                Self::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
            })
            .collect();
        String::from_utf16(&units).ok()
    }
}
