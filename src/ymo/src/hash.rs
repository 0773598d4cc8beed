//! FNV-1a hash function for YMO translation key lookups

/// FNV-1a 32-bit offset basis
pub const FNV1A_32_INIT: u32 = 0x811c9dc5;

/// FNV-1a 32-bit prime
pub const FNV1A_32_PRIME: u32 = 0x01000193;

/// Compute FNV-1a 32-bit hash of a byte slice
///
/// This is the hash function used by the YMO format for key lookups.
/// The runtime hashes the encoded bytes of a source string and probes
/// the index table with the result, so the compiler must hash the very
/// same byte sequence.
///
/// # Example
///
/// ```
/// use ymo::fnv1a_32;
///
/// let hash = fnv1a_32(b"File");
/// ```
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hash = FNV1A_32_INIT;
    for &byte in data {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV1A_32_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_empty() {
        assert_eq!(fnv1a_32(b""), FNV1A_32_INIT);
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        // Published FNV-1a 32-bit test vectors
        assert_eq!(fnv1a_32(b"a"), 0xe40c292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_fnv1a_deterministic() {
        let h1 = fnv1a_32(b"menu\x04File");
        let h2 = fnv1a_32(b"menu\x04File");
        assert_eq!(h1, h2);

        // Different keys should have different hashes
        let h3 = fnv1a_32(b"File");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_fnv1a_wide_bytes() {
        // The compiler hashes encoded code units, not chars - "A" in
        // UTF-16LE is [0x41, 0x00], which is a different hash than b"A".
        assert_ne!(fnv1a_32(&[0x41, 0x00]), fnv1a_32(b"A"));
    }
}
