//! YMO catalog reading
//!
//! Parses a compiled YMO byte stream back into a hash -> translation
//! map, the same way the runtime loader does: index entries with an
//! out-of-range or misaligned offset, or whose payload has no wide
//! null terminator, are skipped instead of failing the whole load. A
//! buffer too short to even hold the header and index is an error,
//! since that points at caller misuse rather than a damaged entry.

use std::collections::HashMap;

use byteorder::{ByteOrder, LE};
use thiserror::Error;

use crate::compile::lookup_key;
use crate::encoding::{WideEncoding, CODE_UNIT_SIZE};
use crate::hash::fnv1a_32;

/// Bytes per index entry: 4-byte hash + 2-byte offset.
const INDEX_ENTRY_SIZE: usize = 6;

/// Bytes before the index: the unit count.
const HEADER_SIZE: usize = 2;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("buffer too small for YMO header")]
    TruncatedHeader,

    #[error("buffer too small for YMO index: need {expected} bytes, have {actual}")]
    TruncatedIndex { expected: usize, actual: usize },
}

/// One raw entry from the index section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// FNV-1a hash of the encoded lookup key.
    pub hash: u32,
    /// Payload offset from the start of the file.
    pub offset: u16,
}

/// Read the index section in file order, without touching payloads.
pub fn read_index(bytes: &[u8]) -> Result<Vec<IndexEntry>, ReadError> {
    if bytes.len() < HEADER_SIZE {
        return Err(ReadError::TruncatedHeader);
    }

    let count = LE::read_u16(&bytes[..HEADER_SIZE]) as usize;
    let index_end = HEADER_SIZE + count * INDEX_ENTRY_SIZE;
    if bytes.len() < index_end {
        return Err(ReadError::TruncatedIndex {
            expected: index_end,
            actual: bytes.len(),
        });
    }

    let mut entries = Vec::with_capacity(count);
    for chunk in bytes[HEADER_SIZE..index_end].chunks_exact(INDEX_ENTRY_SIZE) {
        entries.push(IndexEntry {
            hash: LE::read_u32(&chunk[..4]),
            offset: LE::read_u16(&chunk[4..]),
        });
    }
    Ok(entries)
}

/// Decode the payload an index entry points at.
///
/// Returns `None` when the entry fails the runtime's validity checks:
/// offset out of range or not code-unit aligned, no wide null
/// terminator before the end of the buffer, or payload bytes that do
/// not decode in the given encoding.
pub fn read_payload(bytes: &[u8], offset: u16, encoding: WideEncoding) -> Option<String> {
    let offset = offset as usize;
    if offset >= bytes.len() || offset % CODE_UNIT_SIZE != 0 {
        return None;
    }

    let terminator = bytes[offset..]
        .chunks_exact(CODE_UNIT_SIZE)
        .position(|unit| unit == [0, 0])?;

    encoding.decode(&bytes[offset..offset + terminator * CODE_UNIT_SIZE])
}

/// A loaded YMO translation table.
#[derive(Debug, Clone)]
pub struct YmoCatalog {
    encoding: WideEncoding,
    translations: HashMap<u32, String>,
}

impl YmoCatalog {
    /// Parse a YMO byte stream into a lookup table.
    ///
    /// Invalid index entries are skipped; on a duplicate hash the first
    /// entry wins, as in the runtime loader.
    pub fn parse(bytes: &[u8], encoding: WideEncoding) -> Result<Self, ReadError> {
        let index = read_index(bytes)?;

        let mut translations = HashMap::with_capacity(index.len());
        for entry in index {
            if let Some(text) = read_payload(bytes, entry.offset, encoding) {
                translations.entry(entry.hash).or_insert(text);
            }
        }

        Ok(Self {
            encoding,
            translations,
        })
    }

    /// Number of loaded translations.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether any translations were loaded.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Look up a translation by its precomputed key hash.
    pub fn get_by_hash(&self, hash: u32) -> Option<&str> {
        self.translations.get(&hash).map(String::as_str)
    }

    /// Look up the translation for a plain source string.
    pub fn lookup(&self, msgid: &str) -> Option<&str> {
        self.get_by_hash(fnv1a_32(&self.encoding.encode(msgid)))
    }

    /// Look up the translation for a context-qualified source string.
    pub fn lookup_with_context(&self, msgctxt: &str, msgid: &str) -> Option<&str> {
        let key = lookup_key(Some(msgctxt), msgid);
        self.get_by_hash(fnv1a_32(&self.encoding.encode(&key)))
    }

    /// Translate a source string, falling back to the input on a miss.
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.lookup(text).unwrap_or(text)
    }
}
