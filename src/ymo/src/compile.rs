//! PO to YMO compilation
//!
//! Turns parsed PO entries into the binary lookup table consumed by the
//! runtime. Entries are filtered (empty ids/translations, fuzzy unless
//! requested), keyed, hashed, and laid out in an insertion-ordered
//! table whose order fixes the file layout byte for byte.

use byteorder::{ByteOrder, LE};
use indexmap::IndexMap;
use thiserror::Error;

use crate::encoding::{WideEncoding, CODE_UNIT_SIZE};
use crate::hash::fnv1a_32;
use crate::po::{parse_po, PoParseError};

/// Separator between context and id in a qualified lookup key (EOT).
pub const CONTEXT_SEPARATOR: char = '\u{0004}';

/// Maximum unit count and maximum payload offset (both 16-bit fields).
const MAX_U16: usize = 0xFFFF;

/// Bytes per index entry: 4-byte hash + 2-byte offset.
const INDEX_ENTRY_SIZE: usize = 6;

/// Bytes before the index: the unit count.
const HEADER_SIZE: usize = 2;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("failed to parse PO catalog: {0}")]
    Parse(#[from] PoParseError),

    #[error("too many translation entries for YMO format: {0} (max 65535)")]
    TooManyEntries(usize),

    #[error("translation data too large for YMO format: offset {offset} exceeds 65535")]
    DataTooLarge { offset: usize },
}

/// Options controlling compilation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Include entries flagged `#, fuzzy` (excluded by default).
    pub include_fuzzy: bool,
    /// Wide encoding for keys and payloads.
    pub encoding: WideEncoding,
}

/// Build the lookup key for an entry.
///
/// With a non-empty context the key is `msgctxt`, an EOT separator,
/// then `msgid`; otherwise the bare `msgid`. This mirrors what the
/// runtime hashes on its side of the table.
pub fn lookup_key(msgctxt: Option<&str>, msgid: &str) -> String {
    match msgctxt {
        Some(ctxt) if !ctxt.is_empty() => {
            let mut key = String::with_capacity(ctxt.len() + 1 + msgid.len());
            key.push_str(ctxt);
            key.push(CONTEXT_SEPARATOR);
            key.push_str(msgid);
            key
        }
        _ => msgid.to_string(),
    }
}

/// Insertion-ordered hash -> payload table.
///
/// The position of a hash is fixed by its first insertion; a later
/// insert with the same hash replaces the payload in place. Both halves
/// of that rule are part of the binary contract, since they decide the
/// file layout under hash collisions.
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    units: IndexMap<u32, Vec<u8>>,
}

impl UnitTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the payload for `hash`.
    pub fn insert(&mut self, hash: u32, payload: Vec<u8>) {
        self.units.insert(hash, payload);
    }

    /// Number of units in the table.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Serialize the table into YMO bytes.
    ///
    /// Layout: u16 LE unit count, then one (u32 LE hash, u16 LE offset)
    /// index entry per unit in table order, then the payloads back to
    /// back in the same order. Offsets are relative to the start of the
    /// file. The whole buffer is assembled in memory, so a size error
    /// never leaves partial output behind.
    pub fn encode(&self) -> Result<Vec<u8>, CompileError> {
        if self.units.len() > MAX_U16 {
            return Err(CompileError::TooManyEntries(self.units.len()));
        }

        let index_end = HEADER_SIZE + self.units.len() * INDEX_ENTRY_SIZE;
        let data_size: usize = self.units.values().map(Vec::len).sum();
        let mut out = Vec::with_capacity(index_end + data_size);

        let mut buf = [0u8; 4];
        LE::write_u16(&mut buf[..2], self.units.len() as u16);
        out.extend_from_slice(&buf[..2]);

        let mut offset = index_end;
        for (hash, payload) in &self.units {
            if offset > MAX_U16 {
                return Err(CompileError::DataTooLarge { offset });
            }
            LE::write_u32(&mut buf, *hash);
            out.extend_from_slice(&buf);
            LE::write_u16(&mut buf[..2], offset as u16);
            out.extend_from_slice(&buf[..2]);
            offset += payload.len();
        }

        for payload in self.units.values() {
            out.extend_from_slice(payload);
        }

        Ok(out)
    }
}

/// Compile PO source text into a YMO byte stream.
///
/// All-or-nothing: any parse or size error returns without producing
/// bytes.
pub fn compile_po(source: &str, options: &CompileOptions) -> Result<Vec<u8>, CompileError> {
    let entries = parse_po(source)?;

    let mut table = UnitTable::new();
    for entry in &entries {
        if entry.msgid.is_empty() || entry.msgstr.is_empty() {
            continue;
        }
        if entry.fuzzy && !options.include_fuzzy {
            continue;
        }

        let key = lookup_key(entry.msgctxt.as_deref(), &entry.msgid);
        let hash = fnv1a_32(&options.encoding.encode(&key));

        let mut payload = options.encoding.encode(&entry.msgstr);
        payload.extend_from_slice(&[0; CODE_UNIT_SIZE]);

        table.insert(hash, payload);
    }

    table.encode()
}

/// Compile with the original converter's defaults: fuzzy entries
/// excluded, UTF-16LE.
pub fn compile_po_default(source: &str) -> Result<Vec<u8>, CompileError> {
    compile_po(source, &CompileOptions::default())
}
