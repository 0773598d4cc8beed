//! YMO translation catalog compiler
//!
//! Converts gettext PO text catalogs into YMO, a compact binary table
//! an application can probe at runtime with a 32-bit hash of a source
//! string. Also provides the reader side for inspecting and querying
//! compiled tables.
//!
//! # Format Overview
//!
//! All integers are little-endian, with no alignment padding:
//!
//! - Bytes 0-1: Unit count (u16, max 65535)
//! - Then per unit: u32 FNV-1a hash of the encoded lookup key, u16
//!   payload offset from the start of the file
//! - Remaining: Payloads in index order, each the encoded translation
//!   followed by a 2-byte zero terminator
//!
//! Lookup keys are the `msgid`, or `msgctxt` + EOT (U+0004) + `msgid`
//! when a context is present, hashed over their encoded bytes
//! (UTF-16LE by default).
//!
//! ## Example
//!
//! ```
//! let po = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";
//! let bytes = ymo::compile_po_default(po)?;
//!
//! let catalog = ymo::YmoCatalog::parse(&bytes, ymo::WideEncoding::Utf16Le)?;
//! assert_eq!(catalog.lookup("Hello"), Some("Bonjour"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compile;
pub mod encoding;
pub mod hash;
pub mod po;
pub mod read;

// Re-export main types
pub use compile::{
    compile_po, compile_po_default, lookup_key, CompileError, CompileOptions, UnitTable,
    CONTEXT_SEPARATOR,
};
pub use encoding::{WideEncoding, CODE_UNIT_SIZE};
pub use hash::{fnv1a_32, FNV1A_32_INIT, FNV1A_32_PRIME};
pub use po::{parse_po, unescape_po_string, PoEntry, PoParseError};
pub use read::{read_index, read_payload, IndexEntry, ReadError, YmoCatalog};
