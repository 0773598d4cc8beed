//! Command handlers for the ymo CLI
//!
//! Each subcommand has its own module with a handler function.

pub mod compile;
pub mod inspect;
pub mod lookup;

use ymo::WideEncoding;

/// Map the shared `--big-endian` flag to a wide encoding.
pub fn encoding_for(big_endian: bool) -> WideEncoding {
    if big_endian {
        WideEncoding::Utf16Be
    } else {
        WideEncoding::Utf16Le
    }
}
