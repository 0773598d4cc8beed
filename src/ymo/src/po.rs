//! PO catalog parsing
//!
//! Line-driven parser for the subset of gettext PO syntax the YMO
//! compiler consumes: `msgctxt`, `msgid`, `msgstr`, `msgstr[N]`,
//! quoted continuation lines, `#,` flag comments, and blank-line entry
//! separators. Plural forms beyond `msgstr[0]` are recognized but
//! dropped - the output format only carries flat singular strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoParseError {
    #[error("line {line}: not a valid quoted string: {text}")]
    MalformedLiteral { line: usize, text: String },
}

/// One complete translation block from a PO file.
///
/// Blocks whose `msgid` was never set (including the conventional
/// file-header block once merged) are discarded during parsing and
/// never appear in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoEntry {
    /// Optional disambiguating context (`msgctxt`).
    pub msgctxt: Option<String>,
    /// Source string (`msgid`).
    pub msgid: String,
    /// Translated string (`msgstr`), empty if the block had none.
    pub msgstr: String,
    /// Set by a `#, fuzzy` flag comment preceding the block.
    pub fuzzy: bool,
}

/// Which field a bare continuation line appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    None,
    Msgctxt,
    Msgid,
    Msgstr,
}

/// Accumulator for the block currently being read.
#[derive(Debug, Default)]
struct PendingEntry {
    msgctxt: Option<String>,
    msgid: Option<String>,
    msgstr: Option<String>,
    fuzzy: bool,
}

impl PendingEntry {
    /// Move the pending block into `entries` if it has a `msgid`,
    /// resetting the accumulator either way.
    fn flush_into(&mut self, entries: &mut Vec<PoEntry>) {
        let pending = std::mem::take(self);
        if let Some(msgid) = pending.msgid {
            entries.push(PoEntry {
                msgctxt: pending.msgctxt,
                msgid,
                msgstr: pending.msgstr.unwrap_or_default(),
                fuzzy: pending.fuzzy,
            });
        }
    }

    fn append(&mut self, state: FieldState, value: &str) {
        let field = match state {
            FieldState::Msgctxt => &mut self.msgctxt,
            FieldState::Msgid => &mut self.msgid,
            FieldState::Msgstr => &mut self.msgstr,
            FieldState::None => return,
        };
        field.get_or_insert_with(String::new).push_str(value);
    }
}

/// Decode one quoted PO string fragment into its logical text.
///
/// The fragment must start and end with an unescaped `"` with nothing
/// outside the quotes. `\"`, `\\`, `\n`, `\r` and `\t` are resolved;
/// any other backslash sequence is kept verbatim. Returns `None` for
/// anything not shaped like a single quoted literal.
pub fn unescape_po_string(raw: &str) -> Option<String> {
    let mut chars = raw.chars();
    if chars.next() != Some('"') {
        return None;
    }

    let mut out = String::with_capacity(raw.len());
    let mut closed = false;
    while let Some(ch) = chars.next() {
        if closed {
            // Trailing garbage after the closing quote
            return None;
        }
        match ch {
            '"' => closed = true,
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                // Backslash right before end of input: no closing quote
                None => return None,
            },
            _ => out.push(ch),
        }
    }

    if closed {
        Some(out)
    } else {
        None
    }
}

/// Parse PO source text into its ordered list of translation blocks.
///
/// A malformed quoted literal anywhere aborts the parse; there is no
/// per-entry recovery.
///
/// Known quirk, kept for compatibility with existing catalogs: when two
/// `msgid`-only blocks follow each other without a blank line or a
/// `msgstr` in between, the second `msgid` line is treated as part of
/// the first block rather than starting a new one.
pub fn parse_po(source: &str) -> Result<Vec<PoEntry>, PoParseError> {
    let mut entries = Vec::new();
    let mut pending = PendingEntry::default();
    let mut state = FieldState::None;

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            pending.flush_into(&mut entries);
            state = FieldState::None;
            continue;
        }

        if let Some(flags) = line.strip_prefix("#,") {
            if flags.split(',').any(|flag| flag.trim() == "fuzzy") {
                pending.fuzzy = true;
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgctxt ") {
            pending.msgctxt = Some(unescape_line(rest, line_number)?);
            state = FieldState::Msgctxt;
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgid ") {
            // A complete block with no trailing blank line ends here
            if pending.msgid.is_some() && pending.msgstr.is_some() {
                pending.flush_into(&mut entries);
            }
            pending.msgid = Some(unescape_line(rest, line_number)?);
            state = FieldState::Msgid;
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgstr[") {
            if let Some(close) = rest.find(']') {
                let plural_index = &rest[..close];
                let value = rest[close + 1..].trim();
                if plural_index == "0" && value.starts_with('"') {
                    pending.msgstr = Some(unescape_line(value, line_number)?);
                    state = FieldState::Msgstr;
                } else {
                    // Plural forms beyond the singular have no place in
                    // the output format
                    state = FieldState::None;
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgstr ") {
            pending.msgstr = Some(unescape_line(rest, line_number)?);
            state = FieldState::Msgstr;
            continue;
        }

        if line.starts_with('"') {
            let value = unescape_line(line, line_number)?;
            pending.append(state, &value);
        }
        // Anything else (msgid_plural, obsolete markers, ...) is ignored
    }

    pending.flush_into(&mut entries);
    Ok(entries)
}

fn unescape_line(raw: &str, line: usize) -> Result<String, PoParseError> {
    unescape_po_string(raw.trim()).ok_or_else(|| PoParseError::MalformedLiteral {
        line,
        text: raw.trim().to_string(),
    })
}
