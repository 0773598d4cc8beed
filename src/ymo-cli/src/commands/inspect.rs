//! Inspect command handler
//!
//! Dumps a YMO file's index in file order, decoding each payload the
//! way the runtime would.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use ymo::{read_index, read_payload};

use super::encoding_for;
use crate::cli::OutputFormat;

/// One index entry prepared for display.
#[derive(Debug, Serialize)]
struct InspectRow {
    hash: String,
    offset: u16,
    translation: Option<String>,
}

/// Handle the inspect command
pub fn handle(input: &Path, format: OutputFormat, big_endian: bool) -> Result<()> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let rows = collect_rows(&bytes, big_endian)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    match format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

fn collect_rows(bytes: &[u8], big_endian: bool) -> Result<Vec<InspectRow>> {
    let encoding = encoding_for(big_endian);
    let index = read_index(bytes)?;

    Ok(index
        .iter()
        .map(|entry| InspectRow {
            hash: format!("{:08x}", entry.hash),
            offset: entry.offset,
            translation: read_payload(bytes, entry.offset, encoding),
        })
        .collect())
}

fn print_table(rows: &[InspectRow]) {
    println!("{:<8}  {:>6}  translation", "hash", "offset");
    for row in rows {
        println!(
            "{:<8}  {:>6}  {}",
            row.hash,
            row.offset,
            row.translation.as_deref().unwrap_or("<invalid>")
        );
    }
    println!("{} units", rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ymo::compile_po_default;

    #[test]
    fn test_collect_rows() {
        let bytes =
            compile_po_default("msgid \"b\"\nmsgstr \"2\"\n\nmsgid \"a\"\nmsgstr \"1\"\n")
                .unwrap();
        let rows = collect_rows(&bytes, false).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].offset, 14);
        assert_eq!(rows[0].translation.as_deref(), Some("2"));
        assert_eq!(rows[1].translation.as_deref(), Some("1"));
    }

    #[test]
    fn test_collect_rows_marks_invalid_entries() {
        // Offset points past the end of the file
        let mut bytes = vec![0x01, 0x00];
        bytes.extend_from_slice(&0xdeadbeefu32.to_le_bytes());
        bytes.extend_from_slice(&0x4000u16.to_le_bytes());

        let rows = collect_rows(&bytes, false).unwrap();
        assert_eq!(rows[0].hash, "deadbeef");
        assert_eq!(rows[0].translation, None);
    }

    #[test]
    fn test_rows_serialize_to_json() {
        let bytes = compile_po_default("msgid \"a\"\nmsgstr \"1\"\n").unwrap();
        let rows = collect_rows(&bytes, false).unwrap();
        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains("\"offset\":8"));
        assert!(json.contains("\"translation\":\"1\""));
    }
}
