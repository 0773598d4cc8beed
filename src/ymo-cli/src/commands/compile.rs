//! Compile command handler
//!
//! Reads a PO catalog, compiles it, and writes the YMO file only after
//! the whole conversion has succeeded, so a failed run never leaves a
//! partial output behind.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ymo::{compile_po, read_index, CompileOptions};

use super::encoding_for;

/// Handle the compile command
///
/// # Arguments
/// * `input` - Path to the .po source file
/// * `output` - Path for the compiled .ymo file
/// * `include_fuzzy` - Keep entries flagged fuzzy
/// * `big_endian` - Encode as UTF-16BE instead of UTF-16LE
pub fn handle(input: &Path, output: &Path, include_fuzzy: bool, big_endian: bool) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let options = CompileOptions {
        include_fuzzy,
        encoding: encoding_for(big_endian),
    };
    let bytes = compile_po(&source, &options)
        .with_context(|| format!("Failed to compile {}", input.display()))?;

    fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let unit_count = read_index(&bytes).map(|index| index.len()).unwrap_or(0);
    println!(
        "Compiled {} units ({} bytes) to {}",
        unit_count,
        bytes.len(),
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ymo::{WideEncoding, YmoCatalog};

    #[test]
    fn test_compile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fr.po");
        let output = dir.path().join("fr.ymo");
        fs::write(&input, "msgid \"Hello\"\nmsgstr \"Bonjour\"\n").unwrap();

        handle(&input, &output, false, false).unwrap();

        let bytes = fs::read(&output).unwrap();
        let catalog = YmoCatalog::parse(&bytes, WideEncoding::Utf16Le).unwrap();
        assert_eq!(catalog.lookup("Hello"), Some("Bonjour"));
    }

    #[test]
    fn test_compile_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.po");
        let output = dir.path().join("bad.ymo");
        fs::write(&input, "msgid not-quoted\n").unwrap();

        assert!(handle(&input, &output, false, false).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_compile_fuzzy_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fr.po");
        let output = dir.path().join("fr.ymo");
        fs::write(&input, "#, fuzzy\nmsgid \"a\"\nmsgstr \"1\"\n").unwrap();

        handle(&input, &output, true, false).unwrap();

        let bytes = fs::read(&output).unwrap();
        let catalog = YmoCatalog::parse(&bytes, WideEncoding::Utf16Le).unwrap();
        assert_eq!(catalog.lookup("a"), Some("1"));
    }
}
