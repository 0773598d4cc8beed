//! Lookup command handler

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ymo::YmoCatalog;

use super::encoding_for;

/// Handle the lookup command
///
/// Prints the translation for `text` (qualified by `context` if given)
/// and fails with a nonzero exit when the catalog has no match.
pub fn handle(input: &Path, text: &str, context: Option<&str>, big_endian: bool) -> Result<()> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let catalog = YmoCatalog::parse(&bytes, encoding_for(big_endian))
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let translation = match context {
        Some(ctxt) => catalog.lookup_with_context(ctxt, text),
        None => catalog.lookup(text),
    };

    match translation {
        Some(translation) => println!("{}", translation),
        None => bail!("No translation found for \"{}\"", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ymo::compile_po_default;

    fn write_catalog(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let src = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n\n\
                   msgctxt \"menu\"\nmsgid \"File\"\nmsgstr \"Fichier\"\n";
        let path = dir.path().join("fr.ymo");
        fs::write(&path, compile_po_default(src).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_lookup_hit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir);
        assert!(handle(&path, "Hello", None, false).is_ok());
        assert!(handle(&path, "File", Some("menu"), false).is_ok());
    }

    #[test]
    fn test_lookup_miss_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir);
        // Context-qualified key, so the bare id misses
        assert!(handle(&path, "File", None, false).is_err());
        assert!(handle(&path, "Hello", Some("menu"), false).is_err());
    }
}
