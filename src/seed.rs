//! Seed catalog loading
//!
//! The seed source is plain text, one item per line. Blank lines are skipped
//! and each line is trimmed. Duplicates are kept here; [`dedupe`] drops them.

use std::collections::HashSet;

use thiserror::Error;

use crate::item::Item;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch seed list {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Parse newline-delimited text into items, in order
pub fn parse(text: &str) -> Vec<Item> {
    text.lines().filter_map(Item::parse).collect()
}

/// Keep the first occurrence of each item
pub fn dedupe(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Read and parse a seed file from disk
#[cfg(not(target_arch = "wasm32"))]
pub fn read_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Item>, SeedError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let items = parse(&text);
    log::info!("Read {} seed items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::as_str).collect()
    }

    #[test]
    fn test_parse_trims_and_skips_blank() {
        let items = parse("  Ahri \n\nGaren\n   \n\tLux\t\n");
        assert_eq!(names(&items), ["Ahri", "Garen", "Lux"]);
    }

    #[test]
    fn test_parse_crlf() {
        let items = parse("A\r\nB\r\n\r\nC");
        assert_eq!(names(&items), ["A", "B", "C"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let items = parse("A\nB\nA\n");
        assert_eq!(names(&items), ["A", "B", "A"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_dedupe_first_occurrence() {
        let items = dedupe(parse("C\nA\nC\nB\nA"));
        assert_eq!(names(&items), ["C", "A", "B"]);
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "Pizza\n Sushi \n\nRamen\n").unwrap();
        let items = read_file(&path).unwrap();
        assert_eq!(names(&items), ["Pizza", "Sushi", "Ramen"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
