//! Catalog item identifiers

use std::fmt;

use serde::Serialize;

/// An opaque, non-empty item identifier
///
/// Equality is exact (case-sensitive) string equality. Values are always
/// stored trimmed. Only built through [`Item::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Trim `raw` and wrap it, or `None` if nothing is left
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let item = Item::parse("  Pizza \t").unwrap();
        assert_eq!(item.as_str(), "Pizza");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Item::parse("").is_none());
        assert!(Item::parse("   \n").is_none());
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Item::parse("pizza"), Item::parse("Pizza"));
        assert_eq!(Item::parse("Pizza").unwrap(), "Pizza");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let item = Item::parse("Ahri").unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"Ahri\"");
    }
}
