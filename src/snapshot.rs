//! Serializable partition snapshot
//!
//! This is the persisted shape: a JSON object with three string arrays.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Item;
use crate::partition::Partition;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub all: Vec<String>,
    pub available: Vec<String>,
    pub banned: Vec<String>,
}

/// Which list a validation problem was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    All,
    Available,
    Banned,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::All => "all",
            ListKind::Available => "available",
            ListKind::Banned => "banned",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot that breaks the partition invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty item in `{0}`")]
    EmptyItem(ListKind),
    #[error("item {0:?} has surrounding whitespace")]
    Untrimmed(String),
    #[error("duplicate item {item:?} in `{list}`")]
    Duplicate { list: ListKind, item: String },
    #[error("item {0:?} is both available and banned")]
    Overlap(String),
    #[error("item {0:?} breaks `available ∪ banned == all`")]
    Mismatch(String),
}

impl Snapshot {
    /// Check the snapshot and turn it into a partition
    ///
    /// Identifiers must already be in trimmed form.
    pub fn validate(&self) -> Result<Partition, ValidationError> {
        let all = parse_list(&self.all, ListKind::All)?;
        let available = parse_list(&self.available, ListKind::Available)?;
        let banned = parse_list(&self.banned, ListKind::Banned)?;

        let available_set: HashSet<&Item> = available.iter().collect();
        if let Some(item) = banned.iter().find(|i| available_set.contains(i)) {
            return Err(ValidationError::Overlap(item.to_string()));
        }

        let all_set: HashSet<&Item> = all.iter().collect();
        if let Some(item) = available.iter().chain(&banned).find(|i| !all_set.contains(i)) {
            return Err(ValidationError::Mismatch(item.to_string()));
        }
        if available.len() + banned.len() != all.len() {
            let banned_set: HashSet<&Item> = banned.iter().collect();
            let missing = all
                .iter()
                .find(|i| !available_set.contains(i) && !banned_set.contains(i))
                .map(Item::to_string)
                .unwrap_or_default();
            return Err(ValidationError::Mismatch(missing));
        }

        Ok(Partition::from_parts(all, available, banned))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn parse_list(raw: &[String], list: ListKind) -> Result<Vec<Item>, ValidationError> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut items = Vec::with_capacity(raw.len());
    for value in raw {
        let item = Item::parse(value).ok_or(ValidationError::EmptyItem(list))?;
        if item.as_str() != value.as_str() {
            return Err(ValidationError::Untrimmed(value.clone()));
        }
        if !seen.insert(item.clone()) {
            return Err(ValidationError::Duplicate {
                list,
                item: value.clone(),
            });
        }
        items.push(item);
    }
    Ok(items)
}
