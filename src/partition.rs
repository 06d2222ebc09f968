//! Catalog partition into available and banned pools
//!
//! The three lists are only ever changed together, so that
//! `available ∪ banned == all` and `available ∩ banned == ∅` hold after every
//! call. Display order is insertion order: banning appends to `banned`,
//! unbanning appends back to `available`.

use std::collections::HashSet;

use crate::item::Item;
use crate::seed;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    all: Vec<Item>,
    available: Vec<Item>,
    banned: Vec<Item>,
}

impl Partition {
    /// Fresh partition with every item available (duplicates dropped)
    pub fn seeded(items: Vec<Item>) -> Self {
        let all = seed::dedupe(items);
        Self {
            available: all.clone(),
            all,
            banned: Vec::new(),
        }
    }

    /// Assemble from lists that have already been validated
    pub(crate) fn from_parts(all: Vec<Item>, available: Vec<Item>, banned: Vec<Item>) -> Self {
        let partition = Self {
            all,
            available,
            banned,
        };
        debug_assert!(partition.is_consistent());
        partition
    }

    pub fn all(&self) -> &[Item] {
        &self.all
    }

    pub fn available(&self) -> &[Item] {
        &self.available
    }

    pub fn banned(&self) -> &[Item] {
        &self.banned
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Look up an item by exact identifier
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.all.iter().find(|item| *item == id)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.all.contains(item)
    }

    pub fn is_available(&self, item: &Item) -> bool {
        self.available.contains(item)
    }

    pub fn is_banned(&self, item: &Item) -> bool {
        self.banned.contains(item)
    }

    /// Append a new item as available. Returns false if already known.
    pub fn push(&mut self, item: Item) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.all.push(item.clone());
        self.available.push(item);
        debug_assert!(self.is_consistent());
        true
    }

    /// Move an available item to the banned pool
    pub fn ban(&mut self, item: &Item) -> bool {
        let Some(pos) = self.available.iter().position(|i| i == item) else {
            return false;
        };
        let item = self.available.remove(pos);
        self.banned.push(item);
        debug_assert!(self.is_consistent());
        true
    }

    /// Move a banned item back to the available pool
    pub fn unban(&mut self, item: &Item) -> bool {
        let Some(pos) = self.banned.iter().position(|i| i == item) else {
            return false;
        };
        let item = self.banned.remove(pos);
        self.available.push(item);
        debug_assert!(self.is_consistent());
        true
    }

    /// Drop an item from every list
    pub fn remove(&mut self, item: &Item) -> bool {
        let before = self.all.len();
        self.all.retain(|i| i != item);
        self.available.retain(|i| i != item);
        self.banned.retain(|i| i != item);
        debug_assert!(self.is_consistent());
        self.all.len() != before
    }

    pub fn to_snapshot(&self) -> Snapshot {
        let strings = |items: &[Item]| items.iter().map(|i| i.as_str().to_string()).collect();
        Snapshot {
            all: strings(&self.all),
            available: strings(&self.available),
            banned: strings(&self.banned),
        }
    }

    /// Check the partition invariant and that `all` has no duplicates
    pub fn is_consistent(&self) -> bool {
        let all: HashSet<&Item> = self.all.iter().collect();
        let available: HashSet<&Item> = self.available.iter().collect();
        let banned: HashSet<&Item> = self.banned.iter().collect();

        all.len() == self.all.len()
            && available.len() == self.available.len()
            && banned.len() == self.banned.len()
            && available.is_disjoint(&banned)
            && available.len() + banned.len() == all.len()
            && available.union(&banned).all(|i| all.contains(i))
    }
}
