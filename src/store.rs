//! Partition store: the single owner of catalog state
//!
//! Every mutation goes through one `&mut self` method that updates the whole
//! partition at once, then hands a snapshot to the persistence adapter.
//! Selection is ephemeral and never persisted.

use serde::Serialize;

use crate::item::Item;
use crate::partition::Partition;
use crate::persistence::{PersistenceAdapter, Storage};
use crate::selector::RandomSelector;
use crate::snapshot::{Snapshot, ValidationError};

/// Store lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Startup has not finished; mutations are rejected
    Uninitialized,
    /// Catalog loaded, accepting operations
    Ready,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateView<'a> {
    pub available: &'a [Item],
    pub banned: &'a [Item],
    pub selected: Option<&'a Item>,
}

pub struct PartitionStore<S> {
    phase: Phase,
    partition: Partition,
    selected: Option<Item>,
    persistence: PersistenceAdapter<S>,
    selector: RandomSelector,
}

impl<S: Storage> PartitionStore<S> {
    /// Create an uninitialized store
    pub fn new(persistence: PersistenceAdapter<S>, selector: RandomSelector) -> Self {
        Self {
            phase: Phase::Uninitialized,
            partition: Partition::default(),
            selected: None,
            persistence,
            selector,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    pub fn view(&self) -> StateView<'_> {
        StateView {
            available: self.partition.available(),
            banned: self.partition.banned(),
            selected: self.selected.as_ref(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.partition.to_snapshot()
    }

    /// Restore from persisted state, or seed from `seed` if there is none
    pub fn initialize_with<F>(&mut self, seed: F) -> StateView<'_>
    where
        F: FnOnce() -> Vec<Item>,
    {
        if !self.restore() {
            self.seed(seed());
        }
        self.view()
    }

    /// Try the persisted snapshot. Returns false if the caller must seed.
    pub fn restore(&mut self) -> bool {
        let Some(snapshot) = self.persistence.load() else {
            return false;
        };
        match snapshot.validate() {
            Ok(partition) => {
                self.install(partition);
                log::info!(
                    "Restored {} items ({} banned)",
                    self.partition.len(),
                    self.partition.banned().len()
                );
                true
            }
            Err(e) => {
                log::warn!("Rejecting saved snapshot: {}", e);
                false
            }
        }
    }

    /// Replace all state with a validated snapshot
    ///
    /// On error the store is left untouched and nothing is saved; callers
    /// are expected to fall back to [`PartitionStore::seed`].
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<StateView<'_>, ValidationError> {
        let partition = snapshot.validate()?;
        self.install(partition);
        self.persist();
        Ok(self.view())
    }

    /// Start over with every item available
    pub fn seed(&mut self, items: Vec<Item>) -> StateView<'_> {
        self.install(Partition::seeded(items));
        log::info!("Seeded {} items", self.partition.len());
        self.persist();
        self.view()
    }

    /// Drop the persisted snapshot and seed again
    pub fn reset(&mut self, items: Vec<Item>) -> StateView<'_> {
        self.persistence.clear();
        self.seed(items)
    }

    /// Add a new available item. Blank or known ids are ignored.
    pub fn add_item(&mut self, id: &str) -> StateView<'_> {
        if !self.accepts("add") {
            return self.view();
        }
        match Item::parse(id) {
            Some(item) if self.partition.push(item.clone()) => {
                log::info!("Added {}", item);
                self.persist();
            }
            Some(item) => log::debug!("add: {} already in catalog", item),
            None => log::debug!("add: blank id"),
        }
        self.view()
    }

    /// Remove `id`, which must exactly equal the selected, available item
    pub fn remove_item(&mut self, id: &str) -> StateView<'_> {
        if !self.accepts("remove") {
            return self.view();
        }
        let target = match &self.selected {
            Some(selected) if selected == id => selected.clone(),
            _ => {
                log::debug!("remove: {:?} is not selected", id);
                return self.view();
            }
        };
        if !self.partition.is_available(&target) {
            log::debug!("remove: {} is not available", target);
            return self.view();
        }

        self.partition.remove(&target);
        self.selected = None;
        log::info!("Removed {}", target);
        self.persist();
        self.view()
    }

    /// Ban or unban the selected item, then deselect
    pub fn toggle_ban(&mut self) -> StateView<'_> {
        if !self.accepts("toggle_ban") {
            return self.view();
        }
        let Some(selected) = self.selected.take() else {
            log::debug!("toggle_ban: nothing selected");
            return self.view();
        };

        if self.partition.ban(&selected) {
            log::info!("Banned {}", selected);
            self.persist();
        } else if self.partition.unban(&selected) {
            log::info!("Unbanned {}", selected);
            self.persist();
        }
        self.view()
    }

    /// Select any known item, from either pool (exact match, no trimming)
    pub fn select(&mut self, id: &str) -> StateView<'_> {
        if !self.accepts("select") {
            return self.view();
        }
        match self.partition.find(id) {
            Some(item) => self.selected = Some(item.clone()),
            None => log::debug!("select: unknown item {:?}", id),
        }
        self.view()
    }

    /// Select a uniformly random available item
    ///
    /// Returns `None` (and changes nothing) when no item is available.
    pub fn pick_random(&mut self) -> Option<Item> {
        if !self.accepts("pick_random") {
            return None;
        }
        let picked = self.selector.pick(self.partition.available()).cloned();
        match &picked {
            Some(item) => {
                log::info!("Picked {}", item);
                self.selected = Some(item.clone());
            }
            None => log::debug!("pick_random: no available items"),
        }
        picked
    }

    fn install(&mut self, partition: Partition) {
        self.partition = partition;
        self.selected = None;
        self.phase = Phase::Ready;
    }

    fn accepts(&self, op: &str) -> bool {
        if self.phase == Phase::Uninitialized {
            log::debug!("{}: store not initialized", op);
            return false;
        }
        true
    }

    fn persist(&mut self) {
        debug_assert!(self.partition.is_consistent());
        let snapshot = self.partition.to_snapshot();
        self.persistence.save(&snapshot);
    }
}
