//! Save/load of the partition snapshot
//!
//! Features:
//! - Raw string key/value [`Storage`] backends (memory, file, LocalStorage)
//! - JSON snapshot under a fixed key
//! - Best-effort durability: write failures are logged, never raised
//! - Corrupt or missing payloads load as "absent"

pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;
pub mod memory;

pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

use crate::snapshot::Snapshot;

/// Key the snapshot is stored under
pub const STATE_KEY: &str = "ban_selector_state";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Key/value string storage
///
/// Backends store raw strings; encoding is the adapter's job.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reads and writes [`Snapshot`]s through a [`Storage`] backend
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: Storage> PersistenceAdapter<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STATE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Overwrite the stored snapshot. Failures are logged only.
    pub fn save(&mut self, snapshot: &Snapshot) {
        let json = match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode snapshot: {}", e);
                return;
            }
        };
        match self.storage.set(&self.key, &json) {
            Ok(()) => log::debug!(
                "Snapshot saved ({} items, {} banned)",
                snapshot.all.len(),
                snapshot.banned.len()
            ),
            Err(e) => log::warn!("Failed to save snapshot: {}", e),
        }
    }

    /// Read the stored snapshot; `None` if absent, unreadable or malformed
    pub fn load(&self) -> Option<Snapshot> {
        let json = match self.storage.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No saved snapshot");
                return None;
            }
            Err(e) => {
                log::warn!("Failed to read snapshot: {}", e);
                return None;
            }
        };
        match Snapshot::from_json(&json) {
            Ok(snapshot) => {
                log::info!("Loaded snapshot ({} items)", snapshot.all.len());
                Some(snapshot)
            }
            Err(e) => {
                log::warn!("Discarding malformed snapshot: {}", e);
                None
            }
        }
    }

    /// Forget the stored snapshot
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("Failed to clear snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            all: vec!["A".into(), "B".into()],
            available: vec!["B".into()],
            banned: vec!["A".into()],
        }
    }

    #[test]
    fn test_round_trip() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new());
        adapter.save(&sample());
        assert_eq!(adapter.load(), Some(sample()));
    }

    #[test]
    fn test_save_overwrites() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new());
        adapter.save(&sample());
        adapter.save(&Snapshot::default());
        assert_eq!(adapter.load(), Some(Snapshot::default()));
    }

    #[test]
    fn test_absent_loads_none() {
        let adapter = PersistenceAdapter::new(MemoryStorage::new());
        assert!(adapter.load().is_none());
    }

    #[test]
    fn test_malformed_loads_none() {
        let mut storage = MemoryStorage::new();
        storage.set(STATE_KEY, r#"{"all":"nope"}"#).unwrap();
        let adapter = PersistenceAdapter::new(storage);
        assert!(adapter.load().is_none());
    }

    #[test]
    fn test_read_failure_loads_none() {
        let mut storage = MemoryStorage::new();
        storage.set(STATE_KEY, &sample().to_json().unwrap()).unwrap();
        storage.fail_reads(true);
        let adapter = PersistenceAdapter::new(storage);
        assert!(adapter.load().is_none());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);
        let mut adapter = PersistenceAdapter::new(storage);
        adapter.save(&sample());
        assert!(adapter.load().is_none());
    }

    #[test]
    fn test_custom_key() {
        let mut adapter = PersistenceAdapter::with_key(MemoryStorage::new(), "other");
        adapter.save(&sample());
        assert!(adapter.storage().get(STATE_KEY).unwrap().is_none());
        assert!(adapter.storage().get("other").unwrap().is_some());
    }

    #[test]
    fn test_clear() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new());
        adapter.save(&sample());
        adapter.clear();
        assert!(adapter.load().is_none());
    }
}
