//! Ban Selector - random picks from a catalog with a persistent ban list
//!
//! Core modules:
//! - `store`: Partition store, the single owner of catalog state
//! - `partition`: Available/banned split with its invariant
//! - `snapshot`: Persisted shape and validation
//! - `persistence`: Save/load through key/value storage backends
//! - `selector`: Uniform random selection (seedable)
//! - `seed`: Fallback catalog from a newline-delimited list
//! - `settings`: User preferences
//! - `web`: Browser bindings (WASM only)

pub mod item;
pub mod partition;
pub mod persistence;
pub mod seed;
pub mod selector;
pub mod settings;
pub mod snapshot;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use item::Item;
pub use partition::Partition;
pub use selector::RandomSelector;
pub use settings::Settings;
pub use snapshot::{Snapshot, ValidationError};
pub use store::{PartitionStore, Phase, StateView};
