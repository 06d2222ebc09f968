//! App settings and preferences
//!
//! Persisted separately from the catalog snapshot, in the same storage.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;
use crate::selector::RandomSelector;

/// App settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed list on disk (native)
    pub seed_path: String,
    /// Seed list URL (web)
    pub seed_url: String,
    /// Fixed RNG seed for reproducible picks
    pub rng_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: "list.txt".to_string(),
            seed_url: "/list.txt".to_string(),
            rng_seed: None,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "ban_selector_settings";

    /// Load settings, falling back to defaults on anything unexpected
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Failed to read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, storage: &mut impl Storage) {
        match serde_json::to_string(self) {
            Ok(json) => match storage.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }

    /// Random source honoring `rng_seed`
    pub fn selector(&self) -> RandomSelector {
        match self.rng_seed {
            Some(seed) => RandomSelector::from_seed(seed),
            None => RandomSelector::from_entropy(),
        }
    }
}
