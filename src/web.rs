//! Browser bindings
//!
//! The page calls [`start`] once, then drives the returned handle from its
//! click handlers. Rendering stays on the JS side.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::item::Item;
use crate::persistence::{LocalStorage, MemoryStorage, PersistenceAdapter, Storage};
use crate::seed::{self, SeedError};
use crate::settings::Settings;
use crate::store::PartitionStore;

/// Store handle exported to JS
#[wasm_bindgen]
pub struct BanSelector {
    store: PartitionStore<Box<dyn Storage>>,
}

fn to_array(items: &[Item]) -> js_sys::Array {
    items
        .iter()
        .map(|item| JsValue::from_str(item.as_str()))
        .collect()
}

#[wasm_bindgen]
impl BanSelector {
    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    pub fn available(&self) -> js_sys::Array {
        to_array(self.store.view().available)
    }

    pub fn banned(&self) -> js_sys::Array {
        to_array(self.store.view().banned)
    }

    pub fn selected(&self) -> Option<String> {
        self.store.selected().map(|item| item.as_str().to_string())
    }

    /// Current `{available, banned, selected}` view as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.store.view()).unwrap_or_default()
    }

    pub fn select(&mut self, id: &str) {
        self.store.select(id);
    }

    #[wasm_bindgen(js_name = toggleBan)]
    pub fn toggle_ban(&mut self) {
        self.store.toggle_ban();
    }

    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self, id: &str) {
        self.store.add_item(id);
    }

    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, id: &str) {
        self.store.remove_item(id);
    }

    /// Pick and select a random available item (`undefined` if none)
    #[wasm_bindgen(js_name = pickRandom)]
    pub fn pick_random(&mut self) -> Option<String> {
        self.store.pick_random().map(Item::into_string)
    }
}

/// Fetch a text resource
pub async fn fetch_text(url: &str) -> Result<String, SeedError> {
    let fail = |reason: String| SeedError::Fetch {
        url: url.to_string(),
        reason,
    };
    let reason = |value: JsValue| value.as_string().unwrap_or_else(|| format!("{value:?}"));

    let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail(reason(e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| fail(reason(e)))?;
    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }
    let text = JsFuture::from(response.text().map_err(|e| fail(reason(e)))?)
        .await
        .map_err(|e| fail(reason(e)))?;
    text.as_string().ok_or_else(|| fail("body is not text".into()))
}

/// Initialize logging, restore or seed the store, and hand it to JS
#[wasm_bindgen]
pub async fn start() -> BanSelector {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ban selector starting...");

    let storage: Box<dyn Storage> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{} - state will not survive reload", e);
            Box::new(MemoryStorage::new())
        }
    };
    let settings = Settings::load(&storage);
    let mut store = PartitionStore::new(PersistenceAdapter::new(storage), settings.selector());

    if !store.restore() {
        let items = match fetch_text(&settings.seed_url).await {
            Ok(text) => seed::parse(&text),
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        };
        store.seed(items);
    }

    BanSelector { store }
}
