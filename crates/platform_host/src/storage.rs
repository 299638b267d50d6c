//! App-data store adapters.
//!
//! The web adapter is intentionally small and synchronous at the browser API
//! boundary. Keys are namespaced as `appdata:<app_id>:<key>` so one app cannot
//! clobber another's entries.

use std::{cell::RefCell, collections::HashMap};

use desktop_app_contract::{AppDataStore, ApplicationId};

fn storage_key(app_id: &ApplicationId, key: &str) -> String {
    format!("appdata:{app_id}:{key}")
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser app-data store backed by `window.localStorage`.
pub struct WebAppDataStore;

impl AppDataStore for WebAppDataStore {
    fn load(&self, app_id: &ApplicationId, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(&storage_key(app_id, key)).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (app_id, key);
            None
        }
    }

    fn save(&self, app_id: &ApplicationId, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(&storage_key(app_id, key), value)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (app_id, key, value);
            Ok(())
        }
    }

    fn remove(&self, app_id: &ApplicationId, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .remove_item(&storage_key(app_id, key))
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (app_id, key);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory app-data store for native tests.
pub struct MemoryAppDataStore {
    entries: RefCell<HashMap<String, String>>,
}

impl AppDataStore for MemoryAppDataStore {
    fn load(&self, app_id: &ApplicationId, key: &str) -> Option<String> {
        self.entries.borrow().get(&storage_key(app_id, key)).cloned()
    }

    fn save(&self, app_id: &ApplicationId, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(storage_key(app_id, key), value.to_string());
        Ok(())
    }

    fn remove(&self, app_id: &ApplicationId, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(&storage_key(app_id, key));
        Ok(())
    }
}
