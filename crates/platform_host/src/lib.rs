//! Host environment services for the browser-hosted desktop shell.
//!
//! The shell and its apps never touch `localStorage` or other host APIs
//! directly; they go through the service bundle assembled by the entry layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod storage;

use std::rc::Rc;

use desktop_app_contract::AppDataStore;

pub use storage::{MemoryAppDataStore, WebAppDataStore};

#[derive(Clone)]
/// Bundle of host services injected into the desktop runtime at mount time.
pub struct HostServices {
    /// App-scoped key/value persistence.
    pub app_data: Rc<dyn AppDataStore>,
}

impl HostServices {
    /// Builds the browser host bundle backed by `localStorage`.
    pub fn web() -> Self {
        Self {
            app_data: Rc::new(WebAppDataStore),
        }
    }

    /// Builds an in-memory bundle for native tests and headless use.
    pub fn in_memory() -> Self {
        Self {
            app_data: Rc::new(MemoryAppDataStore::default()),
        }
    }
}
