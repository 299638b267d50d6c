//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! Apps are trusted, cooperatively-scheduled UI modules. The runtime hands each
//! window an [`AppSurface`] and asks the app module to render into it; the app
//! never owns the window record and never mutates window-manager state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a runtime-managed window, as seen by apps.
pub type WindowRuntimeId = u64;

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when `raw` is not a namespaced dotted id.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Static metadata describing an installable app module.
pub struct AppMetadata {
    /// Canonical application id.
    pub id: ApplicationId,
    /// Human-readable app name used as the default window title.
    pub name: String,
    /// Short description shown in launcher surfaces.
    pub description: String,
    /// Package version string.
    pub version: String,
}

/// App-scoped key/value persistence, keyed by application id.
///
/// Durable state (documents, settings) is the app's own responsibility; the
/// window registry itself is never persisted. Values are raw JSON strings so
/// apps own their payload schemas.
pub trait AppDataStore {
    /// Loads the stored value for `key` within the app's namespace.
    fn load(&self, app_id: &ApplicationId, key: &str) -> Option<String>;

    /// Stores `value` under `key` within the app's namespace.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails.
    fn save(&self, app_id: &ApplicationId, key: &str, value: &str) -> Result<(), String>;

    /// Removes `key` from the app's namespace.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the delete fails.
    fn remove(&self, app_id: &ApplicationId, key: &str) -> Result<(), String>;
}

#[derive(Clone)]
/// Handle to the content surface of one managed window.
///
/// The surface outlives nothing: it is reconstructed per render/destroy call
/// and carries only the window identity plus the host services an app may use.
pub struct AppSurface {
    /// Identity of the hosting window.
    pub window_id: WindowRuntimeId,
    /// App-scoped persistence service.
    pub data: Rc<dyn AppDataStore>,
}

/// A loaded app module ready to render into managed windows.
pub trait AppModule {
    /// Static metadata for launcher surfaces and default titles.
    fn metadata(&self) -> &AppMetadata;

    /// Renders the app view into the given window surface.
    ///
    /// Called exactly once per window, after the window record is created. The
    /// window can already be dragged and resized while this view is mounting.
    fn render(&self, surface: &AppSurface) -> View;

    /// Releases app resources for a closing window.
    ///
    /// Called when the hosting window is removed. The default implementation
    /// does nothing; apps with external resources override it.
    fn destroy(&self, surface: &AppSurface) {
        let _ = surface;
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures produced by the app-loading boundary.
pub enum AppLoadError {
    /// No module is registered for the requested application id.
    #[error("app module not found: {0}")]
    ModuleNotFound(ApplicationId),
    /// The module was found but failed to initialize.
    #[error("app module `{id}` failed to load: {reason}")]
    LoadFailed {
        /// Application id of the failing module.
        id: ApplicationId,
        /// Loader-supplied failure description.
        reason: String,
    },
}

/// Future type returned by [`AppLoader::load`].
pub type AppLoadFuture = LocalBoxFuture<'static, Result<Rc<dyn AppModule>, AppLoadError>>;

/// Asynchronous app-module resolution boundary.
///
/// Loading is fire-and-forget relative to the window record: a window exists,
/// drags, and resizes independently of whether its content module has resolved.
pub trait AppLoader {
    /// Resolves the module for `app_id`.
    fn load(&self, app_id: &ApplicationId) -> AppLoadFuture;
}
