//! Canonical window store.
//!
//! The registry owns the ordered window list (insertion order, not stacking
//! order) and the monotonic z-index counter. All mutation goes through the
//! narrow API here and in [`crate::reducer`]; nothing else writes records.

use desktop_app_contract::ApplicationId;

use crate::model::{WindowId, WindowRect, WindowRecord};

#[derive(Debug, Clone, PartialEq)]
/// Ordered collection of window records plus id/z-index counters.
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    next_window_id: u64,
    next_z_index: u32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            next_z_index: 1,
        }
    }
}

impl WindowRegistry {
    /// Adds a new record and returns its id.
    ///
    /// New windows are born not-minimized and not-maximized; the caller
    /// supplies the initial active flag (conventionally `true`).
    pub fn add(
        &mut self,
        app_id: ApplicationId,
        title: String,
        rect: WindowRect,
        is_active: bool,
    ) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        let z_index = self.next_z_index;
        self.next_z_index = self.next_z_index.saturating_add(1);

        self.windows.push(WindowRecord {
            id,
            app_id,
            title,
            rect,
            restore_rect: None,
            z_index,
            is_active,
            minimized: false,
            maximized: false,
        });
        id
    }

    /// Removes a record. Silent no-op when the id is unknown.
    pub fn remove(&mut self, id: WindowId) -> Option<WindowRecord> {
        let index = self.windows.iter().position(|w| w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Looks up a record by id.
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Mutable lookup, used only by the lifecycle reducer.
    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Applies a patch closure to one record. Silent no-op when the id is
    /// unknown; callers must not assume success.
    pub fn update(&mut self, id: WindowId, patch: impl FnOnce(&mut WindowRecord)) {
        if let Some(window) = self.get_mut(id) {
            patch(window);
        }
    }

    /// Highest z-index currently assigned, or 0 for an empty registry.
    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Raises a window above every other by assigning `max + 1`.
    ///
    /// Computed from the live records rather than the counter alone, because
    /// the counter and the actual maximum can diverge after activation bursts.
    /// Keeps the counter ahead of the new maximum.
    pub fn raise(&mut self, id: WindowId) {
        let top = self.max_z_index().saturating_add(1);
        if let Some(window) = self.get_mut(id) {
            window.z_index = top;
            self.next_z_index = self.next_z_index.max(top.saturating_add(1));
        }
    }

    /// Id of the active window, if any.
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_active).map(|w| w.id)
    }

    /// Clears the active flag on every window except `keep`.
    pub(crate) fn deactivate_others(&mut self, keep: WindowId) {
        for window in &mut self.windows {
            if window.id != keep {
                window.is_active = false;
            }
        }
    }

    /// Number of open windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no windows are open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
