//! Core data model for the window manager: records, geometry, and transient
//! pointer-session state.

use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

/// Default width for newly opened windows.
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
/// Default height for newly opened windows.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 150;
/// Hit margin (in px) for edge/corner resize detection.
pub const RESIZE_HANDLE_MARGIN: i32 = 6;
/// Fixed taskbar height used when computing maximize geometry.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque window identity, stable for the window's lifetime and never reused.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in viewport pixel coordinates.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect translated by the given deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the rect with width/height raised to the given floors.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One managed window: identity, geometry, and lifecycle state.
pub struct WindowRecord {
    /// Unique id assigned at creation.
    pub id: WindowId,
    /// App module that owns this window's content. Lookup relation only; the
    /// registry never owns the module.
    pub app_id: ApplicationId,
    /// Display title supplied by the hosted app.
    pub title: String,
    /// Current geometry, always the rendered rect. Maximize overwrites it
    /// with the viewport rect after snapshotting the old value.
    pub rect: WindowRect,
    /// Geometry snapshot captured by the first maximize; cleared on restore.
    pub restore_rect: Option<WindowRect>,
    /// Stacking order. Strictly increasing assignment, never reused.
    pub z_index: u32,
    /// At most one window is active at any time.
    pub is_active: bool,
    /// Window is hidden into the taskbar.
    pub minimized: bool,
    /// Window fills the viewport above the taskbar.
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Request describing a window to open.
pub struct OpenWindowRequest {
    /// Owning app module id.
    pub app_id: ApplicationId,
    /// Window title; defaults to the app's registered name when `None`.
    pub title: Option<String>,
    /// Initial geometry; a cascading default is used when `None`.
    pub rect: Option<WindowRect>,
}

impl OpenWindowRequest {
    /// Creates a request with defaults for the given app.
    pub fn new(app_id: ApplicationId) -> Self {
        Self {
            app_id,
            title: None,
            rect: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport coordinates.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner being dragged during a resize session.
pub enum ResizeDirection {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

impl ResizeDirection {
    /// True when the direction includes the top edge.
    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// True when the direction includes the bottom edge.
    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// True when the direction includes the right edge.
    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// True when the direction includes the left edge.
    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Armed drag session: exists between pointer-down on a title bar and the next
/// pointer-up, wherever that lands.
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer position when the session armed.
    pub pointer_start: PointerPosition,
    /// Window geometry when the session armed.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Armed resize session for one edge/corner drag.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
    /// Edge or corner established at pointer-down.
    pub direction: ResizeDirection,
    /// Pointer position when the session armed.
    pub pointer_start: PointerPosition,
    /// Window geometry when the session armed.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-interaction state, keyed by window id.
///
/// At most one drag and one resize session per window; sessions on different
/// windows are independent. Every session dies unconditionally on pointer-up.
pub struct InteractionState {
    /// Armed drag sessions.
    pub drags: Vec<DragSession>,
    /// Armed resize sessions.
    pub resizes: Vec<ResizeSession>,
}

impl InteractionState {
    /// True when any session is armed.
    pub fn is_armed(&self) -> bool {
        !self.drags.is_empty() || !self.resizes.is_empty()
    }

    /// Drops every session referencing the given window.
    pub fn forget_window(&mut self, window_id: WindowId) {
        self.drags.retain(|s| s.window_id != window_id);
        self.resizes.retain(|s| s.window_id != window_id);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Top-level desktop state: the window registry plus shell-surface flags.
///
/// Ephemeral by design; nothing here survives a page reload.
pub struct DesktopState {
    /// Canonical window store.
    pub registry: crate::registry::WindowRegistry,
    /// Start menu visibility.
    pub start_menu_open: bool,
    /// System tray popover visibility.
    pub tray_open: bool,
}
