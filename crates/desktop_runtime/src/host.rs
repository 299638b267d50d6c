//! Browser-environment queries used by the shell.

use crate::model::WindowRect;

const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

/// Rectangle available for maximized windows: the viewport minus the taskbar,
/// anchored at the origin.
///
/// Falls back to a fixed geometry when the browser window cannot be measured
/// (native test builds, detached documents).
pub fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    let (width, height) = viewport_size();
    WindowRect {
        x: 0,
        y: 0,
        w: width.max(320),
        h: (height - taskbar_height_px).max(220),
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
    (width, height)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_size() -> (i32, i32) {
    (FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
}
