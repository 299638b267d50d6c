//! Pointer-session geometry: edge/corner hit-testing, cursor affordances, and
//! the drag/resize delta math.
//!
//! Everything here is pure; the component layer feeds it pointer coordinates
//! and applies the resulting rects through the reducer.

use crate::model::{
    DragSession, PointerPosition, ResizeDirection, ResizeSession, WindowRect,
};

/// Detects which resize direction (if any) a point within a window's local
/// bounding box falls on, given the hit margin. Corner checks take precedence
/// over single-edge checks.
pub fn hit_test_resize(
    width: i32,
    height: i32,
    local_x: i32,
    local_y: i32,
    margin: i32,
) -> Option<ResizeDirection> {
    if local_x < 0 || local_y < 0 || local_x > width || local_y > height {
        return None;
    }

    let top = local_y <= margin;
    let bottom = local_y >= height - margin;
    let left = local_x <= margin;
    let right = local_x >= width - margin;

    if top && left {
        Some(ResizeDirection::NorthWest)
    } else if top && right {
        Some(ResizeDirection::NorthEast)
    } else if bottom && left {
        Some(ResizeDirection::SouthWest)
    } else if bottom && right {
        Some(ResizeDirection::SouthEast)
    } else if top {
        Some(ResizeDirection::North)
    } else if bottom {
        Some(ResizeDirection::South)
    } else if left {
        Some(ResizeDirection::West)
    } else if right {
        Some(ResizeDirection::East)
    } else {
        None
    }
}

/// CSS cursor for a hovered resize direction. Passive affordance only; it
/// commits to nothing.
pub fn resize_cursor(direction: Option<ResizeDirection>) -> &'static str {
    match direction {
        Some(ResizeDirection::North) | Some(ResizeDirection::South) => "ns-resize",
        Some(ResizeDirection::East) | Some(ResizeDirection::West) => "ew-resize",
        Some(ResizeDirection::NorthEast) | Some(ResizeDirection::SouthWest) => "nesw-resize",
        Some(ResizeDirection::NorthWest) | Some(ResizeDirection::SouthEast) => "nwse-resize",
        None => "",
    }
}

/// New geometry for an armed drag session at the given pointer position.
///
/// Position is the session-start rect translated by the raw pointer delta; no
/// viewport clamping (windows may be dragged partially or fully off-screen).
pub fn dragged_rect(session: &DragSession, pointer: PointerPosition) -> WindowRect {
    session.rect_start.offset(
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
    )
}

/// New geometry for an armed resize session at the given pointer position.
///
/// Each directional component clamps its dimension to the minimum first, then
/// derives any anchor shift from the actual clamped change rather than the raw
/// delta, so the opposite edge stays put once the floor is hit even while the
/// pointer keeps travelling past it.
pub fn resized_rect(
    session: &ResizeSession,
    pointer: PointerPosition,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let start = session.rect_start;
    let direction = session.direction;

    let mut rect = start;

    if direction.has_east() {
        rect.w = (start.w + dx).max(min_w);
    } else if direction.has_west() {
        let w = (start.w - dx).max(min_w);
        rect.x = start.x + (start.w - w);
        rect.w = w;
    }

    if direction.has_south() {
        rect.h = (start.h + dy).max(min_h);
    } else if direction.has_north() {
        let h = (start.h - dy).max(min_h);
        rect.y = start.y + (start.h - h);
        rect.h = h;
    }

    rect
}
