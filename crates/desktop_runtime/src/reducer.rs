//! Reducer actions, side-effect intents, and transition logic for the window
//! lifecycle state machine.
//!
//! Every operation on a missing window id is a silent no-op: window removal
//! races against in-flight pointer sessions and late taskbar clicks, and those
//! must degrade to nothing rather than surface an error.

use desktop_app_contract::ApplicationId;

use crate::{
    interaction::{dragged_rect, resized_rect},
    model::{
        DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition,
        ResizeDirection, ResizeSession, WindowId, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Activate (and raise) a window by id.
    ActivateWindow {
        /// Window to activate.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window into the provided viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Viewport rectangle (already excluding the taskbar).
        viewport: WindowRect,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Overwrite a window's position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left position.
        x: i32,
        /// New top-left position.
        y: i32,
    },
    /// Overwrite a window's size, clamped to the minimum floor.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New width.
        w: i32,
        /// New height.
        h: i32,
    },
    /// Taskbar button policy: restore if minimized, minimize if active,
    /// otherwise activate.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Toggle the system tray popover.
    ToggleTray,
    /// Close the system tray popover if open.
    CloseTray,
    /// Arm a drag session for a window's title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Feed a pointer position to every armed drag session.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Disarm all drag sessions (pointer released anywhere).
    EndDrag,
    /// Arm a resize session for a detected edge/corner.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner under the pointer at pointer-down.
        direction: ResizeDirection,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Feed a pointer position to every armed resize session.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Disarm all resize sessions (pointer released anywhere).
    EndResize,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell to execute.
pub enum RuntimeEffect {
    /// Mount app content into the newly created window.
    RenderApp(WindowId),
    /// Tear down app content for a closed window.
    DestroyApp {
        /// The removed window.
        window_id: WindowId,
        /// App module that owned the window's content.
        app_id: ApplicationId,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects side effects.
///
/// This is the authoritative transition engine for window management. It never
/// fails: unknown ids and stale sessions reduce to no-ops.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let rect = req
                .rect
                .unwrap_or_else(|| cascade_rect(state.registry.len()))
                .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            let title = req
                .title
                .unwrap_or_else(|| req.app_id.as_str().to_string());
            let window_id = state.registry.add(req.app_id, title, rect, true);
            state.registry.deactivate_others(window_id);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::RenderApp(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            if let Some(removed) = state.registry.remove(window_id) {
                interaction.forget_window(window_id);
                effects.push(RuntimeEffect::DestroyApp {
                    window_id,
                    app_id: removed.app_id,
                });
            }
        }
        DesktopAction::ActivateWindow { window_id } => {
            activate_window(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            // Geometry untouched; no other window is auto-activated, the user
            // must click to refocus.
            state.registry.update(window_id, |w| {
                w.minimized = true;
                w.is_active = false;
            });
        }
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => {
            state.registry.update(window_id, |w| {
                // Capture the snapshot only once so a repeated maximize cannot
                // overwrite it with already-maximized geometry.
                if w.restore_rect.is_none() {
                    w.restore_rect = Some(w.rect);
                }
                w.rect = viewport.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                w.maximized = true;
                w.minimized = false;
            });
        }
        DesktopAction::RestoreWindow { window_id } => {
            state.registry.update(window_id, |w| {
                if let Some(rect) = w.restore_rect.take() {
                    w.rect = rect;
                }
                // Without a snapshot the last explicit geometry stands; the
                // lifecycle never fabricates sizes.
                w.maximized = false;
                w.minimized = false;
            });
            activate_window(state, window_id);
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            // Silently overwrites in any state, including maximized; the
            // snapshot still wins on restore.
            state.registry.update(window_id, |w| {
                w.rect.x = x;
                w.rect.y = y;
            });
        }
        DesktopAction::ResizeWindow { window_id, w, h } => {
            state.registry.update(window_id, |record| {
                record.rect.w = w.max(MIN_WINDOW_WIDTH);
                record.rect.h = h.max(MIN_WINDOW_HEIGHT);
            });
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let Some((minimized, active)) = state
                .registry
                .get(window_id)
                .map(|w| (w.minimized, w.is_active))
            else {
                return effects;
            };
            if minimized {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::RestoreWindow { window_id },
                ));
            } else if active {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeWindow { window_id },
                ));
            } else {
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::ActivateWindow { window_id },
                ));
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            state.tray_open = false;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::ToggleTray => {
            state.tray_open = !state.tray_open;
            state.start_menu_open = false;
        }
        DesktopAction::CloseTray => {
            state.tray_open = false;
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            let Some((rect_start, maximized)) = state
                .registry
                .get(window_id)
                .map(|w| (w.rect, w.maximized))
            else {
                return effects;
            };
            activate_window(state, window_id);
            // A maximized window is pinned to the viewport; its title bar
            // focuses but never arms a drag.
            if maximized {
                return effects;
            }
            interaction.drags.retain(|s| s.window_id != window_id);
            interaction.drags.push(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateDrag { pointer } => {
            for session in &interaction.drags {
                let rect = dragged_rect(session, pointer);
                state.registry.update(session.window_id, |w| {
                    // A session armed before a maximize must not pull the
                    // window away from the viewport.
                    if w.maximized {
                        return;
                    }
                    w.rect.x = rect.x;
                    w.rect.y = rect.y;
                });
            }
        }
        DesktopAction::EndDrag => {
            interaction.drags.clear();
        }
        DesktopAction::BeginResize {
            window_id,
            direction,
            pointer,
        } => {
            let Some(rect_start) = state.registry.get(window_id).map(|w| w.rect) else {
                return effects;
            };
            activate_window(state, window_id);
            interaction.resizes.retain(|s| s.window_id != window_id);
            interaction.resizes.push(ResizeSession {
                window_id,
                direction,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            for session in &interaction.resizes {
                let rect = resized_rect(session, pointer, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                state.registry.update(session.window_id, |w| w.rect = rect);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizes.clear();
        }
    }

    effects
}

/// Activation policy: the target gains the active flag and a fresh top
/// z-index; everyone else loses the flag.
///
/// Activating the already-active window still bumps its z-index. That is
/// deliberate: taskbar click-to-minimize detection relies on observing "was
/// already active", and the extra bump is harmless.
fn activate_window(state: &mut DesktopState, window_id: WindowId) {
    if state.registry.get(window_id).is_none() {
        return;
    }
    state.registry.raise(window_id);
    state.registry.update(window_id, |w| w.is_active = true);
    state.registry.deactivate_others(window_id);
}

fn cascade_rect(open_windows: usize) -> WindowRect {
    let offset = (open_windows % 8) as i32 * 20;
    WindowRect {
        x: 40 + offset,
        y: 48 + offset,
        ..WindowRect::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    fn notepad() -> ApplicationId {
        ApplicationId::trusted("app.notepad")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState) -> WindowId {
        open_at(state, interaction, WindowRect::default())
    }

    fn open_at(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        rect: WindowRect,
    ) -> WindowId {
        let mut req = OpenWindowRequest::new(notepad());
        req.rect = Some(rect);
        reduce_desktop(state, interaction, DesktopAction::OpenWindow(req));
        state.registry.list().last().expect("window").id
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    fn viewport() -> WindowRect {
        rect(0, 0, 1280, 752)
    }

    fn get(state: &DesktopState, id: WindowId) -> crate::model::WindowRecord {
        state.registry.get(id).expect("window exists").clone()
    }

    #[test]
    fn open_window_activates_it_and_deactivates_the_rest() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction);
        let second = open(&mut state, &mut interaction);

        assert!(!get(&state, first).is_active);
        assert!(get(&state, second).is_active);
        assert!(get(&state, second).z_index > get(&state, first).z_index);
        assert_eq!(state.registry.active_window_id(), Some(second));
    }

    #[test]
    fn open_window_emits_render_effect_and_closes_start_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        state.start_menu_open = true;

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(notepad())),
        );

        let id = state.registry.list()[0].id;
        assert_eq!(effects, vec![RuntimeEffect::RenderApp(id)]);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn activation_strictly_increases_z_beyond_all_others() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let c = open(&mut state, &mut interaction);

        for target in [a, c, b, a, a, c] {
            let top_before = state.registry.max_z_index();
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateWindow { window_id: target },
            );
            assert!(get(&state, target).z_index > top_before);
        }
    }

    #[test]
    fn activating_active_window_still_bumps_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction);
        let before = get(&state, id).z_index;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow { window_id: id },
        );

        assert!(get(&state, id).z_index > before);
        assert!(get(&state, id).is_active);
    }

    #[test]
    fn at_most_one_window_active_after_any_sequence() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let c = open(&mut state, &mut interaction);

        let script = [
            DesktopAction::ActivateWindow { window_id: a },
            DesktopAction::MinimizeWindow { window_id: a },
            DesktopAction::ActivateWindow { window_id: c },
            DesktopAction::MinimizeWindow { window_id: c },
            DesktopAction::ActivateWindow { window_id: b },
            DesktopAction::MinimizeWindow { window_id: b },
        ];
        for action in script {
            reduce_desktop(&mut state, &mut interaction, action);
            let active = state
                .registry
                .list()
                .iter()
                .filter(|w| w.is_active)
                .count();
            assert!(active <= 1, "single-active invariant violated");
        }
    }

    #[test]
    fn minimize_clears_active_without_promoting_another_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);
        let rect_before = get(&state, b).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: b },
        );

        assert!(get(&state, b).minimized);
        assert!(!get(&state, b).is_active);
        assert!(!get(&state, a).is_active);
        assert_eq!(state.registry.active_window_id(), None);
        assert_eq!(get(&state, b).rect, rect_before);
    }

    #[test]
    fn maximize_restore_round_trips_geometry_exactly() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(10, 20, 300, 200));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: id,
                viewport: viewport(),
            },
        );
        let maxed = get(&state, id);
        assert!(maxed.maximized);
        assert_eq!(maxed.rect, viewport());
        assert_eq!(maxed.restore_rect, Some(rect(10, 20, 300, 200)));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: id },
        );
        let restored = get(&state, id);
        assert!(!restored.maximized);
        assert_eq!(restored.rect, rect(10, 20, 300, 200));
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn double_maximize_keeps_the_first_snapshot() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(10, 20, 300, 200));

        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MaximizeWindow {
                    window_id: id,
                    viewport: viewport(),
                },
            );
        }

        assert_eq!(get(&state, id).restore_rect, Some(rect(10, 20, 300, 200)));
    }

    #[test]
    fn maximize_from_minimized_clears_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: id,
                viewport: viewport(),
            },
        );

        let window = get(&state, id);
        assert!(window.maximized);
        assert!(!window.minimized);
    }

    #[test]
    fn restore_without_snapshot_keeps_last_explicit_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(30, 40, 320, 240));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: id },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: id },
        );

        let window = get(&state, id);
        assert_eq!(window.rect, rect(30, 40, 320, 240));
        assert!(!window.minimized);
        assert!(window.is_active);
    }

    #[test]
    fn scenario_create_activate_minimize_restore() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open_at(&mut state, &mut interaction, rect(0, 0, 600, 400));
        let b = open(&mut state, &mut interaction);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateWindow { window_id: a },
        );
        assert!(get(&state, a).z_index > get(&state, b).z_index);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a },
        );
        assert!(!get(&state, a).is_active);
        assert!(get(&state, a).minimized);
        assert!(!get(&state, b).minimized);
        assert!(!get(&state, b).is_active);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: a },
        );
        assert!(get(&state, a).is_active);
        assert!(!get(&state, a).minimized);
        assert!(get(&state, a).z_index > get(&state, b).z_index);
    }

    #[test]
    fn close_window_emits_destroy_and_forgets_sessions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 5, y: 5 },
            },
        );
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::DestroyApp {
                window_id: id,
                app_id: notepad(),
            }]
        );
        assert!(state.registry.is_empty());
        assert!(!interaction.is_armed());
    }

    #[test]
    fn operations_on_unknown_ids_are_silent_noops() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction);
        let ghost = WindowId(999);
        let before = state.clone();

        let actions = [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::ActivateWindow { window_id: ghost },
            DesktopAction::MinimizeWindow { window_id: ghost },
            DesktopAction::MaximizeWindow {
                window_id: ghost,
                viewport: viewport(),
            },
            DesktopAction::RestoreWindow { window_id: ghost },
            DesktopAction::MoveWindow {
                window_id: ghost,
                x: 1,
                y: 1,
            },
            DesktopAction::ResizeWindow {
                window_id: ghost,
                w: 300,
                h: 300,
            },
            DesktopAction::ToggleTaskbarWindow { window_id: ghost },
            DesktopAction::BeginDrag {
                window_id: ghost,
                pointer: PointerPosition { x: 0, y: 0 },
            },
            DesktopAction::BeginResize {
                window_id: ghost,
                direction: ResizeDirection::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        ];
        for action in actions {
            let effects = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(effects, Vec::new());
            assert_eq!(state, before);
            assert!(!interaction.is_armed());
        }
    }

    #[test]
    fn drag_session_moves_window_by_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(100, 100, 600, 400));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 400, y: 120 },
            },
        );
        assert!(get(&state, id).is_active);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 425, y: 160 },
            },
        );
        assert_eq!(get(&state, id).rect, rect(125, 140, 600, 400));

        // Off-screen travel is permitted.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: -500, y: -500 },
            },
        );
        assert_eq!(get(&state, id).rect, rect(-800, -520, 600, 400));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);
        assert!(interaction.drags.is_empty());
    }

    #[test]
    fn pointer_moves_without_an_armed_session_do_not_move_windows() {
        // A pointer-down on a nested control never arms a session (the DOM
        // layer filters it out), so subsequent moves must leave geometry alone.
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(100, 100, 600, 400));

        for pointer in [
            PointerPosition { x: 130, y: 110 },
            PointerPosition { x: 400, y: 300 },
        ] {
            reduce_desktop(&mut state, &mut interaction, DesktopAction::UpdateDrag { pointer });
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateResize { pointer },
            );
        }

        assert_eq!(get(&state, id).rect, rect(100, 100, 600, 400));
    }

    #[test]
    fn dragging_a_maximized_window_keeps_viewport_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(10, 20, 300, 200));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: id,
                viewport: viewport(),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 600, y: 10 },
            },
        );
        assert!(get(&state, id).is_active);
        assert!(!interaction.is_armed());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 900, y: 300 },
            },
        );
        let window = get(&state, id);
        assert!(window.maximized);
        assert_eq!(window.rect, viewport());
    }

    #[test]
    fn maximize_during_armed_drag_pins_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(10, 20, 300, 200));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 100, y: 30 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: id,
                viewport: viewport(),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 400, y: 320 },
            },
        );
        assert_eq!(get(&state, id).rect, viewport());

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndDrag);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: id },
        );
        assert_eq!(get(&state, id).rect, rect(10, 20, 300, 200));
    }

    #[test]
    fn resize_session_applies_anchored_clamped_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(0, 0, 400, 300));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                direction: ResizeDirection::NorthWest,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 50, y: 30 },
            },
        );
        assert_eq!(get(&state, id).rect, rect(50, 30, 350, 270));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize);
        assert!(interaction.resizes.is_empty());
    }

    #[test]
    fn update_after_concurrent_close_degrades_to_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: a,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        // Simulate the window vanishing mid-session without EndDrag.
        state.registry.remove(a);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 50, y: 50 },
            },
        );
        assert!(state.registry.get(a).is_none());
        assert!(state.registry.get(b).is_some());
    }

    #[test]
    fn explicit_resize_clamps_to_minimum_floor() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: id,
                w: -50,
                h: 10,
            },
        );

        let resized = get(&state, id).rect;
        assert_eq!((resized.w, resized.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn move_while_maximized_overwrites_geometry_silently() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open_at(&mut state, &mut interaction, rect(10, 20, 300, 200));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: id,
                viewport: viewport(),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: id,
                x: 77,
                y: 88,
            },
        );

        let window = get(&state, id);
        assert!(window.maximized);
        assert_eq!((window.rect.x, window.rect.y), (77, 88));
        // The snapshot still wins on restore.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: id },
        );
        assert_eq!(get(&state, id).rect, rect(10, 20, 300, 200));
    }

    #[test]
    fn taskbar_toggle_restores_minimizes_or_activates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction);
        let b = open(&mut state, &mut interaction);

        // `a` is inactive: toggle activates it.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: a },
        );
        assert!(get(&state, a).is_active);

        // `a` is active: toggle minimizes it.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: a },
        );
        assert!(get(&state, a).minimized);

        // `a` is minimized: toggle restores and activates it.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: a },
        );
        assert!(!get(&state, a).minimized);
        assert!(get(&state, a).is_active);
        assert!(get(&state, a).z_index > get(&state, b).z_index);
    }

    #[test]
    fn cascade_rect_offsets_and_defaults() {
        let first = cascade_rect(0);
        let second = cascade_rect(1);
        assert_eq!((first.w, first.h), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
        assert_eq!((second.x - first.x, second.y - first.y), (20, 20));
    }

    #[test]
    fn cross_window_sessions_stay_independent() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open_at(&mut state, &mut interaction, rect(0, 0, 600, 400));
        let b = open_at(&mut state, &mut interaction, rect(700, 0, 600, 400));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: a,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                window_id: b,
                pointer: PointerPosition { x: 710, y: 10 },
            },
        );
        assert_eq!(interaction.drags.len(), 2);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition { x: 20, y: 20 },
            },
        );
        assert_eq!((get(&state, a).rect.x, get(&state, a).rect.y), (10, 10));
        assert_eq!((get(&state, b).rect.x, get(&state, b).rect.y), (10, 10));
    }
}
