use super::*;
#[cfg(target_arch = "wasm32")]
use crate::interaction::hit_test_resize;
#[cfg(target_arch = "wasm32")]
use crate::model::RESIZE_HANDLE_MARGIN;
use crate::{
    interaction::resize_cursor,
    model::{ResizeDirection, WindowId},
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// True when the event originated inside a nested interactive control; those
/// never arm a drag session.
#[cfg(target_arch = "wasm32")]
fn targets_nested_control(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn targets_nested_control(_: &web_sys::PointerEvent) -> bool {
    false
}

/// Maps a pointer event to a resize direction using the window's own bounding
/// box and the fixed handle margin.
#[cfg(target_arch = "wasm32")]
fn resize_hit_from_event(ev: &web_sys::PointerEvent) -> Option<ResizeDirection> {
    let element = ev
        .current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?;
    let bounds = element.get_bounding_client_rect();
    hit_test_resize(
        bounds.width() as i32,
        bounds.height() as i32,
        ev.client_x() - bounds.left() as i32,
        ev.client_y() - bounds.top() as i32,
        RESIZE_HANDLE_MARGIN,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn resize_hit_from_event(_: &web_sys::PointerEvent) -> Option<ResizeDirection> {
    None
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime.state.get().registry.get(window_id).cloned()
    });
    let hover_cursor = create_rw_signal("");

    let minimize = move |_| runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move |_| {
        if let Some(win) = window.get() {
            if win.maximized {
                runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
            } else {
                runtime.dispatch_action(DesktopAction::MaximizeWindow {
                    window_id,
                    viewport: desktop_viewport_rect(TASKBAR_HEIGHT_PX),
                });
            }
        }
    };

    // Pointer-down anywhere on the chrome: edge/corner arms a resize session,
    // anywhere else just activates.
    let frame_pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let maximized = window.get_untracked().map(|w| w.maximized).unwrap_or(false);
        if !maximized {
            if let Some(direction) = resize_hit_from_event(&ev) {
                try_set_pointer_capture(&ev);
                ev.prevent_default();
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::BeginResize {
                    window_id,
                    direction,
                    pointer: pointer_from_pointer_event(&ev),
                });
                return;
            }
        }
        runtime.dispatch_action(DesktopAction::ActivateWindow { window_id });
    };
    let frame_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().is_armed() {
            return;
        }
        let maximized = window.get_untracked().map(|w| w.maximized).unwrap_or(false);
        let cursor = if maximized {
            ""
        } else {
            resize_cursor(resize_hit_from_event(&ev))
        };
        if hover_cursor.get_untracked() != cursor {
            hover_cursor.set(cursor);
        }
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || targets_nested_control(&ev) {
            return;
        }
        // The title bar sits inside the resize margin at the top; edge hits
        // take precedence over dragging.
        let maximized = window.get_untracked().map(|w| w.maximized).unwrap_or(false);
        if !maximized && resize_hit_from_event(&ev).is_some() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        toggle_maximize(ev);
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};cursor:{};",
                    win.rect.x,
                    win.rect.y,
                    win.rect.w,
                    win.rect.h,
                    win.z_index,
                    hover_cursor.get()
                );
                let active_class = if win.is_active { " active" } else { "" };
                let minimized_class = if win.minimized { " minimized" } else { "" };
                let maximized_class = if win.maximized { " maximized" } else { "" };

                view! {
                    <section
                        class=format!(
                            "desktop-window{}{}{}",
                            active_class,
                            minimized_class,
                            maximized_class
                        )
                        style=style
                        on:pointerdown=frame_pointer_down
                        on:pointermove=frame_pointer_move
                        role="dialog"
                        aria-label=win.title.clone()
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <div class="titlebar-title">
                                <span class="titlebar-app-icon" aria-hidden="true">
                                    <FluentIcon icon=app_icon_name(&win.app_id) size=IconSize::Sm />
                                </span>
                                <span>{win.title.clone()}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                >
                                    <FluentIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    aria-label=if win.maximized {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize(ev);
                                    }
                                >
                                    <FluentIcon
                                        icon=if win.maximized {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        }
                                        size=IconSize::Xs
                                    />
                                </button>
                                <button
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                >
                                    <FluentIcon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody window_id=window_id />
                        </div>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    // Content is rendered once per window when its load effect resolves;
    // until then the body stays empty.
    view! {
        <div class="window-body-content">
            {move || runtime.app_views.get().get(&window_id).cloned()}
        </div>
    }
}
