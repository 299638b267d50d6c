//! Desktop shell UI composition and interaction surfaces.

mod start_menu;
mod taskbar;
mod tray;
mod window;

use leptos::*;

use self::{start_menu::StartMenu, taskbar::Taskbar, tray::TrayPanel, window::DesktopWindow};

use crate::{
    host::desktop_viewport_rect,
    icons::{app_icon_name, FluentIcon, IconName, IconSize},
    model::{PointerPosition, TASKBAR_HEIGHT_PX},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

pub use crate::runtime_context::{DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: window layer, taskbar, launcher, and tray.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let desktop = state.get_untracked();
        if desktop.start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
        if desktop.tray_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseTray);
        }
    });
    on_cleanup(move || escape_listener.remove());

    // Pointer sessions are document-scoped: the pointer routinely leaves the
    // window element mid-drag, so move/up are observed at the shell root.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if !interaction.drags.is_empty() {
            runtime.dispatch_action(DesktopAction::UpdateDrag { pointer });
        }
        if !interaction.resizes.is_empty() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop">
                <div
                    class="desktop-dismiss-layer"
                    on:mousedown=move |_| {
                        let desktop = runtime.state.get_untracked();
                        if desktop.start_menu_open {
                            runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        }
                        if desktop.tray_open {
                            runtime.dispatch_action(DesktopAction::CloseTray);
                        }
                    }
                />
                <div class="desktop-window-layer">
                    <For
                        each=move || state.get().registry.list().to_vec()
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </div>
                <StartMenu />
                <TrayPanel />
            </div>

            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if !interaction.drags.is_empty() {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
    if !interaction.resizes.is_empty() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}
