use super::*;
use crate::model::WindowRecord;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let toggle_start = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
    };
    let toggle_tray = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleTray);
    };

    view! {
        <footer
            class="taskbar"
            style=format!("height:{}px;", TASKBAR_HEIGHT_PX)
            // Clicks on the bar itself must not reach the dismiss layer.
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                class="taskbar-start-button"
                class:open=move || state.get().start_menu_open
                aria-label="Open start menu"
                aria-expanded=move || state.get().start_menu_open.to_string()
                on:click=toggle_start
            >
                <FluentIcon icon=IconName::Launcher size=IconSize::Sm />
            </button>

            <div class="taskbar-windows" role="toolbar" aria-label="Open windows">
                <For
                    each=move || state.get().registry.list().to_vec()
                    key=|win| win.id.0
                    let:win
                >
                    <TaskbarWindowButton window=win />
                </For>
            </div>

            <button
                class="taskbar-tray-button"
                class:open=move || state.get().tray_open
                aria-label="Open system tray"
                aria-expanded=move || state.get().tray_open.to_string()
                on:click=toggle_tray
            >
                <FluentIcon icon=IconName::WifiOn size=IconSize::Sm />
            </button>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(window: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = window.id;
    let state = runtime.state;

    let is_active = Signal::derive(move || {
        state
            .get()
            .registry
            .get(window_id)
            .map(|w| w.is_active && !w.minimized)
            .unwrap_or(false)
    });
    let is_minimized = Signal::derive(move || {
        state
            .get()
            .registry
            .get(window_id)
            .map(|w| w.minimized)
            .unwrap_or(false)
    });

    view! {
        <button
            class="taskbar-window-button"
            class:active=move || is_active.get()
            class:minimized=move || is_minimized.get()
            on:click=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { window_id });
            }
        >
            <FluentIcon icon=app_icon_name(&window.app_id) size=IconSize::Sm />
            <span class="taskbar-window-title">{window.title.clone()}</span>
        </button>
    }
}
