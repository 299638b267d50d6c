use super::*;
use crate::apps::{self, AppDescriptor};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <nav
                class="start-menu"
                aria-label="Start menu"
                style=format!("bottom:{}px;", TASKBAR_HEIGHT_PX)
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <ul role="menu">
                    <For
                        each=apps::installed_apps
                        key=|app| app.app_id.to_string()
                        let:app
                    >
                        <StartMenuEntry app=app />
                    </For>
                </ul>
            </nav>
        </Show>
    }
}

#[component]
fn StartMenuEntry(app: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon = app_icon_name(&app.app_id);
    let label = app.launcher_label;
    let blurb = app.launcher_blurb;
    // Opening a window closes the menu in the same reducer step.
    let launch = {
        let app = app.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::OpenWindow(apps::default_open_request(&app)));
        }
    };

    view! {
        <li role="none">
            <button role="menuitem" class="start-menu-entry" on:click=launch>
                <FluentIcon icon=icon size=IconSize::Lg />
                <span class="start-menu-entry-label">{label}</span>
                <span class="start-menu-entry-blurb">{blurb}</span>
            </button>
        </li>
    }
}
