use super::*;

#[component]
pub(super) fn TrayPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().tray_open fallback=|| ()>
            <aside
                class="tray-panel"
                aria-label="System status"
                style=format!("bottom:{}px;", TASKBAR_HEIGHT_PX)
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <ul>
                    <li class="tray-row">
                        <FluentIcon icon=IconName::WifiOn size=IconSize::Sm />
                        <span>"Network"</span>
                        <span class="tray-value">"Connected"</span>
                    </li>
                    <li class="tray-row">
                        <span>"Volume"</span>
                        <span class="tray-value">"72%"</span>
                    </li>
                    <li class="tray-row">
                        <span>"Battery"</span>
                        <span class="tray-value">"Charged"</span>
                    </li>
                </ul>
            </aside>
        </Show>
    }
}
