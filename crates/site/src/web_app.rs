use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host::HostServices;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A windowed desktop environment running in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=HostServices::web()>
            <DesktopShell />
        </DesktopProvider>
    }
}
