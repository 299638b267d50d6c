//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the app-session table,
//! and host service wiring. UI composition stays in [`crate::components`].

use std::{collections::HashMap, rc::Rc};

use leptos::*;
use platform_host::HostServices;

use desktop_app_contract::{AppLoader, AppModule, AppSurface};

use crate::{
    apps::StaticAppLoader,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

/// Live app modules keyed by the window hosting them.
pub type AppSessions = HashMap<WindowId, Rc<dyn AppModule>>;

/// Rendered app content keyed by the window hosting it.
pub type AppViews = HashMap<WindowId, View>;

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching
/// [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle injected by the entry layer.
    pub host: StoredValue<HostServices>,
    /// App module loader shared by all windows.
    pub loader: StoredValue<Rc<StaticAppLoader>>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Resolved app modules per open window, registered as their content loads.
    pub app_sessions: RwSignal<AppSessions>,
    /// Rendered app content per open window, read by the window body.
    pub app_views: RwSignal<AppViews>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn execute_effects(
    host: StoredValue<HostServices>,
    loader: StoredValue<Rc<StaticAppLoader>>,
    state: RwSignal<DesktopState>,
    app_sessions: RwSignal<AppSessions>,
    app_views: RwSignal<AppViews>,
    effects: Vec<RuntimeEffect>,
) {
    for effect in effects {
        match effect {
            RuntimeEffect::RenderApp(window_id) => {
                let Some(app_id) = state
                    .get_untracked()
                    .registry
                    .get(window_id)
                    .map(|w| w.app_id.clone())
                else {
                    continue;
                };
                let loader = loader.get_value();
                spawn_local(async move {
                    match loader.load(&app_id).await {
                        Ok(module) => {
                            // The window may have closed while the module
                            // resolved; drop the result on arrival.
                            if state.get_untracked().registry.get(window_id).is_none() {
                                return;
                            }
                            let surface = AppSurface {
                                window_id: window_id.0,
                                data: host.get_value().app_data,
                            };
                            app_sessions.update(|sessions| {
                                sessions.insert(window_id, module.clone());
                            });
                            let view = module.render(&surface);
                            app_views.update(|views| {
                                views.insert(window_id, view);
                            });
                        }
                        Err(err) => {
                            logging::error!("window {} content failed: {err}", window_id.0);
                        }
                    }
                });
            }
            RuntimeEffect::DestroyApp { window_id, app_id } => {
                app_views.try_update(|views| views.remove(&window_id));
                let module = app_sessions
                    .try_update(|sessions| sessions.remove(&window_id))
                    .flatten();
                match module {
                    Some(module) => module.destroy(&AppSurface {
                        window_id: window_id.0,
                        data: host.get_value().app_data,
                    }),
                    // Window closed before its module resolved; the loader
                    // result is dropped on arrival.
                    None => logging::debug_warn!(
                        "no live session for {app_id} in window {}",
                        window_id.0
                    ),
                }
            }
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let loader = store_value(Rc::new(StaticAppLoader::new()));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let app_sessions = create_rw_signal(AppSessions::new());
    let app_views = create_rw_signal(AppViews::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !effects.is_empty() {
            execute_effects(host, loader, state, app_sessions, app_views, effects);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        loader,
        state,
        interaction,
        app_sessions,
        app_views,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics when called outside a [`DesktopProvider`] subtree.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    expect_context::<DesktopRuntimeContext>()
}
