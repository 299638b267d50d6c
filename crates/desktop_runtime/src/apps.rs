//! Installed-app catalog and the module-loading boundary.
//!
//! The loader resolves app modules asynchronously even though every built-in
//! ships in the binary: window creation must never block on content, and the
//! boundary stays compatible with fetched bundles later.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use desktop_app_contract::{
    AppLoadError, AppLoadFuture, AppLoader, AppMetadata, AppModule, AppSurface, ApplicationId,
};
use desktop_app_notepad::NotepadApp;
use leptos::*;

use crate::model::OpenWindowRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Launcher-facing entry for one installed app.
pub struct AppDescriptor {
    /// Canonical application id.
    pub app_id: ApplicationId,
    /// Label shown in the start menu.
    pub launcher_label: &'static str,
    /// Short blurb under the label.
    pub launcher_blurb: &'static str,
}

/// All installed apps, in launcher display order.
pub fn installed_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor {
            app_id: ApplicationId::trusted("app.notepad"),
            launcher_label: "Notepad",
            launcher_blurb: "Plain text scratchpad",
        },
        AppDescriptor {
            app_id: ApplicationId::trusted("system.about"),
            launcher_label: "About",
            launcher_blurb: "Desktop environment info",
        },
    ]
}

/// Open request for launching an app from a launcher surface.
pub fn default_open_request(descriptor: &AppDescriptor) -> OpenWindowRequest {
    let mut req = OpenWindowRequest::new(descriptor.app_id.clone());
    req.title = Some(descriptor.launcher_label.to_string());
    req
}

/// Resolves built-in app modules through the async [`AppLoader`] boundary.
///
/// Resolved modules are cached per id so repeated windows of the same app share
/// one module instance.
pub struct StaticAppLoader {
    cache: RefCell<HashMap<ApplicationId, Rc<dyn AppModule>>>,
}

impl StaticAppLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn instantiate(app_id: &ApplicationId) -> Option<Rc<dyn AppModule>> {
        match app_id.as_str() {
            "app.notepad" => Some(Rc::new(NotepadApp::new())),
            "system.about" => Some(Rc::new(AboutApp::new())),
            _ => None,
        }
    }
}

impl Default for StaticAppLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLoader for StaticAppLoader {
    fn load(&self, app_id: &ApplicationId) -> AppLoadFuture {
        let cached = self.cache.borrow().get(app_id).cloned();
        let app_id = app_id.clone();
        if let Some(module) = cached {
            return Box::pin(async move { Ok(module) });
        }

        let module = Self::instantiate(&app_id);
        if let Some(module) = module.clone() {
            self.cache.borrow_mut().insert(app_id.clone(), module);
        }
        Box::pin(async move { module.ok_or(AppLoadError::ModuleNotFound(app_id)) })
    }
}

/// Built-in About panel.
struct AboutApp {
    metadata: AppMetadata,
}

impl AboutApp {
    fn new() -> Self {
        Self {
            metadata: AppMetadata {
                id: ApplicationId::trusted("system.about"),
                name: "About".to_string(),
                description: "Desktop environment info".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

impl AppModule for AboutApp {
    fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    fn render(&self, _surface: &AppSurface) -> View {
        let version = self.metadata.version.clone();
        view! {
            <div class="app app-about">
                <h2>"Desktop"</h2>
                <p>"A windowed desktop environment running in the browser."</p>
                <dl>
                    <dt>"Version"</dt>
                    <dd>{version}</dd>
                </dl>
            </div>
        }
        .into_view()
    }
}
