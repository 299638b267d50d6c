//! Plain-text notepad app backed by app-scoped key/value persistence.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use desktop_app_contract::{AppDataStore, AppMetadata, AppModule, AppSurface, ApplicationId};
use leptos::*;
use serde::{Deserialize, Serialize};

const DOCUMENT_KEY: &str = "document";

fn notepad_id() -> ApplicationId {
    ApplicationId::trusted("app.notepad")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct NotepadDocument {
    text: String,
}

fn load_document(store: &Rc<dyn AppDataStore>) -> NotepadDocument {
    store
        .load(&notepad_id(), DOCUMENT_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_document(store: &Rc<dyn AppDataStore>, document: &NotepadDocument) -> Result<(), String> {
    let raw = serde_json::to_string(document).map_err(|err| err.to_string())?;
    store.save(&notepad_id(), DOCUMENT_KEY, &raw)
}

/// Notepad app module: a single persistent plain-text document per profile.
pub struct NotepadApp {
    metadata: AppMetadata,
}

impl NotepadApp {
    /// Creates the notepad module.
    pub fn new() -> Self {
        Self {
            metadata: AppMetadata {
                id: notepad_id(),
                name: "Notepad".to_string(),
                description: "Plain text scratchpad".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

impl Default for NotepadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for NotepadApp {
    fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    fn render(&self, surface: &AppSurface) -> View {
        let surface = surface.clone();
        view! { <NotepadView surface=surface /> }.into_view()
    }
}

#[component]
fn NotepadView(surface: AppSurface) -> impl IntoView {
    let text = create_rw_signal(load_document(&surface.data).text);
    let status = create_rw_signal("Saved");

    let store = surface.data.clone();
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        text.set(value.clone());
        match save_document(&store, &NotepadDocument { text: value }) {
            Ok(()) => status.set("Saved"),
            Err(err) => {
                logging::warn!("notepad save failed: {err}");
                status.set("Save failed");
            }
        }
    };

    view! {
        <div class="app app-notepad">
            <textarea
                class="notepad-editor"
                aria-label="Note text"
                spellcheck="false"
                prop:value=move || text.get()
                on:input=on_input
            ></textarea>
            <footer class="notepad-statusbar">
                <span>{move || status.get()}</span>
                <span class="notepad-length">
                    {move || format!("{} chars", text.get().chars().count())}
                </span>
            </footer>
        </div>
    }
}
