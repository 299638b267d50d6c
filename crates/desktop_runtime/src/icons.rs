//! Centralized Fluent UI System Icon abstraction for the desktop shell.
//!
//! This module provides semantic icon identifiers and a single SVG renderer so shell
//! components do not embed raw icon strings or ad-hoc SVG snippets. The current catalog
//! uses a subset of Fluent UI System Icons (`@fluentui/svg-icons`, regular 24px) mapped
//! to desktop-shell semantics.

use leptos::*;

use desktop_app_contract::ApplicationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Text document / notepad app icon.
    DocumentText,
    /// Generic multi-window / fallback app icon.
    WindowMultiple,
    /// Start/launcher button glyph.
    Launcher,
    /// Network online icon.
    WifiOn,
    /// Window minimize control icon.
    WindowMinimize,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::DocumentText => "document-text",
            Self::WindowMultiple => "window-multiple",
            Self::Launcher => "launcher",
            Self::WifiOn => "wifi-on",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon.
    ///
    /// The paths are copied from `@fluentui/svg-icons` regular 24px SVG assets.
    fn svg_body(self) -> &'static str {
        match self {
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::WindowMultiple => {
                r#"<path d="M19 6.01c1.68.13 3 1.53 3 3.24v8A4.75 4.75 0 0 1 17.25 22h-8a3.25 3.25 0 0 1-3.24-3h1.51c.12.85.85 1.5 1.73 1.5h8c1.8 0 3.25-1.46 3.25-3.25v-8c0-.88-.65-1.6-1.5-1.73V6.01ZM14.75 2C16.55 2 18 3.46 18 5.25v9.5c0 1.8-1.46 3.25-3.25 3.25h-9.5A3.25 3.25 0 0 1 2 14.75v-9.5C2 3.45 3.46 2 5.25 2h9.5ZM3.5 14.75c0 .97.78 1.75 1.75 1.75h9.5c.97 0 1.75-.78 1.75-1.75V7.5h-13v7.25ZM5.25 3.5c-.97 0-1.75.78-1.75 1.75V6h13v-.75c0-.97-.78-1.75-1.75-1.75h-9.5Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h2.76L9 20.75V19.5H6.25c-.97 0-1.75-.78-1.75-1.75V8.5h15V9H21V6.26C21 4.45 19.54 3 17.75 3H6.25ZM19.5 7h-15v-.75c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7Zm-7.25 8.5h3.25v-3.25c0-1.24 1-2.25 2.25-2.25h3c1.24 0 2.25 1 2.25 2.25v7.5c0 1.8-1.46 3.25-3.25 3.25h-7.5C11.01 23 10 22 10 20.75v-3c0-1.24 1-2.25 2.25-2.25ZM17 12.25v3.25h4.5v-3.25a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 0-.75.75Zm-1.5 9.25V17h-3.25a.75.75 0 0 0-.75.75v3c0 .41.34.75.75.75h3.25ZM17 17v4.5h2.75c.97 0 1.75-.78 1.75-1.75V17H17Z"/>"#
            }
            Self::WifiOn => {
                r#"<path d="M17.74 10.75c.6.6 1.1 1.3 1.5 2.07a.75.75 0 1 1-1.34.68 6.56 6.56 0 0 0-11.71-.02.75.75 0 1 1-1.34-.67 8.06 8.06 0 0 1 12.9-2.06Zm-2.1 3.07c.45.45.82 1 1.08 1.58a.75.75 0 1 1-1.38.6A3.6 3.6 0 0 0 8.75 16a.75.75 0 1 1-1.37-.6 5.1 5.1 0 0 1 8.26-1.57Zm4.8-5.54c.52.5 1 1.09 1.42 1.7a.75.75 0 1 1-1.24.85 10.45 10.45 0 0 0-17.23 0 .75.75 0 0 1-1.23-.86 11.95 11.95 0 0 1 18.29-1.69Zm-7.38 8.16a1.5 1.5 0 1 1-2.12 2.12 1.5 1.5 0 0 1 2.12-2.12Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (menus/taskbar/tray).
    #[default]
    Sm,
    /// 20px medium icon (window chrome / prominent controls).
    Md,
    /// 24px large icon (launcher entries).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Returns the semantic Fluent icon mapped to an application id.
pub fn app_icon_name(app_id: &ApplicationId) -> IconName {
    match app_id.as_str() {
        "app.notepad" => IconName::DocumentText,
        _ => IconName::WindowMultiple,
    }
}

#[component]
/// Renders a Fluent UI System Icon SVG from the centralized shell icon catalog.
pub fn FluentIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
