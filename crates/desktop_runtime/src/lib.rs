pub mod apps;
pub mod components;
pub mod host;
pub mod icons;
pub mod interaction;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use registry::WindowRegistry;
pub use runtime_context::use_desktop_runtime;
