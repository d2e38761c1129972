//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod drag;
pub mod editor;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Entwurf, Projekte, Chart, Fokus).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use drag::{DragState, DragTarget, EditLimits};
pub use editor::ProjectEditor;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_chart_scene;
pub use state::AppState;
