//! Impact Curve Editor Library.
//! Kurven-Mathematik, Editor-Zustand und Chart-Szene als Library exportiert
//! für Tests und Hosts mit eigenem Renderer.

pub mod app;
pub mod core;
pub mod curve;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, DragTarget, ProjectEditor,
};
pub use core::{sample_projects, ChartScale, CurvePoint, Project, ProjectStore};
pub use curve::{aggregate, aggregate_with, generate_curve, generate_curve_points, AggregateConfig};
pub use shared::{ChartScene, ControlHandles, EditorOptions, ProjectSeries};
