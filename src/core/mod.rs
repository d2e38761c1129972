//! Core-Domänentypen: Projekte, Kurvenpunkte, Projekt-Store, Chart-Skala.

pub mod chart_scale;
pub mod curve_point;
/// Projekt-Datenmodell
///
/// Ein `Project` beschreibt eine Impact-Kurve über drei Kontrollparameter:
/// - x_intercept: Funding, bei dem der Impact 0 erreicht
/// - y_intercept: Impact bei Funding 0
/// - middle_point: Bézier-Steuerpunkt
pub mod project;
pub mod project_store;
pub mod sample_data;

pub use chart_scale::{round_to_step, ChartScale};
pub use curve_point::CurvePoint;
pub use project::{Project, DEFAULT_PROJECT_COLOR};
pub use project_store::ProjectStore;
pub use sample_data::sample_projects;
