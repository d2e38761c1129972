//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und die Chart-Szene, die zwischen `app` und dem
//! zeichnenden Host geteilt werden.

mod chart_scene;
pub mod options;

pub use chart_scene::{ChartScene, ControlHandles, ProjectSeries};
pub use options::EditorOptions;
