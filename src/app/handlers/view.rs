//! Handler für Chart-Viewport und Projekt-Fokus.

use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert Position und Größe der Chart-Fläche.
pub fn set_chart_viewport(state: &mut AppState, origin: DVec2, size: DVec2) {
    state.chart.set_viewport(origin, size);
    if !state.chart.has_area() {
        log::debug!("Chart ohne Fläche: {:?}", size);
    }
}

/// Schaltet den "Nur anzeigen"-Fokus für ein Projekt um.
///
/// Ein erneuter Toggle auf dasselbe Projekt hebt den Fokus auf; ein anderes
/// Projekt übernimmt den Fokus direkt. Unbekannte IDs werden ignoriert.
pub fn toggle_project_focus(state: &mut AppState, id: String) {
    if state.focused_project.as_deref() == Some(id.as_str()) {
        state.focused_project = None;
    } else if state.store.get(&id).is_some() {
        state.focused_project = Some(id);
    } else {
        log::warn!("Fokus auf unbekanntes Projekt ignoriert: {}", id);
    }
}
