//! Handler für Handle-Drags im Kurven-Editor.

use crate::app::drag::DragTarget;
use crate::app::AppState;
use glam::DVec2;

/// Beginnt einen Drag auf dem angegebenen Handle.
pub fn begin(state: &mut AppState, target: DragTarget, chart_pos: DVec2) {
    state.editor.begin_drag(target, chart_pos);
    log::debug!("Drag gestartet: {:?} bei {:?}", target, chart_pos);
}

/// Wendet eine Zeigerbewegung auf den laufenden Drag an.
pub fn update(state: &mut AppState, chart_pos: DVec2) {
    let limits = state.edit_limits();
    state.editor.drag_to(chart_pos, &limits);
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    if let Some(target) = state.editor.end_drag() {
        let draft = state.editor.draft();
        log::debug!(
            "Drag beendet: {:?} (x={}, y={}, mitte=({}, {}))",
            target,
            draft.x_intercept,
            draft.y_intercept,
            draft.middle_point.x,
            draft.middle_point.y
        );
    }
}
