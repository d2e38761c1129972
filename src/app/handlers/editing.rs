//! Handler für Slider- und Formular-Edits am Entwurf.

use crate::app::AppState;

pub fn set_x_intercept(state: &mut AppState, value: f64) {
    let limits = state.edit_limits();
    state.editor.set_x_intercept(value, &limits);
}

pub fn set_y_intercept(state: &mut AppState, value: f64) {
    state.editor.set_y_intercept(value);
}

pub fn set_middle_x(state: &mut AppState, value: f64) {
    state.editor.set_middle_x(value);
}

pub fn set_middle_y(state: &mut AppState, value: f64) {
    state.editor.set_middle_y(value);
}

/// Setzt den Steuerpunkt auf die Mitte zurück.
pub fn reset_midpoint(state: &mut AppState) {
    state.editor.reset_midpoint();
}

pub fn set_name(state: &mut AppState, name: String) {
    state.editor.set_name(name);
}

pub fn set_description(state: &mut AppState, description: String) {
    state.editor.set_description(description);
}
