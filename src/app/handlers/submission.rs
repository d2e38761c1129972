//! Handler für Einreichen und Neustart von Entwürfen.

use crate::app::editor::ProjectEditor;
use crate::app::AppState;
use anyhow::anyhow;

/// Übernimmt den Entwurf in den Store und startet einen neuen Entwurf.
pub fn submit_draft(state: &mut AppState) {
    let project = state.editor.finish();
    if project.name.trim().is_empty() {
        log::warn!("Projekt ohne Namen eingereicht");
    }
    let id = state.store.submit(project);
    state.last_submitted = Some(id);
}

/// Verwirft den aktuellen Entwurf und beginnt mit Standardwerten.
pub fn start_new_draft(state: &mut AppState) {
    state.editor = ProjectEditor::new();
}

/// Beginnt einen Entwurf mit der Kurve eines gespeicherten Projekts.
pub fn start_draft_from_project(state: &mut AppState, id: &str) -> anyhow::Result<()> {
    let template = state
        .store
        .get(id)
        .ok_or_else(|| anyhow!("Projekt nicht gefunden: {}", id))?;
    state.editor = ProjectEditor::from_template(template);
    log::info!("Neuer Entwurf aus Vorlage '{}'", template.name);
    Ok(())
}
