//! Application State — zentrale Datenhaltung.

use super::drag::EditLimits;
use super::editor::ProjectEditor;
use super::CommandLog;
use crate::core::{ChartScale, ProjectStore};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen (Achsen, Raster, Aggregation)
    pub options: EditorOptions,
    /// Pixel ↔ Chart-Umrechnung der Editor-Fläche
    pub chart: ChartScale,
    /// Aktueller Entwurf im Submit-Formular
    pub editor: ProjectEditor,
    /// Alle eingereichten bzw. geladenen Projekte
    pub store: ProjectStore,
    /// Projekt im "Nur anzeigen"-Fokus (blendet andere Kurven und das Aggregat aus)
    pub focused_project: Option<String>,
    /// ID des zuletzt eingereichten Projekts
    pub last_submitted: Option<String>,
    /// Command-Log
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_store(EditorOptions::default(), ProjectStore::new())
    }

    /// Erstellt einen App-State mit gegebenen Optionen und Projekten.
    pub fn with_store(options: EditorOptions, store: ProjectStore) -> Self {
        Self {
            chart: options.chart_scale(),
            options,
            editor: ProjectEditor::new(),
            store,
            focused_project: None,
            last_submitted: None,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt `true` zurück, solange ein Handle gezogen wird.
    ///
    /// Der Host muss in dieser Zeit Zeigerereignisse global (auch außerhalb
    /// des Charts) an den Editor weiterleiten.
    pub fn pointer_capture_active(&self) -> bool {
        self.editor.is_dragging()
    }

    /// Grenzen für Kurven-Edits aus den aktuellen Optionen.
    pub fn edit_limits(&self) -> EditLimits {
        EditLimits {
            x_intercept_max: self.options.x_intercept_max,
        }
    }
}
