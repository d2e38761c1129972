use crate::app::drag::DragTarget;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Chart-Zeichenfläche wurde gelayoutet (Ursprung oben links + Größe in Pixeln)
    ChartResized { origin: DVec2, size: DVec2 },
    /// Zeiger auf einem Kurven-Handle gedrückt
    HandlePressed {
        target: DragTarget,
        screen_pos: DVec2,
    },
    /// Zeiger bewegt (global, auch außerhalb des Charts)
    PointerMoved { screen_pos: DVec2 },
    /// Zeiger losgelassen (global)
    PointerReleased,
    /// Editor wird geschlossen (Teardown)
    EditorClosed,
    /// Slider: X-Achsenabschnitt
    XInterceptChanged { value: f64 },
    /// Slider: Y-Achsenabschnitt
    YInterceptChanged { value: f64 },
    /// Slider: x des Steuerpunkts
    MiddleXChanged { value: f64 },
    /// Slider: y des Steuerpunkts
    MiddleYChanged { value: f64 },
    /// Steuerpunkt auf die Mitte zurücksetzen
    MidpointResetRequested,
    /// Formularfeld Name geändert
    NameChanged { name: String },
    /// Formularfeld Beschreibung geändert
    DescriptionChanged { description: String },
    /// Entwurf einreichen
    SubmitRequested,
    /// Neuen leeren Entwurf beginnen
    NewDraftRequested,
    /// Neuen Entwurf mit der Kurve eines bestehenden Projekts beginnen
    DraftFromProjectRequested { id: String },
    /// "Nur anzeigen"-Fokus eines Projekts umschalten
    ProjectFocusToggled { id: String },
}
