use crate::app::drag::DragTarget;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Chart-Viewport setzen
    SetChartViewport { origin: DVec2, size: DVec2 },
    /// Drag auf einem Handle beginnen (Chart-Koordinaten)
    BeginDrag {
        target: DragTarget,
        chart_pos: DVec2,
    },
    /// Laufenden Drag fortsetzen (Chart-Koordinaten)
    UpdateDrag { chart_pos: DVec2 },
    /// Laufenden Drag beenden
    EndDrag,
    /// X-Achsenabschnitt setzen
    SetXIntercept { value: f64 },
    /// Y-Achsenabschnitt setzen
    SetYIntercept { value: f64 },
    /// x des Steuerpunkts setzen
    SetMiddleX { value: f64 },
    /// y des Steuerpunkts setzen
    SetMiddleY { value: f64 },
    /// Steuerpunkt zurücksetzen
    ResetMidpoint,
    /// Namen des Entwurfs setzen
    SetName { name: String },
    /// Beschreibung des Entwurfs setzen
    SetDescription { description: String },
    /// Entwurf in den Store übernehmen
    SubmitDraft,
    /// Neuen leeren Entwurf starten
    StartNewDraft,
    /// Neuen Entwurf aus einer Projektvorlage starten
    StartDraftFromProject { id: String },
    /// Projektfokus umschalten
    ToggleProjectFocus { id: String },
}
