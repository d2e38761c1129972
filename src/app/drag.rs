//! Drag-Logik für die drei Kurven-Handles (X-Achsenabschnitt, Y-Achsenabschnitt, Steuerpunkt).
//!
//! Drags arbeiten mit Delta-Akkumulation: jede Bewegung wird relativ zur zuletzt
//! gemeldeten Chart-Position angewendet. Dadurch springt ein Handle beim
//! Drag-Start nicht unter den Cursor. Ungültige Werte werden geklemmt, nie abgelehnt.

use crate::core::project::clamp_or;
use crate::core::Project;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Welcher Kurvenparameter wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    /// X-Achsenabschnitt (Funding-Ende)
    XIntercept,
    /// Y-Achsenabschnitt (Impact bei Funding 0)
    YIntercept,
    /// Bézier-Steuerpunkt
    Middle,
}

/// Zustand der Drag-Geste
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Kein aktiver Drag, Bewegungen werden ignoriert
    #[default]
    Idle,
    /// Aktiver Drag auf `target`
    Dragging {
        target: DragTarget,
        /// Zuletzt verarbeitete Chart-Position (Basis für das nächste Delta)
        last_chart_pos: DVec2,
    },
}

impl DragState {
    /// Gibt `true` zurück, solange ein Drag aktiv ist.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Aktuelles Drag-Ziel.
    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { target, .. } => Some(*target),
        }
    }
}

/// Grenzen für Kurven-Edits, die aus den Optionen stammen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditLimits {
    /// Maximal einstellbarer X-Achsenabschnitt
    pub x_intercept_max: f64,
}

impl EditLimits {
    fn x_max(&self) -> f64 {
        clamp_or(self.x_intercept_max, 0.0, f64::MAX, 0.0)
    }
}

/// Wendet ein Chart-Delta auf den Parameter des Drag-Ziels an.
///
/// - `XIntercept`: X-Achsenabschnitt verschieben, Steuerpunkt mitführen
///   (siehe `with_x_intercept`)
/// - `YIntercept`: Y-Achsenabschnitt in `[0, 100]`
/// - `Middle`: Steuerpunkt in `[0, x_intercept] × [0, 100]`
pub fn apply_drag_delta(
    project: &Project,
    target: DragTarget,
    delta: DVec2,
    midpoint_manually_set: bool,
    limits: &EditLimits,
) -> Project {
    match target {
        DragTarget::XIntercept => {
            let x_intercept = clamp_or(
                project.x_intercept + delta.x,
                0.0,
                limits.x_max(),
                project.x_intercept,
            );
            with_x_intercept(project, x_intercept, midpoint_manually_set)
        }
        DragTarget::YIntercept => Project {
            y_intercept: clamp_or(
                project.y_intercept + delta.y,
                0.0,
                Project::IMPACT_MAX,
                project.y_intercept,
            ),
            ..project.clone()
        },
        DragTarget::Middle => {
            let mut next = project.clone();
            next.middle_point.x = clamp_or(
                project.middle_point.x + delta.x,
                0.0,
                project.x_intercept.max(0.0),
                project.middle_point.x,
            );
            next.middle_point.y = clamp_or(
                project.middle_point.y + delta.y,
                0.0,
                Project::IMPACT_MAX,
                project.middle_point.y,
            );
            next
        }
    }
}

/// Setzt einen (bereits geklemmten) X-Achsenabschnitt und führt den Steuerpunkt mit.
///
/// - Steuerpunkt nie manuell gesetzt: proportional skalieren (bleibt relativ an
///   derselben Stelle; bei altem Achsenabschnitt 0 zurück auf die Mitte)
/// - Steuerpunkt manuell gesetzt: um die halbe tatsächliche Änderung verschieben
///   (nach dem Klemmen, nicht das rohe Drag-Delta; Drags am Anschlag bewegen ihn nicht)
///
/// Der Steuerpunkt bleibt immer in `[0, x_intercept]`.
pub fn with_x_intercept(
    project: &Project,
    x_intercept: f64,
    midpoint_manually_set: bool,
) -> Project {
    let old = project.x_intercept;
    let middle_x = if midpoint_manually_set {
        project.middle_point.x + (x_intercept - old) / 2.0
    } else if old > 0.0 {
        project.middle_point.x / old * x_intercept
    } else {
        x_intercept / 2.0
    };

    let mut next = project.clone();
    next.x_intercept = x_intercept;
    next.middle_point.x = clamp_or(middle_x, 0.0, x_intercept, x_intercept / 2.0);
    next
}
