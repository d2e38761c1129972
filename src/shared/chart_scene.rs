//! Chart-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein beliebiger Host sie zeichnet.

use crate::core::{CurvePoint, Project};
use crate::curve::nearest_point_by_x;
use serde::Serialize;

/// Positionen der drei ziehbaren Handles in Chart-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlHandles {
    /// `(x_intercept, 0)`
    pub x_handle: CurvePoint,
    /// `(0, y_intercept)`
    pub y_handle: CurvePoint,
    /// Steuerpunkt, auf die Kurve projiziert
    pub middle_handle: CurvePoint,
}

impl ControlHandles {
    /// Berechnet die Handles eines Projekts aus seiner abgetasteten Kurve.
    ///
    /// Der mittlere Handle sitzt bei `middle_point.x` auf der Kurvenhöhe des
    /// nächstgelegenen Abtastpunkts (der Steuerpunkt selbst liegt neben der Kurve).
    pub fn for_project(project: &Project, points: &[CurvePoint]) -> Self {
        let middle_x = project.middle_point.x;
        let middle_y = nearest_point_by_x(points, middle_x)
            .map(|p| p.y)
            .unwrap_or(project.middle_point.y);

        Self {
            x_handle: project.end_point(),
            y_handle: project.start_point(),
            middle_handle: CurvePoint::new(middle_x, middle_y),
        }
    }
}

/// Kurve eines gespeicherten Projekts.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSeries {
    pub project: Project,
    pub points: Vec<CurvePoint>,
}

/// Read-only Daten für ein gezeichnetes Chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartScene {
    /// X-Achsenbereich `[min, max]` (Funding)
    pub x_domain: [f64; 2],
    /// Y-Achsenbereich `[min, max]` (Impact)
    pub y_domain: [f64; 2],
    /// Aktueller Entwurf
    pub draft: Project,
    /// Vorschau-Kurve des Entwurfs
    pub draft_points: Vec<CurvePoint>,
    /// Handles des Entwurfs
    pub handles: ControlHandles,
    /// Sichtbare Projektkurven
    pub series: Vec<ProjectSeries>,
    /// Aggregat über alle Projekte (`None` im Fokus-Modus)
    pub aggregate: Option<Vec<CurvePoint>>,
    /// Projekt im "Nur anzeigen"-Fokus
    pub focused_project: Option<String>,
    /// Host muss Zeigerereignisse global weiterleiten
    pub pointer_capture: bool,
}

impl ChartScene {
    /// Gibt zurück, ob eine Aggregat-Kurve mit Punkten vorhanden ist.
    pub fn has_aggregate(&self) -> bool {
        self.aggregate.as_ref().is_some_and(|a| !a.is_empty())
    }
}
