//! Bearbeitungszustand eines Projekt-Entwurfs (Kurve + Formularfelder).

use super::drag::{apply_drag_delta, with_x_intercept, DragState, DragTarget, EditLimits};
use crate::core::project::clamp_or;
use crate::core::Project;
use glam::DVec2;

/// Entwurf, der im Submit-Formular bearbeitet wird.
///
/// Hält neben dem Projekt selbst das Flag, ob der Steuerpunkt vom Nutzer
/// positioniert wurde, und den aktuellen Drag-Zustand.
#[derive(Debug, Clone)]
pub struct ProjectEditor {
    draft: Project,
    midpoint_manually_set: bool,
    drag: DragState,
}

impl Default for ProjectEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectEditor {
    /// Startet einen leeren Entwurf mit den Standardwerten.
    pub fn new() -> Self {
        Self {
            draft: Project::draft(),
            midpoint_manually_set: false,
            drag: DragState::Idle,
        }
    }

    /// Startet einen Entwurf mit den Kurvenparametern eines bestehenden Projekts.
    ///
    /// Name, Beschreibung und ID werden nicht übernommen. Liegt der Steuerpunkt
    /// der Vorlage nicht in der Mitte, gilt er als manuell gesetzt.
    pub fn from_template(template: &Project) -> Self {
        let template = template.sanitized();
        let mut draft = Project::draft();
        draft.x_intercept = template.x_intercept;
        draft.y_intercept = template.y_intercept;
        draft.middle_point = template.middle_point;
        draft.color = template.color.clone();

        Self {
            midpoint_manually_set: template.middle_point.x != template.default_middle_x(),
            draft,
            drag: DragState::Idle,
        }
    }

    pub fn draft(&self) -> &Project {
        &self.draft
    }

    pub fn midpoint_manually_set(&self) -> bool {
        self.midpoint_manually_set
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ── Drag ─────────────────────────────────────────────────────

    /// Beginnt einen Drag auf `target` an der Chart-Position `chart_pos`.
    ///
    /// Ein bereits laufender Drag wird durch den neuen ersetzt.
    pub fn begin_drag(&mut self, target: DragTarget, chart_pos: DVec2) {
        if !chart_pos.is_finite() {
            log::debug!("Drag-Start ignoriert: ungültige Position {:?}", chart_pos);
            return;
        }
        if let Some(previous) = self.drag.target() {
            log::debug!("Laufender Drag {:?} durch {:?} ersetzt", previous, target);
        }
        self.drag = DragState::Dragging {
            target,
            last_chart_pos: chart_pos,
        };
    }

    /// Verarbeitet eine Zeigerbewegung während eines Drags.
    ///
    /// Gibt `true` zurück, wenn die Bewegung angewendet wurde. Im Idle-Zustand
    /// und bei nicht-endlichen Positionen passiert nichts.
    pub fn drag_to(&mut self, chart_pos: DVec2, limits: &EditLimits) -> bool {
        let DragState::Dragging {
            target,
            last_chart_pos,
        } = self.drag
        else {
            return false;
        };
        if !chart_pos.is_finite() {
            return false;
        }

        let delta = chart_pos - last_chart_pos;
        self.draft = apply_drag_delta(
            &self.draft,
            target,
            delta,
            self.midpoint_manually_set,
            limits,
        );
        if target == DragTarget::Middle {
            self.midpoint_manually_set = true;
        }
        self.drag = DragState::Dragging {
            target,
            last_chart_pos: chart_pos,
        };
        true
    }

    /// Beendet einen laufenden Drag und liefert dessen Ziel.
    pub fn end_drag(&mut self) -> Option<DragTarget> {
        let target = self.drag.target();
        self.drag = DragState::Idle;
        target
    }

    // ── Formular / Slider ────────────────────────────────────────

    /// Setzt den X-Achsenabschnitt (geklemmt auf `[0, x_intercept_max]`).
    pub fn set_x_intercept(&mut self, value: f64, limits: &EditLimits) {
        if !value.is_finite() {
            log::debug!("X-Achsenabschnitt ignoriert: {}", value);
            return;
        }
        let x_intercept = clamp_or(
            value,
            0.0,
            limits.x_intercept_max.max(0.0),
            self.draft.x_intercept,
        );
        self.draft = with_x_intercept(&self.draft, x_intercept, self.midpoint_manually_set);
    }

    /// Setzt den Y-Achsenabschnitt (geklemmt auf `[0, 100]`).
    pub fn set_y_intercept(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.draft.y_intercept = value.clamp(0.0, Project::IMPACT_MAX);
    }

    /// Setzt die x-Koordinate des Steuerpunkts (geklemmt auf `[0, x_intercept]`).
    pub fn set_middle_x(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.draft.middle_point.x = value.clamp(0.0, self.draft.x_intercept.max(0.0));
        self.midpoint_manually_set = true;
    }

    /// Setzt die y-Koordinate des Steuerpunkts (geklemmt auf `[0, 100]`).
    pub fn set_middle_y(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.draft.middle_point.y = value.clamp(0.0, Project::IMPACT_MAX);
        self.midpoint_manually_set = true;
    }

    /// Setzt den Steuerpunkt zurück auf `x_intercept / 2` und hebt das Manuell-Flag auf.
    pub fn reset_midpoint(&mut self) {
        self.draft.middle_point.x = self.draft.default_middle_x();
        self.midpoint_manually_set = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Übergibt den fertigen Entwurf und startet einen neuen Standard-Entwurf.
    pub fn finish(&mut self) -> Project {
        std::mem::take(self).draft
    }
}
