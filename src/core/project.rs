//! Projekt-Datensatz: Parameter einer Impact-Kurve.

use super::CurvePoint;
use serde::{Deserialize, Serialize};

/// Parametersatz einer Impact-Kurve.
///
/// Invarianten (siehe `sanitized`):
/// - `x_intercept >= 0`
/// - `0 <= y_intercept <= 100`
/// - `0 <= middle_point.x <= x_intercept`
/// - `0 <= middle_point.y <= 100`
///
/// JSON-Feldnamen sind camelCase (`xIntercept`, `middlePoint`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opake, eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Beschreibung (nur Anzeige)
    #[serde(default)]
    pub description: String,
    /// Funding, bei dem der Impact auf 0 fällt (Ende des Kurven-Definitionsbereichs)
    pub x_intercept: f64,
    /// Impact-Score bei Funding 0
    pub y_intercept: f64,
    /// Bézier-Steuerpunkt zwischen den beiden Achsenabschnitten
    pub middle_point: CurvePoint,
    /// Anzeigefarbe (CSS-String)
    #[serde(default = "default_color")]
    pub color: String,
}

/// Standard-Farbe neuer Projekte.
pub const DEFAULT_PROJECT_COLOR: &str = "hsl(var(--chart-1))";

fn default_color() -> String {
    DEFAULT_PROJECT_COLOR.to_string()
}

impl Project {
    /// Maximaler Impact-Score.
    pub const IMPACT_MAX: f64 = 100.0;
    /// Standard-X-Achsenabschnitt eines neuen Entwurfs.
    pub const DEFAULT_X_INTERCEPT: f64 = 50_000.0;
    /// Standard-Y-Achsenabschnitt eines neuen Entwurfs.
    pub const DEFAULT_Y_INTERCEPT: f64 = 85.0;
    /// Standard-Höhe des Steuerpunkts eines neuen Entwurfs.
    pub const DEFAULT_MIDDLE_Y: f64 = 45.0;

    /// Erstellt ein Projekt mit expliziten Kurvenparametern.
    ///
    /// Die Werte werden nicht geklemmt; für externe Daten `sanitized` verwenden.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        x_intercept: f64,
        y_intercept: f64,
        middle_point: CurvePoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            x_intercept,
            y_intercept,
            middle_point,
            color: default_color(),
        }
    }

    /// Neuer, leerer Entwurf mit frischer UUID und Standard-Kurve.
    pub fn draft() -> Self {
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            "",
            Self::DEFAULT_X_INTERCEPT,
            Self::DEFAULT_Y_INTERCEPT,
            CurvePoint::new(Self::DEFAULT_X_INTERCEPT / 2.0, Self::DEFAULT_MIDDLE_Y),
        )
    }

    /// Setzt die Beschreibung (Builder-Stil).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Setzt die Farbe (Builder-Stil).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Start-Kontrollpunkt P0 = (0, y_intercept).
    pub fn start_point(&self) -> CurvePoint {
        CurvePoint::new(0.0, self.y_intercept)
    }

    /// End-Kontrollpunkt P2 = (x_intercept, 0).
    pub fn end_point(&self) -> CurvePoint {
        CurvePoint::new(self.x_intercept, 0.0)
    }

    /// Standard-Position des Steuerpunkts auf der X-Achse (Mitte des Definitionsbereichs).
    pub fn default_middle_x(&self) -> f64 {
        self.x_intercept / 2.0
    }

    /// Prüft alle Invarianten.
    pub fn is_valid(&self) -> bool {
        self.x_intercept.is_finite()
            && self.x_intercept >= 0.0
            && (0.0..=Self::IMPACT_MAX).contains(&self.y_intercept)
            && (0.0..=self.x_intercept).contains(&self.middle_point.x)
            && (0.0..=Self::IMPACT_MAX).contains(&self.middle_point.y)
    }

    /// Gibt eine Kopie zurück, deren Werte in die Invarianten geklemmt sind.
    ///
    /// Nicht-endliche Werte werden durch 0 bzw. die Bereichsmitte ersetzt.
    pub fn sanitized(&self) -> Self {
        let x_intercept = clamp_or(self.x_intercept, 0.0, f64::MAX, 0.0);
        let y_intercept = clamp_or(self.y_intercept, 0.0, Self::IMPACT_MAX, 0.0);
        let middle_point = CurvePoint::new(
            clamp_or(self.middle_point.x, 0.0, x_intercept, x_intercept / 2.0),
            clamp_or(self.middle_point.y, 0.0, Self::IMPACT_MAX, 0.0),
        );
        Self {
            x_intercept,
            y_intercept,
            middle_point,
            ..self.clone()
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::draft()
    }
}

/// Klemmt `value` in `[min, max]`; NaN liefert `fallback`.
pub(crate) fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
