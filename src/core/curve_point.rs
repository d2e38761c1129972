//! Einzelner Kurvenpunkt (Funding → Impact-Score).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt einer Impact-Kurve: `x` = Funding in Dollar, `y` = Impact-Score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Funding-Betrag
    pub x: f64,
    /// Impact-Score (0–100)
    pub y: f64,
}

impl CurvePoint {
    /// Erstellt einen neuen Kurvenpunkt.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Gibt `true` zurück, wenn beide Koordinaten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for CurvePoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<CurvePoint> for DVec2 {
    fn from(p: CurvePoint) -> Self {
        DVec2::new(p.x, p.y)
    }
}
