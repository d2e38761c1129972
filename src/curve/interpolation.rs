//! Lineare Interpolation auf abgetasteten Kurven.

use crate::core::CurvePoint;

/// Interpoliert den Impact einer abgetasteten Kurve an der Funding-Position `x`.
///
/// Gesucht werden der nächste Punkt mit `point.x <= x` (unten) und der nächste
/// mit `point.x > x` (oben); dazwischen wird linear interpoliert. Fehlt die obere
/// Schranke, liefert nur ein Punkt exakt bei `x` einen Wert, sonst ist der
/// Definitionsbereich der Kurve zu Ende (`None`). Die Reihenfolge der Punkte
/// spielt keine Rolle; nicht-endliche Punkte werden ignoriert.
pub fn interpolate_y_at(points: &[CurvePoint], x: f64) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }

    let mut below: Option<CurvePoint> = None;
    let mut above: Option<CurvePoint> = None;
    for &p in points.iter().filter(|p| p.is_finite()) {
        if p.x <= x {
            // ">=": bei gleichem x gewinnt der spätere Punkt
            if below.is_none_or(|b| p.x >= b.x) {
                below = Some(p);
            }
        } else if above.is_none_or(|a| p.x < a.x) {
            above = Some(p);
        }
    }

    let below = below?;
    let y = match above {
        Some(above) => {
            let span = above.x - below.x;
            if span > 0.0 {
                below.y + (above.y - below.y) * ((x - below.x) / span)
            } else {
                below.y
            }
        }
        None if below.x == x => below.y,
        None => return None,
    };

    y.is_finite().then_some(y)
}
