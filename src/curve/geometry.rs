//! Geometrie-Berechnungen für Impact-Kurven (quadratische Bézier).

use crate::core::{CurvePoint, Project};
use crate::shared::options::CURVE_SAMPLES;
use glam::DVec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Tastet die Impact-Kurve eines Projekts in `num_points` gleichen t-Schritten ab.
///
/// Kontrollpunkte: P0 = (0, y_intercept), P1 = middle_point, P2 = (x_intercept, 0).
/// Liefert `num_points + 1` Punkte; der letzte Punkt ist exakt `(x_intercept, 0)`.
/// Der Steuerpunkt liegt im Allgemeinen nicht auf der Kurve.
///
/// `num_points == 0` liefert nur den Endpunkt.
pub fn generate_curve_points(project: &Project, num_points: usize) -> Vec<CurvePoint> {
    if num_points == 0 {
        return vec![project.end_point()];
    }

    let p0 = DVec2::from(project.start_point());
    let p1 = DVec2::from(project.middle_point);
    let p2 = DVec2::from(project.end_point());

    let mut points: Vec<CurvePoint> = (0..=num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            quadratic_bezier(p0, p1, p2, t).into()
        })
        .collect();

    // Endpunkt exakt übernehmen (kein Float-Drift am Rand)
    if let Some(last) = points.last_mut() {
        *last = project.end_point();
    }
    points
}

/// Impact-Kurve mit der Standard-Auflösung (`CURVE_SAMPLES`).
pub fn generate_curve(project: &Project) -> Vec<CurvePoint> {
    generate_curve_points(project, CURVE_SAMPLES)
}

/// Kurvenpunkt mit dem geringsten X-Abstand zu `x`.
///
/// Bei Gleichstand gewinnt der erste Punkt. Leere Eingabe liefert `None`.
pub fn nearest_point_by_x(points: &[CurvePoint], x: f64) -> Option<CurvePoint> {
    points
        .iter()
        .copied()
        .filter(CurvePoint::is_finite)
        .min_by(|a, b| {
            (a.x - x)
                .abs()
                .partial_cmp(&(b.x - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
