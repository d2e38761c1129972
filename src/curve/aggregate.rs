//! Aggregation mehrerer Projektkurven zu einer repräsentativen Kurve.
//!
//! Ablauf je Rasterpunkt `x` des gemeinsamen Rasters `[0, max_x]`:
//! 1. Impact jeder Projektkurve bei `x` linear interpolieren
//! 2. Rasterpunkt verwerfen, wenn zu wenige Projekte dort noch definiert sind
//! 3. Mittelwert bilden, mit den vorherigen Aggregat-Werten glätten, auf `[0, 100]` klemmen

use super::geometry::generate_curve_points;
use super::interpolation::interpolate_y_at;
use crate::core::project::clamp_or;
use crate::core::{CurvePoint, Project};
use crate::shared::options::{
    AGGREGATE_GRID_DIVISIONS, AGGREGATE_MAX_GRID_POINTS, AGGREGATE_MAX_GRID_STEP,
    AGGREGATE_MIN_SUPPORT_DIVISOR, AGGREGATE_SMOOTHING_WINDOW, CURVE_SAMPLES,
};

/// Parameter der Kurven-Aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateConfig {
    /// Bézier-Segmente pro Projektkurve
    pub curve_samples: usize,
    /// Obergrenze der Rasterweite
    pub max_grid_step: f64,
    /// Rasterweite höchstens `max_x / grid_divisions`
    pub grid_divisions: usize,
    /// Rasterpunkt nur mit gültigen Werten von mindestens `1 / min_support_divisor` der Projekte
    pub min_support_divisor: usize,
    /// Fensterbreite des gleitenden Mittelwerts (1 = keine Glättung)
    pub smoothing_window: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            curve_samples: CURVE_SAMPLES,
            max_grid_step: AGGREGATE_MAX_GRID_STEP,
            grid_divisions: AGGREGATE_GRID_DIVISIONS,
            min_support_divisor: AGGREGATE_MIN_SUPPORT_DIVISOR,
            smoothing_window: AGGREGATE_SMOOTHING_WINDOW,
        }
    }
}

impl AggregateConfig {
    /// Rasterweite über `[0, max_x]`: `min(max_grid_step, max_x / grid_divisions)`.
    ///
    /// Nie kleiner als `max_x / AGGREGATE_MAX_GRID_POINTS`, damit die Anzahl der
    /// Rasterpunkte auch für sehr große Achsenabschnitte beschränkt bleibt.
    pub fn grid_step(&self, max_x: f64) -> f64 {
        let divisions = self.grid_divisions.max(1) as f64;
        let adaptive = max_x / divisions;
        let step = if self.max_grid_step > 0.0 {
            self.max_grid_step.min(adaptive)
        } else {
            adaptive
        };
        step.max(max_x / AGGREGATE_MAX_GRID_POINTS as f64)
    }
}

/// Aggregiert die Kurven aller Projekte mit den Standard-Parametern.
pub fn aggregate(projects: &[Project]) -> Vec<CurvePoint> {
    aggregate_with(projects, &AggregateConfig::default())
}

/// Aggregiert die Kurven aller Projekte zu einer geglätteten Durchschnittskurve.
///
/// Leere Eingabe liefert eine leere Kurve. Das Ergebnis ist streng aufsteigend
/// in x und liegt in `[0, max_x] × [0, 100]`; es kann durch verworfene
/// Rasterpunkte kürzer als das Raster sein.
pub fn aggregate_with(projects: &[Project], config: &AggregateConfig) -> Vec<CurvePoint> {
    if projects.is_empty() {
        return Vec::new();
    }

    // Jede Kurve nur einmal pro Durchlauf erzeugen
    let curves: Vec<Vec<CurvePoint>> = projects
        .iter()
        .map(|p| generate_curve_points(p, config.curve_samples))
        .collect();

    let max_x = projects
        .iter()
        .map(|p| p.x_intercept)
        .filter(|x| x.is_finite())
        .fold(0.0, f64::max);

    let grid = grid_positions(max_x, config);
    let mut result: Vec<CurvePoint> = Vec::with_capacity(grid.len());
    let mut dropped = 0usize;

    for x in grid {
        let values: Vec<f64> = curves
            .iter()
            .filter_map(|curve| interpolate_y_at(curve, x))
            .collect();

        if !has_support(values.len(), projects.len(), config.min_support_divisor) {
            dropped += 1;
            continue;
        }

        let average = values.iter().sum::<f64>() / values.len() as f64;
        let smoothed = moving_average(average, &result, config.smoothing_window);
        result.push(CurvePoint::new(
            x,
            clamp_or(smoothed, 0.0, Project::IMPACT_MAX, 0.0),
        ));
    }

    log::debug!(
        "Aggregation: {} Projekte, max_x={}, {} Punkte, {} Rasterpunkte verworfen",
        projects.len(),
        max_x,
        result.len(),
        dropped
    );
    result
}

/// Rasterpositionen `0, step, 2·step, …` bis einschließlich `max_x`.
///
/// `max_x <= 0` liefert nur den Ursprung.
pub fn grid_positions(max_x: f64, config: &AggregateConfig) -> Vec<f64> {
    if !(max_x > 0.0 && max_x.is_finite()) {
        return vec![0.0];
    }
    let step = config.grid_step(max_x);
    if !(step > 0.0) {
        return vec![0.0];
    }

    // Toleranz gegen Rundung bei max_x / step == ganzzahlig
    let count = (max_x / step + 1e-9)
        .floor()
        .min(AGGREGATE_MAX_GRID_POINTS as f64) as usize;
    (0..=count).map(|i| (i as f64 * step).min(max_x)).collect()
}

/// `true`, wenn mindestens `1 / divisor` der Projekte einen gültigen Wert liefern.
fn has_support(valid: usize, total: usize, divisor: usize) -> bool {
    valid > 0 && valid * divisor.max(1) >= total
}

/// Mittelwert aus `current` und den `window - 1` zuletzt ausgegebenen Werten.
///
/// Solange noch nicht genug Vorgänger existieren, bleibt `current` unverändert.
fn moving_average(current: f64, previous: &[CurvePoint], window: usize) -> f64 {
    let history = window.saturating_sub(1);
    if history == 0 || previous.len() < history {
        return current;
    }
    let sum: f64 = previous[previous.len() - history..]
        .iter()
        .map(|p| p.y)
        .sum();
    (sum + current) / window as f64
}
