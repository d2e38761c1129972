//! Zentrale Konfiguration für den Impact-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Chart-Achsen ────────────────────────────────────────────────────

/// Oberes Ende der Funding-Achse (Dollar).
pub const X_AXIS_MAX: f64 = 200_000.0;
/// Oberes Ende der Impact-Achse.
pub const Y_AXIS_MAX: f64 = 100.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Rasterweite für X-Positionen beim Drag (Dollar). Entspricht dem Slider-Schritt.
pub const X_DRAG_STEP: f64 = 1000.0;
/// Maximal einstellbarer X-Achsenabschnitt.
pub const X_INTERCEPT_MAX: f64 = 200_000.0;

// ── Kurven ──────────────────────────────────────────────────────────

/// Anzahl der Bézier-Segmente pro Kurve (ergibt `CURVE_SAMPLES + 1` Punkte).
pub const CURVE_SAMPLES: usize = 200;

// ── Aggregation ─────────────────────────────────────────────────────

/// Obergrenze der Rasterweite des gemeinsamen Aggregations-Rasters.
pub const AGGREGATE_MAX_GRID_STEP: f64 = 500.0;
/// Mindestanzahl an Rasterschritten über `[0, max_x]`.
pub const AGGREGATE_GRID_DIVISIONS: usize = 400;
/// Höchstanzahl an Rasterschritten; sehr große `max_x` vergrößern die Rasterweite.
pub const AGGREGATE_MAX_GRID_POINTS: usize = 100_000;
/// Ein Rasterpunkt braucht gültige Werte von mindestens `1 / divisor` der Projekte.
pub const AGGREGATE_MIN_SUPPORT_DIVISOR: usize = 3;
/// Fensterbreite des gleitenden Mittelwerts (inkl. aktuellem Punkt).
pub const AGGREGATE_SMOOTHING_WINDOW: usize = 3;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `impact_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Chart ───────────────────────────────────────────────────
    /// Oberes Ende der Funding-Achse
    pub x_axis_max: f64,
    /// Oberes Ende der Impact-Achse
    pub y_axis_max: f64,

    // ── Editing ─────────────────────────────────────────────────
    /// Rasterweite für X-Positionen beim Drag
    pub x_drag_step: f64,
    /// Maximal einstellbarer X-Achsenabschnitt
    pub x_intercept_max: f64,

    // ── Kurven ──────────────────────────────────────────────────
    /// Bézier-Segmente pro Kurve
    pub curve_samples: usize,

    // ── Aggregation ─────────────────────────────────────────────
    /// Obergrenze der Rasterweite
    #[serde(default = "default_aggregate_max_grid_step")]
    pub aggregate_max_grid_step: f64,
    /// Mindestanzahl an Rasterschritten
    #[serde(default = "default_aggregate_grid_divisions")]
    pub aggregate_grid_divisions: usize,
    /// Mindest-Unterstützung (1 / divisor der Projekte)
    #[serde(default = "default_aggregate_min_support_divisor")]
    pub aggregate_min_support_divisor: usize,
    /// Fensterbreite des gleitenden Mittelwerts
    #[serde(default = "default_aggregate_smoothing_window")]
    pub aggregate_smoothing_window: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            x_axis_max: X_AXIS_MAX,
            y_axis_max: Y_AXIS_MAX,

            x_drag_step: X_DRAG_STEP,
            x_intercept_max: X_INTERCEPT_MAX,

            curve_samples: CURVE_SAMPLES,

            aggregate_max_grid_step: AGGREGATE_MAX_GRID_STEP,
            aggregate_grid_divisions: AGGREGATE_GRID_DIVISIONS,
            aggregate_min_support_divisor: AGGREGATE_MIN_SUPPORT_DIVISOR,
            aggregate_smoothing_window: AGGREGATE_SMOOTHING_WINDOW,
        }
    }
}

/// Serde-Defaults für die Aggregations-Optionen (Abwärtskompatibilität).
fn default_aggregate_max_grid_step() -> f64 {
    AGGREGATE_MAX_GRID_STEP
}

fn default_aggregate_grid_divisions() -> usize {
    AGGREGATE_GRID_DIVISIONS
}

fn default_aggregate_min_support_divisor() -> usize {
    AGGREGATE_MIN_SUPPORT_DIVISOR
}

fn default_aggregate_smoothing_window() -> usize {
    AGGREGATE_SMOOTHING_WINDOW
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("impact_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("impact_curve_editor.toml")
    }

    /// Aggregations-Parameter aus den aktuellen Optionen.
    pub fn aggregate_config(&self) -> crate::curve::AggregateConfig {
        crate::curve::AggregateConfig {
            curve_samples: self.curve_samples,
            max_grid_step: self.aggregate_max_grid_step,
            grid_divisions: self.aggregate_grid_divisions,
            min_support_divisor: self.aggregate_min_support_divisor,
            smoothing_window: self.aggregate_smoothing_window,
        }
    }

    /// Neue Chart-Skala mit den konfigurierten Achsenbereichen.
    pub fn chart_scale(&self) -> crate::core::ChartScale {
        crate::core::ChartScale::new(self.x_axis_max, self.y_axis_max, self.x_drag_step)
    }
}
