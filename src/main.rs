//! Impact Curve Editor.
//!
//! Lädt Projekte (JSON-Datei als erstes Argument oder eingebaute Beispieldaten)
//! und gibt die Chart-Szene samt Aggregat-Kurve als JSON aus.

use glam::DVec2;
use impact_curve_editor::{AppController, AppIntent, AppState, EditorOptions, ProjectStore};
use std::path::PathBuf;

/// Standard-Größe der Chart-Fläche in Pixeln, solange kein Host layoutet.
const DEFAULT_CHART_SIZE: [f64; 2] = [800.0, 400.0];

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Impact Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let store = match std::env::args_os().nth(1).map(PathBuf::from) {
            Some(path) => ProjectStore::load_from_json_file(&path)?,
            None => {
                log::info!("Keine Projektdatei angegeben, verwende Beispieldaten");
                ProjectStore::sample()
            }
        };

        let mut state = AppState::with_store(options, store);
        let mut controller = AppController::new();
        controller.handle_intent(
            &mut state,
            AppIntent::ChartResized {
                origin: DVec2::ZERO,
                size: DVec2::from(DEFAULT_CHART_SIZE),
            },
        )?;

        let scene = controller.build_chart_scene(&state);
        log::info!(
            "{} Projektkurven, {} Aggregat-Punkte",
            scene.series.len(),
            scene.aggregate.as_ref().map_or(0, Vec::len)
        );
        println!("{}", serde_json::to_string_pretty(&scene)?);
        Ok(())
    }
}
