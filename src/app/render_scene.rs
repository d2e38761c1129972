//! Builder für Chart-Szenen aus dem AppState.

use crate::app::AppState;
use crate::curve::{aggregate_with, generate_curve_points};
use crate::shared::{ChartScene, ControlHandles, ProjectSeries};

/// Baut eine ChartScene aus dem aktuellen AppState.
///
/// Im Fokus-Modus enthält die Szene nur das fokussierte Projekt und kein Aggregat.
pub fn build(state: &AppState) -> ChartScene {
    let samples = state.options.curve_samples;
    let draft = state.editor.draft().clone();
    let draft_points = generate_curve_points(&draft, samples);
    let handles = ControlHandles::for_project(&draft, &draft_points);

    let focused = state
        .focused_project
        .as_deref()
        .filter(|id| state.store.get(id).is_some());

    let series = state
        .store
        .iter()
        .filter(|p| focused.is_none_or(|id| p.id == id))
        .map(|p| ProjectSeries {
            points: generate_curve_points(p, samples),
            project: p.clone(),
        })
        .collect();

    let aggregate = match focused {
        Some(_) => None,
        None => Some(aggregate_with(
            &state.store.projects(),
            &state.options.aggregate_config(),
        )),
    };

    ChartScene {
        x_domain: [0.0, state.options.x_axis_max],
        y_domain: [0.0, state.options.y_axis_max],
        draft,
        draft_points,
        handles,
        series,
        aggregate,
        focused_project: focused.map(str::to_owned),
        pointer_capture: state.pointer_capture_active(),
    }
}
