//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zeigerbewegungen und Loslassen ohne aktiven Drag erzeugen keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ChartResized { origin, size } => {
            vec![AppCommand::SetChartViewport { origin, size }]
        }
        AppIntent::HandlePressed { target, screen_pos } => {
            let chart_pos = state.chart.screen_to_chart(screen_pos);
            vec![AppCommand::BeginDrag { target, chart_pos }]
        }
        AppIntent::PointerMoved { screen_pos } => {
            if !state.pointer_capture_active() {
                return Vec::new();
            }
            let chart_pos = state.chart.screen_to_chart(screen_pos);
            vec![AppCommand::UpdateDrag { chart_pos }]
        }
        AppIntent::PointerReleased | AppIntent::EditorClosed => {
            if state.pointer_capture_active() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        AppIntent::XInterceptChanged { value } => vec![AppCommand::SetXIntercept { value }],
        AppIntent::YInterceptChanged { value } => vec![AppCommand::SetYIntercept { value }],
        AppIntent::MiddleXChanged { value } => vec![AppCommand::SetMiddleX { value }],
        AppIntent::MiddleYChanged { value } => vec![AppCommand::SetMiddleY { value }],
        AppIntent::MidpointResetRequested => vec![AppCommand::ResetMidpoint],
        AppIntent::NameChanged { name } => vec![AppCommand::SetName { name }],
        AppIntent::DescriptionChanged { description } => {
            vec![AppCommand::SetDescription { description }]
        }
        AppIntent::SubmitRequested => {
            let mut commands = Vec::with_capacity(2);
            if state.pointer_capture_active() {
                commands.push(AppCommand::EndDrag);
            }
            commands.push(AppCommand::SubmitDraft);
            commands
        }
        AppIntent::NewDraftRequested => vec![AppCommand::StartNewDraft],
        AppIntent::DraftFromProjectRequested { id } => {
            vec![AppCommand::StartDraftFromProject { id }]
        }
        AppIntent::ProjectFocusToggled { id } => vec![AppCommand::ToggleProjectFocus { id }],
    }
}

#[cfg(test)]
mod tests;
