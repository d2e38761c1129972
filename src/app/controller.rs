//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::ChartScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport & Fokus ===
            AppCommand::SetChartViewport { origin, size } => {
                handlers::view::set_chart_viewport(state, origin, size)
            }
            AppCommand::ToggleProjectFocus { id } => {
                handlers::view::toggle_project_focus(state, id)
            }

            // === Drag ===
            AppCommand::BeginDrag { target, chart_pos } => {
                handlers::drag::begin(state, target, chart_pos)
            }
            AppCommand::UpdateDrag { chart_pos } => handlers::drag::update(state, chart_pos),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Slider & Formular ===
            AppCommand::SetXIntercept { value } => handlers::editing::set_x_intercept(state, value),
            AppCommand::SetYIntercept { value } => handlers::editing::set_y_intercept(state, value),
            AppCommand::SetMiddleX { value } => handlers::editing::set_middle_x(state, value),
            AppCommand::SetMiddleY { value } => handlers::editing::set_middle_y(state, value),
            AppCommand::ResetMidpoint => handlers::editing::reset_midpoint(state),
            AppCommand::SetName { name } => handlers::editing::set_name(state, name),
            AppCommand::SetDescription { description } => {
                handlers::editing::set_description(state, description)
            }

            // === Einreichen ===
            AppCommand::SubmitDraft => handlers::submission::submit_draft(state),
            AppCommand::StartNewDraft => handlers::submission::start_new_draft(state),
            AppCommand::StartDraftFromProject { id } => {
                handlers::submission::start_draft_from_project(state, &id)?
            }
        }

        Ok(())
    }

    /// Baut die Chart-Szene aus dem aktuellen AppState.
    pub fn build_chart_scene(&self, state: &AppState) -> ChartScene {
        render_scene::build(state)
    }
}
