//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
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
            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Kontrollpunkt-Drag ===
            AppCommand::BeginDrag { screen_pos } => handlers::drag::begin(state, screen_pos),
            AppCommand::UpdateDrag { screen_pos } => handlers::drag::update(state, screen_pos),
            AppCommand::EndDrag => handlers::drag::end(state),
            AppCommand::ResetControlPoints => handlers::drag::reset_control_points(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Verarbeitet alle Intents eines Frames und baut danach die Render-Szene.
    ///
    /// Die Szene zeigt damit bereits den Zustand nach dem Input dieses Frames.
    /// Fehler einzelner Intents werden geloggt, die übrigen laufen weiter.
    pub fn process_frame(
        &mut self,
        state: &mut AppState,
        intents: Vec<AppIntent>,
        viewport_size: [f32; 2],
    ) -> RenderScene {
        for intent in intents {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
        self.build_render_scene(state, viewport_size)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
