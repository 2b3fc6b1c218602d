//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { screen_pos } => vec![AppCommand::BeginDrag { screen_pos }],
        AppIntent::PointerMoved { screen_pos } => {
            // Ohne gegriffenen Punkt ist eine Mausbewegung bedeutungslos
            if state.drag.is_active() {
                vec![AppCommand::UpdateDrag { screen_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::ResetCurveRequested => vec![AppCommand::ResetControlPoints],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
