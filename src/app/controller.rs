//! Application Controller für zentrale Event-Verarbeitung.

use super::gesture::GestureEvent;
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
            // === Navigation ===
            AppCommand::ShowTypeSelect => handlers::navigation::show_type_select(state),
            AppCommand::OpenEditor { kind } => handlers::navigation::open_editor(state, kind),
            AppCommand::OpenGallery { kind } => handlers::navigation::open_gallery(state, kind),
            AppCommand::ReturnToMenu => handlers::navigation::return_to_menu(state),

            // === Gesten ===
            AppCommand::PointerDown { pos, time } => {
                // Fällige Taps zuerst anwenden, erst danach den Treffer prüfen
                let due = handlers::gesture::poll(state, time);
                self.dispatch_gestures(state, due)?;
                let events = handlers::gesture::pointer_down(state, pos, time);
                self.dispatch_gestures(state, events)?;
            }
            AppCommand::PointerUp { time } => {
                let events = handlers::gesture::pointer_up(state, time);
                self.dispatch_gestures(state, events)?;
            }
            AppCommand::PollGestures { time } => {
                let events = handlers::gesture::poll(state, time);
                self.dispatch_gestures(state, events)?;
            }
            AppCommand::ApplyTap { pos, count } => handlers::marking::apply_tap(state, pos, count),
            AppCommand::ApplyLongPress { pos } => handlers::marking::apply_long_press(state, pos),

            // === Wandfoto ===
            AppCommand::RequestImageDialog => handlers::image::request_dialog(state),
            AppCommand::LoadWallImage { path } => handlers::image::load(state, &path)?,
            AppCommand::ClearWallImage => handlers::image::clear(state),
            AppCommand::SetViewportSize { size } => {
                handlers::image::set_viewport_size(state, size)
            }

            // === Problem ===
            AppCommand::SetProblemName { name } => handlers::problem::set_name(state, name),
            AppCommand::SaveProblem => handlers::problem::save(state),

            // === Galerie ===
            AppCommand::ReloadGallery => handlers::gallery::reload(state),
            AppCommand::OpenViewer { index } => handlers::gallery::open_viewer(state, index),
            AppCommand::CloseViewer => handlers::gallery::close_viewer(state),
            AppCommand::StepViewer { delta } => handlers::gallery::step_viewer(state, delta),
            AppCommand::OpenTagEditor { problem_id } => {
                handlers::gallery::open_tag_editor(state, problem_id)
            }
            AppCommand::AddTag { tag } => handlers::gallery::add_tag(state, &tag),
            AppCommand::RemoveTag { tag } => handlers::gallery::remove_tag(state, &tag),
            AppCommand::SaveTags => handlers::gallery::save_tags(state),
            AppCommand::CloseTagEditor => handlers::gallery::close_tag_editor(state),
            AppCommand::OpenDeleteDialog { problem_id } => {
                handlers::gallery::open_delete_dialog(state, problem_id)
            }
            AppCommand::ConfirmDelete { typed } => handlers::gallery::confirm_delete(state, &typed),
            AppCommand::CloseDeleteDialog => handlers::gallery::close_delete_dialog(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissMessage => handlers::dialog::dismiss_message(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Setzt erkannte Gesten in Commands um (in Erkennungsreihenfolge).
    fn dispatch_gestures(
        &mut self,
        state: &mut AppState,
        events: Vec<GestureEvent>,
    ) -> anyhow::Result<()> {
        for event in events {
            let command = match event {
                GestureEvent::Tap { pos, count } => AppCommand::ApplyTap { pos, count },
                GestureEvent::LongPress { pos } => AppCommand::ApplyLongPress { pos },
            };
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
