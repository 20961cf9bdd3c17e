//! Spraywand-Editor.
//!
//! Griffe auf einem Wandfoto markieren und als Boulder- oder
//! Ausdauerproblem speichern; gespeicherte Probleme in einer Galerie
//! ansehen, taggen und löschen.

use eframe::egui;
use spray_wall_editor::app::UiMessage;
use spray_wall_editor::{
    ui, AppController, AppIntent, AppState, EditorOptions, JsonProblemStore, MemoryProblemStore,
    ProblemStore, Screen,
};
use std::time::Duration;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spraywand-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Spraywand-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Spraywand-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::CanvasInput,
    textures: ui::TextureCache,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Vorlage zum Anpassen neben der Binary ablegen
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Vorlage nicht geschrieben: {:#}", e);
            }
        }

        let data_dir = editor_options.resolved_data_dir();
        let (store, startup_message): (Box<dyn ProblemStore>, _) =
            match JsonProblemStore::open(&data_dir) {
                Ok(store) => (Box::new(store), None),
                Err(e) => {
                    log::error!(
                        "Ablage in {} nicht verfügbar, nutze Speicher: {:#}",
                        data_dir.display(),
                        anyhow::Error::new(e)
                    );
                    (
                        Box::new(MemoryProblemStore::new()),
                        Some(UiMessage::warning(
                            "Datenverzeichnis nicht verfügbar. Probleme bleiben nur bis zum Beenden erhalten.",
                        )),
                    )
                }
            };

        let mut state = AppState::with_store(store, editor_options);
        state.ui.message = startup_message;

        Self {
            state,
            controller: AppController::new(),
            input: ui::CanvasInput::new(),
            textures: ui::TextureCache::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.schedule_gesture_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        // Fällige Gesten-Deadlines vor neuen Pointer-Events auslösen
        let mut events = vec![AppIntent::FrameTick { time: now }];

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            let size = [rect.width(), rect.height()];
            if size != self.state.view.viewport_size {
                events.push(AppIntent::ViewportResized { size });
            }
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_message_dialog(ctx, &self.state.ui));

        match self.state.ui.screen {
            Screen::Menu | Screen::TypeSelect => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    events.extend(ui::render_home(ui, &self.state));
                });
            }
            Screen::Create(_) => {
                events.extend(ui::render_editor_sidebar(ctx, &self.state));
                let texture = self.textures.canvas(ctx, &self.state);
                let input = &mut self.input;
                egui::CentralPanel::default().show(ctx, |ui| {
                    events.extend(ui::render_canvas(ui, input, texture));
                });
            }
            Screen::Gallery(_) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    events.extend(ui::render_gallery(ui, &self.state, &mut self.textures));
                });
                events.extend(ui::show_viewer(ctx, &self.state, &mut self.textures));
                let keyword = self.state.options.delete_confirm_keyword.clone();
                events.extend(ui::show_tag_editor(ctx, &mut self.state.ui));
                events.extend(ui::show_delete_dialog(ctx, &mut self.state.ui, &keyword));
            }
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Plant einen Repaint zur nächsten Gesten-Deadline (Tap-Commit, Long-Press).
    fn schedule_gesture_repaint(&self, ctx: &egui::Context) {
        let Some(deadline) = self.state.editor.gesture.next_deadline() else {
            return;
        };
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        ctx.request_repaint_after(deadline.saturating_sub(now));
    }
}
