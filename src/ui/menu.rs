//! Top-Menü sowie Start- und Typ-Auswahl-Bildschirm.

use crate::app::{AppIntent, AppState, Screen};
use crate::core::ProblemType;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                let in_editor = state.editor_kind().is_some();

                if ui
                    .add_enabled(in_editor, egui::Button::new("Wandfoto wählen…"))
                    .clicked()
                {
                    events.push(AppIntent::ImageSelectionRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(in_editor, egui::Button::new("Problem speichern"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Galerie", |ui| {
                for kind in ProblemType::ALL {
                    if ui.button(kind.label()).clicked() {
                        events.push(AppIntent::GalleryRequested { kind });
                        ui.close();
                    }
                }
            });

            if state.ui.screen != Screen::Menu && ui.button("⏴ Menü").clicked() {
                events.push(AppIntent::BackToMenuRequested);
            }
        });
    });

    events
}

/// Startmenü und Typ-Auswahl (zentrierte Knöpfe).
pub fn render_home(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let button_size = egui::vec2(220.0, 36.0);

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);

        match state.ui.screen {
            Screen::TypeSelect => {
                ui.heading("Neues Problem");
                ui.add_space(12.0);
                for kind in ProblemType::ALL {
                    if ui
                        .add_sized(button_size, egui::Button::new(kind.label()))
                        .clicked()
                    {
                        events.push(AppIntent::ProblemTypeSelected { kind });
                    }
                    ui.add_space(6.0);
                }
                ui.add_space(12.0);
                if ui.button("Zurück").clicked() {
                    events.push(AppIntent::BackToMenuRequested);
                }
            }
            _ => {
                ui.heading("Spraywand");
                ui.add_space(12.0);
                if ui
                    .add_sized(button_size, egui::Button::new("Problem erstellen"))
                    .clicked()
                {
                    events.push(AppIntent::CreateProblemRequested);
                }
                ui.add_space(6.0);
                for kind in ProblemType::ALL {
                    if ui
                        .add_sized(button_size, egui::Button::new(format!("Galerie {}", kind)))
                        .clicked()
                    {
                        events.push(AppIntent::GalleryRequested { kind });
                    }
                    ui.add_space(6.0);
                }
            }
        }
    });

    events
}
