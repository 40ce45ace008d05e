use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::commands::{AppCommand, CommandTable};
use crate::controller::{PreviewController, SizePreset};

/// Menu text for each command
fn command_label(command: AppCommand) -> &'static str {
    match command {
        AppCommand::Open => "Open",
        AppCommand::SaveAs => "Save As...",
        AppCommand::Exit => "Exit",
        AppCommand::ResizeImage => "Resize...",
        AppCommand::ToggleCenter => "Center",
        AppCommand::SelectPreset(preset) => preset.display_name(),
    }
}

/// Menu entry with its shortcut shown on the right, if one is bound
fn command_button(ui: &mut egui::Ui, table: &CommandTable, command: AppCommand) -> bool {
    let shortcut = table.shortcut_label(command);
    let mut button = egui::Button::new(command_label(command));
    if !shortcut.is_empty() {
        button = button.shortcut_text(shortcut);
    }
    ui.add(button).clicked()
}

/// File / Edit / Settings menus. Widgets only emit commands; checked and
/// selected states come from the controller.
pub fn menu_bar_ui(
    mut contexts: EguiContexts,
    controller: Res<PreviewController>,
    table: Res<CommandTable>,
    mut command_events: MessageWriter<AppCommand>,
) -> Result {
    let state = controller.state();

    egui::TopBottomPanel::top("menu_bar").show(contexts.ctx_mut()?, |ui| {
        ui.horizontal(|ui| {
            ui.menu_button("File", |ui| {
                if command_button(ui, &table, AppCommand::Open) {
                    command_events.write(AppCommand::Open);
                    ui.close();
                }

                if ui
                    .add_enabled(false, egui::Button::new(command_label(AppCommand::SaveAs)))
                    .clicked()
                {
                    command_events.write(AppCommand::SaveAs);
                    ui.close();
                }

                ui.separator();

                if command_button(ui, &table, AppCommand::Exit) {
                    command_events.write(AppCommand::Exit);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button(command_label(AppCommand::ResizeImage)).clicked() {
                    command_events.write(AppCommand::ResizeImage);
                    ui.close();
                }
            });

            ui.menu_button("Settings", |ui| {
                let mut center = state.center_enabled;
                if ui.checkbox(&mut center, command_label(AppCommand::ToggleCenter)).clicked() {
                    command_events.write(AppCommand::ToggleCenter);
                    ui.close();
                }

                ui.menu_button("Window", |ui| {
                    for preset in SizePreset::all() {
                        let command = AppCommand::SelectPreset(*preset);
                        let selected = state.size_preset == *preset;
                        if ui.radio(selected, command_label(command)).clicked() {
                            command_events.write(command);
                            ui.close();
                        }
                    }
                });
            });
        });
    });
    Ok(())
}
