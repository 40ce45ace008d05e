//! Systems that feed commands and window events into the controller.

use bevy::prelude::*;
use bevy::window::{WindowMoved, WindowResized};
use std::path::{Path, PathBuf};

use crate::commands::AppCommand;
use crate::config::AppConfig;
use crate::constants::{JPEG_EXTENSIONS, OPEN_DIALOG_TITLE};
use crate::paths;
use crate::preview::ImagePipeline;
use crate::status::StatusBar;
use crate::windowing::{PrimaryWindowProbe, WindowRequest};

use super::reactions::PreviewController;
use super::ViewportResized;

/// Show the modal file dialog. Blocks until the user picks a file or
/// cancels.
fn pick_image_file(directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title(OPEN_DIALOG_TITLE)
        .add_filter("JPEG Files", JPEG_EXTENSIONS)
        .add_filter("All Files", &["*"]);
    if let Some(directory) = directory {
        dialog = dialog.set_directory(directory);
    }
    dialog.pick_file()
}

/// Startup system to apply config defaults to the controller
pub fn apply_config_to_controller(config: Res<AppConfig>, mut controller: ResMut<PreviewController>) {
    *controller = PreviewController::new(config.data.center_on_start);
}

/// Run menu and shortcut commands
#[allow(clippy::too_many_arguments)]
pub fn handle_commands(
    mut command_events: MessageReader<AppCommand>,
    mut controller: ResMut<PreviewController>,
    mut status: ResMut<StatusBar>,
    pipeline: Res<ImagePipeline>,
    config: Res<AppConfig>,
    probe: PrimaryWindowProbe,
    mut requests: MessageWriter<WindowRequest>,
) {
    for command in command_events.read() {
        let produced = match *command {
            AppCommand::Open => {
                let directory = paths::initial_dialog_dir(
                    controller.last_directory(),
                    config.data.initial_directory.as_deref(),
                );
                let selection = pick_image_file(directory.as_deref());
                controller.on_open(selection, &mut status, &*pipeline)
            }
            AppCommand::SaveAs => {
                debug!("Save As is not available");
                Vec::new()
            }
            AppCommand::Exit => controller.on_exit(),
            AppCommand::ResizeImage => {
                controller.on_resize_image();
                Vec::new()
            }
            AppCommand::ToggleCenter => controller.on_toggle_center(probe.snapshot().as_ref()),
            AppCommand::SelectPreset(preset) => controller.on_preset_selected(preset),
        };

        for request in produced {
            requests.write(request);
        }
    }
}

/// Re-render when the canvas reports a new size
pub fn react_to_viewport_resize(
    mut resize_events: MessageReader<ViewportResized>,
    mut controller: ResMut<PreviewController>,
    mut status: ResMut<StatusBar>,
    pipeline: Res<ImagePipeline>,
    mut requests: MessageWriter<WindowRequest>,
) {
    // Only the latest size matters
    let Some(latest) = resize_events.read().last().copied() else {
        return;
    };

    for request in controller.on_viewport_resized(latest.size, &mut status, &*pipeline) {
        requests.write(request);
    }
}

/// Track manual resizes and moves of the primary window
pub fn react_to_window_changes(
    mut resized_events: MessageReader<WindowResized>,
    mut moved_events: MessageReader<WindowMoved>,
    probe: PrimaryWindowProbe,
    mut controller: ResMut<PreviewController>,
    mut requests: MessageWriter<WindowRequest>,
) {
    let primary = probe.entity();
    // Count rather than short-circuit so every message is consumed this frame
    let resized = resized_events
        .read()
        .filter(|event| Some(event.window) == primary)
        .count()
        > 0;
    let moved = moved_events
        .read()
        .filter(|event| Some(event.window) == primary)
        .count()
        > 0;

    if !resized && !moved {
        return;
    }
    let Some(window) = probe.snapshot() else {
        return;
    };

    let produced = if resized {
        controller.on_window_resized(&window)
    } else {
        controller.on_window_moved(&window)
    };
    for request in produced {
        requests.write(request);
    }
}
