mod reactions;
mod state;
mod systems;

pub use reactions::PreviewController;
pub use state::SizePreset;

use bevy::prelude::*;

use crate::commands::{dispatch_key_chords, register_default_bindings, AppCommand, CommandTable};
use crate::config::ConfigLoaded;
use crate::preview::ViewportSize;
use crate::status::StatusBar;
use crate::windowing::apply_window_requests;

/// Message sent by the canvas when its drawable area changes size
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportResized {
    pub size: ViewportSize,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PreviewController>()
            .init_resource::<StatusBar>()
            .init_resource::<CommandTable>()
            .add_message::<AppCommand>()
            .add_message::<ViewportResized>()
            .add_systems(
                Startup,
                (
                    register_default_bindings,
                    systems::apply_config_to_controller.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    dispatch_key_chords,
                    systems::handle_commands,
                    systems::react_to_viewport_resize,
                    systems::react_to_window_changes,
                )
                    .chain()
                    .before(apply_window_requests),
            );
    }
}
