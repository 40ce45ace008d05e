mod canvas;
mod menu_bar;
mod status_bar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use canvas::CanvasTexture;

/// egui draws on top of the primary window's 2D camera
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanvasTexture>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                canvas::sync_canvas_texture.after(crate::windowing::apply_window_requests),
            )
            // Top and bottom panels must claim their space before the canvas
            .add_systems(
                EguiPrimaryContextPass,
                (
                    menu_bar::menu_bar_ui,
                    status_bar::status_bar_ui,
                    canvas::canvas_ui,
                )
                    .chain(),
            );
    }
}
