//! Bridge between the controller and the OS window.
//!
//! The controller never touches bevy's `Window` directly. It reads
//! [`WindowSnapshot`]s and answers with [`WindowRequest`] messages, which
//! [`apply_window_requests`] carries out on the primary window.

mod snapshot;

pub use snapshot::{DisplayState, PrimaryWindowProbe, WindowSnapshot};

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode, WindowResizeConstraints};

use crate::constants::{LARGE_WINDOW_SIZE, MEDIUM_WINDOW_SIZE, SMALL_WINDOW_SIZE, WINDOW_TITLE};

/// A change the controller wants made to the primary window
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum WindowRequest {
    /// Leave minimized, maximized or fullscreen state
    Restore,
    /// Set the client area size in logical pixels
    Resize { width: u32, height: u32 },
    /// Move the window's top-left corner, in physical pixels
    MoveTo { x: i32, y: i32 },
    SetTitle(String),
    /// Shut the application down
    Exit,
}

/// The window the application opens with: medium size, centered, and
/// limited to the range between the small and large presets.
pub fn primary_window() -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: (MEDIUM_WINDOW_SIZE.0, MEDIUM_WINDOW_SIZE.1).into(),
        resize_constraints: WindowResizeConstraints {
            min_width: SMALL_WINDOW_SIZE.0 as f32,
            min_height: SMALL_WINDOW_SIZE.1 as f32,
            max_width: LARGE_WINDOW_SIZE.0 as f32,
            max_height: LARGE_WINDOW_SIZE.1 as f32,
        },
        position: WindowPosition::Centered(MonitorSelection::Primary),
        ..default()
    }
}

/// Apply the controller's window requests in the order they were sent
pub fn apply_window_requests(
    mut requests: MessageReader<WindowRequest>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
    mut exit_events: MessageWriter<AppExit>,
) {
    for request in requests.read() {
        if *request == WindowRequest::Exit {
            info!("Exit requested");
            exit_events.write(AppExit::Success);
            continue;
        }

        let Ok(mut window) = window_query.single_mut() else {
            warn!("No primary window for {:?}", request);
            continue;
        };

        match request {
            WindowRequest::Restore => {
                if window.mode != WindowMode::Windowed {
                    window.mode = WindowMode::Windowed;
                }
                window.set_minimized(false);
                window.set_maximized(false);
            }
            WindowRequest::Resize { width, height } => {
                debug!("Resizing window to {}x{}", width, height);
                window.resolution.set(*width as f32, *height as f32);
            }
            WindowRequest::MoveTo { x, y } => {
                debug!("Moving window to +{}+{}", x, y);
                window.position = WindowPosition::At(IVec2::new(*x, *y));
            }
            WindowRequest::SetTitle(title) => {
                if window.title != *title {
                    window.title = title.clone();
                }
            }
            WindowRequest::Exit => {}
        }
    }
}

pub struct WindowingPlugin;

impl Plugin for WindowingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<WindowRequest>()
            .add_systems(Update, apply_window_requests);
    }
}
