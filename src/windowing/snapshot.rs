//! Read-only view of the primary window for the controller.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::{Monitor, PrimaryMonitor, PrimaryWindow, WindowMode};

use crate::config::{AppConfig, AppConfigData};
use crate::geometry::WindowMetrics;

/// How the window is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Regular decorated window that can be moved and resized
    Normal,
    /// Iconified; the client area has no size
    Minimized,
    /// Covering a whole monitor
    Fullscreen,
}

/// Everything the controller needs to know about the window at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub display: DisplayState,
    /// Client area size in logical pixels, as requested by size presets
    pub logical_size: (u32, u32),
    /// Physical placement measurements. `None` until both the monitor and
    /// the window position are known.
    pub metrics: Option<WindowMetrics>,
}

impl WindowSnapshot {
    pub fn is_normal(&self) -> bool {
        self.display == DisplayState::Normal
    }
}

/// Build a snapshot from a bevy window and the size of the screen it is on.
pub fn snapshot_window(
    window: &Window,
    screen_size: Option<UVec2>,
    config: &AppConfigData,
) -> WindowSnapshot {
    let display = if window.mode != WindowMode::Windowed {
        DisplayState::Fullscreen
    } else if window.physical_width() == 0 || window.physical_height() == 0 {
        DisplayState::Minimized
    } else {
        DisplayState::Normal
    };

    let origin = match window.position {
        WindowPosition::At(position) => Some((position.x, position.y)),
        _ => None,
    };

    let metrics = screen_size.zip(origin).map(|(screen, origin)| WindowMetrics {
        screen_size: (screen.x as i32, screen.y as i32),
        window_origin: origin,
        window_size: (
            window.physical_width() as i32,
            window.physical_height() as i32,
        ),
        frame_width: config.frame_width,
        titlebar_height: config.titlebar_height,
    });

    WindowSnapshot {
        display,
        logical_size: (
            window.width().round().max(0.0) as u32,
            window.height().round().max(0.0) as u32,
        ),
        metrics,
    }
}

/// Bundled queries for snapshotting the primary window
#[derive(SystemParam)]
pub struct PrimaryWindowProbe<'w, 's> {
    window: Query<'w, 's, (Entity, &'static Window), With<PrimaryWindow>>,
    monitor: Query<'w, 's, &'static Monitor, With<PrimaryMonitor>>,
    config: Res<'w, AppConfig>,
}

impl PrimaryWindowProbe<'_, '_> {
    pub fn entity(&self) -> Option<Entity> {
        self.window.single().ok().map(|(entity, _)| entity)
    }

    pub fn snapshot(&self) -> Option<WindowSnapshot> {
        let (_, window) = self.window.single().ok()?;
        let screen_size = self
            .monitor
            .single()
            .ok()
            .map(|monitor| UVec2::new(monitor.physical_width, monitor.physical_height));
        Some(snapshot_window(window, screen_size, &self.config.data))
    }
}
