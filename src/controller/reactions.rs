//! State transitions of the preview controller.
//!
//! Every handler runs to completion on the main schedule and returns the
//! window changes it wants; nothing here touches bevy's window directly.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::geometry::compute_geometries;
use crate::preview::{PreviewRenderer, ViewportSize};
use crate::status::StatusBar;
use crate::windowing::{WindowRequest, WindowSnapshot};

use super::state::{ApplicationState, Phase, SizePreset};

/// Owner of [`ApplicationState`]; reacts to user actions and window events
#[derive(Resource, Debug, Default)]
pub struct PreviewController {
    state: ApplicationState,
}

impl PreviewController {
    pub fn new(center_enabled: bool) -> Self {
        Self {
            state: ApplicationState {
                center_enabled,
                ..default()
            },
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Directory of the last selected file, where the next Open should start
    pub fn last_directory(&self) -> Option<PathBuf> {
        self.state
            .selected_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// File >> Open, after the file dialog closed.
    ///
    /// `selection` is `None` when the dialog was cancelled, which changes
    /// nothing.
    pub fn on_open(
        &mut self,
        selection: Option<PathBuf>,
        status: &mut StatusBar,
        renderer: &impl PreviewRenderer,
    ) -> Vec<WindowRequest> {
        let Some(path) = selection else {
            debug!("File selection cancelled");
            return Vec::new();
        };

        info!("Opening {:?}", path);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        status.set_message(file_name);
        self.state.selected_file = Some(path);
        // Always read the file again, it may have changed since the last open
        self.state.source = None;

        self.render_selected(status, renderer)
    }

    /// The canvas changed size. Re-renders the selected file unless the
    /// size is unchanged.
    pub fn on_viewport_resized(
        &mut self,
        viewport: ViewportSize,
        status: &mut StatusBar,
        renderer: &impl PreviewRenderer,
    ) -> Vec<WindowRequest> {
        if viewport == self.state.viewport {
            return Vec::new();
        }

        debug!("Canvas resized to {}x{}", viewport.width, viewport.height);
        self.state.viewport = viewport;
        self.render_selected(status, renderer)
    }

    /// The window was resized, by the user or by a preset.
    ///
    /// The radio selection survives only while the window has the selected
    /// preset's size; any other size clears it for good.
    pub fn on_window_resized(&mut self, window: &WindowSnapshot) -> Vec<WindowRequest> {
        let preset = self.state.size_preset;
        if preset.dimensions().is_some_and(|size| size != window.logical_size) {
            debug!(
                "Window resized to {}x{}, clearing {} preset",
                window.logical_size.0,
                window.logical_size.1,
                preset.display_name()
            );
            self.state.size_preset = SizePreset::None;
        }

        self.recenter(window)
    }

    /// The window was moved
    pub fn on_window_moved(&mut self, window: &WindowSnapshot) -> Vec<WindowRequest> {
        self.recenter(window)
    }

    /// Settings >> Window >> preset. Centering is left to the resize event
    /// that follows.
    pub fn on_preset_selected(&mut self, preset: SizePreset) -> Vec<WindowRequest> {
        let Some((width, height)) = preset.dimensions() else {
            return Vec::new();
        };

        info!("Applying {} window preset ({}x{})", preset.display_name(), width, height);
        self.state.size_preset = preset;
        vec![
            WindowRequest::Restore,
            WindowRequest::Resize { width, height },
        ]
    }

    /// Settings >> Center. Turning it on re-centers a normal window at once.
    pub fn on_toggle_center(&mut self, window: Option<&WindowSnapshot>) -> Vec<WindowRequest> {
        self.state.center_enabled = !self.state.center_enabled;
        info!("Centering {}", if self.state.center_enabled { "enabled" } else { "disabled" });

        window.map(|window| self.recenter(window)).unwrap_or_default()
    }

    /// Edit >> Resize... is a placeholder; it only reports the canvas size.
    pub fn on_resize_image(&self) {
        if self.state.phase == Phase::Idle {
            info!("Resize requested with no image loaded");
            return;
        }
        info!(
            "Resize requested for canvas {}x{} (not implemented)",
            self.state.viewport.width, self.state.viewport.height
        );
    }

    /// File >> Exit. Drops the preview and asks the app to quit.
    pub fn on_exit(&mut self) -> Vec<WindowRequest> {
        self.state.source = None;
        if self.state.displayed.take().is_some() {
            self.state.generation += 1;
        }
        vec![WindowRequest::Exit]
    }

    fn render_selected(
        &mut self,
        status: &mut StatusBar,
        renderer: &impl PreviewRenderer,
    ) -> Vec<WindowRequest> {
        let Some(path) = self.state.selected_file.clone() else {
            return Vec::new();
        };
        if self.state.viewport.is_empty() {
            debug!("Canvas has no area, deferring preview of {:?}", path);
            return Vec::new();
        }

        if self.state.source.is_none() {
            match renderer.decode(&path) {
                Ok(source) => self.state.source = Some(source),
                Err(e) => {
                    let message = format!("Unable to get: {} ({})", path.display(), e);
                    warn!("{}", message);
                    status.set_message(message);
                    return Vec::new();
                }
            }
        }
        let Some(source) = self.state.source.as_ref() else {
            return Vec::new();
        };

        let artifact = renderer.fit(source, self.state.viewport);
        status.set_info(artifact.native_size_label());
        self.state.displayed = Some(artifact);
        self.state.generation += 1;
        self.state.phase = Phase::Loaded;
        vec![WindowRequest::SetTitle(path.display().to_string())]
    }

    fn recenter(&self, window: &WindowSnapshot) -> Vec<WindowRequest> {
        if !self.state.center_enabled || !window.is_normal() {
            return Vec::new();
        }
        let Some(metrics) = window.metrics else {
            return Vec::new();
        };

        let (current, centered) = compute_geometries(&metrics);
        if current.position() == centered.position() {
            return Vec::new();
        }

        debug!("Re-centering window from {} to {}", current, centered);
        vec![WindowRequest::MoveTo {
            x: centered.x,
            y: centered.y,
        }]
    }
}
