use std::path::PathBuf;

use crate::constants::{LARGE_WINDOW_SIZE, MEDIUM_WINDOW_SIZE, SMALL_WINDOW_SIZE};
use crate::preview::{PreviewArtifact, SourceImage, ViewportSize};

/// Window size chosen from Settings >> Window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePreset {
    /// No preset applies, e.g. after the user resized the window by hand
    #[default]
    None,
    Small,
    Medium,
    Large,
}

impl SizePreset {
    /// Client area size for the preset, in logical pixels
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            SizePreset::None => None,
            SizePreset::Small => Some(SMALL_WINDOW_SIZE),
            SizePreset::Medium => Some(MEDIUM_WINDOW_SIZE),
            SizePreset::Large => Some(LARGE_WINDOW_SIZE),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SizePreset::None => "None",
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
        }
    }

    /// The presets offered in the menu
    pub fn all() -> &'static [SizePreset] {
        &[SizePreset::Small, SizePreset::Medium, SizePreset::Large]
    }
}

/// Whether a preview has been shown yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing rendered so far
    #[default]
    Idle,
    /// A preview is on the canvas
    Loaded,
}

/// Everything the application knows, owned by the controller.
///
/// The UI reads this to draw menus and the canvas but never writes it.
#[derive(Debug, Default)]
pub struct ApplicationState {
    /// File chosen in the last Open, whether or not it could be decoded
    pub selected_file: Option<PathBuf>,
    /// Current canvas size
    pub viewport: ViewportSize,
    /// Settings >> Center
    pub center_enabled: bool,
    /// Settings >> Window radio selection
    pub size_preset: SizePreset,
    /// Preview currently on the canvas
    pub displayed: Option<PreviewArtifact>,
    /// Bumped every time `displayed` is replaced or cleared
    pub generation: u64,
    pub phase: Phase,
    /// Decoded selected file, refitted on canvas resizes
    pub(super) source: Option<SourceImage>,
}
