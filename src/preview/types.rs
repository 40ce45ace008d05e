//! Value types shared by the preview pipeline and its callers.

use image::{DynamicImage, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;

/// Size of the drawing area a preview must fit into, in whole points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A collapsed viewport (e.g. while the window is minimized) has no room
    /// for a preview.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A file decoded at full resolution, kept so the preview can be refitted
/// without reading the file again.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn native_size(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// A decoded image shrunk to fit a viewport, ready to upload to the canvas.
#[derive(Debug, Clone)]
pub struct PreviewArtifact {
    /// File the preview was decoded from
    pub source: PathBuf,
    /// Dimensions of the full-resolution source image
    pub native_size: (u32, u32),
    /// The thumbnail pixels
    pub bitmap: RgbaImage,
}

impl PreviewArtifact {
    /// Dimensions of the thumbnail
    pub fn size(&self) -> (u32, u32) {
        self.bitmap.dimensions()
    }

    /// Native size as shown in the status strip, e.g. `2000×1500`
    pub fn native_size_label(&self) -> String {
        format!("{}×{}", self.native_size.0, self.native_size.1)
    }
}

/// Why a file could not be turned into a preview.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No such file")]
    NotAFile,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}
