//! Decode an image file and shrink it to fit the canvas.

use bevy::prelude::*;
use image::ImageReader;
use image::imageops::FilterType;
use std::path::Path;

use super::types::{LoadError, PreviewArtifact, SourceImage, ViewportSize};

/// Anything that can turn a file into previews.
///
/// Decoding and fitting are separate steps so the controller can keep the
/// decoded source and refit it when only the canvas size changes. Tests
/// implement this with fakes that count calls without touching the disk.
pub trait PreviewRenderer {
    fn decode(&self, path: &Path) -> Result<SourceImage, LoadError>;
    fn fit(&self, source: &SourceImage, viewport: ViewportSize) -> PreviewArtifact;
}

/// The real renderer, backed by the `image` crate.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ImagePipeline {
    /// Resampling filter used when shrinking
    pub filter: FilterType,
}

impl Default for ImagePipeline {
    fn default() -> Self {
        Self {
            filter: FilterType::CatmullRom,
        }
    }
}

impl PreviewRenderer for ImagePipeline {
    fn decode(&self, path: &Path) -> Result<SourceImage, LoadError> {
        decode_image(path)
    }

    fn fit(&self, source: &SourceImage, viewport: ViewportSize) -> PreviewArtifact {
        fit_image(source, viewport, self.filter)
    }
}

/// Largest size that fits inside `viewport` with the aspect ratio of
/// `native` preserved.
///
/// Images that already fit are left at their native size. Each side of the
/// result is at least 1 px and never larger than the viewport side.
pub fn fit_size(native: (u32, u32), viewport: ViewportSize) -> (u32, u32) {
    let (width, height) = native;
    if width == 0 || height == 0 {
        return (0, 0);
    }
    if width <= viewport.width && height <= viewport.height {
        return native;
    }

    let scale = f64::min(
        viewport.width as f64 / width as f64,
        viewport.height as f64 / height as f64,
    );
    let fit = |side: u32, limit: u32| ((side as f64 * scale).round() as u32).clamp(1, limit.max(1));
    (fit(width, viewport.width), fit(height, viewport.height))
}

/// Decode `path` at full resolution.
pub fn decode_image(path: &Path) -> Result<SourceImage, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotAFile);
    }

    // Sniff the format from the content; the extension is only a fallback
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!("Decoded {:?} at {}x{}", path, image.width(), image.height());

    Ok(SourceImage {
        path: path.to_path_buf(),
        image,
    })
}

/// Shrink a decoded image to fit `viewport`.
pub fn fit_image(source: &SourceImage, viewport: ViewportSize, filter: FilterType) -> PreviewArtifact {
    let native_size = source.native_size();
    let (width, height) = fit_size(native_size, viewport);
    let bitmap = if (width, height) == native_size {
        source.image.to_rgba8()
    } else {
        source.image.resize_exact(width, height, filter).into_rgba8()
    };

    debug!(
        "Fitted preview of {:?}: {}x{} -> {}x{}",
        source.path, native_size.0, native_size.1, width, height
    );

    PreviewArtifact {
        source: source.path.clone(),
        native_size,
        bitmap,
    }
}
