//! Unit tests for the preview pipeline.

use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use std::path::PathBuf;

use super::pipeline::{decode_image, fit_image, fit_size, ImagePipeline, PreviewRenderer};
use super::types::{LoadError, ViewportSize};

/// Write a solid-color image of the given size and return its path
fn fixture(name: &str, width: u32, height: u32) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "image-preview-test-{}-{}",
        std::process::id(),
        name
    ));
    RgbImage::from_pixel(width, height, Rgb([40, 120, 200]))
        .save(&path)
        .unwrap();
    path
}

// fit_size tests
#[test]
fn test_fit_size_matching_aspect() {
    assert_eq!(fit_size((2000, 1500), ViewportSize::new(640, 480)), (640, 480));
}

#[test]
fn test_fit_size_never_enlarges() {
    assert_eq!(fit_size((100, 50), ViewportSize::new(640, 480)), (100, 50));
    assert_eq!(fit_size((640, 480), ViewportSize::new(640, 480)), (640, 480));
}

#[test]
fn test_fit_size_tall_image() {
    assert_eq!(fit_size((1000, 4000), ViewportSize::new(640, 480)), (120, 480));
}

#[test]
fn test_fit_size_wide_image() {
    assert_eq!(fit_size((4000, 1000), ViewportSize::new(640, 480)), (640, 160));
}

#[test]
fn test_fit_size_keeps_one_pixel() {
    assert_eq!(fit_size((10000, 1), ViewportSize::new(100, 100)), (100, 1));
}

#[test]
fn test_fit_size_stays_inside_and_keeps_aspect() {
    let sources = [(2000, 1500), (1920, 1080), (333, 999), (4096, 17), (801, 601)];
    let viewports = [
        ViewportSize::new(640, 480),
        ViewportSize::new(320, 240),
        ViewportSize::new(1279, 661),
        ViewportSize::new(97, 503),
    ];

    for &source in &sources {
        for &viewport in &viewports {
            let (width, height) = fit_size(source, viewport);
            assert!(width <= viewport.width && height <= viewport.height);

            // Aspect ratio matches within one pixel of rounding on either side
            let expected_height = width as f64 * source.1 as f64 / source.0 as f64;
            let expected_width = height as f64 * source.0 as f64 / source.1 as f64;
            assert!(
                (expected_height - height as f64).abs() <= 1.0
                    || (expected_width - width as f64).abs() <= 1.0,
                "{:?} in {:?} gave {}x{}",
                source,
                viewport,
                width,
                height
            );
        }
    }
}

#[test]
fn test_viewport_is_empty() {
    assert!(ViewportSize::default().is_empty());
    assert!(ViewportSize::new(0, 480).is_empty());
    assert!(!ViewportSize::new(1, 1).is_empty());
}

// decode and fit tests
#[test]
fn test_render_photo_into_medium_canvas() {
    let path = fixture("photo.png", 2000, 1500);

    let source = decode_image(&path).unwrap();
    assert_eq!(source.native_size(), (2000, 1500));

    let artifact = fit_image(&source, ViewportSize::new(640, 480), FilterType::Triangle);
    assert_eq!(artifact.size(), (640, 480));
    assert_eq!(artifact.native_size, (2000, 1500));
    assert_eq!(artifact.native_size_label(), "2000×1500");
    assert_eq!(artifact.source, path);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_render_small_image_is_not_enlarged() {
    let path = fixture("small.png", 50, 20);
    let pipeline = ImagePipeline::default();

    let source = pipeline.decode(&path).unwrap();
    let artifact = pipeline.fit(&source, ViewportSize::new(640, 480));
    assert_eq!(artifact.size(), (50, 20));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_render_is_idempotent() {
    let path = fixture("twice.png", 300, 500);
    let pipeline = ImagePipeline::default();
    let viewport = ViewportSize::new(200, 200);

    let first = pipeline.fit(&pipeline.decode(&path).unwrap(), viewport);
    let second = pipeline.fit(&pipeline.decode(&path).unwrap(), viewport);
    assert_eq!(first.size(), second.size());
    assert_eq!(first.size(), (120, 200));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_refit_decoded_source_without_file() {
    let path = fixture("refit.png", 800, 600);
    let pipeline = ImagePipeline::default();
    let source = pipeline.decode(&path).unwrap();

    // The source stays usable after the file is gone
    std::fs::remove_file(&path).unwrap();

    assert_eq!(pipeline.fit(&source, ViewportSize::new(400, 400)).size(), (400, 300));
    assert_eq!(pipeline.fit(&source, ViewportSize::new(1000, 1000)).size(), (800, 600));
}

#[test]
fn test_render_jpeg_by_content() {
    let path = fixture("photo.jpg", 64, 48);
    let pipeline = ImagePipeline::default();

    let artifact = pipeline.fit(&pipeline.decode(&path).unwrap(), ViewportSize::new(32, 32));
    assert_eq!(artifact.size(), (32, 24));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_decode_missing_file() {
    let path = std::env::temp_dir().join("image-preview-test-does-not-exist.png");

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotAFile));
    assert_eq!(err.to_string(), "No such file");
}

#[test]
fn test_decode_directory_is_not_a_file() {
    let err = decode_image(&std::env::temp_dir()).unwrap_err();
    assert!(matches!(err, LoadError::NotAFile));
}

#[test]
fn test_decode_undecodable_file() {
    let path = std::env::temp_dir().join(format!(
        "image-preview-test-{}-garbage.png",
        std::process::id()
    ));
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert!(!err.to_string().is_empty());

    std::fs::remove_file(&path).unwrap();
}
