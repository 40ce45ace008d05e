//! The central canvas that shows the preview.
//!
//! The preview bitmap is uploaded as a bevy [`Image`] and registered with
//! egui whenever the controller's generation changes; the egui pass only
//! paints the registered texture and reports the canvas size back.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_egui::{egui, EguiContexts, EguiTextureHandle, EguiUserTextures};

use crate::controller::{PreviewController, ViewportResized};
use crate::preview::{PreviewArtifact, ViewportSize};

const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::from_gray(32);

/// GPU side of the displayed preview
#[derive(Resource, Default)]
pub struct CanvasTexture {
    /// Controller generation this texture was built from
    generation: u64,
    image: Option<Handle<Image>>,
    texture_id: Option<egui::TextureId>,
    size: (u32, u32),
}

fn artifact_image(artifact: &PreviewArtifact) -> Image {
    let (width, height) = artifact.size();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        artifact.bitmap.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

/// Replace the canvas texture when the controller shows a new preview or
/// drops the current one
pub fn sync_canvas_texture(
    controller: Res<PreviewController>,
    mut canvas: ResMut<CanvasTexture>,
    mut images: ResMut<Assets<Image>>,
    mut egui_textures: ResMut<EguiUserTextures>,
) {
    let state = controller.state();
    if state.generation == canvas.generation {
        return;
    }
    canvas.generation = state.generation;

    // Release the previous preview before building the next
    canvas.texture_id = None;
    if let Some(previous) = canvas.image.take() {
        egui_textures.remove_image(previous.id());
        images.remove(previous.id());
    }

    let Some(artifact) = state.displayed.as_ref() else {
        return;
    };
    debug!(
        "Uploading preview of {:?} ({}x{})",
        artifact.source,
        artifact.size().0,
        artifact.size().1
    );
    let handle = images.add(artifact_image(artifact));
    canvas.texture_id = Some(egui_textures.add_image(EguiTextureHandle::Weak(handle.id())));
    canvas.size = artifact.size();
    canvas.image = Some(handle);
}

/// Canvas size in whole points, as the preview pipeline expects it
fn measure_viewport(rect: egui::Rect) -> ViewportSize {
    ViewportSize::new(
        rect.width().max(0.0).floor() as u32,
        rect.height().max(0.0).floor() as u32,
    )
}

/// Central panel: reports its size and draws the preview centered
pub fn canvas_ui(
    mut contexts: EguiContexts,
    canvas: Res<CanvasTexture>,
    controller: Res<PreviewController>,
    mut resize_events: MessageWriter<ViewportResized>,
) -> Result {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(CANVAS_BACKGROUND))
        .show(contexts.ctx_mut()?, |ui| {
            let rect = ui.max_rect();
            let size = measure_viewport(rect);
            if size != controller.state().viewport {
                resize_events.write(ViewportResized { size });
            }

            if let Some(texture_id) = canvas.texture_id {
                let (width, height) = canvas.size;
                let image_rect = egui::Rect::from_center_size(
                    rect.center(),
                    egui::vec2(width as f32, height as f32),
                );
                ui.painter().image(
                    texture_id,
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        });
    Ok(())
}
