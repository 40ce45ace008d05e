mod pipeline;
#[cfg(test)]
mod tests;
mod types;

#[cfg(test)]
pub use pipeline::fit_size;
pub use pipeline::{ImagePipeline, PreviewRenderer};
pub use types::{LoadError, PreviewArtifact, SourceImage, ViewportSize};

use bevy::prelude::*;

pub struct PreviewPlugin;

impl Plugin for PreviewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImagePipeline>();
    }
}
