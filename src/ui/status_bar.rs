use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::status::StatusBar;

/// Bottom strip: message on the left, info on the right
pub fn status_bar_ui(mut contexts: EguiContexts, status: Res<StatusBar>) -> Result {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(8, 4)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.label(status.message());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(status.info());
                });
            });
        });
    Ok(())
}
