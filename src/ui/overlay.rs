use super::{UiAction, render_chart};
use crate::app::NpkExplorer;
use crate::chart_layout::adapt;
use crate::constants::layout;
use crate::content::chart_placements;
use crate::data::CatalogEntry;
use crate::state::{ChartId, ImageOverlay, ResolvedMode};
use eframe::egui::{self, Align, Layout, RichText};

/// Fullscreen chart and image lightbox. The lightbox is drawn last so it
/// stacks above a fullscreen chart when both are open.
pub fn render_overlays(
    app: &NpkExplorer,
    ctx: &egui::Context,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) {
    profiling::scope!("render_overlays");
    let overlay = app.controller.overlay();

    if let Some(chart) = overlay.fullscreen_chart() {
        fullscreen_chart(app, ctx, chart, mode, actions);
    }
    if let Some(image) = overlay.image() {
        lightbox(ctx, image, actions);
    }
}

fn fullscreen_chart(
    app: &NpkExplorer,
    ctx: &egui::Context,
    chart: &ChartId,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) {
    let screen = ctx.content_rect();
    let asset = chart_placements()
        .find(|(id, _)| *id == chart.as_str())
        .map(|(_, asset)| asset);

    let response = egui::Modal::new(egui::Id::new("fullscreen_chart"))
        .frame(
            egui::Frame::window(&ctx.style())
                .corner_radius(0.0)
                .inner_margin(layout::STANDARD_PADDING),
        )
        .show(ctx, |ui| {
            ui.set_width(screen.width() - layout::STANDARD_PADDING * 4.0);
            ui.set_min_height(screen.height() - layout::STANDARD_PADDING * 4.0);

            let entry = asset.map(|key| app.state.catalog.entry(key));
            match entry {
                Some(CatalogEntry::Ready(doc)) => {
                    let mut config = adapt(&doc.layout, mode);
                    config.height = screen.height() - layout::NAV_HEIGHT * 1.5;
                    let plot_id = format!("{}_fullscreen", chart);
                    if let Some(action) = render_chart(ui, chart, &plot_id, doc, &config, true) {
                        actions.push(action);
                    }
                }
                _ => {
                    ui.label(RichText::new(format!("Chart '{}' is not available", chart)).weak());
                    if ui.button("Close").clicked() {
                        actions.push(UiAction::ToggleFullscreen(chart.clone()));
                    }
                }
            }
        });

    if response.should_close() {
        actions.push(UiAction::ToggleFullscreen(chart.clone()));
    }
}

fn lightbox(ctx: &egui::Context, image: &ImageOverlay, actions: &mut Vec<UiAction>) {
    let max = ctx.content_rect().size() * layout::LIGHTBOX_SCREEN_SHARE;

    let response = egui::Modal::new(egui::Id::new("image_lightbox")).show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button("✕").on_hover_text("Close (Esc)").clicked() {
                actions.push(UiAction::CloseImage);
            }
        });
        // leave room for the close button and description
        let image_max = max - egui::vec2(0.0, 80.0);
        ui.add(
            egui::Image::new(image.source.clone())
                .max_size(image_max.max(egui::vec2(64.0, 64.0)))
                .maintain_aspect_ratio(true),
        );
        if !image.description.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&image.description).italics());
            });
        }
    });

    if response.should_close() {
        actions.push(UiAction::CloseImage);
    }
}
