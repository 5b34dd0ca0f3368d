use super::{UiAction, render_chart};
use crate::app::NpkExplorer;
use crate::chart_layout::adapt_placed;
use crate::constants::layout;
use crate::content::{Block, Callout, FOOTER, Reference, SECTIONS, Section, TeamMember};
use crate::data::CatalogEntry;
use crate::error::ExplorerError;
use crate::state::{AppState, ChartId, OverlayState, ResolvedMode, SectionId, Span};
use crate::widgets::{CalloutCard, SectionHeading};
use eframe::egui::scroll_area::ScrollSource;
use eframe::egui::{self, Align, Align2, Color32, FontId, RichText, Sense};
use std::path::Path;

/// Where things ended up on screen this frame
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Visible part of the scroll area, in screen coordinates
    pub viewport: Option<Span>,
    pub sections: Vec<(SectionId, Span)>,
}

/// Draw the scrolling page and measure every section
pub fn render_page(
    app: &mut NpkExplorer,
    ctx: &egui::Context,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) -> PageLayout {
    profiling::scope!("render_page");
    let overlay = app.controller.overlay();
    let locked = overlay.scroll_locked();
    let state = &mut app.state;
    let mut page = PageLayout::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        let output = egui::ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false])
            .scroll_source(if locked {
                ScrollSource::NONE
            } else {
                ScrollSource::ALL
            })
            .show(ui, |ui| {
                let full = ui.available_width();
                let width = full.min(layout::CONTENT_MAX_WIDTH);
                let gutter = match mode {
                    ResolvedMode::Desktop => layout::STANDARD_PADDING * 2.0,
                    ResolvedMode::Mobile => layout::STANDARD_PADDING,
                };

                ui.horizontal(|ui| {
                    ui.add_space(((full - width) / 2.0).max(0.0));
                    ui.vertical(|ui| {
                        ui.set_width(width - gutter);
                        for section in SECTIONS {
                            let id = SectionId::new(section.id);
                            let rect = ui
                                .scope(|ui| render_section(ui, state, overlay, section, mode, actions))
                                .response
                                .rect;
                            if state.ui.take_scroll_target(&id) {
                                ui.scroll_to_rect(rect, Some(Align::TOP));
                            }
                            page.sections.push((id, Span::new(rect.top(), rect.bottom())));
                            ui.add_space(layout::SECTION_SPACING);
                        }
                        render_footer(ui);
                    });
                });
            });
        page.viewport = Some(Span::new(output.inner_rect.top(), output.inner_rect.bottom()));
    });

    page
}

fn render_section(
    ui: &mut egui::Ui,
    state: &mut AppState,
    overlay: &OverlayState,
    section: &Section,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) {
    ui.add_space(layout::STANDARD_PADDING * 2.0);
    SectionHeading::new(section.title)
        .badge(section.badge)
        .subtitle(section.subtitle)
        .hero(section.id == "home")
        .show(ui, mode);
    ui.add_space(layout::STANDARD_PADDING * 2.0);

    for block in section.blocks {
        render_block(ui, state, overlay, block, mode, actions);
        ui.add_space(layout::STANDARD_PADDING * 2.0);
    }
}

fn render_block(
    ui: &mut egui::Ui,
    state: &mut AppState,
    overlay: &OverlayState,
    block: &Block,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) {
    match *block {
        Block::Lead(text) => {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).size(18.0));
            });
        }
        Block::ScrollCue { label, target } => {
            ui.vertical_centered(|ui| {
                if ui.button(RichText::new(label).size(16.0)).clicked() {
                    actions.push(UiAction::Navigate(SectionId::new(target)));
                }
            });
        }
        Block::Chart {
            id,
            asset,
            height,
            caption,
        } => {
            let chart = ChartId::new(id);
            match state.catalog.entry(asset) {
                // the overlay owns the plot while it is fullscreen
                CatalogEntry::Ready(_) if overlay.is_fullscreen(&chart) => {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Shown fullscreen").weak());
                    });
                }
                CatalogEntry::Ready(doc) => {
                    let layout = adapt_placed(&doc.layout, mode, height);
                    if let Some(action) = render_chart(ui, &chart, id, doc, &layout, false) {
                        actions.push(action);
                    }
                }
                CatalogEntry::Failed(e) => chart_error(ui, asset, &e.user_message()),
                CatalogEntry::Missing => {
                    chart_error(ui, asset, &missing_message(asset, state.catalog.root()));
                }
            }
            if let Some(caption) = caption {
                ui.vertical_centered(|ui| ui.label(RichText::new(caption).weak().italics()));
            }
        }
        Block::Image {
            file,
            description,
            caption,
        } => {
            let source = state.image_uri(file);
            ui.vertical_centered(|ui| {
                let response = ui
                    .add(
                        egui::Image::new(source.clone())
                            .max_width(ui.available_width())
                            .corner_radius(8.0)
                            .sense(Sense::click()),
                    )
                    .on_hover_text("Click to enlarge")
                    .on_hover_cursor(egui::CursorIcon::ZoomIn);
                if response.clicked() {
                    actions.push(UiAction::OpenImage {
                        source,
                        description: description.to_string(),
                    });
                }
                if let Some(caption) = caption {
                    ui.label(RichText::new(caption).weak().italics());
                }
            });
        }
        Block::Callouts(callouts) => render_callouts(ui, callouts, mode),
        Block::Team(members) => render_team(ui, members, mode),
        Block::References(references) => render_references(ui, state, references),
        Block::Notes(notes) => {
            for (title, body) in notes {
                ui.label(RichText::new(*title).strong().size(17.0));
                ui.label(*body);
                ui.add_space(layout::STANDARD_PADDING);
            }
        }
        Block::Placeholder(label) => {
            egui::Frame::group(ui.style())
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.set_min_height(200.0);
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(label).weak());
                    });
                });
        }
    }
}

fn chart_error(ui: &mut egui::Ui, asset: &str, message: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(ui.visuals().error_fg_color, format!("⚠ Chart '{}' unavailable", asset));
            ui.label(RichText::new(message).weak());
        });
}

fn missing_message(asset: &str, root: Option<&Path>) -> String {
    let missing = ExplorerError::ChartNotFound {
        key: asset.to_string(),
    };
    match root {
        Some(root) => format!("{}: no {}.json in {}", missing.user_message(), asset, root.display()),
        None => format!("{}: no chart data loaded", missing.user_message()),
    }
}

/// Cards per row in a grid of `count` items
fn columns_for(mode: ResolvedMode, count: usize) -> usize {
    match mode {
        ResolvedMode::Mobile => 1,
        ResolvedMode::Desktop => count.clamp(1, 3),
    }
}

fn render_callouts(ui: &mut egui::Ui, callouts: &[Callout], mode: ResolvedMode) {
    let per_row = columns_for(mode, callouts.len());
    for row in callouts.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, callout) in columns.iter_mut().zip(row) {
                CalloutCard::new(callout.body)
                    .title(callout.title)
                    .tone(callout.tone)
                    .show(column);
            }
        });
        ui.add_space(layout::STANDARD_PADDING);
    }
}

fn render_team(ui: &mut egui::Ui, members: &[TeamMember], mode: ResolvedMode) {
    let per_row = columns_for(mode, members.len());
    let accent = ui.visuals().selection.bg_fill;
    for row in members.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, member) in columns.iter_mut().zip(row) {
                egui::Frame::group(column.style())
                    .corner_radius(8.0)
                    .inner_margin(12.0)
                    .show(column, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            let (rect, _) =
                                ui.allocate_exact_size(egui::vec2(56.0, 56.0), Sense::hover());
                            ui.painter().circle_filled(rect.center(), 28.0, accent);
                            ui.painter().text(
                                rect.center(),
                                Align2::CENTER_CENTER,
                                member.initials,
                                FontId::proportional(20.0),
                                Color32::WHITE,
                            );
                            ui.label(RichText::new(member.name).strong().size(16.0));
                            ui.label(RichText::new(member.role).weak());
                            if let Some(profile) = member.profile {
                                ui.hyperlink_to("Profile", profile);
                            }
                        });
                    });
            }
        });
        ui.add_space(layout::STANDARD_PADDING);
    }
}

/// Single-open accordion of sources
fn render_references(ui: &mut egui::Ui, state: &mut AppState, references: &[Reference]) {
    for (i, reference) in references.iter().enumerate() {
        let open = state.ui.expanded_reference == Some(i);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let marker = if open { "▼" } else { "▶" };
            let header = RichText::new(format!("{} {}", marker, reference.title)).strong();
            if ui.selectable_label(open, header).clicked() {
                state.ui.toggle_reference(i);
            }
            if open {
                ui.add_space(4.0);
                ui.label(reference.body);
            }
        });
    }
}

fn render_footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.vertical_centered(|ui| {
        for line in FOOTER {
            ui.label(RichText::new(line).small().weak());
        }
    });
    ui.add_space(layout::STANDARD_PADDING * 2.0);
}
