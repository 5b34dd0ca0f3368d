use super::UiAction;
use crate::app::NpkExplorer;
use crate::constants::layout;
use crate::content::{NAV_ITEMS, SITE_TITLE};
use crate::state::{ResolvedMode, SectionId};
use eframe::egui::{self, Align, Layout, RichText};

/// Top bar with section links; on mobile the links move into a side panel
/// behind a menu button.
pub fn render_navigation(
    app: &mut NpkExplorer,
    ctx: &egui::Context,
    mode: ResolvedMode,
    actions: &mut Vec<UiAction>,
) {
    profiling::scope!("render_navigation");
    let accent = ctx.style().visuals.selection.bg_fill;

    egui::TopBottomPanel::top("nav_bar")
        .min_height(layout::NAV_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(SITE_TITLE).size(20.0).strong().color(accent));
                ui.add_space(layout::STANDARD_PADDING);

                match mode {
                    ResolvedMode::Desktop => {
                        nav_links(ui, app.controller.active_section(), actions);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            theme_button(ui, app);
                        });
                    }
                    ResolvedMode::Mobile => {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let icon = if app.state.ui.nav_open { "✕" } else { "☰" };
                            if ui
                                .button(RichText::new(icon).size(20.0))
                                .on_hover_text("Menu")
                                .clicked()
                            {
                                app.state.ui.toggle_nav();
                            }
                            theme_button(ui, app);
                        });
                    }
                }
            });
        });

    if mode == ResolvedMode::Mobile && app.state.ui.nav_open {
        egui::SidePanel::right("nav_panel")
            .resizable(false)
            .exact_width(layout::NAV_PANEL_WIDTH.min(ctx.content_rect().width()))
            .show(ctx, |ui| {
                ui.add_space(layout::STANDARD_PADDING);
                ui.vertical(|ui| {
                    nav_links(ui, app.controller.active_section(), actions);
                });
            });
    }
}

fn nav_links(ui: &mut egui::Ui, active: &SectionId, actions: &mut Vec<UiAction>) {
    for item in NAV_ITEMS {
        let is_active = active.as_str() == item.anchor;
        let text = if is_active {
            RichText::new(item.label).strong()
        } else {
            RichText::new(item.label)
        };
        if ui.selectable_label(is_active, text).clicked() {
            actions.push(UiAction::Navigate(SectionId::new(item.anchor)));
        }
    }
}

fn theme_button(ui: &mut egui::Ui, app: &mut NpkExplorer) {
    let icon = if app.state.ui.dark_mode { "☀" } else { "🌙" };
    if ui.button(icon).on_hover_text("Toggle theme (T)").clicked() {
        app.state.ui.toggle_dark_mode();
    }
}
