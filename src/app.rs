use eframe::{App, egui};

use crate::config::ExplorerConfig;
use crate::content;
use crate::controller::ViewController;
use crate::events::FrameSignals;
use crate::platform::{EguiFullscreen, native_fullscreen};
use crate::state::{self, ResolvedMode};
use crate::ui::{self, UiAction};

pub struct NpkExplorer {
    pub state: state::AppState,
    pub controller: ViewController<EguiFullscreen>,
}

impl NpkExplorer {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &ExplorerConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let state = state::AppState::new(config);
        if state.catalog.is_empty() {
            log::warn!("no charts loaded; every chart slot shows an error card");
        } else {
            log::info!(
                "loaded {} chart(s), {} failed",
                state.catalog.len(),
                state.catalog.failure_count()
            );
        }
        Self {
            state,
            controller: ViewController::new(
                EguiFullscreen::new(cc.egui_ctx.clone()),
                config,
                content::nav_sections(),
            ),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::T) {
                self.state.ui.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.ui.show_help = !self.state.ui.show_help;
            }
            // Overlays close themselves on Escape
            if i.key_pressed(egui::Key::Escape) {
                self.state.ui.show_help = false;
            }
        });
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::OpenImage {
                source,
                description,
            } => self.controller.open_image(source, description),
            UiAction::CloseImage => self.controller.close_image(),
            UiAction::ToggleFullscreen(id) => self.controller.toggle_fullscreen_chart(id),
            UiAction::Navigate(section) => self.state.ui.navigate_to(section),
        }
    }

    fn render_error_bar(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.ui.error_message.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("error_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", message));
                if ui.small_button("Dismiss").clicked() {
                    self.state.ui.clear_error();
                }
            });
        });
    }

    fn render(&mut self, ctx: &egui::Context, mode: ResolvedMode) {
        let mut actions = Vec::new();

        ui::render_navigation(self, ctx, mode, &mut actions);
        self.render_error_bar(ctx);
        let page = ui::render_page(self, ctx, mode, &mut actions);
        if let Some(viewport) = page.viewport {
            self.controller.observe_sections(viewport, &page.sections);
        }
        ui::render_overlays(self, ctx, mode, &mut actions);
        ui::render_help_dialog(self, ctx);

        for action in actions {
            self.apply(action);
        }
    }
}

impl App for NpkExplorer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("update");

        // Set theme
        if self.state.ui.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.controller.begin_frame(FrameSignals {
            viewport_width: ctx.content_rect().width(),
            native_fullscreen: native_fullscreen(ctx),
        });
        self.handle_shortcuts(ctx);

        // Nothing is laid out until the first width reading has classified the view
        let Some(mode) = self.controller.mode().resolved() else {
            ctx.request_repaint();
            return;
        };
        self.render(ctx, mode);
    }
}
