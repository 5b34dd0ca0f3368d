use crate::app::NpkExplorer;

pub fn render_help_dialog(app: &mut NpkExplorer, ctx: &eframe::egui::Context) {
    if app.state.ui.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("General");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close image, fullscreen chart or help");

                ui.separator();
                ui.heading("Charts");
                ui.label("⛶ button - Fullscreen chart");
                ui.label("Drag - Pan view (fullscreen only)");
                ui.label("Scroll - Zoom in/out (fullscreen only)");
                ui.label("Double-click - Reset view");

                ui.separator();
                ui.heading("Images");
                ui.label("Click image - Open in lightbox");
                ui.label("Click outside - Close lightbox");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.ui.show_help = false;
                }
            });
    }
}
