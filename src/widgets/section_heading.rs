//! Centred section heading with badge, title and subtitle

use crate::state::ResolvedMode;
use egui::{Response, RichText, Ui};

pub struct SectionHeading<'a> {
    badge: Option<&'a str>,
    title: &'a str,
    subtitle: Option<&'a str>,
    hero: bool,
}

impl<'a> SectionHeading<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            badge: None,
            title,
            subtitle: None,
            hero: false,
        }
    }

    pub fn badge(mut self, badge: Option<&'a str>) -> Self {
        self.badge = badge;
        self
    }

    pub fn subtitle(mut self, subtitle: Option<&'a str>) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// Larger type for the landing section
    pub fn hero(mut self, hero: bool) -> Self {
        self.hero = hero;
        self
    }

    pub fn show(self, ui: &mut Ui, mode: ResolvedMode) -> Response {
        // md: breakpoint steps, as on the web page
        let title_size = match (self.hero, mode) {
            (true, ResolvedMode::Desktop) => 56.0,
            (true, ResolvedMode::Mobile) => 40.0,
            (false, ResolvedMode::Desktop) => 40.0,
            (false, ResolvedMode::Mobile) => 30.0,
        };
        let accent = ui.visuals().selection.bg_fill;

        ui.vertical_centered(|ui| {
            if let Some(badge) = self.badge {
                egui::Frame::new()
                    .fill(ui.visuals().widgets.inactive.bg_fill)
                    .corner_radius(12.0)
                    .inner_margin(egui::Margin::symmetric(12, 4))
                    .show(ui, |ui| {
                        ui.label(RichText::new(badge).size(16.0));
                    });
                ui.add_space(8.0);
            }
            ui.label(RichText::new(self.title).size(title_size).strong().color(accent));
            if let Some(subtitle) = self.subtitle {
                ui.add_space(6.0);
                ui.label(RichText::new(subtitle).size(title_size * 0.5));
            }
        })
        .response
    }
}
