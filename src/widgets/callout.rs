//! Callout card for short findings under a chart

use crate::content::Tone;
use egui::{Color32, Response, RichText, Ui, Visuals};

/// Fill and text colour for a tone under the current theme
fn tone_colors(tone: Tone, visuals: &Visuals) -> (Color32, Color32) {
    let (dark, light) = match tone {
        Tone::Primary => (Color32::from_rgb(39, 74, 58), Color32::from_rgb(46, 94, 70)),
        Tone::Secondary => (Color32::from_rgb(92, 70, 34), Color32::from_rgb(176, 124, 48)),
        Tone::Accent => (Color32::from_rgb(48, 72, 96), Color32::from_rgb(70, 110, 150)),
        Tone::Muted => (visuals.faint_bg_color, visuals.extreme_bg_color),
    };
    let fill = if visuals.dark_mode { dark } else { light };
    let text = match tone {
        Tone::Muted => visuals.text_color(),
        _ => Color32::WHITE,
    };
    (fill, text)
}

/// A tinted card with an optional heading
pub struct CalloutCard<'a> {
    title: Option<&'a str>,
    body: &'a str,
    tone: Tone,
}

impl<'a> CalloutCard<'a> {
    pub fn new(body: &'a str) -> Self {
        Self {
            title: None,
            body,
            tone: Tone::Muted,
        }
    }

    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let (fill, text) = tone_colors(self.tone, ui.visuals());
        egui::Frame::group(ui.style())
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if let Some(title) = self.title {
                    ui.label(RichText::new(title).strong().size(16.0).color(text));
                    ui.add_space(4.0);
                }
                ui.label(RichText::new(self.body).color(text));
            })
            .response
    }
}
