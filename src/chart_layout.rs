//! Chart layout adaptation
//!
//! Turns the layout shipped with a chart asset into concrete rendering
//! settings for the current view mode. Pure: safe to call every frame.

use crate::constants::chart::*;
use crate::data::ChartBaseLayout;
use crate::state::ResolvedMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    const fn from_array([top, right, bottom, left]: [f32; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn to_egui(self) -> egui::Margin {
        let px = |v: f32| v.round().clamp(0.0, i8::MAX as f32) as i8;
        egui::Margin {
            left: px(self.left),
            right: px(self.right),
            top: px(self.top),
            bottom: px(self.bottom),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub axis_title: f32,
    pub tick: f32,
    pub legend: f32,
}

impl FontSizes {
    fn scaled(self, factor: f32) -> Self {
        Self {
            title: (self.title * factor).round(),
            axis_title: (self.axis_title * factor).round(),
            tick: (self.tick * factor).round(),
            legend: (self.legend * factor).round(),
        }
    }
}

const DESKTOP_FONTS: FontSizes = FontSizes {
    title: DESKTOP_TITLE_FONT,
    axis_title: DESKTOP_AXIS_FONT,
    tick: DESKTOP_TICK_FONT,
    legend: DESKTOP_LEGEND_FONT,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSettings {
    /// Label rotation in degrees; 0 means horizontal
    pub angle_deg: f32,
    /// Minimum pixel distance between grid lines
    pub min_spacing: f32,
    /// Categorical labels longer than this are shortened
    pub max_label_chars: Option<usize>,
}

impl TickSettings {
    pub fn is_angled(&self) -> bool {
        self.angle_deg != 0.0
    }
}

/// Fully resolved chart layout for one view mode
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayoutConfig {
    pub mode: ResolvedMode,
    pub height: f32,
    pub margins: Margins,
    pub fonts: FontSizes,
    pub show_legend: bool,
    pub ticks: TickSettings,
    pub title: Option<String>,
    /// Horizontal title anchor as a fraction of the chart width
    pub title_x: f32,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

/// Resolve `base` for `mode`
pub fn adapt(base: &ChartBaseLayout, mode: ResolvedMode) -> ChartLayoutConfig {
    resolve(base, mode, base.height)
}

/// Resolve `base` for `mode` in a page slot of `height` pixels.
///
/// The slot height replaces the asset's own; mobile still caps it.
pub fn adapt_placed(base: &ChartBaseLayout, mode: ResolvedMode, height: f32) -> ChartLayoutConfig {
    resolve(base, mode, Some(height).filter(|h| valid_height(*h)).or(base.height))
}

fn valid_height(h: f32) -> bool {
    h.is_finite() && h > 0.0
}

fn resolve(base: &ChartBaseLayout, mode: ResolvedMode, height: Option<f32>) -> ChartLayoutConfig {
    let base_height = height
        .filter(|h| valid_height(*h))
        .unwrap_or(DEFAULT_HEIGHT);
    let text = |t: &Option<crate::data::chart::TitleSpec>| t.as_ref().map(|t| t.text().to_string());

    let (height, margins, fonts, show_legend, ticks) = match mode {
        ResolvedMode::Desktop => (
            base_height,
            Margins::from_array(DESKTOP_MARGINS),
            DESKTOP_FONTS,
            base.showlegend.unwrap_or(true),
            TickSettings {
                angle_deg: 0.0,
                min_spacing: DESKTOP_TICK_SPACING,
                max_label_chars: None,
            },
        ),
        ResolvedMode::Mobile => (
            base_height.min(MOBILE_MAX_HEIGHT),
            Margins::from_array(MOBILE_MARGINS),
            DESKTOP_FONTS.scaled(MOBILE_FONT_SCALE),
            false,
            TickSettings {
                angle_deg: MOBILE_TICK_ANGLE,
                min_spacing: MOBILE_TICK_SPACING,
                max_label_chars: Some(MOBILE_TICK_LABEL_CHARS),
            },
        ),
    };

    ChartLayoutConfig {
        mode,
        height,
        margins,
        fonts,
        show_legend,
        ticks,
        title: text(&base.title),
        title_x: TITLE_X,
        x_title: text(&base.xaxis.title),
        y_title: text(&base.yaxis.title),
    }
}

/// Shorten a tick label to `max` characters, marking the cut with an ellipsis
pub fn shorten_label(label: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if max > 0 && label.chars().count() > max => {
            let mut out: String = label.chars().take(max - 1).collect();
            out.push('…');
            out
        }
        _ => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::chart::{AxisHint, TitleSpec};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn base() -> ChartBaseLayout {
        ChartBaseLayout {
            title: Some(TitleSpec::Rich {
                text: "Summary 1990".to_string(),
            }),
            xaxis: AxisHint {
                title: Some(TitleSpec::Plain("Year".to_string())),
            },
            yaxis: AxisHint::default(),
            showlegend: Some(true),
            height: Some(450.0),
            width: None,
        }
    }

    #[test]
    fn test_desktop_layout() {
        let cfg = adapt(&base(), ResolvedMode::Desktop);
        assert_eq!(cfg.height, 450.0);
        assert_eq!(cfg.margins, Margins::from_array([80.0, 40.0, 80.0, 80.0]));
        assert!(cfg.show_legend);
        assert!(!cfg.ticks.is_angled());
        assert_eq!(cfg.title.as_deref(), Some("Summary 1990"));
        assert_eq!(cfg.x_title.as_deref(), Some("Year"));
        assert_eq!(cfg.y_title, None);
        assert_eq!(cfg.title_x, 0.5);
    }

    #[test]
    fn test_mobile_layout() {
        let cfg = adapt(&base(), ResolvedMode::Mobile);
        assert_eq!(cfg.height, 380.0);
        assert!(!cfg.show_legend);
        assert!(cfg.ticks.is_angled());
        assert_eq!(cfg.ticks.max_label_chars, Some(10));
        assert_eq!(cfg.fonts.title, 14.0);
        assert_eq!(cfg.title_x, 0.5);
    }

    #[test]
    fn test_desktop_respects_legend_hint_and_default_height() {
        let layout = ChartBaseLayout {
            showlegend: Some(false),
            height: None,
            ..base()
        };
        let cfg = adapt(&layout, ResolvedMode::Desktop);
        assert!(!cfg.show_legend);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_legend_disappears_after_resize_to_mobile() {
        use crate::state::ResponsiveDetector;

        let mut detector = ResponsiveDetector::default();
        detector.on_resize(1024.0);
        let mode = detector.mode().resolved().unwrap();
        assert!(adapt(&base(), mode).show_legend);

        detector.on_resize(500.0);
        let mode = detector.mode().resolved().unwrap();
        assert!(!adapt(&base(), mode).show_legend);
    }

    #[test]
    fn test_slot_height_overrides_asset_height() {
        let layout = ChartBaseLayout {
            height: Some(500.0),
            ..base()
        };
        assert_eq!(adapt_placed(&layout, ResolvedMode::Desktop, 450.0).height, 450.0);
        assert_eq!(adapt_placed(&layout, ResolvedMode::Desktop, 550.0).height, 550.0);
        assert_eq!(adapt_placed(&layout, ResolvedMode::Mobile, 550.0).height, 380.0);

        // everything but the height matches the plain adaptation
        let placed = adapt_placed(&layout, ResolvedMode::Desktop, 450.0);
        let plain = adapt(&layout, ResolvedMode::Desktop);
        assert_eq!(ChartLayoutConfig { height: 500.0, ..placed }, plain);

        assert_eq!(adapt_placed(&layout, ResolvedMode::Desktop, 0.0).height, 500.0);
    }

    #[test]
    fn test_margins_to_egui() {
        let m = Margins::from_array(DESKTOP_MARGINS).to_egui();
        assert_eq!((m.top, m.right, m.bottom, m.left), (80, 40, 80, 80));
        let huge = Margins::from_array([500.0, -3.0, 0.0, 1.0]).to_egui();
        assert_eq!((huge.top, huge.right), (127, 0));
    }

    #[test]
    fn test_shorten_label() {
        assert_eq!(shorten_label("1990s", Some(10)), "1990s");
        assert_eq!(shorten_label("Rhopalosiphum padi", Some(10)), "Rhopalosi…");
        assert_eq!(shorten_label("anything", None), "anything");
    }

    proptest! {
        #[test]
        fn prop_adapt_is_deterministic(height in proptest::option::of(1.0f32..2000.0), legend in proptest::option::of(any::<bool>())) {
            let layout = ChartBaseLayout { height, showlegend: legend, ..base() };
            for mode in [ResolvedMode::Mobile, ResolvedMode::Desktop] {
                prop_assert_eq!(adapt(&layout, mode), adapt(&layout, mode));
            }
        }

        #[test]
        fn prop_mobile_never_larger(height in proptest::option::of(1.0f32..2000.0), legend in proptest::option::of(any::<bool>())) {
            let layout = ChartBaseLayout { height, showlegend: legend, ..base() };
            let mobile = adapt(&layout, ResolvedMode::Mobile);
            let desktop = adapt(&layout, ResolvedMode::Desktop);
            prop_assert!(!mobile.show_legend);
            prop_assert!(mobile.fonts.title <= desktop.fonts.title);
            prop_assert!(mobile.fonts.axis_title <= desktop.fonts.axis_title);
            prop_assert!(mobile.fonts.tick <= desktop.fonts.tick);
            prop_assert!(mobile.fonts.legend <= desktop.fonts.legend);
            prop_assert!(mobile.height <= desktop.height);
        }
    }
}
