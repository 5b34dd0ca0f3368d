use super::UiAction;
use crate::chart_layout::{ChartLayoutConfig, shorten_label};
use crate::data::{CategoryAxis, ChartDocument, Series, TraceKind};
use crate::state::ChartId;
use eframe::egui::{self, Align, Color32, FontId, Layout, RichText, TextStyle};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, Points};

fn series_color(index: usize) -> Color32 {
    let colors = [
        Color32::from_rgb(31, 119, 180),  // Blue
        Color32::from_rgb(255, 127, 14),  // Orange
        Color32::from_rgb(44, 160, 44),   // Green
        Color32::from_rgb(214, 39, 40),   // Red
        Color32::from_rgb(148, 103, 189), // Purple
        Color32::from_rgb(140, 86, 75),   // Brown
        Color32::from_rgb(227, 119, 194), // Pink
        Color32::from_rgb(127, 127, 127), // Gray
        Color32::from_rgb(188, 189, 34),  // Yellow
        Color32::from_rgb(23, 190, 207),  // Cyan
    ];
    colors[index % colors.len()]
}

/// Round tick positions inside `[min, max]`, about `max_count` intervals apart
fn nice_ticks(min: f64, max: f64, max_count: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min || max_count == 0 {
        return Vec::new();
    }
    let raw = (max - min) / max_count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    // integer multiples of the step, with slack for float noise at the ends
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn tick_text(categories: &CategoryAxis, value: f64, max_chars: Option<usize>) -> Option<String> {
    if categories.is_empty() {
        Some(if value.abs() >= 1000.0 || value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        })
    } else {
        categories.label_at(value).map(|l| shorten_label(l, max_chars))
    }
}

fn title_align(title_x: f32) -> Align {
    if title_x < 0.34 {
        Align::Min
    } else if title_x > 0.66 {
        Align::Max
    } else {
        Align::Center
    }
}

/// Render one chart with an adapted layout.
///
/// `plot_id` must be unique per placement; the fullscreen overlay passes its
/// own id so the two plots keep separate zoom state.
pub fn render_chart(
    ui: &mut egui::Ui,
    chart: &ChartId,
    plot_id: &str,
    doc: &ChartDocument,
    layout: &ChartLayoutConfig,
    fullscreen: bool,
) -> Option<UiAction> {
    profiling::scope!("render_chart");
    let mut action = None;

    ui.horizontal(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if fullscreen { "✕ Exit fullscreen" } else { "⛶ Fullscreen" };
            if ui.small_button(label).clicked() {
                action = Some(UiAction::ToggleFullscreen(chart.clone()));
            }
        });
    });

    if let Some(title) = &layout.title {
        ui.with_layout(Layout::top_down(title_align(layout.title_x)), |ui| {
            ui.label(RichText::new(title).size(layout.fonts.title).strong());
        });
    }

    let (series, categories) = doc.series();
    let margins = layout.margins.to_egui();

    egui::Frame::new().inner_margin(margins).show(ui, |ui| {
        ui.scope(|ui| {
            let style = ui.style_mut();
            style
                .text_styles
                .insert(TextStyle::Body, FontId::proportional(layout.fonts.tick));
            style
                .text_styles
                .insert(TextStyle::Small, FontId::proportional(layout.fonts.legend));

            let angled = layout.ticks.is_angled();
            let plot_height =
                (layout.height - layout.margins.top - layout.margins.bottom).max(120.0);

            let mut plot = Plot::new(plot_id)
                .height(plot_height)
                .allow_scroll(false)
                .allow_drag(fullscreen)
                .allow_zoom(fullscreen)
                .grid_spacing(layout.ticks.min_spacing..=layout.ticks.min_spacing * 3.0)
                .show_axes([!angled, true]);

            if !angled {
                let cats = categories.clone();
                let max_chars = layout.ticks.max_label_chars;
                plot = plot.x_axis_formatter(move |mark, _range| {
                    tick_text(&cats, mark.value, max_chars).unwrap_or_default()
                });
                if let Some(x_title) = &layout.x_title {
                    plot = plot.x_axis_label(
                        RichText::new(x_title.clone()).size(layout.fonts.axis_title),
                    );
                }
            }
            if let Some(y_title) = &layout.y_title {
                plot = plot
                    .y_axis_label(RichText::new(y_title.clone()).size(layout.fonts.axis_title));
            }
            if layout.show_legend {
                plot = plot.legend(Legend::default().text_style(TextStyle::Small));
            }

            let bar_count = series.iter().filter(|s| s.kind == TraceKind::Bar).count();
            let response = plot.show(ui, |plot_ui| {
                let mut bar_slot = 0;
                for (i, s) in series.iter().enumerate() {
                    let color = s
                        .color
                        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
                        .unwrap_or_else(|| series_color(i));
                    let name = if s.in_legend { s.name.clone() } else { String::new() };
                    match s.kind {
                        TraceKind::Bar => {
                            plot_ui.bar_chart(
                                BarChart::new(name, bars(s, bar_slot, bar_count)).color(color),
                            );
                            bar_slot += 1;
                        }
                        _ => {
                            if s.lines {
                                plot_ui.line(Line::new(name.clone(), s.points.clone()).color(color));
                            }
                            if s.markers {
                                plot_ui.points(
                                    Points::new(name, s.points.clone()).radius(3.0).color(color),
                                );
                            }
                        }
                    }
                }
            });

            if angled {
                paint_angled_ticks(ui, &response.transform, &categories, layout);
            }
        });
    });

    action
}

fn bars(series: &Series, slot: usize, count: usize) -> Vec<Bar> {
    let width = 0.8 / count.max(1) as f64;
    let offset = (slot as f64 - (count.max(1) - 1) as f64 / 2.0) * width;
    series
        .points
        .iter()
        .map(|[x, y]| Bar::new(x + offset, *y).width(width))
        .collect()
}

/// Tick labels rotated by the layout's angle, drawn in the bottom margin.
/// egui_plot only draws horizontal labels.
fn paint_angled_ticks(
    ui: &egui::Ui,
    transform: &egui_plot::PlotTransform,
    categories: &CategoryAxis,
    layout: &ChartLayoutConfig,
) {
    let bounds = transform.bounds();
    let (x_min, x_max) = (bounds.min()[0], bounds.max()[0]);
    let y_bottom = bounds.min()[1];
    let frame = transform.frame();
    let max_count = (frame.width() / layout.ticks.min_spacing).floor().max(1.0) as usize;

    let positions: Vec<f64> = if categories.is_empty() {
        nice_ticks(x_min, x_max, max_count)
    } else {
        let visible: Vec<f64> = (0..categories.labels().len())
            .map(|i| i as f64)
            .filter(|x| *x >= x_min && *x <= x_max)
            .collect();
        let stride = visible.len().div_ceil(max_count).max(1);
        visible.into_iter().step_by(stride).collect()
    };

    let angle = layout.ticks.angle_deg.to_radians();
    let (sin, cos) = angle.sin_cos();
    let color = ui.visuals().text_color();
    let font = FontId::proportional(layout.fonts.tick);
    let painter = ui.painter();

    for x in positions {
        let Some(text) = tick_text(categories, x, layout.ticks.max_label_chars) else {
            continue;
        };
        let anchor = transform.position_from_point(&PlotPoint::new(x, y_bottom)) + egui::vec2(0.0, 6.0);
        let galley = painter.layout_no_wrap(text, font.clone(), color);
        let w = galley.size().x;
        // place the text so it ends at the tick
        let start = anchor - egui::vec2(w * cos, w * sin);
        painter.add(egui::epaint::TextShape::new(start, galley, color).with_angle(angle));
    }

    if let Some(x_title) = &layout.x_title {
        let pos = egui::pos2(frame.center().x, frame.bottom() + layout.margins.bottom - 4.0);
        painter.text(
            pos,
            egui::Align2::CENTER_BOTTOM,
            x_title,
            FontId::proportional(layout.fonts.axis_title),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(1990.0, 2020.0, 3), vec![1990.0, 2000.0, 2010.0, 2020.0]);

        let fine = nice_ticks(0.1, 0.35, 5);
        let expected = [0.1, 0.15, 0.2, 0.25, 0.3, 0.35];
        assert_eq!(fine.len(), expected.len());
        for (got, want) in fine.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_nice_ticks_degenerate_ranges() {
        assert!(nice_ticks(5.0, 5.0, 4).is_empty());
        assert!(nice_ticks(1.0, 0.0, 4).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 4).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_tick_text_numeric_and_categorical() {
        let empty = CategoryAxis::default();
        assert_eq!(tick_text(&empty, 1995.0, None).as_deref(), Some("1995"));
        assert_eq!(tick_text(&empty, 0.25, None).as_deref(), Some("0.25"));

        let doc = ChartDocument::from_json(
            r#"{"data": [{"x": ["Rhopalosiphum padi", "Sitobion"], "y": [1, 2]}]}"#,
        )
        .unwrap();
        let (_, cats) = doc.series();
        assert_eq!(tick_text(&cats, 0.0, Some(10)).as_deref(), Some("Rhopalosi…"));
        assert_eq!(tick_text(&cats, 0.5, Some(10)), None);
    }

    #[test]
    fn test_bars_spread_across_slots() {
        let series = Series {
            kind: TraceKind::Bar,
            name: "N".to_string(),
            points: vec![[0.0, 1.0], [1.0, 2.0]],
            lines: false,
            markers: false,
            color: None,
            in_legend: true,
        };
        let first = bars(&series, 0, 2);
        let second = bars(&series, 1, 2);
        assert!((first[0].argument + 0.2).abs() < 1e-9);
        assert!((second[0].argument - 0.2).abs() < 1e-9);
        assert!((bars(&series, 0, 1)[1].argument - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_title_alignment() {
        assert_eq!(title_align(0.5), Align::Center);
        assert_eq!(title_align(0.0), Align::Min);
        assert_eq!(title_align(1.0), Align::Max);
    }
}
