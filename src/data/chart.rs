//! Plotly-style chart documents
//!
//! Assets are `{ "data": [...], "layout": {...} }` documents exported by the
//! analysis notebooks. Only the fields the explorer draws are modelled; the
//! rest is ignored during deserialization.

use serde::Deserialize;
use serde_json::Value;

/// A plain string title or Plotly's `{ "text": ... }` form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TitleSpec {
    Plain(String),
    Rich { text: String },
}

impl TitleSpec {
    pub fn text(&self) -> &str {
        match self {
            TitleSpec::Plain(s) => s,
            TitleSpec::Rich { text } => text,
        }
    }
}

/// Axis hints from the asset layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisHint {
    pub title: Option<TitleSpec>,
}

/// Base layout: the mode-agnostic chart description shipped with the asset
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartBaseLayout {
    pub title: Option<TitleSpec>,
    pub xaxis: AxisHint,
    pub yaxis: AxisHint,
    pub showlegend: Option<bool>,
    pub height: Option<f32>,
    pub width: Option<f32>,
}

/// Trace kinds the explorer can draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Scatter,
    Bar,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Marker {
    pub color: Option<Value>,
}

/// One data series
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: Option<String>,
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub mode: Option<String>,
    pub marker: Marker,
    pub showlegend: Option<bool>,
}

impl Trace {
    /// Whether a scatter trace should be drawn with a connecting line
    pub fn draws_lines(&self) -> bool {
        match &self.mode {
            Some(mode) => mode.contains("lines"),
            // Plotly's default for short scatter traces
            None => true,
        }
    }

    /// Whether a scatter trace should be drawn with markers
    pub fn draws_markers(&self) -> bool {
        self.mode.as_deref().is_some_and(|m| m.contains("markers"))
    }

    /// Marker colour as `[r, g, b]` when the asset gives a single parsable colour
    pub fn color_rgb(&self) -> Option<[u8; 3]> {
        self.marker.color.as_ref().and_then(Value::as_str).and_then(parse_color)
    }
}

/// The whole asset document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartDocument {
    pub data: Vec<Trace>,
    pub layout: ChartBaseLayout,
}

/// Categorical x values shared by every trace of a chart
///
/// Categories keep first-seen order, so bars of different traces line up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryAxis {
    labels: Vec<String>,
}

impl CategoryAxis {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn position(&mut self, label: &str) -> f64 {
        match self.labels.iter().position(|l| l == label) {
            Some(i) => i as f64,
            None => {
                self.labels.push(label.to_string());
                (self.labels.len() - 1) as f64
            }
        }
    }

    /// Label for a plot x coordinate, if it lands on a category
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.labels.get(rounded as usize).map(String::as_str)
    }
}

/// Plot-ready series derived from a trace
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: TraceKind,
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub lines: bool,
    pub markers: bool,
    pub color: Option<[u8; 3]>,
    pub in_legend: bool,
}

impl ChartDocument {
    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_ref().map(TitleSpec::text)
    }

    /// Convert drawable traces into numeric series.
    ///
    /// String x values become category positions; pairs whose y is not
    /// numeric are dropped. Unsupported trace kinds are skipped.
    pub fn series(&self) -> (Vec<Series>, CategoryAxis) {
        let mut categories = CategoryAxis::default();
        let series = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind != TraceKind::Unsupported)
            .map(|(i, trace)| {
                let points = trace
                    .x
                    .iter()
                    .zip(&trace.y)
                    .filter_map(|(x, y)| {
                        let y = numeric(y)?;
                        let x = match x {
                            Value::String(s) => match s.trim().parse::<f64>() {
                                Ok(n) => n,
                                Err(_) => categories.position(s),
                            },
                            other => numeric(other)?,
                        };
                        Some([x, y])
                    })
                    .collect();
                Series {
                    kind: trace.kind,
                    name: trace
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("trace {}", i)),
                    points,
                    lines: trace.kind == TraceKind::Scatter && trace.draws_lines(),
                    markers: trace.kind == TraceKind::Scatter && trace.draws_markers(),
                    color: trace.color_rgb(),
                    in_legend: trace.showlegend.unwrap_or(true),
                }
            })
            .collect();
        (series, categories)
    }
}

fn numeric(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Parse `#rrggbb`, `#rgb`, `rgb(r, g, b)` and `rgba(r, g, b, a)` colours
pub fn parse_color(s: &str) -> Option<[u8; 3]> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some([(v >> 16) as u8, (v >> 8) as u8, v as u8])
            }
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(hex.chars()) {
                    let d = c.to_digit(16)? as u8;
                    *slot = d * 17;
                }
                Some(out)
            }
            _ => None,
        };
    }
    let inner = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<f32>().ok());
    let r = parts.next()??;
    let g = parts.next()??;
    let b = parts.next()??;
    Some([r.clamp(0.0, 255.0) as u8, g.clamp(0.0, 255.0) as u8, b.clamp(0.0, 255.0) as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r##"{
        "data": [
            {"type": "bar", "name": "N (kg/ha)", "x": ["1990s", "2010s"], "y": [132, 118],
             "marker": {"color": "#2a9d8f"}},
            {"type": "scatter", "mode": "lines+markers", "name": "Grain",
             "x": ["1990s", "2010s"], "y": ["6.1", 5.7]},
            {"type": "heatmap", "z": [[1, 2], [3, 4]]}
        ],
        "layout": {
            "title": {"text": "Fertiliser use"},
            "xaxis": {"title": "Decade"},
            "yaxis": {"title": {"text": "kg/ha"}},
            "height": 500,
            "paper_bgcolor": "rgba(0,0,0,0)"
        }
    }"##;

    #[test]
    fn test_parse_document() {
        let doc = ChartDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.data.len(), 3);
        assert_eq!(doc.title(), Some("Fertiliser use"));
        assert_eq!(doc.layout.xaxis.title.as_ref().map(TitleSpec::text), Some("Decade"));
        assert_eq!(doc.layout.yaxis.title.as_ref().map(TitleSpec::text), Some("kg/ha"));
        assert_eq!(doc.layout.height, Some(500.0));
        assert_eq!(doc.layout.showlegend, None);
        assert_eq!(doc.data[2].kind, TraceKind::Unsupported);
    }

    #[test]
    fn test_series_share_categories() {
        let doc = ChartDocument::from_json(SAMPLE).unwrap();
        let (series, categories) = doc.series();

        assert_eq!(series.len(), 2, "heatmap trace is skipped");
        assert_eq!(categories.labels(), &["1990s".to_string(), "2010s".to_string()]);
        assert_eq!(series[0].points, vec![[0.0, 132.0], [1.0, 118.0]]);
        assert_eq!(series[1].points, vec![[0.0, 6.1], [1.0, 5.7]]);
        assert_eq!(series[0].color, Some([0x2a, 0x9d, 0x8f]));
        assert!(series[1].lines && series[1].markers);
        assert!(!series[0].lines, "bars never draw lines");
    }

    #[test]
    fn test_numeric_x_and_bad_y() {
        let doc = ChartDocument::from_json(
            r#"{"data": [{"x": [1990, "1991", 1992], "y": [1.0, null, 3.0]}]}"#,
        )
        .unwrap();
        let (series, categories) = doc.series();
        assert!(categories.is_empty());
        assert_eq!(series[0].points, vec![[1990.0, 1.0], [1992.0, 3.0]]);
        assert_eq!(series[0].name, "trace 0");
    }

    #[test]
    fn test_category_label_lookup() {
        let doc = ChartDocument::from_json(SAMPLE).unwrap();
        let (_, categories) = doc.series();
        assert_eq!(categories.label_at(1.0), Some("2010s"));
        assert_eq!(categories.label_at(0.5), None);
        assert_eq!(categories.label_at(-1.0), None);
        assert_eq!(categories.label_at(7.0), None);
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#ff8000"), Some([255, 128, 0]));
        assert_eq!(parse_color("#f80"), Some([255, 136, 0]));
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some([1, 2, 3]));
        assert_eq!(parse_color("rgba(10,20,30,0.5)"), Some([10, 20, 30]));
        assert_eq!(parse_color("teal"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_empty_document_defaults() {
        let doc = ChartDocument::from_json("{}").unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.layout, ChartBaseLayout::default());
    }
}
