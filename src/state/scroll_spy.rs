//! Section scroll-spy
//!
//! Each frame the page reports where every navigable section sits relative to
//! the scroll viewport. Sections entering or leaving the observation band
//! produce entries, the way an intersection observer reports crossings, and
//! the last section to enter becomes the active navigation entry.

use crate::config::SpyConfig;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Vertical extent in screen coordinates (top < bottom)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn overlap(&self, other: &Span) -> f32 {
        (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0)
    }
}

/// Observation band: the viewport with the configured margins cut away
pub fn band(viewport: Span, config: &SpyConfig) -> Span {
    let h = viewport.height();
    Span::new(
        viewport.top + h * config.top_margin,
        viewport.bottom - h * config.bottom_margin,
    )
}

/// Share of a section inside the band.
///
/// Measured against the smaller of the two heights, so a section taller than
/// the band still reaches 1.0 when it fills it.
pub fn visible_share(section: Span, band: Span) -> f32 {
    let denom = section.height().min(band.height());
    if denom <= 0.0 {
        return 0.0;
    }
    section.overlap(&band) / denom
}

/// A crossing reported for one section
#[derive(Debug, Clone, PartialEq)]
pub struct SpyEntry {
    pub section: SectionId,
    pub intersecting: bool,
    pub share: f32,
}

#[derive(Debug, Clone)]
pub struct SectionSpy {
    sections: Vec<SectionId>,
    intersecting: Vec<bool>,
    active: SectionId,
    config: SpyConfig,
}

impl SectionSpy {
    /// `sections` is the navigation order; the first one starts active
    pub fn new(sections: Vec<SectionId>, config: SpyConfig) -> Self {
        let active = sections
            .first()
            .cloned()
            .unwrap_or_else(|| SectionId::new(""));
        let intersecting = vec![false; sections.len()];
        Self {
            sections,
            intersecting,
            active,
            config,
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    /// Compute crossings for one frame of measurements.
    ///
    /// Entries come out in the order of `measured`, which is page order.
    /// Sections missing from `measured` keep their previous state; ids the
    /// spy does not track are ignored.
    pub fn entries(&mut self, viewport: Span, measured: &[(SectionId, Span)]) -> Vec<SpyEntry> {
        let band = band(viewport, &self.config);
        let mut entries = Vec::new();

        for (id, span) in measured {
            let Some(idx) = self.sections.iter().position(|s| s == id) else {
                continue;
            };
            let share = visible_share(*span, band);
            let now = share > 0.0 && share >= self.config.threshold;
            if now != self.intersecting[idx] {
                self.intersecting[idx] = now;
                entries.push(SpyEntry {
                    section: id.clone(),
                    intersecting: now,
                    share,
                });
            }
        }
        entries
    }

    /// Feed one frame of measurements. Returns true when the active section changed.
    pub fn observe(&mut self, viewport: Span, measured: &[(SectionId, Span)]) -> bool {
        let entries = self.entries(viewport, measured);
        let Some(last) = entries.into_iter().filter(|e| e.intersecting).last() else {
            return false;
        };
        if last.section == self.active {
            return false;
        }
        log::debug!("scroll-spy: {} -> {} ({:.2})", self.active, last.section, last.share);
        self.active = last.section;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> SectionSpy {
        SectionSpy::new(
            vec!["home".into(), "weather".into(), "asia".into()],
            SpyConfig::default(),
        )
    }

    // Viewport 0..1000 gives a band of 100..600 with the default margins
    const VIEWPORT: Span = Span { top: 0.0, bottom: 1000.0 };

    #[test]
    fn test_band_and_share() {
        let b = band(VIEWPORT, &SpyConfig::default());
        assert!((b.top - 100.0).abs() < 1e-3);
        assert!((b.bottom - 600.0).abs() < 1e-3);

        // half of a 200px section inside
        assert!((visible_share(Span::new(500.0, 700.0), b) - 0.5).abs() < 1e-6);
        // section taller than band filling it entirely
        assert!((visible_share(Span::new(-2000.0, 3000.0), b) - 1.0).abs() < 1e-6);
        assert_eq!(visible_share(Span::new(700.0, 900.0), b), 0.0);
        assert_eq!(visible_share(Span::new(300.0, 300.0), b), 0.0);
    }

    #[test]
    fn test_initial_active_is_first_section() {
        assert_eq!(spy().active(), &SectionId::new("home"));
        let empty = SectionSpy::new(Vec::new(), SpyConfig::default());
        assert_eq!(empty.active().as_str(), "");
    }

    #[test]
    fn test_scrolling_moves_active_section() {
        let mut spy = spy();
        let frame = |offset: f32| {
            vec![
                (SectionId::new("home"), Span::new(0.0 - offset, 1000.0 - offset)),
                (SectionId::new("weather"), Span::new(1000.0 - offset, 2000.0 - offset)),
                (SectionId::new("asia"), Span::new(2000.0 - offset, 3000.0 - offset)),
            ]
        };

        assert!(!spy.observe(VIEWPORT, &frame(0.0)), "home already active");
        assert_eq!(spy.active().as_str(), "home");

        assert!(spy.observe(VIEWPORT, &frame(1000.0)));
        assert_eq!(spy.active().as_str(), "weather");

        assert!(!spy.observe(VIEWPORT, &frame(1050.0)), "no crossing, no change");
        assert_eq!(spy.active().as_str(), "weather");
    }

    #[test]
    fn test_below_threshold_does_not_activate() {
        let mut spy = spy();
        // 100 of 500 band px covered by a 1000px section: share 0.2
        let measured = vec![(SectionId::new("asia"), Span::new(500.0, 1500.0))];
        assert!(!spy.observe(VIEWPORT, &measured));
        assert_eq!(spy.active().as_str(), "home");
    }

    #[test]
    fn test_simultaneous_crossings_pick_one_of_them() {
        let mut spy = spy();
        let measured = vec![
            (SectionId::new("weather"), Span::new(100.0, 350.0)),
            (SectionId::new("asia"), Span::new(350.0, 600.0)),
        ];
        let entries = spy.entries(VIEWPORT, &measured);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.intersecting));

        let mut spy = self::spy();
        assert!(spy.observe(VIEWPORT, &measured));
        let active = spy.active().as_str();
        assert!(active == "weather" || active == "asia");
    }

    #[test]
    fn test_tie_goes_to_last_section_on_page() {
        // nav lists asia before weather, the page draws weather after asia
        let mut spy = SectionSpy::new(
            vec!["home".into(), "asia".into(), "weather".into()],
            SpyConfig::default(),
        );
        let measured = vec![
            (SectionId::new("home"), Span::new(-900.0, 100.0)),
            (SectionId::new("asia"), Span::new(100.0, 350.0)),
            (SectionId::new("footer"), Span::new(340.0, 360.0)),
            (SectionId::new("weather"), Span::new(350.0, 600.0)),
        ];
        let entries = spy.entries(VIEWPORT, &measured);
        let order: Vec<_> = entries.iter().map(|e| e.section.as_str()).collect();
        assert_eq!(order, ["asia", "weather"]);

        let mut spy = SectionSpy::new(
            vec!["home".into(), "weather".into(), "asia".into()],
            SpyConfig::default(),
        );
        assert!(spy.observe(VIEWPORT, &measured));
        assert_eq!(spy.active().as_str(), "weather");
    }

    #[test]
    fn test_leaving_band_reports_exit_entry() {
        let mut spy = spy();
        let inside = vec![(SectionId::new("weather"), Span::new(100.0, 600.0))];
        let outside = vec![(SectionId::new("weather"), Span::new(2000.0, 2500.0))];
        spy.entries(VIEWPORT, &inside);

        let entries = spy.entries(VIEWPORT, &outside);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].intersecting);
    }
}
