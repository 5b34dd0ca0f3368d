//! Responsive view mode

use crate::constants::responsive::MOBILE_BREAKPOINT;

/// Viewport classification
///
/// `Unknown` only exists until the first measurement, so nothing is laid out
/// for the wrong form factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Unknown,
    Mobile,
    Desktop,
}

/// A measured view mode, the only kind layout code accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedMode {
    Mobile,
    Desktop,
}

impl ViewMode {
    /// Classify a viewport width against `breakpoint`
    pub fn classify(width: f32, breakpoint: f32) -> ViewMode {
        if width < breakpoint {
            ViewMode::Mobile
        } else {
            ViewMode::Desktop
        }
    }

    pub fn resolved(self) -> Option<ResolvedMode> {
        match self {
            ViewMode::Unknown => None,
            ViewMode::Mobile => Some(ResolvedMode::Mobile),
            ViewMode::Desktop => Some(ResolvedMode::Desktop),
        }
    }

}

impl ResolvedMode {
    pub fn label(self) -> &'static str {
        match self {
            ResolvedMode::Mobile => "mobile",
            ResolvedMode::Desktop => "desktop",
        }
    }
}

/// Tracks viewport width and the view mode derived from it
#[derive(Debug, Clone)]
pub struct ResponsiveDetector {
    mode: ViewMode,
    breakpoint: f32,
}

impl Default for ResponsiveDetector {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT)
    }
}

impl ResponsiveDetector {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            mode: ViewMode::Unknown,
            breakpoint,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Record a new viewport width. Returns true when the mode changed.
    pub fn on_resize(&mut self, width: f32) -> bool {
        let next = ViewMode::classify(width, self.breakpoint);
        if next == self.mode {
            return false;
        }
        log::debug!("view mode {:?} -> {:?} at width {:.0}", self.mode, next, width);
        self.mode = next;
        true
    }
}
