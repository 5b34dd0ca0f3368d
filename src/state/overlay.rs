//! Media overlays: image lightbox and fullscreen chart
//!
//! Transitions are plain state updates. Anything that touches the window
//! (native fullscreen) comes back as an [`OverlayEffect`] for the controller
//! to carry out, so the state machine itself stays testable without a window.

use std::fmt;

/// Identifies one chart placement on the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartId(String);

impl ChartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChartId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Image currently shown in the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOverlay {
    pub source: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    OpenImage(ImageOverlay),
    CloseImage,
    ToggleFullscreenChart(ChartId),
    /// The window entered or left native fullscreen on its own
    NativeFullscreenChanged { active: bool },
    /// The native fullscreen request went through
    NativeFullscreenEngaged,
    Teardown,
}

/// Window-level side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffect {
    RequestNativeFullscreen,
    ExitNativeFullscreen,
}

/// Both overlay slots. They are independent: an image can be open on top of
/// a fullscreen chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    image: Option<ImageOverlay>,
    fullscreen_chart: Option<ChartId>,
    /// The app entered native fullscreen and owes the exit
    native_engaged: bool,
    /// Last fullscreen state the window reported
    native_active: bool,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageOverlay> {
        self.image.as_ref()
    }

    pub fn fullscreen_chart(&self) -> Option<&ChartId> {
        self.fullscreen_chart.as_ref()
    }

    pub fn is_fullscreen(&self, id: &ChartId) -> bool {
        self.fullscreen_chart.as_ref() == Some(id)
    }

    /// Page scrolling is suspended while any overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.image.is_some() || self.fullscreen_chart.is_some()
    }

    pub fn is_idle(&self) -> bool {
        !self.scroll_locked() && !self.native_engaged
    }

    /// Apply one transition
    pub fn apply(&mut self, action: OverlayAction) -> Option<OverlayEffect> {
        match action {
            OverlayAction::OpenImage(image) => {
                log::debug!("overlay: open image {}", image.source);
                self.image = Some(image);
                None
            }
            OverlayAction::CloseImage => {
                if self.image.take().is_some() {
                    log::debug!("overlay: close image");
                }
                None
            }
            OverlayAction::ToggleFullscreenChart(id) => {
                if self.fullscreen_chart.as_ref() == Some(&id) {
                    log::debug!("overlay: leave fullscreen chart {}", id);
                    self.fullscreen_chart = None;
                    self.release_native()
                } else {
                    log::debug!("overlay: fullscreen chart {}", id);
                    self.fullscreen_chart = Some(id);
                    // already fullscreen, ours or not: nothing to request
                    if self.native_engaged || self.native_active {
                        None
                    } else {
                        Some(OverlayEffect::RequestNativeFullscreen)
                    }
                }
            }
            OverlayAction::NativeFullscreenChanged { active: false } => {
                self.native_active = false;
                self.native_engaged = false;
                if let Some(id) = self.fullscreen_chart.take() {
                    log::debug!("overlay: native fullscreen exited, closing chart {}", id);
                }
                None
            }
            OverlayAction::NativeFullscreenChanged { active: true } => {
                self.native_active = true;
                self.claim_native();
                None
            }
            OverlayAction::NativeFullscreenEngaged => {
                self.claim_native();
                None
            }
            OverlayAction::Teardown => {
                self.image = None;
                self.fullscreen_chart = None;
                self.release_native()
            }
        }
    }

    // Fullscreen entered for some other reason is not ours to undo
    fn claim_native(&mut self) {
        if self.fullscreen_chart.is_some() {
            self.native_engaged = true;
        }
    }

    fn release_native(&mut self) -> Option<OverlayEffect> {
        if std::mem::take(&mut self.native_engaged) {
            Some(OverlayEffect::ExitNativeFullscreen)
        } else {
            None
        }
    }
}
