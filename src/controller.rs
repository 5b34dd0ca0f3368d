//! View state controller
//!
//! Owns the responsive detector, the overlay state and the scroll-spy, and is
//! the only place that talks to the window. Dropping the controller runs the
//! teardown path, so a closed app never leaves native fullscreen engaged.

use crate::config::ExplorerConfig;
use crate::events::{FrameSignals, PageEvent, SignalWatcher};
use crate::platform::FullscreenHost;
use crate::state::{
    ChartId, ImageOverlay, OverlayAction, OverlayEffect, OverlayState, ResponsiveDetector,
    SectionId, SectionSpy, Span, ViewMode,
};

pub struct ViewController<H: FullscreenHost> {
    detector: ResponsiveDetector,
    overlay: OverlayState,
    spy: SectionSpy,
    watcher: SignalWatcher,
    host: H,
    torn_down: bool,
}

impl<H: FullscreenHost> ViewController<H> {
    pub fn new(host: H, config: &ExplorerConfig, sections: Vec<SectionId>) -> Self {
        Self {
            detector: ResponsiveDetector::new(config.breakpoint),
            overlay: OverlayState::new(),
            spy: SectionSpy::new(sections, config.spy),
            watcher: SignalWatcher::new(),
            host,
            torn_down: false,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.detector.mode()
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn active_section(&self) -> &SectionId {
        self.spy.active()
    }

    /// Feed this frame's window readings. Call before drawing the page.
    pub fn begin_frame(&mut self, signals: FrameSignals) {
        self.torn_down = false;
        for event in self.watcher.observe(signals) {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Resized { width } => {
                if self.detector.on_resize(width) {
                    if let Some(mode) = self.detector.mode().resolved() {
                        log::info!("layout switched to {} at {:.0}px", mode.label(), width);
                    }
                }
            }
            PageEvent::NativeFullscreenChanged { active } => {
                self.dispatch(OverlayAction::NativeFullscreenChanged { active });
            }
        }
    }

    pub fn open_image(&mut self, source: impl Into<String>, description: impl Into<String>) {
        self.dispatch(OverlayAction::OpenImage(ImageOverlay {
            source: source.into(),
            description: description.into(),
        }));
    }

    pub fn close_image(&mut self) {
        self.dispatch(OverlayAction::CloseImage);
    }

    pub fn toggle_fullscreen_chart(&mut self, id: ChartId) {
        self.dispatch(OverlayAction::ToggleFullscreenChart(id));
    }

    /// Report section positions measured while drawing the page
    pub fn observe_sections(&mut self, viewport: Span, measured: &[(SectionId, Span)]) {
        self.spy.observe(viewport, measured);
    }

    fn dispatch(&mut self, action: OverlayAction) {
        if let Some(effect) = self.overlay.apply(action) {
            self.run_effect(effect);
        }
    }

    // Fullscreen failures are logged and dropped: the in-app overlay is
    // already open and must not depend on the window.
    fn run_effect(&mut self, effect: OverlayEffect) {
        match effect {
            OverlayEffect::RequestNativeFullscreen => match self.host.request_fullscreen() {
                Ok(()) => {
                    self.overlay.apply(OverlayAction::NativeFullscreenEngaged);
                }
                Err(e) => log::warn!("fullscreen request failed: {}", e),
            },
            OverlayEffect::ExitNativeFullscreen => {
                if let Err(e) = self.host.exit_fullscreen() {
                    log::warn!("fullscreen exit failed: {}", e);
                }
            }
        }
    }

    /// Close every overlay and hand the window back in its normal state.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if !self.overlay.is_idle() {
            log::debug!("teardown: releasing open overlays");
        }
        self.dispatch(OverlayAction::Teardown);
        self.watcher.reset();
    }
}

impl<H: FullscreenHost> Drop for ViewController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
