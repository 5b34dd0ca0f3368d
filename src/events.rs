//! Page events
//!
//! egui hands us state, not callbacks. [`SignalWatcher`] compares each
//! frame's signals with the previous frame and emits the discrete events a
//! resize listener or fullscreen-change listener would have delivered.

/// Raw per-frame readings from the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSignals {
    pub viewport_width: f32,
    /// `None` when the backend does not report fullscreen state
    pub native_fullscreen: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Resized { width: f32 },
    NativeFullscreenChanged { active: bool },
}

/// Turns successive [`FrameSignals`] into [`PageEvent`]s
#[derive(Debug, Default)]
pub struct SignalWatcher {
    last_width: Option<f32>,
    /// Last reported fullscreen state; a window starts out windowed
    fullscreen: bool,
}

impl SignalWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first call always reports the width, so the view mode is known
    /// before anything is drawn. A window that is already fullscreen on its
    /// first report fires a change too.
    pub fn observe(&mut self, signals: FrameSignals) -> Vec<PageEvent> {
        let mut events = Vec::new();

        let previous = self.last_width.replace(signals.viewport_width);
        if previous != Some(signals.viewport_width) {
            events.push(PageEvent::Resized {
                width: signals.viewport_width,
            });
        }

        // frames without a reading keep the last known state
        if let Some(now) = signals.native_fullscreen {
            if now != self.fullscreen {
                self.fullscreen = now;
                events.push(PageEvent::NativeFullscreenChanged { active: now });
            }
        }
        events
    }

    /// Forget all history; the next frame is treated as the first
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(width: f32, fullscreen: Option<bool>) -> FrameSignals {
        FrameSignals {
            viewport_width: width,
            native_fullscreen: fullscreen,
        }
    }

    #[test]
    fn test_first_frame_reports_width() {
        let mut watcher = SignalWatcher::new();
        let events = watcher.observe(signals(1024.0, Some(false)));
        assert_eq!(events, vec![PageEvent::Resized { width: 1024.0 }]);
    }

    #[test]
    fn test_unchanged_frame_is_quiet() {
        let mut watcher = SignalWatcher::new();
        watcher.observe(signals(1024.0, Some(false)));
        assert!(watcher.observe(signals(1024.0, Some(false))).is_empty());
    }

    #[test]
    fn test_resize_and_fullscreen_changes() {
        let mut watcher = SignalWatcher::new();
        watcher.observe(signals(1024.0, Some(false)));

        let events = watcher.observe(signals(1920.0, Some(true)));
        assert_eq!(
            events,
            vec![
                PageEvent::Resized { width: 1920.0 },
                PageEvent::NativeFullscreenChanged { active: true },
            ]
        );

        let events = watcher.observe(signals(1920.0, Some(false)));
        assert_eq!(events, vec![PageEvent::NativeFullscreenChanged { active: false }]);
    }

    #[test]
    fn test_unreported_fullscreen_never_fires() {
        let mut watcher = SignalWatcher::new();
        watcher.observe(signals(800.0, None));
        assert!(watcher.observe(signals(800.0, None)).is_empty());
    }

    #[test]
    fn test_missing_readings_keep_last_state() {
        let mut watcher = SignalWatcher::new();
        watcher.observe(signals(800.0, Some(true)));
        assert!(watcher.observe(signals(800.0, None)).is_empty());
        assert!(watcher.observe(signals(800.0, Some(true))).is_empty());
    }

    #[test]
    fn test_first_frame_already_fullscreen() {
        let mut watcher = SignalWatcher::new();
        assert_eq!(
            watcher.observe(signals(1920.0, Some(true))),
            vec![
                PageEvent::Resized { width: 1920.0 },
                PageEvent::NativeFullscreenChanged { active: true },
            ]
        );
    }

    #[test]
    fn test_reset_replays_width() {
        let mut watcher = SignalWatcher::new();
        watcher.observe(signals(800.0, None));
        watcher.reset();
        assert_eq!(
            watcher.observe(signals(800.0, None)),
            vec![PageEvent::Resized { width: 800.0 }]
        );
    }
}
