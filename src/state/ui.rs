//! UI interaction state

use super::scroll_spy::SectionId;

/// UI state for navigation, theme and notices
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Mobile navigation panel visibility
    pub nav_open: bool,

    /// Section the page should scroll to on the next frame
    pub scroll_target: Option<SectionId>,

    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show keyboard shortcut help
    pub show_help: bool,

    /// Reference entry expanded in the sources list (single-open accordion)
    pub expanded_reference: Option<usize>,

    /// Error message to display in UI (status bar)
    pub error_message: Option<String>,
}

impl UiState {
    /// Create a new UiState with default values
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Toggle the mobile navigation panel
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Request a scroll to `section`; closes the mobile panel like a link tap would
    pub fn navigate_to(&mut self, section: SectionId) {
        self.scroll_target = Some(section);
        self.nav_open = false;
    }

    /// Take the pending scroll target, if `section` is the one requested
    pub fn take_scroll_target(&mut self, section: &SectionId) -> bool {
        if self.scroll_target.as_ref() == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }

    /// Open `index`, or close it when it is already open
    pub fn toggle_reference(&mut self, index: usize) {
        if self.expanded_reference == Some(index) {
            self.expanded_reference = None;
        } else {
            self.expanded_reference = Some(index);
        }
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_closes_panel() {
        let mut ui = UiState::new(false);
        ui.toggle_nav();
        assert!(ui.nav_open);

        ui.navigate_to("asia".into());
        assert!(!ui.nav_open);
        assert!(!ui.take_scroll_target(&"africa".into()));
        assert!(ui.take_scroll_target(&"asia".into()));
        assert_eq!(ui.scroll_target, None);
    }

    #[test]
    fn test_reference_accordion_single_open() {
        let mut ui = UiState::default();
        ui.toggle_reference(1);
        ui.toggle_reference(3);
        assert_eq!(ui.expanded_reference, Some(3));
        ui.toggle_reference(3);
        assert_eq!(ui.expanded_reference, None);
    }

    #[test]
    fn test_error_lifecycle() {
        let mut ui = UiState::default();
        assert!(ui.error_message.is_none());
        ui.set_error("Asset folder 'assets/charts' not found");
        assert!(ui.error_message.is_some());
        ui.clear_error();
        assert!(ui.error_message.is_none());
    }
}
