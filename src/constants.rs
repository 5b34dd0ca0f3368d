//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Responsive layout defaults
pub mod responsive {
    /// Viewports narrower than this (logical pixels) are treated as mobile
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

/// Chart layout defaults, per view mode
pub mod chart {
    /// Chart height when the asset does not specify one
    pub const DEFAULT_HEIGHT: f32 = 550.0;

    /// Upper bound on chart height on mobile
    pub const MOBILE_MAX_HEIGHT: f32 = 380.0;

    /// Desktop margins (top, right, bottom, left)
    pub const DESKTOP_MARGINS: [f32; 4] = [80.0, 40.0, 80.0, 80.0];

    /// Mobile margins (top, right, bottom, left); bottom leaves room for angled ticks
    pub const MOBILE_MARGINS: [f32; 4] = [56.0, 12.0, 96.0, 52.0];

    pub const DESKTOP_TITLE_FONT: f32 = 18.0;
    pub const DESKTOP_AXIS_FONT: f32 = 14.0;
    pub const DESKTOP_TICK_FONT: f32 = 12.0;
    pub const DESKTOP_LEGEND_FONT: f32 = 12.0;

    /// Font scale applied to every desktop size on mobile
    pub const MOBILE_FONT_SCALE: f32 = 0.75;

    /// Tick label angle on mobile, in degrees (negative = rising to the right)
    pub const MOBILE_TICK_ANGLE: f32 = -45.0;

    /// Minimum pixel distance between grid lines
    pub const DESKTOP_TICK_SPACING: f32 = 48.0;
    pub const MOBILE_TICK_SPACING: f32 = 72.0;

    /// Categorical tick labels are cut to this many characters on mobile
    pub const MOBILE_TICK_LABEL_CHARS: usize = 10;

    /// Horizontal title position as a fraction of the plot width
    pub const TITLE_X: f32 = 0.5;
}

/// Section scroll-spy defaults
pub mod spy {
    /// Share of a section that must sit inside the band to count as visible
    pub const THRESHOLD: f32 = 0.3;

    /// Fraction of the viewport height cut from the top of the band
    pub const TOP_MARGIN: f32 = 0.1;

    /// Fraction of the viewport height cut from the bottom of the band
    pub const BOTTOM_MARGIN: f32 = 0.4;
}

/// UI layout defaults
pub mod layout {
    /// Top navigation bar height
    pub const NAV_HEIGHT: f32 = 56.0;

    /// Width of the mobile navigation panel
    pub const NAV_PANEL_WIDTH: f32 = 300.0;

    /// Maximum width of the page content column
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

    /// Vertical space between page sections
    pub const SECTION_SPACING: f32 = 48.0;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;

    /// Lightbox image may take up to this share of the screen
    pub const LIGHTBOX_SCREEN_SHARE: f32 = 0.9;

    /// Initial native window size
    pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
}

/// Asset locations
pub mod assets {
    /// Default root of the bundled asset tree
    pub const DEFAULT_DIR: &str = "assets";

    /// Chart JSON documents live here, relative to the asset root
    pub const CHARTS_SUBDIR: &str = "charts";

    /// Static images live here, relative to the asset root
    pub const IMAGES_SUBDIR: &str = "img";
}

/// Configuration file paths
pub mod config {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "npk-explorer.json";

    /// Log filter used when RUST_LOG is unset
    pub const DEFAULT_LOG_FILTER: &str = "info";
}
