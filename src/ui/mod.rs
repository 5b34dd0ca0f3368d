mod chart;
mod help_dialog;
mod nav;
mod overlay;
mod page;

pub use chart::render_chart;
pub use help_dialog::render_help_dialog;
pub use nav::render_navigation;
pub use overlay::render_overlays;
pub use page::render_page;

use crate::state::{ChartId, SectionId};

/// User intents collected while drawing a frame, applied once drawing is done
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    OpenImage { source: String, description: String },
    CloseImage,
    ToggleFullscreen(ChartId),
    Navigate(SectionId),
}
