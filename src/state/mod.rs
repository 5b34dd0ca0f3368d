//! Application state management
//!
//! View mode, overlays and scroll-spy are the controller's parts; `AppState`
//! holds the rest of what the page needs between frames.

mod overlay;
mod scroll_spy;
mod ui;
mod view;

pub use overlay::{ChartId, ImageOverlay, OverlayAction, OverlayEffect, OverlayState};
pub use scroll_spy::{SectionId, SectionSpy, Span};
pub use ui::UiState;
pub use view::{ResolvedMode, ResponsiveDetector, ViewMode};

use crate::config::ExplorerConfig;
use crate::content;
use crate::data::ChartCatalog;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main application state container
pub struct AppState {
    /// Chart documents loaded at start-up
    pub catalog: ChartCatalog,

    /// UI interaction state
    pub ui: UiState,

    /// Directory image sources are resolved against
    pub images_dir: PathBuf,

    /// `file://` URIs of the page's images, resolved once at start-up
    image_uris: HashMap<&'static str, String>,
}

impl AppState {
    /// Build the state from configuration, loading the chart catalog.
    ///
    /// A missing asset folder is reported in the UI; the page still renders
    /// with error cards in place of charts.
    pub fn new(config: &ExplorerConfig) -> Self {
        let mut ui = UiState::new(config.dark_mode);
        let catalog = match ChartCatalog::load_dir(&config.charts_dir()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{}: {}", e.title(), e);
                ui.set_error(e.user_message());
                ChartCatalog::default()
            }
        };
        let images_dir = config.images_dir();
        let image_uris = content::image_files()
            .map(|file| (file, resolve_image_uri(&images_dir, file)))
            .collect();
        Self {
            catalog,
            ui,
            images_dir,
            image_uris,
        }
    }

    /// URI for an image asset, as understood by egui's file loader
    pub fn image_uri(&self, file: &str) -> String {
        match self.image_uris.get(file) {
            Some(uri) => uri.clone(),
            None => resolve_image_uri(&self.images_dir, file),
        }
    }
}

fn resolve_image_uri(dir: &Path, file: &str) -> String {
    let path = dir.join(file);
    let absolute = std::fs::canonicalize(&path).unwrap_or(path);
    format!("file://{}", absolute.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_assets_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExplorerConfig {
            assets_dir: dir.path().join("nowhere"),
            ..ExplorerConfig::default()
        };
        let state = AppState::new(&config);
        assert!(state.catalog.is_empty());
        assert!(state.ui.error_message.is_some());
    }

    #[test]
    fn test_loads_catalog_and_resolves_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("charts")).unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("charts/a.json"), r#"{"data": []}"#).unwrap();
        fs::write(dir.path().join("img/emma.jpg"), b"").unwrap();

        let config = ExplorerConfig {
            assets_dir: dir.path().to_path_buf(),
            dark_mode: true,
            ..ExplorerConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.catalog.len(), 1);
        assert!(state.ui.dark_mode);
        assert!(state.ui.error_message.is_none());

        let uri = state.image_uri("emma.jpg");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("emma.jpg"));
    }

    #[test]
    fn test_page_images_resolved_at_start_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        let file = content::image_files().next().unwrap();
        fs::write(dir.path().join("img").join(file), b"").unwrap();

        let config = ExplorerConfig {
            assets_dir: dir.path().to_path_buf(),
            ..ExplorerConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.image_uris.len(), content::image_files().count());
        let uri = state.image_uri(file);

        // later lookups reuse the stored URI even if the file goes away
        fs::remove_file(dir.path().join("img").join(file)).unwrap();
        assert_eq!(state.image_uri(file), uri);
        assert!(uri.ends_with(file));
    }
}
