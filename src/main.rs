#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::Path;

// Application shell
mod app;

// Per-mode chart layout
mod chart_layout;

// Start-up configuration
mod config;

// Application constants
mod constants;

// Page narrative and chart placements
mod content;

// View state controller
mod controller;

// Chart asset loading
mod data;

// Error handling
mod error;

// Per-frame window signals
mod events;

// Native window integration
mod platform;

// Application state modules
mod state;

// UI rendering
mod ui;

// Reusable widgets
mod widgets;

use app::NpkExplorer;
use config::ExplorerConfig;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(constants::config::DEFAULT_LOG_FILTER),
    )
    .init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let (config, config_error) = match ExplorerConfig::load(Path::new(constants::config::CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(e) => {
            log::warn!("{} in {}: {}", e.title(), constants::config::CONFIG_FILE, e);
            (ExplorerConfig::default(), Some(e.user_message()))
        }
    };
    log::info!("assets from {}", config.assets_dir.display());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(content::SITE_TITLE)
            .with_inner_size(constants::layout::WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        content::SITE_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = NpkExplorer::new(cc, &config);
            if let Some(message) = config_error {
                app.state.ui.set_error(message);
            }
            Ok(Box::new(app))
        }),
    )
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(&format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT)) {
        Ok(server) => {
            log::info!("puffin server on port {}", puffin_http::DEFAULT_PORT);
            Some(server)
        }
        Err(e) => {
            log::warn!("puffin server failed to start: {}", e);
            None
        }
    }
}
