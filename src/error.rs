//! Error types for NPK Explorer
//!
//! Asset and configuration failures are recoverable: they are logged, shown
//! inline and the page keeps rendering. Native fullscreen failures are never
//! propagated past the overlay controller.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for NPK Explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A chart document could not be read or parsed
    #[error("Chart asset '{}' is invalid: {source}", path.display())]
    ChartAsset {
        path: PathBuf,
        #[source]
        source: Box<ExplorerError>,
    },

    /// A page block refers to a chart the catalog does not hold
    #[error("Chart '{key}' is not in the asset catalog")]
    ChartNotFound { key: String },

    /// Asset directory missing or unreadable
    #[error("Asset directory '{}' not found", path.display())]
    AssetDirMissing { path: PathBuf },

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for NPK Explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// UI-friendly error message formatting
impl ExplorerError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            ExplorerError::FileIo(e) => format!("File error: {}", e),
            ExplorerError::Json(e) => format!("JSON error: {}", e),
            ExplorerError::ChartAsset { path, source } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("{}: {}", name, source.user_message())
            }
            ExplorerError::ChartNotFound { key } => format!("Chart '{}' is unavailable", key),
            ExplorerError::AssetDirMissing { path } => {
                format!("Asset folder '{}' not found", path.display())
            }
            ExplorerError::Config(msg) => format!("Config error: {}", msg),
        }
    }

    /// Get a short title for the error (for inline cards)
    pub fn title(&self) -> &'static str {
        match self {
            ExplorerError::FileIo(_) => "File Error",
            ExplorerError::Json(_) => "JSON Error",
            ExplorerError::ChartAsset { .. } => "Chart Error",
            ExplorerError::ChartNotFound { .. } => "Missing Chart",
            ExplorerError::AssetDirMissing { .. } => "Missing Assets",
            ExplorerError::Config(_) => "Configuration Error",
        }
    }
}

/// Failure of a native fullscreen request or exit
///
/// Only ever logged. The in-app overlay works without native fullscreen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// The windowing backend cannot report or change fullscreen state
    #[error("native fullscreen is not supported by this platform")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ExplorerError::ChartNotFound {
            key: "4_FertiliserUse_90s".to_string(),
        };
        assert_eq!(err.user_message(), "Chart '4_FertiliserUse_90s' is unavailable");
        assert_eq!(err.title(), "Missing Chart");

        let err = ExplorerError::Config("breakpoint must be positive".to_string());
        assert_eq!(err.user_message(), "Config error: breakpoint must be positive");
    }

    #[test]
    fn test_chart_asset_message_uses_file_name() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ExplorerError::ChartAsset {
            path: PathBuf::from("assets/charts/summary.json"),
            source: Box::new(io_err.into()),
        };
        assert_eq!(err.user_message(), "summary.json: File error: gone");
        assert_eq!(err.title(), "Chart Error");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExplorerError = io_err.into();
        assert!(matches!(err, ExplorerError::FileIo(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ExplorerError = json_err.into();
        assert!(matches!(err, ExplorerError::Json(_)));
    }
}
