pub mod catalog;
pub mod chart;

// Re-export key types for convenience
pub use catalog::{CatalogEntry, ChartCatalog};
pub use chart::{CategoryAxis, ChartBaseLayout, ChartDocument, Series, TraceKind};
