use super::chart::ChartDocument;
use crate::error::{ExplorerError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lookup result for a chart key
#[derive(Debug)]
pub enum CatalogEntry<'a> {
    Ready(&'a ChartDocument),
    Failed(&'a ExplorerError),
    Missing,
}

/// All chart documents found in the charts directory, keyed by file stem.
///
/// A broken file only takes out its own charts; it is kept as a failure so
/// the page can say what went wrong in place of the chart.
#[derive(Debug, Default)]
pub struct ChartCatalog {
    documents: HashMap<String, ChartDocument>,
    failures: HashMap<String, ExplorerError>,
    root: Option<PathBuf>,
}

impl ChartCatalog {
    /// Load every `*.json` file in `dir`
    pub fn load_dir(dir: &Path) -> Result<Self> {
        profiling::scope!("ChartCatalog::load_dir");

        if !dir.is_dir() {
            return Err(ExplorerError::AssetDirMissing {
                path: dir.to_path_buf(),
            });
        }

        let mut catalog = Self {
            root: Some(dir.to_path_buf()),
            ..Self::default()
        };

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            if !is_json {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };

            match Self::load_file(&path) {
                Ok(doc) => {
                    log::debug!(
                        "loaded chart '{}' ({}, {} traces)",
                        key,
                        doc.title().unwrap_or("untitled"),
                        doc.data.len()
                    );
                    catalog.documents.insert(key, doc);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    catalog.failures.insert(key, e);
                }
            }
        }

        log::info!(
            "chart catalog: {} loaded, {} failed from {}",
            catalog.documents.len(),
            catalog.failures.len(),
            dir.display()
        );
        Ok(catalog)
    }

    fn load_file(path: &Path) -> Result<ChartDocument> {
        let wrap = |source: ExplorerError| ExplorerError::ChartAsset {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let text = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        ChartDocument::from_json(&text).map_err(|e| wrap(e.into()))
    }

    pub fn entry(&self, key: &str) -> CatalogEntry<'_> {
        if let Some(doc) = self.documents.get(key) {
            CatalogEntry::Ready(doc)
        } else if let Some(err) = self.failures.get(key) {
            CatalogEntry::Failed(err)
        } else {
            CatalogEntry::Missing
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_dir_keys_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("1_SummaryPlot_1990.json"),
            r#"{"data": [{"x": [1, 2], "y": [3, 4]}], "layout": {"title": "Summary"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a chart").unwrap();

        let catalog = ChartCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.failure_count(), 0);
        assert_eq!(catalog.root(), Some(dir.path()));

        match catalog.entry("1_SummaryPlot_1990") {
            CatalogEntry::Ready(doc) => assert_eq!(doc.title(), Some("Summary")),
            other => panic!("expected chart, got {:?}", other),
        }
        assert!(matches!(catalog.entry("notes"), CatalogEntry::Missing));
    }

    #[test]
    fn test_broken_file_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.json"), r#"{"data": []}"#).unwrap();
        fs::write(dir.path().join("bad.json"), r#"{"data": [}"#).unwrap();

        let catalog = ChartCatalog::load_dir(dir.path()).unwrap();
        assert!(matches!(catalog.entry("good"), CatalogEntry::Ready(_)));
        match catalog.entry("bad") {
            CatalogEntry::Failed(err) => {
                assert!(matches!(err, ExplorerError::ChartAsset { .. }));
                assert!(err.user_message().starts_with("bad.json"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChartCatalog::load_dir(&dir.path().join("charts")).unwrap_err();
        assert!(matches!(err, ExplorerError::AssetDirMissing { .. }));
    }

    #[test]
    fn test_bundled_assets_cover_every_placement() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/charts");
        let catalog = ChartCatalog::load_dir(&dir).unwrap();
        assert_eq!(catalog.failure_count(), 0);
        for (placement, asset) in crate::content::chart_placements() {
            let CatalogEntry::Ready(doc) = catalog.entry(asset) else {
                panic!("{} needs {}", placement, asset);
            };
            assert!(!doc.series().0.is_empty(), "{} has no drawable series", asset);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ChartCatalog::default();
        assert!(catalog.is_empty());
        assert!(matches!(catalog.entry("anything"), CatalogEntry::Missing));
    }
}
