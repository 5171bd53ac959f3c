//! RDF bundle discovery and the scan driver
//!
//! Walks the configured search paths for `.rdf` files (any case variant),
//! hands each one to the external [`TripleSource`], and feeds the resulting
//! statements through the parser into a fresh [`PluginStore`]. The scan is
//! single-threaded and infallible: unreadable directory entries and
//! unparseable documents are logged and skipped, never fatal.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::parser::parse_document;
use crate::store::PluginStore;
use crate::triples::TripleSource;
use crate::types::PluginRecord;

/// Receives a coarse progress notification once per file processed.
///
/// This is the scan's only side channel to the outside world; an absent
/// observer means no notifications at all.
pub trait ScanObserver {
    /// `progress` is the fraction of files started, in `0.0..1.0`.
    fn file_scanned(&mut self, progress: f64, path: &Path);
}

/// Scans an ordered list of root paths for LADSPA RDF bundles.
#[derive(Debug, Clone)]
pub struct RdfScanner {
    search_paths: Vec<PathBuf>,
}

impl RdfScanner {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Recursively collect every `.rdf` file under the search paths, in
    /// search-path order. Inaccessible entries are logged and skipped.
    pub fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for root in &self.search_paths {
            for entry in WalkDir::new(root).follow_links(false) {
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_file() && has_rdf_extension(entry.path()) {
                            files.push(entry.path().to_path_buf());
                        }
                    }
                    Err(e) => {
                        // Missing search paths land here too; the scan
                        // continues with whatever is reachable.
                        warn!("Error accessing entry: {}", e);
                    }
                }
            }
        }

        files
    }

    /// Run a full scan, returning the accumulated plugin records.
    ///
    /// Never fails: the only caller-visible outcome is the (possibly
    /// partial) record collection.
    pub fn scan<S: TripleSource>(
        &self,
        source: &S,
        observer: Option<&mut dyn ScanObserver>,
    ) -> Vec<PluginRecord> {
        let mut store = PluginStore::new();
        self.scan_into(&mut store, source, observer);
        store.into_plugins()
    }

    /// Run a full scan into a caller-owned store.
    ///
    /// The store is reset first; a scan always replaces the previous result
    /// set, there are no append semantics across scans. Concurrent scans of
    /// one store are not supported and must be serialized by the caller.
    pub fn scan_into<S: TripleSource>(
        &self,
        store: &mut PluginStore,
        source: &S,
        mut observer: Option<&mut dyn ScanObserver>,
    ) {
        store.reset();

        let files = self.collect_files();
        info!(
            "Scanning {} RDF files across {} search paths",
            files.len(),
            self.search_paths.len()
        );

        let total = files.len();
        for (i, file) in files.iter().enumerate() {
            if let Some(obs) = observer.as_deref_mut() {
                obs.file_scanned(i as f64 / total as f64, file);
            }

            // A document that fails to parse contributes an empty set here,
            // per the TripleSource contract.
            let triples = source.triples(file);
            debug!("{}: {} triples", file.display(), triples.len());
            parse_document(store, triples);
        }

        info!("Scan complete: {} plugins", store.len());
    }
}

/// Case-insensitive match on the `rdf` extension.
fn has_rdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("rdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn rdf_extension_matches_any_case() {
        assert!(has_rdf_extension(Path::new("a.rdf")));
        assert!(has_rdf_extension(Path::new("a.RDF")));
        assert!(has_rdf_extension(Path::new("a.RDf")));
        assert!(!has_rdf_extension(Path::new("a.rdfx")));
        assert!(!has_rdf_extension(Path::new("a.xml")));
        assert!(!has_rdf_extension(Path::new("rdf")));
    }

    #[test]
    fn collect_files_walks_recursively() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("top.rdf"), "").unwrap();
        fs::write(root.join("sub/mid.RDF"), "").unwrap();
        fs::write(root.join("sub/deeper/low.rdf"), "").unwrap();
        fs::write(root.join("sub/readme.txt"), "").unwrap();

        let scanner = RdfScanner::new(vec![root.to_path_buf()]);
        let files = scanner.collect_files();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn missing_search_path_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.rdf"), "").unwrap();

        let scanner = RdfScanner::new(vec![
            PathBuf::from("/nonexistent/ladspa/rdf"),
            temp.path().to_path_buf(),
        ]);
        let files = scanner.collect_files();
        assert_eq!(files.len(), 1);
    }
}
