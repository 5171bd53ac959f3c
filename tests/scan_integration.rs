//! End-to-end scan tests
//!
//! Drives a full scan over TempDir fixtures using an in-memory triple source
//! standing in for the external RDF parser, and checks the resulting records
//! and descriptors.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use ladspa_rdf::vocab::{
    CLASS_REVERB, DC_CREATOR, DC_TITLE, LADSPA_HAS_LABEL, LADSPA_HAS_POINT, LADSPA_HAS_SCALE,
    LADSPA_HAS_UNIT, NS_LADSPA, PORT_AUDIO, PORT_CONTROL, PORT_INPUT, RDF_TYPE, RDF_VALUE, UNIT_DB,
};
use ladspa_rdf::{DescriptorSet, Node, PluginStore, RdfScanner, ScanObserver, Triple, TripleSource};

/// In-memory triple source: files not present in the map behave like
/// unparseable documents and contribute no triples.
struct StubSource {
    documents: HashMap<PathBuf, Vec<Triple>>,
}

impl TripleSource for StubSource {
    fn triples(&self, path: &Path) -> Vec<Triple> {
        self.documents.get(path).cloned().unwrap_or_default()
    }
}

struct ProgressLog {
    calls: Vec<(f64, PathBuf)>,
}

impl ScanObserver for ProgressLog {
    fn file_scanned(&mut self, progress: f64, path: &Path) {
        self.calls.push((progress, path.to_path_buf()));
    }
}

fn uri(s: &str) -> Node {
    Node::Uri(s.to_string())
}

fn lit(s: &str) -> Node {
    Node::Literal(s.to_string())
}

fn blank(s: &str) -> Node {
    Node::Blank(s.to_string())
}

fn ladspa(suffix: &str) -> Node {
    uri(&format!("{}{}", NS_LADSPA, suffix))
}

/// Triples for a small reverb plugin with two ports and a scale point.
fn reverb_triples() -> Vec<Triple> {
    vec![
        Triple::new(ladspa("1043"), RDF_TYPE, ladspa("ReverbPlugin")),
        Triple::new(ladspa("1043"), DC_TITLE, lit("Freeverb")),
        Triple::new(ladspa("1043"), DC_CREATOR, lit("Jezar")),
        Triple::new(ladspa("1043.0"), RDF_TYPE, ladspa("AudioInputPort")),
        Triple::new(ladspa("1043.0"), LADSPA_HAS_LABEL, lit("Input")),
        Triple::new(ladspa("1043.1"), RDF_TYPE, ladspa("ControlInputPort")),
        Triple::new(ladspa("1043.1"), LADSPA_HAS_LABEL, lit("Dry/Wet")),
        Triple::new(ladspa("1043.1"), LADSPA_HAS_UNIT, ladspa("dB")),
        Triple::new(ladspa("1043.1"), LADSPA_HAS_SCALE, blank("scale")),
        Triple::new(blank("scale"), LADSPA_HAS_POINT, blank("p1")),
        Triple::new(blank("p1"), RDF_VALUE, lit("0.0")),
        Triple::new(blank("p1"), LADSPA_HAS_LABEL, lit("dry")),
    ]
}

#[test]
fn scan_extracts_records_and_reports_progress() {
    // Given: a search root with one parseable and one broken bundle
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let good = root.join("freeverb.rdf");
    let broken = root.join("broken.RDF");
    fs::write(&good, "").unwrap();
    fs::write(&broken, "not actually rdf").unwrap();

    let source = StubSource {
        documents: HashMap::from([(good.clone(), reverb_triples())]),
    };

    // When: scanning with a progress observer attached
    let scanner = RdfScanner::new(vec![root.to_path_buf()]);
    let mut progress = ProgressLog { calls: Vec::new() };
    let records = scanner.scan(&source, Some(&mut progress));

    // Then: exactly the well-formed bundle's records come back
    assert_eq!(records.len(), 1);
    let plugin = &records[0];
    assert_eq!(plugin.unique_id, 1043);
    assert_eq!(plugin.plugin_type, CLASS_REVERB);
    assert_eq!(plugin.title.as_deref(), Some("Freeverb"));
    assert_eq!(plugin.creator.as_deref(), Some("Jezar"));
    assert_eq!(plugin.ports.len(), 2);

    let dry_wet = plugin.ports.iter().find(|p| p.index == 1).unwrap();
    assert_eq!(dry_wet.port_type, PORT_CONTROL | PORT_INPUT);
    assert_eq!(dry_wet.unit, UNIT_DB);
    assert_eq!(dry_wet.scale_points.len(), 1);
    assert_eq!(dry_wet.scale_points[0].label.as_deref(), Some("dry"));

    // And: one notification per file, fractions within [0, 1)
    assert_eq!(progress.calls.len(), 2);
    assert!(progress.calls.iter().all(|(f, _)| (0.0..1.0).contains(f)));
}

#[test]
fn records_accumulate_across_documents() {
    // Given: two bundles in separate search roots, each describing one plugin
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    let file_a = temp_a.path().join("reverb.rdf");
    let file_b = temp_b.path().join("amp.rdf");
    fs::write(&file_a, "").unwrap();
    fs::write(&file_b, "").unwrap();

    let source = StubSource {
        documents: HashMap::from([
            (file_a, reverb_triples()),
            (
                file_b,
                vec![
                    Triple::new(ladspa("2001"), RDF_TYPE, ladspa("AmplifierPlugin")),
                    Triple::new(ladspa("2001"), DC_TITLE, lit("Simple Amp")),
                ],
            ),
        ]),
    };

    // When: one scan covers both roots
    let scanner = RdfScanner::new(vec![
        temp_a.path().to_path_buf(),
        temp_b.path().to_path_buf(),
    ]);
    let records = scanner.scan(&source, None);

    // Then: both plugins are in the result set
    assert_eq!(records.len(), 2);
    let ids: Vec<u64> = records.iter().map(|r| r.unique_id).collect();
    assert!(ids.contains(&1043));
    assert!(ids.contains(&2001));
}

#[test]
fn rescan_replaces_previous_results() {
    // Given: a store filled by a previous scan
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("freeverb.rdf");
    fs::write(&file, "").unwrap();
    let source = StubSource {
        documents: HashMap::from([(file, reverb_triples())]),
    };
    let scanner = RdfScanner::new(vec![temp.path().to_path_buf()]);

    let mut store = PluginStore::new();
    scanner.scan_into(&mut store, &source, None);
    assert_eq!(store.len(), 1);

    // When: scanning again over an empty root
    let empty = TempDir::new().unwrap();
    let empty_scanner = RdfScanner::new(vec![empty.path().to_path_buf()]);
    empty_scanner.scan_into(&mut store, &source, None);

    // Then: the previous results are gone, not appended to
    assert!(store.is_empty());
}

#[test]
fn scan_results_convert_to_descriptors() {
    // Given: scan results for the reverb fixture
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("freeverb.rdf");
    fs::write(&file, "").unwrap();
    let source = StubSource {
        documents: HashMap::from([(file, reverb_triples())]),
    };
    let scanner = RdfScanner::new(vec![temp.path().to_path_buf()]);
    let records = scanner.scan(&source, None);

    // When: converting to C-layout descriptors
    let set = DescriptorSet::from_records(&records);

    // Then: the descriptor mirrors the record with a dense port array
    assert_eq!(set.len(), 1);
    let desc = &set.descriptors()[0];
    assert_eq!(desc.unique_id, 1043);
    assert_eq!(desc.port_count, 2);

    let ports = unsafe { std::slice::from_raw_parts(desc.ports, desc.port_count as usize) };
    assert_eq!(ports[0].port_type as u32, PORT_AUDIO | PORT_INPUT);
    assert_eq!(ports[1].scale_point_count, 1);
}

#[test]
fn scan_of_empty_roots_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let source = StubSource {
        documents: HashMap::new(),
    };
    let scanner = RdfScanner::new(vec![temp.path().to_path_buf()]);
    let records = scanner.scan(&source, None);
    assert!(records.is_empty());
}
