//! # ladspa-rdf
//!
//! Extracts structured plugin metadata (title, creator, class flags, port
//! definitions, scale points, defaults) from RDF triple graphs describing
//! LADSPA audio plugins, and serializes the result into fixed-layout
//! `#[repr(C)]` descriptor records for a C-compatible host API.
//!
//! The RDF parser itself is an external collaborator behind the
//! [`TripleSource`] trait; this crate handles classification of the
//! unordered statement graph, resolution of anonymous-node indirection,
//! normalization (dense port arrays, value-sorted scale points) and the
//! final descriptor conversion. Extraction is best-effort throughout:
//! unknown vocabulary, malformed documents and unrepresentable strings
//! degrade to zero flags, empty fact sets and sentinel values rather than
//! failing a scan.
//!
//! ```no_run
//! use ladspa_rdf::{config, DescriptorSet, RdfScanner, TripleSource};
//! # struct MySource;
//! # impl TripleSource for MySource {
//! #     fn triples(&self, _: &std::path::Path) -> Vec<ladspa_rdf::Triple> { Vec::new() }
//! # }
//!
//! let scanner = RdfScanner::new(config::resolve_search_paths(None));
//! let records = scanner.scan(&MySource, None);
//! let descriptors = DescriptorSet::from_records(&records);
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod store;
pub mod triples;
pub mod types;
pub mod vocab;

pub use descriptor::{DescriptorSet, RdfDescriptor, RdfPort, RdfScalePoint};
pub use error::{Error, Result};
pub use scanner::{RdfScanner, ScanObserver};
pub use store::PluginStore;
pub use triples::{Node, Triple, TripleSource};
pub use types::{PluginRecord, PortRecord, ScalePoint};
