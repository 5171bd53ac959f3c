//! Triple model and the triple-source boundary
//!
//! The underlying RDF parser is an external collaborator. This crate only
//! consumes `(subject, predicate, object)` statements; anything that turns a
//! serialized document into those statements implements [`TripleSource`].

use std::path::Path;

/// One node of an RDF graph, as seen by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A named resource.
    Uri(String),
    /// An anonymous (blank) node, identified only by a document-scoped id.
    Blank(String),
    /// A literal value.
    Literal(String),
}

impl Node {
    /// The node's textual content, whatever its kind.
    pub fn as_str(&self) -> &str {
        match self {
            Node::Uri(s) | Node::Blank(s) | Node::Literal(s) => s,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }
}

/// One `(subject, predicate, object)` statement.
///
/// Predicates are always named resources, so the predicate is kept as a
/// plain URI string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: Node,
    pub predicate: String,
    pub object: Node,
}

impl Triple {
    pub fn new(subject: Node, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// Source of triples for one document.
///
/// Contract: returns the document's full statement set, or an empty vec on
/// any parse or read failure. Errors are swallowed at this boundary; a
/// malformed document simply contributes no facts (the scan continues with
/// the next document).
pub trait TripleSource {
    fn triples(&self, path: &Path) -> Vec<Triple>;
}
