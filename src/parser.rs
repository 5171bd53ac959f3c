//! Triple classification and blank-node resolution
//!
//! One call to [`parse_document`] feeds a document's full statement set into
//! a [`PluginStore`]. Direct plugin/port facts mutate the store immediately;
//! facts reachable only through anonymous nodes are buffered during the
//! classification pass and resolved afterwards with a two-hop join over a
//! blank-node index. The graph has no guaranteed statement order, so every
//! mutation goes through the store's find-or-create accessors and the result
//! is independent of input order.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::store::PluginStore;
use crate::triples::{Node, Triple};
use crate::vocab::{
    plugin_class_flag, port_type_flag, unit_flag, DC_CREATOR, DC_RIGHTS, DC_TITLE,
    LADSPA_FOR_PORT, LADSPA_HAS_LABEL, LADSPA_HAS_POINT, LADSPA_HAS_PORT, LADSPA_HAS_PORT_VALUE,
    LADSPA_HAS_SCALE, LADSPA_HAS_SETTING, LADSPA_HAS_UNIT, LADSPA_HAS_UNITS, LADSPA_NOTCH_PLUGIN,
    LADSPA_SPECTRAL_PLUGIN, NS_LADSPA, RDF_TYPE, RDF_VALUE,
};

/// Outgoing edges of each blank node, keyed by blank-node id.
type BlankIndex = HashMap<String, Vec<(String, Node)>>;

/// Which outer predicate routed a node into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BufferedKind {
    /// `ladspa:hasScale` on a port subject.
    Scale,
    /// `ladspa:hasSetting` on a plugin subject.
    Setting,
}

/// A deferred anonymous-node reference awaiting resolution.
#[derive(Debug)]
struct BufferedRef {
    kind: BufferedKind,
    node: String,
    plugin_id: u64,
    port_index: Option<u64>,
}

/// Feed one document's triples into the store.
///
/// Classification routes each triple by subject shape; blank-node facts are
/// resolved in a second phase once the whole document has been seen.
pub fn parse_document(store: &mut PluginStore, triples: Vec<Triple>) {
    let mut buffered: Vec<BufferedRef> = Vec::new();
    let mut blank_index = BlankIndex::new();

    for triple in triples {
        let Triple {
            subject,
            mut predicate,
            object,
        } = triple;

        // Fix broken or old plugin bundles
        if predicate == LADSPA_HAS_UNITS {
            predicate = LADSPA_HAS_UNIT.to_string();
        }

        match subject {
            Node::Uri(uri) => {
                if let Some(plugin_id) = plugin_subject(&uri) {
                    plugin_fact(store, &mut buffered, plugin_id, &predicate, object);
                } else if let Some((plugin_id, port_index)) = port_subject(&uri) {
                    port_fact(store, &mut buffered, plugin_id, port_index, &predicate, object);
                } else if uri == LADSPA_NOTCH_PLUGIN || uri == LADSPA_SPECTRAL_PLUGIN {
                    // Extension markers for capabilities already supported
                    // natively; no extractable facts.
                } else {
                    warn!("Unknown subject '{}'", uri);
                }
            }
            Node::Blank(id) => {
                blank_index.entry(id).or_default().push((predicate, object));
            }
            Node::Literal(text) => {
                warn!("Unknown subject '{}'", text);
            }
        }
    }

    resolve_blank_nodes(store, &buffered, &blank_index);
}

/// Parse a `ladspa:` subject with a pure numeric suffix (a plugin id).
fn plugin_subject(uri: &str) -> Option<u64> {
    let suffix = uri.strip_prefix(NS_LADSPA)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Parse a `ladspa:` subject with a `<plugin>.<port>` numeric suffix.
fn port_subject(uri: &str) -> Option<(u64, u64)> {
    let suffix = uri.strip_prefix(NS_LADSPA)?;
    let (plugin, port) = suffix.split_once('.')?;
    Some((plugin.parse().ok()?, port.parse().ok()?))
}

/// Extract the port number from a `ladspa:<plugin>.<port>` object URI.
fn port_of(uri: &str) -> Option<u64> {
    port_subject(uri).map(|(_, port)| port)
}

/// Parse a literal float, tolerating the trailing `f` suffix some bundles
/// carry over from C source.
fn parse_float(text: &str) -> Option<f32> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('f').unwrap_or(trimmed);
    trimmed.parse().ok()
}

fn plugin_fact(
    store: &mut PluginStore,
    buffered: &mut Vec<BufferedRef>,
    plugin_id: u64,
    predicate: &str,
    object: Node,
) {
    match predicate {
        DC_CREATOR => store.set_creator(plugin_id, object.as_str().to_string()),
        DC_TITLE => store.set_title(plugin_id, object.as_str().to_string()),
        // No useful information in either of these
        DC_RIGHTS | LADSPA_HAS_PORT => {}
        RDF_TYPE => store.or_plugin_type(plugin_id, plugin_class_flag(object.as_str())),
        LADSPA_HAS_SETTING => buffered.push(BufferedRef {
            kind: BufferedKind::Setting,
            node: object.as_str().to_string(),
            plugin_id,
            port_index: None,
        }),
        other => warn!("Plugin predicate '{}' not handled", other),
    }
}

fn port_fact(
    store: &mut PluginStore,
    buffered: &mut Vec<BufferedRef>,
    plugin_id: u64,
    port_index: u64,
    predicate: &str,
    object: Node,
) {
    match predicate {
        RDF_TYPE => store.or_port_type(plugin_id, port_index, port_type_flag(object.as_str())),
        LADSPA_HAS_LABEL => store.set_port_label(plugin_id, port_index, object.as_str().to_string()),
        LADSPA_HAS_SCALE => buffered.push(BufferedRef {
            kind: BufferedKind::Scale,
            node: object.as_str().to_string(),
            plugin_id,
            port_index: Some(port_index),
        }),
        LADSPA_HAS_UNIT => store.set_port_unit(plugin_id, port_index, unit_flag(object.as_str())),
        other => warn!("Port predicate '{}' not handled", other),
    }
}

/// A scale point under construction, keyed by its second-hop blank node.
#[derive(Debug)]
struct PendingScalePoint {
    node: String,
    plugin_id: u64,
    port_index: u64,
    value: Option<f32>,
    label: Option<String>,
}

/// A port default under construction, keyed by its second-hop blank node.
/// The target port comes from the inner `ladspa:forPort` edge, not from the
/// outer plugin context.
#[derive(Debug)]
struct PendingDefault {
    node: String,
    plugin_id: u64,
    port_index: Option<u64>,
    value: Option<f32>,
}

/// Drain the buffered anonymous-node references through a two-hop join and
/// commit the completed facts back into the store.
fn resolve_blank_nodes(store: &mut PluginStore, buffered: &[BufferedRef], index: &BlankIndex) {
    let mut scale_points: Vec<PendingScalePoint> = Vec::new();
    let mut defaults: Vec<PendingDefault> = Vec::new();

    for entry in buffered {
        let Some(first_hop) = index.get(&entry.node) else {
            continue;
        };

        for (inner_predicate, inner_object) in first_hop {
            let Some(second_hop) = index.get(inner_object.as_str()) else {
                continue;
            };

            for (predicate, object) in second_hop {
                match (entry.kind, inner_predicate.as_str()) {
                    (BufferedKind::Scale, LADSPA_HAS_POINT) => {
                        let Some(port_index) = entry.port_index else {
                            continue;
                        };
                        let pending = find_or_push_scale_point(
                            &mut scale_points,
                            inner_object.as_str(),
                            entry.plugin_id,
                            port_index,
                        );
                        if predicate == RDF_VALUE {
                            pending.value = parse_float(object.as_str());
                        } else if predicate == LADSPA_HAS_LABEL {
                            pending.label = Some(object.as_str().to_string());
                        }
                    }
                    (BufferedKind::Setting, LADSPA_HAS_PORT_VALUE) => {
                        let pending = find_or_push_default(
                            &mut defaults,
                            inner_object.as_str(),
                            entry.plugin_id,
                        );
                        if predicate == LADSPA_FOR_PORT {
                            pending.port_index = port_of(object.as_str());
                        } else if predicate == RDF_VALUE {
                            pending.value = parse_float(object.as_str());
                        }
                    }
                    (kind, other) => {
                        warn!("Unknown blank node combo - {:?} + '{}'", kind, other);
                    }
                }
            }
        }
    }

    // Commit completed records; records still missing a value or a resolved
    // port are treated as incomplete facts and contribute nothing.
    for pending in scale_points {
        match pending.value {
            Some(value) => {
                store.add_scale_point(pending.plugin_id, pending.port_index, value, pending.label)
            }
            None => debug!("Dropping incomplete scale point node '{}'", pending.node),
        }
    }

    for pending in defaults {
        match (pending.port_index, pending.value) {
            (Some(port_index), Some(value)) => {
                store.set_port_default(pending.plugin_id, port_index, value)
            }
            _ => debug!("Dropping incomplete port default node '{}'", pending.node),
        }
    }
}

fn find_or_push_scale_point<'a>(
    pending: &'a mut Vec<PendingScalePoint>,
    node: &str,
    plugin_id: u64,
    port_index: u64,
) -> &'a mut PendingScalePoint {
    let pos = match pending.iter().position(|p| p.node == node) {
        Some(pos) => pos,
        None => {
            pending.push(PendingScalePoint {
                node: node.to_string(),
                plugin_id,
                port_index,
                value: None,
                label: None,
            });
            pending.len() - 1
        }
    };
    &mut pending[pos]
}

fn find_or_push_default<'a>(
    pending: &'a mut Vec<PendingDefault>,
    node: &str,
    plugin_id: u64,
) -> &'a mut PendingDefault {
    let pos = match pending.iter().position(|p| p.node == node) {
        Some(pos) => pos,
        None => {
            pending.push(PendingDefault {
                node: node.to_string(),
                plugin_id,
                port_index: None,
                value: None,
            });
            pending.len() - 1
        }
    };
    &mut pending[pos]
}
