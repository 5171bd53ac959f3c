//! Plugin record store
//!
//! Owned accumulator for [`PluginRecord`]s built up while parsing. All
//! accessors are find-or-create: facts may arrive before the entity's type
//! fact, so any mutation auto-creates the owning plugin/port, and correctness
//! never depends on fact order. Records are kept in first-reference order.

use crate::types::{PluginRecord, PortRecord, ScalePoint};
use crate::vocab::{PORT_HINT_DEFAULT, PORT_HINT_LABEL, PORT_HINT_UNIT};

/// Process-local collection of plugin records for one scan.
///
/// Exclusively owned by the scan in progress; [`reset`](Self::reset) clears
/// it at the start of a full re-scan.
#[derive(Debug, Default)]
pub struct PluginStore {
    plugins: Vec<PluginRecord>,
}

impl PluginStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated records. Called at the start of a full re-scan;
    /// there are no partial/append semantics across scan invocations.
    pub fn reset(&mut self) {
        self.plugins.clear();
    }

    /// Accumulated records, in first-reference order.
    pub fn plugins(&self) -> &[PluginRecord] {
        &self.plugins
    }

    /// Consume the store, yielding the accumulated records.
    pub fn into_plugins(self) -> Vec<PluginRecord> {
        self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Find or create the plugin with the given unique id.
    ///
    /// Idempotent: a second call with the same id returns the existing
    /// record without growing the store.
    pub fn plugin_mut(&mut self, unique_id: u64) -> &mut PluginRecord {
        let pos = match self.plugins.iter().position(|p| p.unique_id == unique_id) {
            Some(pos) => pos,
            None => {
                self.plugins.push(PluginRecord::new(unique_id));
                self.plugins.len() - 1
            }
        };
        &mut self.plugins[pos]
    }

    /// Find or create the port at `port_index` of the given plugin,
    /// creating the plugin too if absent.
    pub fn port_mut(&mut self, unique_id: u64, port_index: u64) -> &mut PortRecord {
        let plugin = self.plugin_mut(unique_id);
        let pos = match plugin.ports.iter().position(|p| p.index == port_index) {
            Some(pos) => pos,
            None => {
                plugin.ports.push(PortRecord::placeholder(port_index));
                plugin.ports.len() - 1
            }
        };
        &mut plugin.ports[pos]
    }

    // ------------------------------------------------------------------
    // Plugin mutators
    // ------------------------------------------------------------------

    pub fn set_title(&mut self, unique_id: u64, title: String) {
        self.plugin_mut(unique_id).title = Some(title);
    }

    pub fn set_creator(&mut self, unique_id: u64, creator: String) {
        self.plugin_mut(unique_id).creator = Some(creator);
    }

    pub fn or_plugin_type(&mut self, unique_id: u64, class_flag: u64) {
        self.plugin_mut(unique_id).plugin_type |= class_flag;
    }

    // ------------------------------------------------------------------
    // Port mutators
    // ------------------------------------------------------------------

    pub fn or_port_type(&mut self, unique_id: u64, port_index: u64, type_flag: u32) {
        self.port_mut(unique_id, port_index).port_type |= type_flag;
    }

    pub fn set_port_label(&mut self, unique_id: u64, port_index: u64, label: String) {
        let port = self.port_mut(unique_id, port_index);
        port.label = Some(label);
        port.hints |= PORT_HINT_LABEL;
    }

    pub fn set_port_unit(&mut self, unique_id: u64, port_index: u64, unit: u32) {
        let port = self.port_mut(unique_id, port_index);
        port.unit = unit;
        port.hints |= PORT_HINT_UNIT;
    }

    pub fn set_port_default(&mut self, unique_id: u64, port_index: u64, value: f32) {
        let port = self.port_mut(unique_id, port_index);
        port.default_value = value;
        port.hints |= PORT_HINT_DEFAULT;
    }

    pub fn add_scale_point(
        &mut self,
        unique_id: u64,
        port_index: u64,
        value: f32,
        label: Option<String>,
    ) {
        self.port_mut(unique_id, port_index)
            .scale_points
            .push(ScalePoint { value, label });
    }
}
