//! Plugin metadata records
//!
//! In-memory model accumulated while parsing RDF documents. These records are
//! denormalized working state: port order is first-reference order and scale
//! points are unsorted until [`crate::normalize`] runs at export time.

/// One scale point of a control port: a labeled notable value.
///
/// Carries no identity beyond its fields; duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalePoint {
    pub value: f32,
    pub label: Option<String>,
}

/// One plugin port, keyed within its plugin by `index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortRecord {
    /// Declared port position, parsed from the `<plugin>.<port>` subject
    /// suffix. Determines the port's slot in the final dense array; not
    /// necessarily contiguous from zero before normalization.
    pub index: u64,

    /// OR-accumulated direction and signal-type bits (`PORT_*`).
    pub port_type: u32,

    /// `PORT_HINT_*` bits recording which optional fields were explicitly
    /// supplied by some fact.
    pub hints: u32,

    pub label: Option<String>,

    /// Default value; meaningful only when `PORT_HINT_DEFAULT` is set.
    pub default_value: f32,

    /// Unit code (`UNIT_*`); meaningful only when `PORT_HINT_UNIT` is set.
    pub unit: u32,

    pub scale_points: Vec<ScalePoint>,
}

/// One plugin, keyed by its LADSPA unique id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginRecord {
    /// OR-accumulated plugin class bits (`CLASS_*`).
    pub plugin_type: u64,

    /// Stable key from the plugin's numeric subject suffix; immutable once
    /// the record is created.
    pub unique_id: u64,

    pub title: Option<String>,
    pub creator: Option<String>,

    /// Ports in first-reference order. Final ordering and densification
    /// happen in [`crate::normalize::normalize_ports`].
    pub ports: Vec<PortRecord>,
}

impl PortRecord {
    /// Placeholder port used to fill gaps in the dense port array.
    pub(crate) fn placeholder(index: u64) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

impl PluginRecord {
    pub(crate) fn new(unique_id: u64) -> Self {
        Self {
            unique_id,
            ..Self::default()
        }
    }
}
