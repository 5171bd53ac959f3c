//! Fixed-layout descriptor records
//!
//! `#[repr(C)]` mirrors of the host's `LADSPA_RDF_*` descriptor structs,
//! plus the conversion from normalized [`PluginRecord`]s into them. The
//! conversion never fails: missing or empty strings export as null pointers
//! and a string that cannot be represented as a C string falls back to a
//! fixed placeholder, so one bad field never loses a whole record.
//!
//! # Safety
//! [`DescriptorSet`] owns every byte the embedded raw pointers reference.
//! The pointers are valid for reads for the lifetime of the set and become
//! dangling when it is dropped.

use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_ulong, c_ulonglong};
use std::ptr;

use crate::normalize::normalize_ports;
use crate::types::PluginRecord;

/// Placeholder exported when a string has no C representation.
const INVALID_STRING: &[u8] = b"(invalid string)";

/// One scale point, C layout.
#[repr(C)]
#[derive(Debug)]
pub struct RdfScalePoint {
    pub value: f32,
    pub label: *const c_char,
}

/// One port, C layout.
#[repr(C)]
#[derive(Debug)]
pub struct RdfPort {
    pub port_type: c_int,
    pub hints: c_int,
    pub label: *const c_char,
    pub default_value: f32,
    pub unit: c_int,
    pub scale_point_count: c_ulong,
    pub scale_points: *const RdfScalePoint,
}

/// One plugin descriptor, C layout.
#[repr(C)]
#[derive(Debug)]
pub struct RdfDescriptor {
    pub plugin_type: c_ulonglong,
    pub unique_id: c_ulong,
    pub title: *const c_char,
    pub creator: *const c_char,
    pub port_count: c_ulong,
    pub ports: *const RdfPort,
}

/// An owned collection of C-layout descriptors.
///
/// Keeps all backing storage (strings, port arrays, scale-point arrays)
/// alive for as long as the raw pointers handed to foreign code may be read.
#[derive(Debug, Default)]
pub struct DescriptorSet {
    descriptors: Vec<RdfDescriptor>,
    // Backing storage referenced by the raw pointers above. CString heap
    // buffers and boxed slices do not move when the outer vecs grow.
    ports: Vec<Box<[RdfPort]>>,
    scale_points: Vec<Box<[RdfScalePoint]>>,
    strings: Vec<CString>,
}

impl DescriptorSet {
    /// Convert accumulated plugin records into C-layout descriptors.
    ///
    /// Each record's ports are normalized (dense, index-ordered, with
    /// value-sorted scale points) as part of the conversion.
    pub fn from_records(records: &[PluginRecord]) -> Self {
        let mut set = DescriptorSet::default();

        for record in records {
            let dense_ports = normalize_ports(&record.ports);

            let ports: Vec<RdfPort> = dense_ports
                .iter()
                .map(|port| {
                    let points: Vec<RdfScalePoint> = port
                        .scale_points
                        .iter()
                        .map(|sp| RdfScalePoint {
                            value: sp.value,
                            label: set.export_string(sp.label.as_deref()),
                        })
                        .collect();

                    RdfPort {
                        port_type: port.port_type as c_int,
                        hints: port.hints as c_int,
                        label: set.export_string(port.label.as_deref()),
                        default_value: port.default_value,
                        unit: port.unit as c_int,
                        scale_point_count: points.len() as c_ulong,
                        scale_points: set.keep_scale_points(points),
                    }
                })
                .collect();

            let descriptor = RdfDescriptor {
                plugin_type: record.plugin_type,
                unique_id: record.unique_id as c_ulong,
                title: set.export_string(record.title.as_deref()),
                creator: set.export_string(record.creator.as_deref()),
                port_count: ports.len() as c_ulong,
                ports: set.keep_ports(ports),
            };
            set.descriptors.push(descriptor);
        }

        set
    }

    /// The converted descriptors, one per input record, in input order.
    pub fn descriptors(&self) -> &[RdfDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Export an optional string as a C string pointer.
    ///
    /// Missing or empty strings export as null, not as an empty C string. A
    /// string with an interior NUL has no C representation and exports the
    /// fixed placeholder instead; the conversion itself never fails.
    fn export_string(&mut self, value: Option<&str>) -> *const c_char {
        let text = match value {
            Some(text) if !text.is_empty() => text,
            _ => return ptr::null(),
        };

        let cstring = CString::new(text).unwrap_or_else(|_| {
            CString::new(INVALID_STRING).expect("placeholder has no interior NUL")
        });
        self.strings.push(cstring);
        self.strings.last().map(|s| s.as_ptr()).unwrap_or(ptr::null())
    }

    fn keep_scale_points(&mut self, points: Vec<RdfScalePoint>) -> *const RdfScalePoint {
        if points.is_empty() {
            return ptr::null();
        }
        self.scale_points.push(points.into_boxed_slice());
        self.scale_points
            .last()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    }

    fn keep_ports(&mut self, ports: Vec<RdfPort>) -> *const RdfPort {
        if ports.is_empty() {
            return ptr::null();
        }
        self.ports.push(ports.into_boxed_slice());
        self.ports.last().map(|s| s.as_ptr()).unwrap_or(ptr::null())
    }
}
