//! Export-time normalization
//!
//! Parsing accumulates ports in first-reference order and scale points in
//! resolution order. The foreign descriptor contract wants a contiguous,
//! index-addressable port array and value-sorted scale points, so each record
//! is normalized exactly once at export.

use std::cmp::Ordering;

use crate::types::{PortRecord, ScalePoint};

/// Produce a dense, index-addressable port array.
///
/// The result has `max(logical index) + 1` slots. Each parsed port lands at
/// its own logical index; indices the document never mentioned stay as empty
/// placeholder ports carrying their slot position. Consumers expect a
/// contiguous array even when the source declared sparse port numbers.
/// Scale points are sorted as part of slot placement.
pub fn normalize_ports(ports: &[PortRecord]) -> Vec<PortRecord> {
    let Some(max_index) = ports.iter().map(|p| p.index).max() else {
        return Vec::new();
    };

    let mut dense: Vec<PortRecord> = (0..=max_index).map(PortRecord::placeholder).collect();
    for port in ports {
        let mut port = port.clone();
        port.scale_points = normalize_scale_points(&port.scale_points);
        let slot = port.index as usize;
        dense[slot] = port;
    }
    dense
}

/// Sort scale points by value, ascending.
///
/// The sort is stable, so points with equal values keep their input order;
/// no stronger tie-break is defined. Labels travel with their values.
pub fn normalize_scale_points(points: &[ScalePoint]) -> Vec<ScalePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    sorted
}
