//! Shared fixture builders for the integration tests.

use std::collections::BTreeMap;

use footing::map::{FootholdData, FootholdSource};
use footing::{FootholdTree, PhysicsObject};

/// Builds an authored leaf with explicit chain links.
pub fn linked(x1: i16, y1: i16, x2: i16, y2: i16, prev: u16, next: u16) -> FootholdData {
    FootholdData {
        x1,
        x2,
        y1,
        y2,
        prev,
        next,
    }
}

/// Builds an unlinked authored leaf (both ends of its chain).
pub fn leaf(x1: i16, y1: i16, x2: i16, y2: i16) -> FootholdData {
    linked(x1, y1, x2, y2, 0, 0)
}

/// Wraps leaves into a single-group authored source on the given layer.
pub fn source_on_layer(layer: &str, entries: &[(u16, FootholdData)]) -> FootholdSource {
    let mut group = BTreeMap::new();
    for (id, data) in entries {
        group.insert(id.to_string(), *data);
    }
    let mut groups = BTreeMap::new();
    groups.insert("0".to_string(), group);
    let mut layers = BTreeMap::new();
    layers.insert(layer.to_string(), groups);
    FootholdSource(layers)
}

/// Builds a tree with all entries on layer 1.
pub fn tree(entries: &[(u16, FootholdData)]) -> FootholdTree {
    FootholdTree::from_source(&source_on_layer("1", entries))
}

/// An object standing exactly on the given foothold at column `x`.
pub fn grounded_on(fht: &FootholdTree, fhid: u16, x: f64) -> PhysicsObject {
    let fh = fht.get_fh(fhid);
    let mut obj = PhysicsObject::new(x, fh.ground_below(x));
    obj.fhid = fhid;
    obj.fhslope = fh.slope();
    obj.fhlayer = fh.layer();
    obj.onground = true;
    obj
}

/// Runs one resolver pass in the mandated order: clamp, advance, re-derive.
pub fn resolve_tick(fht: &FootholdTree, obj: &mut PhysicsObject) {
    fht.limit_movement(obj);
    obj.advance();
    fht.update_fh(obj);
}
