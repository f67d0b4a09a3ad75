//! Authored map description for foothold terrain.
//!
//! Maps author their terrain as a nested `layer → group → id → leaf`
//! hierarchy where every key is a node name (a string that should parse as a
//! number) and every leaf carries the segment endpoints and chain links.
//! This module owns the serde model of that hierarchy and the JSON entry
//! point; [`crate::FootholdTree::from_source`] turns a parsed description
//! into the runtime tree.
//!
//! Authored data is not trusted: a non-numeric layer or id key drops that
//! layer or leaf with a warning rather than failing the whole map load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::foothold_tree::FootholdTree;

/// One authored foothold leaf: endpoints plus optional chain links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootholdData {
    pub x1: i16,
    pub x2: i16,
    pub y1: i16,
    pub y2: i16,
    /// Id of the left neighbour in the chain; absent means chain end.
    #[serde(default)]
    pub prev: u16,
    /// Id of the right neighbour in the chain; absent means chain end.
    #[serde(default)]
    pub next: u16,
}

/// Footholds of one group, keyed by id node name.
pub type FootholdGroup = BTreeMap<String, FootholdData>;

/// Groups of one depth layer, keyed by group node name.
pub type FootholdLayer = BTreeMap<String, FootholdGroup>;

/// The full authored hierarchy, keyed by layer node name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootholdSource(pub BTreeMap<String, FootholdLayer>);

impl FootholdSource {
    /// Parses the authored JSON description.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parses authored JSON and builds the runtime tree in one step.
///
/// Fails when the JSON is malformed or when nothing in it survived parsing;
/// individually broken leaves are logged and skipped instead.
pub fn load_tree(json: &str) -> Result<FootholdTree, MapError> {
    let source = FootholdSource::from_json(json)?;
    let tree = FootholdTree::from_source(&source);
    if tree.is_empty() {
        return Err(MapError::EmptyMap);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_without_links_defaults_to_chain_end() {
        let data: FootholdData =
            serde_json::from_str(r#"{"x1": 0, "x2": 100, "y1": 50, "y2": 50}"#)
                .expect("leaf should parse");
        assert_eq!(data.prev, 0);
        assert_eq!(data.next, 0);
        assert_eq!(data.x2, 100);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            load_tree("not json"),
            Err(MapError::InvalidData(_))
        ));
    }

    #[test]
    fn empty_description_is_an_error() {
        assert!(matches!(load_tree("{}"), Err(MapError::EmptyMap)));
    }
}
