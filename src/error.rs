//! Library error type.
//!
//! Only map construction can fail wholesale. Per-segment problems in
//! authored data (unparsable ids, degenerate geometry) are logged and the
//! offending segment is dropped so the map still loads; per-tick resolution
//! is total and never returns an error.

use thiserror::Error;

/// Failure to construct a foothold tree from authored map data.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map description was not valid JSON of the expected shape.
    #[error("malformed foothold data: {0}")]
    InvalidData(#[from] serde_json::Error),
    /// No foothold in the description survived parsing.
    #[error("map contains no usable footholds")]
    EmptyMap,
}
