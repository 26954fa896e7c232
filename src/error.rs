// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for topology generation and queries.
//!
//! Every core failure is a local validation failure: nothing here is
//! transient or worth retrying. Callers (the CLI) match on the variant to
//! print a targeted message.

use crate::geometry::AxisCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NocError {
    /// A blueprint character is not one of `0 1 2 x y z X Y Z`.
    #[error("invalid character {character:?} at position {position}; accepted: 0,1,2,x,y,z,X,Y,Z")]
    InvalidCharacter { character: char, position: usize },

    /// Two adjacent blueprint steps use the same axis.
    #[error("axis '{axis}' is repeated immediately at position {position}; no immediate repeats allowed")]
    AdjacentRepeat { position: usize, axis: AxisCode },

    /// A mesh dimension is zero, or the element count overflows.
    #[error("invalid mesh dimensions {x}x{y}x{z}; every count must be at least 1")]
    InvalidDimensions { x: usize, y: usize, z: usize },

    /// The operation does not apply to this kind of topology.
    #[error("{operation} is not supported for {kind} topologies")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },

    /// A node index is outside `0..len`.
    #[error("node index {index} out of range; available nodes: 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A query was made before any topology was generated.
    #[error("no topology generated yet")]
    EmptyTopology,

    /// A generated blueprint was asked for an unsupported number of levels.
    #[error("level count {levels} out of range 1..={max}")]
    InvalidLevels { levels: usize, max: usize },

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NocError>;
