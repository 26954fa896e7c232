// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation and measurement of 3D network-on-chip topologies.
//!
//! Two layouts are supported:
//!
//! - **H-trees**, grown recursively from a short axis blueprint such as
//!   `"xyz"`. Horizontal steps halve and shrink the arm; vertical steps hop
//!   a fixed layer height.
//! - **Meshes**, regular `x × y × z` lattices of memory elements wired to
//!   their axis neighbours.
//!
//! # Architecture
//!
//! ```text
//! Blueprint ──► HTreeBuilder ──┐
//!          └──► PathMetrics    ├──► Topology ──► Noc ──► CLI / Snapshot
//! MeshDimensions ► MeshBuilder ┘
//! ```
//!
//! Each builder call owns a private build context and returns an immutable
//! [`Topology`]; nothing is shared between builds. The [`Noc`] facade picks
//! a variant when constructed and exposes one query surface over both.
//!
//! # Metrics
//!
//! - [`PathMetrics`]: root-to-leaf wire length, the part of it spent on
//!   vertical hops, and the total wire of the whole tree.
//! - [`metric::distance`]: split horizontal/vertical Manhattan distance
//!   between mesh elements.
//! - [`metric::layering_improvement`]: how much stacking wiring layers
//!   shortens wires for a given tile count.

pub mod blueprint;
pub mod config;
pub(crate) mod context;
pub mod error;
pub mod geometry;
pub mod htree;
pub mod mesh;
pub mod metric;
pub mod noc;
pub mod topology;

// Re-export commonly used types
pub use blueprint::Blueprint;
pub use config::NocConfig;
pub use error::{NocError, Result};
pub use htree::{HTreeBuilder, HTreeConfig, PathMetrics};
pub use mesh::{MeshBuilder, MeshConfig, MeshDimensions};
pub use noc::{LayoutSpec, NetworkKind, Noc};
pub use topology::Topology;
