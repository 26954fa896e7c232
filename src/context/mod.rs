// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build context for one generation call.
//!
//! Every builder owns a fresh [`BuildContext`] for the duration of a single
//! `build` call and turns it into a [`Topology`] with
//! [`BuildContext::finish`]. Nothing is shared between calls, so any number
//! of topologies may be built in parallel threads.
//!
//! # Memory Model
//!
//! ```text
//! HTree build:
//!     plan:    HTreePlan         // immutable: blueprint, config, last vertical step
//!     context: BuildContext      // mutable: topology under construction
//! ```
//!
//! The context also owns the junction index used to collapse coincident
//! junction points. That index is dropped by `finish`, so a finished
//! topology carries only its data.

use crate::geometry::{Point3, PointKey};
use crate::topology::{JunctionPoint, LineSegment, MemoryElement, Topology};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct BuildContext {
    topology: Topology,
    /// Rounded junction coordinate -> index in `topology.junctions`.
    junction_index: HashMap<PointKey, usize>,
}

impl BuildContext {
    pub(crate) fn new() -> Self {
        Self {
            topology: Topology::new(),
            junction_index: HashMap::new(),
        }
    }

    pub(crate) fn add_line(&mut self, line: LineSegment) {
        self.topology.push_line(line);
    }

    /// Record a junction at `position`.
    ///
    /// A junction whose rounded coordinate was already recorded is not added
    /// again; the stored copy keeps the shallowest layer seen. Returns true
    /// when a new junction was added.
    pub(crate) fn add_junction(&mut self, position: Point3, layer: usize) -> bool {
        let key = position.key();
        if let Some(&index) = self.junction_index.get(&key) {
            let existing = self.topology.junction_mut(index);
            existing.layer = existing.layer.min(layer);
            return false;
        }
        let index = self.topology.push_junction(JunctionPoint {
            position: position.rounded(),
            layer,
        });
        self.junction_index.insert(key, index);
        true
    }

    pub(crate) fn add_node(&mut self, node: MemoryElement) {
        self.topology.push_node(node);
    }

    /// Topology built so far.
    pub(crate) fn topology(&self) -> &Topology {
        &self.topology
    }

    pub(crate) fn finish(self) -> Topology {
        self.topology
    }
}
