// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generated topologies.
//!
//! A [`Topology`] is the output of exactly one builder call: the wire
//! segments, the de-duplicated junction points and (for meshes) the memory
//! elements. It is read-only once built; regenerating means building a new
//! value.
//!
//! Renderers and reporters only need the three slice accessors
//! ([`Topology::lines`], [`Topology::junctions`], [`Topology::nodes`]).

pub mod element;
pub mod statistics;

pub use element::{ElementSpec, MemoryElement};
pub use statistics::{Counters, Statistics};

use crate::geometry::{AxisCode, Point3};
use serde::{Deserialize, Serialize};

/// One straight wire between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point3,
    pub end: Point3,
    /// Recursion depth (H-tree, root segment is 1) or lattice layer (mesh, 1-based).
    pub layer: usize,
    /// Axis the segment runs along.
    pub axis: AxisCode,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point3 {
        Point3::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
            (self.start.z + self.end.z) / 2.0,
        )
    }
}

/// A branch point of the H-tree.
///
/// Positions are stored rounded (see [`Point3::rounded`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JunctionPoint {
    pub position: Point3,
    pub layer: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Topology {
    lines: Vec<LineSegment>,
    junctions: Vec<JunctionPoint>,
    nodes: Vec<MemoryElement>,
    statistics: Statistics,
}

impl Topology {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn junctions(&self) -> &[JunctionPoint] {
        &self.junctions
    }

    /// Memory elements; empty for H-trees.
    pub fn nodes(&self) -> &[MemoryElement] {
        &self.nodes
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.nodes.is_empty()
    }

    /// Deepest layer of any segment (0 when there are none).
    pub fn max_layer(&self) -> usize {
        self.lines.iter().map(|l| l.layer).max().unwrap_or(0)
    }

    /// Segments created on `layer`.
    pub fn lines_on_layer(&self, layer: usize) -> impl Iterator<Item = &LineSegment> {
        self.lines.iter().filter(move |l| l.layer == layer)
    }

    /// Sum of all segment lengths.
    pub fn total_wire_length(&self) -> f64 {
        self.lines.iter().map(LineSegment::length).sum()
    }

    pub(crate) fn push_line(&mut self, line: LineSegment) {
        self.lines.push(line);
        self.statistics.increment_counter(Counters::Lines);
    }

    /// Appends a junction and returns its index.
    pub(crate) fn push_junction(&mut self, junction: JunctionPoint) -> usize {
        self.junctions.push(junction);
        self.statistics.increment_counter(Counters::Junctions);
        self.junctions.len() - 1
    }

    pub(crate) fn junction_mut(&mut self, index: usize) -> &mut JunctionPoint {
        &mut self.junctions[index]
    }

    pub(crate) fn push_node(&mut self, node: MemoryElement) {
        self.nodes.push(node);
        self.statistics.increment_counter(Counters::Nodes);
    }
}
