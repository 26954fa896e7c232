// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regular 3D mesh construction.
//!
//! The mesh is a `x × y × z` lattice of memory elements. Elements in one
//! layer are `element_size + gutter` apart; layers are `layer_height` apart.
//! The lattice is centered on the origin.
//!
//! # Indexing
//!
//! Indices are row-major: layer, then row (y), then column (x).
//!
//! ```text
//! index = layer * (x * y) + row * x + column
//! ```
//!
//! # Wiring
//!
//! Every element is wired to its +X, +Y and +Z neighbour when one exists.
//! That is each lattice edge exactly once:
//!
//! ```text
//! segments = 3xyz - (yz + xz + xy)
//! ```

pub mod config;

pub use config::{MeshConfig, MeshDimensions};

use crate::context::BuildContext;
use crate::error::{NocError, Result};
use crate::geometry::{AxisCode, Point3};
use crate::topology::{LineSegment, MemoryElement, Topology};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    config: MeshConfig,
}

impl MeshBuilder {
    pub fn new(config: MeshConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn build(&self, dimensions: MeshDimensions) -> Result<Topology> {
        let count = dimensions.element_count()?;
        let MeshDimensions { x, y, z } = dimensions;

        let pitch = self.config.pitch();
        let layer_height = self.config.layer_height;
        let corner = Point3::new(
            -((x - 1) as f64) * pitch / 2.0,
            -((y - 1) as f64) * pitch / 2.0,
            -((z - 1) as f64) * layer_height / 2.0,
        );
        let spec = self.config.element_spec();

        let mut ctx = BuildContext::new();
        for layer in 0..z {
            for row in 0..y {
                for column in 0..x {
                    let position = Point3::new(
                        corner.x + column as f64 * pitch,
                        corner.y + row as f64 * pitch,
                        corner.z + layer as f64 * layer_height,
                    );
                    ctx.add_node(MemoryElement::new(
                        dimensions.index_of(column, row, layer),
                        position,
                        spec,
                    ));
                }
            }
        }

        for node in 0..count {
            let (column, row, layer) = dimensions.coordinates_of(node);
            let neighbours = [
                (AxisCode::X, column + 1 < x, node + 1),
                (AxisCode::Y, row + 1 < y, node + x),
                (AxisCode::Z, layer + 1 < z, node + x * y),
            ];
            for (axis, present, neighbour) in neighbours {
                if present {
                    let nodes = ctx.topology().nodes();
                    let line = LineSegment {
                        start: nodes[node].position(),
                        end: nodes[neighbour].position(),
                        layer: layer + 1,
                        axis,
                    };
                    ctx.add_line(line);
                }
            }
        }

        let topology = ctx.finish();
        debug!(
            dimensions = %dimensions,
            nodes = topology.nodes().len(),
            lines = topology.lines().len(),
            "built mesh"
        );
        Ok(topology)
    }
}
