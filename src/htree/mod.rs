// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive 3D H-tree construction.
//!
//! Each level of the tree splits the current center into two children
//! displaced along the blueprint's next axis, joins them with one segment,
//! and recurses into both children with the rest of the blueprint. A
//! blueprint of length `n` therefore produces `2^n - 1` segments.
//!
//! # Horizontal steps
//!
//! Children sit at `± size/2` along the axis and the next level's size is
//! `size * ratio` (see [`Scaling`]).
//!
//! # Vertical steps
//!
//! Vertical wiring has a constant pitch, so a Z step never looks at `size`
//! and never shrinks it. To keep every leaf layer exactly one
//! `layer_height` above the next, a Z step with `k` Z steps left (itself
//! included) offsets its children by `± layer_height * 2^(k-2)`. The last Z
//! step of the blueprint hops a single layer down: its children sit at
//! `z - layer_height` and `z`.
//!
//! # Example
//!
//! ```
//! use noc_topology::blueprint::Blueprint;
//! use noc_topology::geometry::Point3;
//! use noc_topology::htree::HTreeBuilder;
//!
//! let bp = Blueprint::normalize("012").unwrap();
//! let topology = HTreeBuilder::default().build(Point3::ORIGIN, 2.0, &bp);
//! assert_eq!(topology.lines().len(), 7);
//! ```

pub mod config;
pub mod path;

pub use config::{HTreeConfig, Scaling};
pub use path::{PathMetrics, PathReport};

use crate::blueprint::Blueprint;
use crate::context::BuildContext;
use crate::geometry::{AxisCode, Point3};
use crate::topology::{LineSegment, Topology};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct HTreeBuilder {
    config: HTreeConfig,
}

impl HTreeBuilder {
    pub fn new(config: HTreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HTreeConfig {
        &self.config
    }

    /// Expand `blueprint` into a topology rooted at `origin`.
    ///
    /// `size` is the length of the root segment when the first step is
    /// horizontal. An empty blueprint gives an empty topology.
    pub fn build(&self, origin: Point3, size: f64, blueprint: &Blueprint) -> Topology {
        let plan = HTreePlan {
            blueprint,
            config: &self.config,
            last_vertical: blueprint.last_vertical(),
        };
        let mut ctx = BuildContext::new();
        plan.expand(&mut ctx, origin, size, 0);

        let topology = ctx.finish();
        debug!(
            blueprint = %blueprint,
            size,
            lines = topology.lines().len(),
            junctions = topology.junctions().len(),
            "built htree"
        );
        topology
    }

    /// Build with the root size that leaves arms of `config.leaf_size` at
    /// the leaves.
    pub fn build_scaled(&self, origin: Point3, blueprint: &Blueprint) -> Topology {
        self.build(origin, self.config.root_size_for(blueprint), blueprint)
    }

    /// Path metrics consistent with this builder's configuration.
    pub fn path_metrics(&self, size: f64, blueprint: &Blueprint) -> PathMetrics {
        PathMetrics::accumulate(size, blueprint, &self.config)
    }
}

/// Immutable inputs of one build.
struct HTreePlan<'a> {
    blueprint: &'a Blueprint,
    config: &'a HTreeConfig,
    /// Blueprint index of the last Z step.
    last_vertical: Option<usize>,
}

impl HTreePlan<'_> {
    /// Expand the blueprint from `position` on around `center`.
    ///
    /// Recursion depth is bounded by the blueprint length.
    fn expand(&self, ctx: &mut BuildContext, center: Point3, size: f64, position: usize) {
        let remaining = &self.blueprint.axes()[position..];
        let Some(&axis) = remaining.first() else {
            return;
        };
        let layer = position + 1;

        let (low, high, next_size) = if axis.is_vertical() {
            let (low, high) = self.vertical_split(center, position);
            (low, high, size)
        } else {
            let half = size * 0.5;
            (
                center.displaced(axis, -half),
                center.displaced(axis, half),
                size * self.config.scaling.ratio(remaining),
            )
        };

        ctx.add_line(LineSegment {
            start: low,
            end: high,
            layer,
            axis,
        });
        // Leaf endpoints are branch tips, not branch points.
        if remaining.len() > 1 {
            ctx.add_junction(low, layer);
            ctx.add_junction(high, layer);
        }

        self.expand(ctx, low, next_size, position + 1);
        self.expand(ctx, high, next_size, position + 1);
    }

    fn vertical_split(&self, center: Point3, position: usize) -> (Point3, Point3) {
        let pitch = self.config.layer_height;
        if self.last_vertical == Some(position) {
            return (center.displaced(AxisCode::Z, -pitch), center);
        }
        // At least two Z steps remain here, so the exponent is >= 0.
        let remaining_vertical = self.blueprint.count_from(position, AxisCode::Z);
        let offset = pitch * 2f64.powi(remaining_vertical as i32 - 2);
        (
            center.displaced(AxisCode::Z, -offset),
            center.displaced(AxisCode::Z, offset),
        )
    }
}
