// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wire-length accounting for H-tree blueprints.
//!
//! The accounting walks the blueprint once, without building any geometry,
//! so that the delay-insertion policy can change independently of the
//! rendered shape. It uses the same axis mapping and the same ratio rule as
//! [`HTreeBuilder`](super::HTreeBuilder).
//!
//! Vertical hops are counted as intentional delay: they add wire without
//! getting a signal any closer to a leaf in the plane.

use crate::blueprint::Blueprint;
use crate::htree::HTreeConfig;
use serde::{Deserialize, Serialize};

/// Accumulated wire lengths of one blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathMetrics {
    /// Length of one root-to-leaf path, including vertical hops.
    pub wire_length: f64,
    /// Part of `wire_length` spent on vertical hops.
    pub added_delay: f64,
    /// Arm length summed over every branch instance of the tree.
    pub total_length: f64,
    /// Blueprint length.
    pub depth: usize,
}

impl PathMetrics {
    pub fn accumulate(size: f64, blueprint: &Blueprint, config: &HTreeConfig) -> Self {
        let axes = blueprint.axes();
        let mut metrics = PathMetrics {
            depth: axes.len(),
            ..PathMetrics::default()
        };
        let mut size = size;
        let mut multiplicity = 1.0;

        for (position, axis) in axes.iter().enumerate() {
            if axis.is_vertical() {
                metrics.wire_length += config.layer_height;
                metrics.added_delay += config.layer_height;
                metrics.total_length += config.layer_height * 2.0 * multiplicity;
            } else {
                // Every path takes one of the two arms.
                metrics.wire_length += size / 2.0;
                size *= config.scaling.ratio(&axes[position..]);
                metrics.total_length += size * multiplicity;
            }
            multiplicity *= 2.0;
        }
        metrics
    }

    /// `total_length / (2^(depth+1) - 2)`, or 0 for an empty blueprint.
    pub fn average_segment_length(&self) -> f64 {
        if self.depth == 0 {
            return 0.0;
        }
        let arms = 2f64.powi(self.depth as i32 + 1) - 2.0;
        self.total_length / arms
    }

    pub fn report(&self) -> PathReport {
        PathReport {
            wire_length: self.wire_length,
            added_delay: self.added_delay,
            total_length: self.total_length,
            average_segment_length: self.average_segment_length(),
        }
    }
}

/// Plain numeric summary handed to reporters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub wire_length: f64,
    pub added_delay: f64,
    pub total_length: f64,
    pub average_segment_length: f64,
}
