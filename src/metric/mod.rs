// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distance and energy accounting between memory elements.
//!
//! Wires run along the lattice axes, so in-plane distance is Manhattan
//! distance; vertical distance is kept separate because a via costs
//! differently from a planar wire of the same length.

pub mod layering;

pub use layering::{
    improvement_sweep, layering_improvement, optimal_layers, ImprovementPoint, ImprovementSweep,
};

use crate::topology::MemoryElement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Split distance between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Distance {
    /// `|dx| + |dy|`
    pub horizontal: f64,
    /// `|dz|`
    pub vertical: f64,
}

impl Distance {
    pub fn total(&self) -> f64 {
        self.horizontal + self.vertical
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "horizontal {:.3}, vertical {:.3}",
            self.horizontal, self.vertical
        )
    }
}

pub fn distance(a: &MemoryElement, b: &MemoryElement) -> Distance {
    let (pa, pb) = (a.position(), b.position());
    Distance {
        horizontal: (pa.x - pb.x).abs() + (pa.y - pb.y).abs(),
        vertical: (pa.z - pb.z).abs(),
    }
}

/// Local search energy inside one element.
#[inline]
pub fn search_energy(element: &MemoryElement) -> f64 {
    element.search_energy()
}

/// Pluggable cost of moving data between two elements.
///
/// Implementations must be pure functions of their inputs; the facade may
/// be shared between threads.
pub trait EnergyModel: fmt::Debug + Send + Sync {
    fn energy_between(&self, a: &MemoryElement, b: &MemoryElement, distance: Distance) -> f64;
}
