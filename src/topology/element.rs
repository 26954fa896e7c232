// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Addressable memory elements.
//!
//! A memory element is one tile of on-chip memory. Reaching a word inside
//! the tile costs a local search whose length grows with the square root of
//! the tile's area; that estimate is computed once, at construction.

use crate::geometry::Point3;
use serde::{Deserialize, Serialize};

/// Physical parameters shared by every element of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Capacity, in cells.
    pub memory_size: f64,
    /// Energy spent per cell length of local search.
    pub energy_per_cell: f64,
    /// Area of one cell.
    pub cell_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryElement {
    index: usize,
    position: Point3,
    memory_size: f64,
    energy_per_cell: f64,
    cell_area: f64,
    search_length: f64,
    search_energy: f64,
}

impl MemoryElement {
    pub fn new(index: usize, position: Point3, spec: ElementSpec) -> Self {
        let search_length = (spec.memory_size * spec.cell_area).sqrt();
        Self {
            index,
            position,
            memory_size: spec.memory_size,
            energy_per_cell: spec.energy_per_cell,
            cell_area: spec.cell_area,
            search_length,
            search_energy: search_length * spec.energy_per_cell,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn memory_size(&self) -> f64 {
        self.memory_size
    }

    pub fn energy_per_cell(&self) -> f64 {
        self.energy_per_cell
    }

    pub fn cell_area(&self) -> f64 {
        self.cell_area
    }

    /// `sqrt(memory_size * cell_area)`
    pub fn search_length(&self) -> f64 {
        self.search_length
    }

    /// `search_length * energy_per_cell`
    pub fn search_energy(&self) -> f64 {
        self.search_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_search_values() {
        let spec = ElementSpec {
            memory_size: 1024.0,
            energy_per_cell: 0.5,
            cell_area: 4.0,
        };
        let e = MemoryElement::new(7, Point3::new(1.0, 2.0, 3.0), spec);
        assert_eq!(e.index(), 7);
        assert_eq!(e.position(), Point3::new(1.0, 2.0, 3.0));
        assert!((e.search_length() - 64.0).abs() < 1e-12);
        assert!((e.search_energy() - 32.0).abs() < 1e-12);
    }
}
