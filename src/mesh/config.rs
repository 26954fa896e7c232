// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mesh dimensions and physical parameters.

use crate::error::{NocError, Result};
use crate::geometry::constants::{
    CELL_AREA, ELEMENT_GUTTER, ELEMENT_SIZE, ENERGY_PER_CELL, LAYER_HEIGHT, MEMORY_SIZE,
};
use crate::topology::ElementSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element counts along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshDimensions {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl MeshDimensions {
    /// Unchecked constructor; [`MeshDimensions::element_count`] validates.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of elements.
    ///
    /// Fails with `InvalidDimensions` when a count is zero or the product
    /// overflows.
    pub fn element_count(&self) -> Result<usize> {
        let invalid = NocError::InvalidDimensions {
            x: self.x,
            y: self.y,
            z: self.z,
        };
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return Err(invalid);
        }
        self.x
            .checked_mul(self.y)
            .and_then(|xy| xy.checked_mul(self.z))
            .ok_or(invalid)
    }

    #[inline]
    pub fn index_of(&self, column: usize, row: usize, layer: usize) -> usize {
        layer * self.x * self.y + row * self.x + column
    }

    /// Inverse of [`MeshDimensions::index_of`]: `(column, row, layer)`.
    #[inline]
    pub fn coordinates_of(&self, index: usize) -> (usize, usize, usize) {
        let per_layer = self.x * self.y;
        let layer = index / per_layer;
        let within = index % per_layer;
        (within % self.x, within / self.x, layer)
    }
}

impl fmt::Display for MeshDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl From<(usize, usize, usize)> for MeshDimensions {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self::new(x, y, z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Side length of one memory element.
    pub element_size: f64,
    /// Space between two neighbouring elements in a layer.
    pub gutter: f64,
    /// Vertical pitch between element layers.
    pub layer_height: f64,
    /// Capacity of each element, in cells.
    pub memory_size: f64,
    pub energy_per_cell: f64,
    pub cell_area: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            element_size: ELEMENT_SIZE,
            gutter: ELEMENT_GUTTER,
            layer_height: LAYER_HEIGHT,
            memory_size: MEMORY_SIZE,
            energy_per_cell: ENERGY_PER_CELL,
            cell_area: CELL_AREA,
        }
    }
}

impl MeshConfig {
    /// In-plane distance between neighbouring element centers.
    pub fn pitch(&self) -> f64 {
        self.element_size + self.gutter
    }

    pub fn element_spec(&self) -> ElementSpec {
        ElementSpec {
            memory_size: self.memory_size,
            energy_per_cell: self.energy_per_cell,
            cell_area: self.cell_area,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("element_size", self.element_size),
            ("layer_height", self.layer_height),
            ("memory_size", self.memory_size),
            ("cell_area", self.cell_area),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(NocError::InvalidConfig(format!(
                    "mesh.{} must be positive, got {}",
                    name, value
                )));
            }
        }
        let non_negative = [
            ("gutter", self.gutter),
            ("energy_per_cell", self.energy_per_cell),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(NocError::InvalidConfig(format!(
                    "mesh.{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
