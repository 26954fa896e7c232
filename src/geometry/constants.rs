// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric constants shared by the H-tree and mesh builders.
//!
//! All lengths are in the same implied unit (micrometres in the reports
//! printed by the `noc` binary). Every constant here is only a default: the
//! builders take their values from [`HTreeConfig`](crate::htree::HTreeConfig)
//! and [`MeshConfig`](crate::mesh::MeshConfig), which can be loaded from a
//! config file.

/// Vertical pitch between two wiring layers.
///
/// Vertical hops never scale with the in-plane size of the tree: going up
/// one layer always costs this much wire.
pub const LAYER_HEIGHT: f64 = 5.0;

/// Square root of one half.
///
/// Shrinking an H-tree arm by this ratio at every horizontal step keeps
/// the tree inside a square footprint when two axes alternate. Used by the
/// uniform "pixel" scaling and as the alternate ratio of the axis-paired
/// rule.
pub const SQRT_HALF: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Cube root of one half (≈ 0.7937).
///
/// Default horizontal shrink ratio: three consecutive steps halve the arm
/// length, which matches a tree whose branching cycles through three axes.
pub fn cube_root_half() -> f64 {
    0.5f64.cbrt()
}

/// Length of a leaf arm in the pixel-metric preset.
pub const PIXEL_SIZE: f64 = 10.0;

/// Largest level count accepted for generated (cuboid) blueprints.
///
/// An H-tree of depth `n` has `2^n - 1` segments, so 21 levels is about
/// two million segments.
pub const MAX_LEVELS: usize = 21;

/// Decimal places kept when comparing junction coordinates.
pub const ROUNDING_DIGITS: i32 = 10;

/// Default side length of one memory element in the mesh.
pub const ELEMENT_SIZE: f64 = 10.0;

/// Default spacing left between two neighbouring mesh elements.
pub const ELEMENT_GUTTER: f64 = 2.0;

/// Default capacity of one memory element, in cells.
pub const MEMORY_SIZE: f64 = 1024.0;

/// Default energy spent per cell traversed during a local search.
pub const ENERGY_PER_CELL: f64 = 1.0;

/// Default area of one memory cell.
pub const CELL_AREA: f64 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        assert!((cube_root_half().powi(3) - 0.5).abs() < 1e-12);
        assert!((SQRT_HALF * SQRT_HALF - 0.5).abs() < 1e-12);
        assert!(SQRT_HALF < cube_root_half());
    }

    #[test]
    fn test_cube_root_half_four_places() {
        assert!((cube_root_half() - 0.7937).abs() < 1e-4);
    }
}
