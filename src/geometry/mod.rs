// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric primitives for NOC topologies.
//!
//! This module contains:
//! - AxisCode: the axis a blueprint step displaces along
//! - Point3: 3D coordinates, with rounding keys for de-duplication
//! - constants: default pitches, ratios and element parameters

pub mod axis;
pub mod constants;
pub mod point;

// Re-export for convenience
pub use axis::AxisCode;
pub use constants::*;
pub use point::{Point3, PointKey};
