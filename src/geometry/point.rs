// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 3D points and rounding keys.
//!
//! Repeated halving leaves floating-point noise in H-tree coordinates, so two
//! branches that meet at the same junction can disagree in the last few bits.
//! [`PointKey`] rounds each coordinate to [`ROUNDING_DIGITS`] decimal places
//! and is the identity used for junction de-duplication.

use crate::geometry::constants::ROUNDING_DIGITS;
use crate::geometry::AxisCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn coord(&self, axis: AxisCode) -> f64 {
        match axis {
            AxisCode::X => self.x,
            AxisCode::Y => self.y,
            AxisCode::Z => self.z,
        }
    }

    /// This point moved by `delta` along `axis`.
    #[inline]
    pub fn displaced(&self, axis: AxisCode, delta: f64) -> Self {
        let mut p = *self;
        match axis {
            AxisCode::X => p.x += delta,
            AxisCode::Y => p.y += delta,
            AxisCode::Z => p.z += delta,
        }
        p
    }

    /// This point with every coordinate rounded to [`ROUNDING_DIGITS`] places.
    pub fn rounded(&self) -> Self {
        Self {
            x: round_coord(self.x),
            y: round_coord(self.y),
            z: round_coord(self.z),
        }
    }

    /// Identity of this point for de-duplication.
    pub fn key(&self) -> PointKey {
        PointKey([scaled(self.x), scaled(self.y), scaled(self.z)])
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Rounded, hashable identity of a [`Point3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey([i64; 3]);

fn scale() -> f64 {
    10f64.powi(ROUNDING_DIGITS)
}

fn scaled(v: f64) -> i64 {
    (v * scale()).round() as i64
}

fn round_coord(v: f64) -> f64 {
    // Adding 0.0 turns -0.0 into 0.0 so rounded output is bit-for-bit stable.
    (v * scale()).round() / scale() + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displaced() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.displaced(AxisCode::X, 0.5), Point3::new(1.5, 2.0, 3.0));
        assert_eq!(p.displaced(AxisCode::Y, -2.0), Point3::new(1.0, 0.0, 3.0));
        assert_eq!(p.displaced(AxisCode::Z, 5.0), Point3::new(1.0, 2.0, 8.0));
    }

    #[test]
    fn test_key_absorbs_noise() {
        let a = Point3::new(0.1 + 0.2, 1.0, -1.0);
        let b = Point3::new(0.3, 1.0, -1.0);
        assert_ne!(a, b);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.rounded(), b.rounded());
    }

    #[test]
    fn test_key_distinguishes_real_differences() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 1e-9);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_negative_zero() {
        let p = Point3::new(-0.0, 0.0, -1e-13).rounded();
        assert!(p.x.is_sign_positive());
        assert!(p.z.is_sign_positive());
        assert_eq!(Point3::new(-0.0, 0.0, 0.0).key(), Point3::ORIGIN.key());
    }

    #[test]
    fn test_distance_to() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
