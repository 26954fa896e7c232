// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use noc_topology::geometry::Point3;
use noc_topology::{Blueprint, LayoutSpec, MeshDimensions, NetworkKind, Noc};

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub fn points_close(a: Point3, b: Point3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

pub fn htree(raw: &str) -> Noc {
    let blueprint = Blueprint::normalize(raw)
        .unwrap_or_else(|e| panic!("blueprint {:?} rejected: {}", raw, e));
    let mut noc = Noc::new(NetworkKind::HTree);
    noc.generate(&LayoutSpec::HTree(blueprint)).unwrap();
    noc
}

pub fn mesh(x: usize, y: usize, z: usize) -> Noc {
    let mut noc = Noc::new(NetworkKind::Mesh);
    noc.generate(&LayoutSpec::Mesh(MeshDimensions::new(x, y, z)))
        .unwrap();
    noc
}

/// Distinct z coordinates, rounded to a micro-unit grid.
pub fn z_levels(points: impl Iterator<Item = Point3>) -> Vec<i64> {
    let mut levels: Vec<i64> = points.map(|p| (p.z * 1e6).round() as i64).collect();
    levels.sort_unstable();
    levels.dedup();
    levels
}
