// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{approx_eq, htree, points_close, z_levels};
use noc_topology::geometry::constants::{LAYER_HEIGHT, MAX_LEVELS, SQRT_HALF};
use noc_topology::geometry::{AxisCode, Point3};
use noc_topology::htree::{HTreeBuilder, HTreeConfig, PathMetrics};
use noc_topology::{Blueprint, NocError};

#[test]
fn test_xyz_blueprint() {
    let noc = htree("012");
    let lines = noc.lines().unwrap();
    assert_eq!(lines.len(), 7);

    let per_layer: Vec<usize> = (1..=3)
        .map(|layer| lines.iter().filter(|l| l.layer == layer).count())
        .collect();
    assert_eq!(per_layer, vec![1, 2, 4]);

    let axes: Vec<AxisCode> = (1..=3)
        .map(|layer| lines.iter().find(|l| l.layer == layer).unwrap().axis)
        .collect();
    assert_eq!(axes, vec![AxisCode::X, AxisCode::Y, AxisCode::Z]);
}

#[test]
fn test_xyz_path_metrics_at_size_two() {
    let bp = Blueprint::normalize("012").unwrap();
    let config = HTreeConfig::pixel();
    let a = PathMetrics::accumulate(2.0, &bp, &config);
    let b = HTreeBuilder::new(config).path_metrics(2.0, &bp);
    assert_eq!(a, b);

    assert!(approx_eq(a.wire_length, 1.0 + SQRT_HALF + LAYER_HEIGHT));
    assert!(approx_eq(a.added_delay, LAYER_HEIGHT));
    assert!(approx_eq(a.total_length, 2.0 * SQRT_HALF + 2.0 + 40.0));
    assert!(approx_eq(a.average_segment_length(), a.total_length / 14.0));
}

#[test]
fn test_aliases_are_equivalent() {
    let spellings = ["012", "xyz", "XYZ", "0yZ", "x1z"];
    let reference = Blueprint::normalize(spellings[0]).unwrap();
    for raw in spellings {
        assert_eq!(Blueprint::normalize(raw).unwrap(), reference, "{}", raw);
    }
}

#[test]
fn test_adjacent_repeat_rules() {
    assert!(matches!(
        Blueprint::normalize("001"),
        Err(NocError::AdjacentRepeat { position: 1, .. })
    ));
    // Aliases of one axis count as a repeat.
    assert!(Blueprint::normalize("xX").is_err());
    assert!(Blueprint::normalize("010").is_ok());
    assert!(matches!(
        Blueprint::normalize("01w"),
        Err(NocError::InvalidCharacter {
            character: 'w',
            position: 2
        })
    ));
}

#[test]
fn test_single_step() {
    let noc = htree("y");
    assert_eq!(noc.lines().unwrap().len(), 1);
    assert!(noc.junctions().unwrap().is_empty());
    assert_eq!(noc.lines().unwrap()[0].axis, AxisCode::Y);
}

#[test]
fn test_empty_blueprint() {
    let noc = htree("");
    assert!(noc.lines().unwrap().is_empty());
    assert_eq!(noc.stats().unwrap().lines(), 0);
    assert_eq!(noc.path_metrics().unwrap().depth, 0);
}

#[test]
fn test_builds_are_reproducible() {
    let a = htree("xyzxzy");
    let b = htree("xyzxzy");
    let (la, lb) = (a.lines().unwrap(), b.lines().unwrap());
    assert_eq!(la.len(), lb.len());
    for (x, y) in la.iter().zip(lb) {
        assert_eq!(x, y);
    }
    assert_eq!(a.junctions().unwrap(), b.junctions().unwrap());
}

#[test]
fn test_cuboid_blueprints() {
    let bp = Blueprint::cuboid(7).unwrap();
    assert_eq!(bp.to_string(), "xyzxyzx");
    assert_eq!(Blueprint::cuboid(MAX_LEVELS).unwrap().len(), MAX_LEVELS);
    assert!(matches!(
        Blueprint::cuboid(MAX_LEVELS + 1),
        Err(NocError::InvalidLevels { .. })
    ));
    assert!(Blueprint::cuboid(0).is_err());
}

#[test]
fn test_cuboid_leaf_layers_one_layer_apart() {
    let bp = Blueprint::cuboid(9).unwrap();
    let t = HTreeBuilder::default().build_scaled(Point3::ORIGIN, &bp);
    assert_eq!(t.lines().len(), (1 << 9) - 1);

    let levels = z_levels(t.lines().iter().flat_map(|l| [l.start, l.end]));
    assert_eq!(levels.len(), 1 << 3);
    let step = (LAYER_HEIGHT * 1e6).round() as i64;
    assert!(levels.windows(2).all(|w| w[1] - w[0] == step));
}

#[test]
fn test_junctions_are_unique_and_interior() {
    let noc = htree("xyzxy");
    let lines = noc.lines().unwrap();
    let junctions = noc.junctions().unwrap();
    let max_layer = lines.iter().map(|l| l.layer).max().unwrap();

    for (i, a) in junctions.iter().enumerate() {
        assert!(a.layer < max_layer);
        for b in &junctions[i + 1..] {
            assert!(!points_close(a.position, b.position));
        }
    }
    // Every junction is the endpoint of a segment on its own layer.
    for j in junctions {
        assert!(lines
            .iter()
            .filter(|l| l.layer == j.layer)
            .any(|l| points_close(l.start, j.position) || points_close(l.end, j.position)));
    }
}

#[test]
fn test_children_attach_to_parent_endpoints() {
    let noc = htree("xyx");
    let lines = noc.lines().unwrap();
    for child in lines.iter().filter(|l| l.layer > 1) {
        let centre = child.midpoint();
        assert!(lines
            .iter()
            .filter(|p| p.layer == child.layer - 1)
            .any(|p| points_close(p.start, centre) || points_close(p.end, centre)));
    }
}
