// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{approx_eq, htree, mesh, points_close};
use noc_topology::noc::Snapshot;
use noc_topology::{Blueprint, LayoutSpec, MeshDimensions, NetworkKind, Noc, NocConfig, NocError};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_facade_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Noc>();
    assert_send_sync::<noc_topology::Topology>();
}

#[test]
fn test_parallel_builds_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| htree("xyzxyzxy").lines().unwrap().to_vec()))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 255);
}

#[test]
fn test_shared_readers() {
    let noc = Arc::new(mesh(4, 4, 4));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let noc = Arc::clone(&noc);
            thread::spawn(move || noc.distance(i, 63 - i).unwrap())
        })
        .collect();
    for handle in handles {
        let d = handle.join().unwrap();
        assert!(d.horizontal >= 0.0 && d.vertical >= 0.0);
    }
}

#[test]
fn test_snapshot_roundtrip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("htree.json");

    let noc = htree("xzy");
    noc.export_json(&path).unwrap();
    let snapshot = Snapshot::read_json(&path).unwrap();

    assert_eq!(snapshot.kind, NetworkKind::HTree);
    assert_eq!(
        snapshot.layout,
        LayoutSpec::HTree(Blueprint::normalize("xzy").unwrap())
    );
    assert_eq!(snapshot.statistics, *noc.stats().unwrap());
    assert_eq!(snapshot.lines.len(), noc.lines().unwrap().len());
    for (read, built) in snapshot.lines.iter().zip(noc.lines().unwrap()) {
        assert_eq!(read.layer, built.layer);
        assert_eq!(read.axis, built.axis);
        assert!(points_close(read.start, built.start));
        assert!(points_close(read.end, built.end));
    }
    let report = snapshot.path_metrics.unwrap();
    assert!(approx_eq(
        report.wire_length,
        noc.path_metrics().unwrap().wire_length
    ));
}

#[test]
fn test_mesh_snapshot_json() {
    let noc = mesh(2, 2, 1);
    let json = noc.snapshot().unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "mesh");
    assert_eq!(value["layout"]["layout"]["x"], 2);
    assert_eq!(value["statistics"]["nodes"], 4);
    assert!(value.get("path_metrics").is_none());
    assert_eq!(value["nodes"].as_array().unwrap().len(), 4);

    let back = Snapshot::from_json(&json).unwrap();
    assert_eq!(back.nodes.len(), 4);
    assert_eq!(back.nodes[3].index(), 3);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.json");
    assert!(matches!(
        mesh(1, 1, 1).export_json(&path),
        Err(NocError::Io(_))
    ));
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"mesh": {{"element_size": 20.0, "gutter": 0.0}}, "htree": {{"layer_height": 1.0}}}}"#
    )
    .unwrap();
    let config = NocConfig::load(file.path()).unwrap();
    assert_eq!(config.mesh.element_size, 20.0);
    assert_eq!(config.mesh.memory_size, 1024.0);

    let mut noc = Noc::with_config(NetworkKind::Mesh, &config);
    noc.generate(&LayoutSpec::Mesh(MeshDimensions::new(2, 1, 1)))
        .unwrap();
    assert!(approx_eq(noc.distance(0, 1).unwrap().horizontal, 20.0));

    let mut noc = Noc::with_config(NetworkKind::HTree, &config);
    noc.generate(&LayoutSpec::HTree(Blueprint::normalize("z").unwrap()))
        .unwrap();
    assert!(approx_eq(noc.lines().unwrap()[0].length(), 1.0));
}

#[test]
fn test_config_file_errors() {
    assert!(matches!(
        NocConfig::load("/nonexistent/noc-config.json"),
        Err(NocError::Io(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"htree": {{"scaling": {{"rule": "uniform", "ratio": 2.0}}}}}}"#).unwrap();
    assert!(matches!(
        NocConfig::load(file.path()),
        Err(NocError::InvalidConfig(_))
    ));
}

#[test]
fn test_kind_mismatch_both_ways() {
    let mut noc = Noc::new(NetworkKind::Mesh);
    assert!(matches!(
        noc.generate(&LayoutSpec::HTree(Blueprint::cuboid(3).unwrap())),
        Err(NocError::UnsupportedOperation { .. })
    ));
    assert!(matches!(
        noc.path_metrics(),
        Err(NocError::UnsupportedOperation { .. })
    ));
}
