// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON export of a generated topology.

use crate::error::Result;
use crate::htree::PathReport;
use crate::noc::{LayoutSpec, NetworkKind};
use crate::topology::{JunctionPoint, LineSegment, MemoryElement, Statistics};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Everything a renderer needs, detached from the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub kind: NetworkKind,
    pub layout: LayoutSpec,
    pub statistics: Statistics,
    /// H-tree only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_metrics: Option<PathReport>,
    pub lines: Vec<LineSegment>,
    pub junctions: Vec<JunctionPoint>,
    pub nodes: Vec<MemoryElement>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!(path = %path.display(), lines = self.lines.len(), "wrote snapshot");
        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
