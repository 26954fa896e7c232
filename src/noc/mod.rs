// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Uniform handle over H-tree and mesh networks.
//!
//! The variant is fixed when the [`Noc`] is created; every query before the
//! first successful [`Noc::generate`] fails with
//! [`NocError::EmptyTopology`].
//!
//! # Example
//!
//! ```
//! use noc_topology::mesh::MeshDimensions;
//! use noc_topology::noc::{LayoutSpec, NetworkKind, Noc};
//!
//! let mut noc = Noc::new(NetworkKind::Mesh);
//! noc.generate(&LayoutSpec::Mesh(MeshDimensions::new(2, 2, 2))).unwrap();
//! assert_eq!(noc.nodes().unwrap().len(), 8);
//! assert_eq!(noc.lines().unwrap().len(), 12);
//! ```

pub mod network;
pub mod snapshot;

pub use network::{HTreeNetwork, LayoutSpec, MeshNetwork, Network, NetworkKind};
pub use snapshot::Snapshot;

use crate::config::NocConfig;
use crate::error::{NocError, Result};
use crate::htree::PathMetrics;
use crate::metric::{self, Distance, EnergyModel};
use crate::topology::{JunctionPoint, LineSegment, MemoryElement, Statistics, Topology};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Noc {
    network: Box<dyn Network>,
    energy_model: Option<Box<dyn EnergyModel>>,
}

impl Noc {
    /// A network of `kind` with default geometry.
    pub fn new(kind: NetworkKind) -> Self {
        Self::with_config(kind, &NocConfig::default())
    }

    pub fn with_config(kind: NetworkKind, config: &NocConfig) -> Self {
        let network: Box<dyn Network> = match kind {
            NetworkKind::HTree => Box::new(HTreeNetwork::new(config.htree)),
            NetworkKind::Mesh => Box::new(MeshNetwork::new(config.mesh)),
        };
        Self {
            network,
            energy_model: None,
        }
    }

    /// Wrap an existing network implementation.
    pub fn from_network(network: Box<dyn Network>) -> Self {
        Self {
            network,
            energy_model: None,
        }
    }

    pub fn with_energy_model(mut self, model: Box<dyn EnergyModel>) -> Self {
        self.energy_model = Some(model);
        self
    }

    pub fn kind(&self) -> NetworkKind {
        self.network.kind()
    }

    /// Build a fresh topology, replacing any earlier one.
    pub fn generate(&mut self, layout: &LayoutSpec) -> Result<()> {
        if let Err(err) = self.network.generate(layout) {
            warn!(kind = %self.kind(), layout = %layout, error = %err, "generate rejected");
            return Err(err);
        }
        let stats = self.stats()?;
        info!(
            layout = %layout,
            lines = stats.lines(),
            junctions = stats.junctions(),
            nodes = stats.nodes(),
            "generated topology"
        );
        Ok(())
    }

    pub fn topology(&self) -> Result<&Topology> {
        self.network.topology().ok_or(NocError::EmptyTopology)
    }

    pub fn layout(&self) -> Result<&LayoutSpec> {
        self.network.layout().ok_or(NocError::EmptyTopology)
    }

    pub fn lines(&self) -> Result<&[LineSegment]> {
        Ok(self.topology()?.lines())
    }

    pub fn junctions(&self) -> Result<&[JunctionPoint]> {
        Ok(self.topology()?.junctions())
    }

    /// Memory elements; empty for an H-tree.
    pub fn nodes(&self) -> Result<&[MemoryElement]> {
        Ok(self.topology()?.nodes())
    }

    pub fn stats(&self) -> Result<&Statistics> {
        Ok(self.topology()?.statistics())
    }

    pub fn path_metrics(&self) -> Result<PathMetrics> {
        self.network.path_metrics()
    }

    /// Manhattan distance between two mesh elements.
    pub fn distance(&self, a: usize, b: usize) -> Result<Distance> {
        self.require_mesh("distance")?;
        let (a, b) = (self.node(a)?, self.node(b)?);
        Ok(metric::distance(a, b))
    }

    pub fn search_energy(&self, index: usize) -> Result<f64> {
        self.require_mesh("search_energy")?;
        Ok(metric::search_energy(self.node(index)?))
    }

    /// Transfer energy between two mesh elements, using the energy model
    /// given to [`Noc::with_energy_model`].
    pub fn energy(&self, a: usize, b: usize) -> Result<f64> {
        self.require_mesh("energy")?;
        let Some(model) = self.energy_model.as_deref() else {
            return Err(NocError::UnsupportedOperation {
                operation: "energy without an energy model",
                kind: self.kind().as_str(),
            });
        };
        let (a, b) = (self.node(a)?, self.node(b)?);
        Ok(model.energy_between(a, b, metric::distance(a, b)))
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        let topology = self.topology()?;
        let path_metrics = match self.kind() {
            NetworkKind::HTree => Some(self.path_metrics()?.report()),
            NetworkKind::Mesh => None,
        };
        Ok(Snapshot {
            kind: self.kind(),
            layout: self.layout()?.clone(),
            statistics: topology.statistics().clone(),
            path_metrics,
            lines: topology.lines().to_vec(),
            junctions: topology.junctions().to_vec(),
            nodes: topology.nodes().to_vec(),
        })
    }

    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.snapshot()?.write_json(path)
    }

    fn require_mesh(&self, operation: &'static str) -> Result<()> {
        match self.kind() {
            NetworkKind::Mesh => Ok(()),
            kind => {
                warn!(operation, kind = %kind, "unsupported query");
                Err(NocError::UnsupportedOperation {
                    operation,
                    kind: kind.as_str(),
                })
            }
        }
    }

    fn node(&self, index: usize) -> Result<&MemoryElement> {
        let nodes = self.nodes()?;
        nodes.get(index).ok_or_else(|| {
            warn!(index, len = nodes.len(), "node index out of range");
            NocError::IndexOutOfRange {
                index,
                len: nodes.len(),
            }
        })
    }
}
