// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Network variants behind the [`Noc`](super::Noc) facade.

use crate::blueprint::Blueprint;
use crate::error::{NocError, Result};
use crate::geometry::Point3;
use crate::htree::{HTreeBuilder, HTreeConfig, PathMetrics};
use crate::mesh::{MeshBuilder, MeshConfig, MeshDimensions};
use crate::topology::Topology;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    HTree,
    Mesh,
}

impl NetworkKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Input of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "layout", rename_all = "lowercase")]
pub enum LayoutSpec {
    HTree(Blueprint),
    Mesh(MeshDimensions),
}

impl LayoutSpec {
    pub fn kind(&self) -> NetworkKind {
        match self {
            LayoutSpec::HTree(_) => NetworkKind::HTree,
            LayoutSpec::Mesh(_) => NetworkKind::Mesh,
        }
    }
}

impl fmt::Display for LayoutSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSpec::HTree(blueprint) => write!(f, "htree {}", blueprint),
            LayoutSpec::Mesh(dimensions) => write!(f, "mesh {}", dimensions),
        }
    }
}

/// One generated layout and the builder that produced it.
pub trait Network: fmt::Debug + Send + Sync {
    fn kind(&self) -> NetworkKind;

    /// Replace the current topology with a fresh build of `layout`.
    ///
    /// On error the previous topology is kept.
    fn generate(&mut self, layout: &LayoutSpec) -> Result<()>;

    /// `None` until the first successful `generate`.
    fn topology(&self) -> Option<&Topology>;

    fn layout(&self) -> Option<&LayoutSpec>;

    fn path_metrics(&self) -> Result<PathMetrics> {
        Err(NocError::UnsupportedOperation {
            operation: "path_metrics",
            kind: self.kind().as_str(),
        })
    }
}

fn wrong_layout(kind: NetworkKind) -> NocError {
    NocError::UnsupportedOperation {
        operation: "generate from this layout",
        kind: kind.as_str(),
    }
}

#[derive(Debug)]
struct Generated {
    layout: LayoutSpec,
    topology: Topology,
}

/// H-tree rooted at the origin, sized so leaf arms are `leaf_size` long.
#[derive(Debug, Default)]
pub struct HTreeNetwork {
    builder: HTreeBuilder,
    generated: Option<(Generated, PathMetrics)>,
}

impl HTreeNetwork {
    pub fn new(config: HTreeConfig) -> Self {
        Self {
            builder: HTreeBuilder::new(config),
            generated: None,
        }
    }

    fn build(&self, blueprint: &Blueprint) -> (Topology, PathMetrics) {
        let size = self.builder.config().root_size_for(blueprint);
        (
            self.builder.build(Point3::ORIGIN, size, blueprint),
            self.builder.path_metrics(size, blueprint),
        )
    }
}

impl Network for HTreeNetwork {
    fn kind(&self) -> NetworkKind {
        NetworkKind::HTree
    }

    fn generate(&mut self, layout: &LayoutSpec) -> Result<()> {
        let LayoutSpec::HTree(blueprint) = layout else {
            return Err(wrong_layout(self.kind()));
        };
        let (topology, metrics) = self.build(blueprint);
        self.generated = Some((
            Generated {
                layout: layout.clone(),
                topology,
            },
            metrics,
        ));
        Ok(())
    }

    fn topology(&self) -> Option<&Topology> {
        self.generated.as_ref().map(|(g, _)| &g.topology)
    }

    fn layout(&self) -> Option<&LayoutSpec> {
        self.generated.as_ref().map(|(g, _)| &g.layout)
    }

    fn path_metrics(&self) -> Result<PathMetrics> {
        self.generated
            .as_ref()
            .map(|(_, metrics)| *metrics)
            .ok_or(NocError::EmptyTopology)
    }
}

#[derive(Debug, Default)]
pub struct MeshNetwork {
    builder: MeshBuilder,
    generated: Option<Generated>,
}

impl MeshNetwork {
    pub fn new(config: MeshConfig) -> Self {
        Self {
            builder: MeshBuilder::new(config),
            generated: None,
        }
    }
}

impl Network for MeshNetwork {
    fn kind(&self) -> NetworkKind {
        NetworkKind::Mesh
    }

    fn generate(&mut self, layout: &LayoutSpec) -> Result<()> {
        let LayoutSpec::Mesh(dimensions) = layout else {
            return Err(wrong_layout(self.kind()));
        };
        let topology = self.builder.build(*dimensions)?;
        self.generated = Some(Generated {
            layout: layout.clone(),
            topology,
        });
        Ok(())
    }

    fn topology(&self) -> Option<&Topology> {
        self.generated.as_ref().map(|g| &g.topology)
    }

    fn layout(&self) -> Option<&LayoutSpec> {
        self.generated.as_ref().map(|g| &g.layout)
    }
}
