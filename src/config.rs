// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry configuration file.
//!
//! ```json
//! {
//!   "htree": { "layer_height": 5.0, "scaling": { "rule": "uniform", "ratio": 0.7 } },
//!   "mesh": { "element_size": 10.0, "gutter": 2.0 }
//! }
//! ```
//!
//! Every field is optional; missing fields take the built-in defaults.

use crate::error::Result;
use crate::htree::HTreeConfig;
use crate::mesh::MeshConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NocConfig {
    pub htree: HTreeConfig,
    pub mesh: MeshConfig,
}

impl NocConfig {
    /// Read and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: NocConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.htree.validate()?;
        self.mesh.validate()
    }
}
