//! Mesher configuration (TOML).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::CLASSIC_MESH_EXCEPTIONS;
use crate::core::BlockId;
use crate::error::Result;

/// Options controlling how chunks are meshed and written.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Merge vertical runs of same-material wall faces.
    pub greedy: bool,
    /// Treat stone as solid even if it is listed as a mesh exception.
    pub stone_always_solid: bool,
    /// Cache chunk edges so later neighbours get a real halo.
    pub cache_sides: bool,
    /// Blocks below this height are skipped.
    pub y_min: usize,
    /// Blocks that cannot be drawn as cubes; they are meshed as empty.
    pub mesh_exceptions: Vec<BlockId>,
    /// Prefix of material names in `usemtl` records.
    pub material_prefix: String,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            greedy: true,
            stone_always_solid: false,
            cache_sides: false,
            y_min: 0,
            mesh_exceptions: CLASSIC_MESH_EXCEPTIONS.to_vec(),
            material_prefix: "block_".to_string(),
        }
    }
}

impl MeshConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
