//! Block classification for meshing.
//!
//! A block is either *empty* (neighbours see through it) or solid. Empty
//! blocks are further split into air-like and liquid-like, which the
//! boundary predicate uses to give liquids a visible surface.

use crate::config::MeshConfig;
use crate::core::{BlockId, AIR, STONE, WATER};

/// Non-cuboid blocks of the classic palette (plants, torches, rails, doors,
/// stairs, slabs, fences, signs and similar).
pub const CLASSIC_MESH_EXCEPTIONS: &[BlockId] = &[
    6, 26, 27, 28, 30, 31, 32, 37, 38, 39, 40, 44, 50, 51, 53, 55, 59, 63, 64, 65, 66, 67, 68,
    69, 70, 71, 72, 75, 76, 77, 78, 81, 83, 85, 90, 92, 93, 94, 96,
];

/// Result of classifying one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_empty: bool,
    pub is_air: bool,
    pub is_liquid: bool,
}

impl Classification {
    const SOLID: Self = Self { is_empty: false, is_air: false, is_liquid: false };
    const AIR: Self = Self { is_empty: true, is_air: true, is_liquid: false };
    const LIQUID: Self = Self { is_empty: true, is_air: false, is_liquid: true };
    const SEE_THROUGH: Self = Self { is_empty: true, is_air: false, is_liquid: false };
}

/// Classifies blocks as empty or solid for meshing.
#[derive(Clone, Debug)]
pub struct Classifier {
    mesh_exceptions: [bool; 256],
    always_solid: Option<BlockId>,
}

impl Classifier {
    /// Classifier with no mesh exceptions and no solid override.
    pub fn new() -> Self {
        Self {
            mesh_exceptions: [false; 256],
            always_solid: None,
        }
    }

    /// Build a classifier from the mesh configuration.
    pub fn from_config(config: &MeshConfig) -> Self {
        let classifier = Self::new().with_mesh_exceptions(config.mesh_exceptions.iter().copied());
        if config.stone_always_solid {
            classifier.with_always_solid(STONE)
        } else {
            classifier
        }
    }

    /// Mark blocks that cannot be drawn as a cube.
    pub fn with_mesh_exceptions(mut self, blocks: impl IntoIterator<Item = BlockId>) -> Self {
        for block in blocks {
            self.mesh_exceptions[block as usize] = true;
        }
        self
    }

    /// Force `block` to classify as solid, ahead of the mesh-exception check.
    pub fn with_always_solid(mut self, block: BlockId) -> Self {
        self.always_solid = Some(block);
        self
    }

    /// Whether `block` was flagged as non-cuboid.
    #[inline]
    pub fn is_mesh_exception(&self, block: BlockId) -> bool {
        self.mesh_exceptions[block as usize]
    }

    /// Classify a block. First matching rule wins:
    /// air, water, the solid override, mesh exceptions, then solid.
    #[inline]
    pub fn classify(&self, block: BlockId) -> Classification {
        match block {
            AIR => Classification::AIR,
            WATER => Classification::LIQUID,
            b if self.always_solid == Some(b) => Classification::SOLID,
            b if self.is_mesh_exception(b) => Classification::SEE_THROUGH,
            _ => Classification::SOLID,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
