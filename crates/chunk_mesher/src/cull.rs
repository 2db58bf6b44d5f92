//! Face visibility between two adjacent blocks.
//!
//! A face is emitted on a block's side when:
//! 1. the block is empty but not air and the neighbour is air (liquid surfaces),
//! 2. the block is solid and the neighbour is empty (ordinary exposed faces), or
//! 3. the block is liquid and the neighbour is air.
//!
//! Clause 3 is implied by clause 1 while water is the only liquid and is
//! always empty. It stays so the rule holds if liquids ever stop being empty.

use glam::IVec3;

use crate::chunk::EnclosedChunk;
use crate::classify::Classifier;
use crate::core::BlockId;

/// Whether a face must be drawn between `block` and `neighbour`.
#[inline]
pub fn is_boundary(classifier: &Classifier, block: BlockId, neighbour: BlockId) -> bool {
    let this = classifier.classify(block);
    let other = classifier.classify(neighbour);

    (this.is_empty && !this.is_air && other.is_air)
        || (!this.is_empty && other.is_empty)
        || (this.is_liquid && other.is_air)
}

/// [`is_boundary`] against the block found at `neighbour_pos` in `chunk`.
#[inline]
pub fn is_boundary_at(
    chunk: &EnclosedChunk,
    classifier: &Classifier,
    neighbour_pos: IVec3,
    block: BlockId,
) -> bool {
    let neighbour = chunk.get(neighbour_pos.x, neighbour_pos.y, neighbour_pos.z);
    is_boundary(classifier, block, neighbour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::RawChunk;
    use crate::classify::CLASSIC_MESH_EXCEPTIONS;
    use crate::core::{AIR, STONE, WATER};

    #[test]
    fn formula_holds_for_every_pair() {
        let classifier = Classifier::new()
            .with_mesh_exceptions(CLASSIC_MESH_EXCEPTIONS.iter().copied())
            .with_always_solid(STONE);

        for a in 0..=255u8 {
            let ca = classifier.classify(a);
            for b in 0..=255u8 {
                let cb = classifier.classify(b);
                let expected = (ca.is_empty && !ca.is_air && cb.is_air)
                    || (!ca.is_empty && cb.is_empty)
                    || (ca.is_liquid && cb.is_air);
                assert_eq!(is_boundary(&classifier, a, b), expected, "pair ({a}, {b})");
            }
        }
    }

    #[test]
    fn solid_against_air_is_boundary() {
        let classifier = Classifier::new();
        assert!(is_boundary(&classifier, STONE, AIR));
        assert!(!is_boundary(&classifier, AIR, STONE));
    }

    #[test]
    fn solid_against_solid_is_hidden() {
        let classifier = Classifier::new();
        assert!(!is_boundary(&classifier, STONE, 3));
    }

    #[test]
    fn water_surface_faces_air_only() {
        let classifier = Classifier::new();
        assert!(is_boundary(&classifier, WATER, AIR));
        assert!(!is_boundary(&classifier, WATER, WATER));
        assert!(!is_boundary(&classifier, WATER, STONE));
        // Solid under water still shows.
        assert!(is_boundary(&classifier, STONE, WATER));
    }

    #[test]
    fn air_never_emits() {
        let classifier = Classifier::new().with_mesh_exceptions([50]);
        for b in 0..=255u8 {
            assert!(!is_boundary(&classifier, AIR, b));
        }
    }

    #[test]
    fn mesh_exception_exposes_neighbours() {
        let classifier = Classifier::new().with_mesh_exceptions([50]);
        assert!(is_boundary(&classifier, STONE, 50));
        // A torch next to air is empty-not-air, so clause 1 fires.
        assert!(is_boundary(&classifier, 50, AIR));
    }

    #[test]
    fn lookup_reads_halo_and_out_of_range_as_air() {
        let mut raw = RawChunk::new();
        raw.set(0, 0, 0, STONE);
        let chunk = EnclosedChunk::from_raw(&raw);
        let classifier = Classifier::new();

        assert!(is_boundary_at(&chunk, &classifier, IVec3::new(-1, 0, 0), STONE));
        assert!(is_boundary_at(&chunk, &classifier, IVec3::new(0, -1, 0), STONE));
        assert!(!is_boundary_at(&chunk, &classifier, IVec3::new(0, 0, 0), STONE));
    }
}
