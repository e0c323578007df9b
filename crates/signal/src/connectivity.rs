//! Logical-to-physical side mapping
//!
//! A family defines its connection points once, as logical sides of the
//! unrotated block. A placed variant may be rotated, so signal propagation
//! needs the physical faces those logical sides actually occupy, and the
//! reverse. Rotation is a bijection on sides, so both directions preserve
//! set cardinality and invert each other exactly.

use crate::family::{orientation_of, BlockFamily, BlockId, Orientation};
use orient::{Rotation, Side, SideSet};

/// Rotation applied to a placed block's logical sides
///
/// Identity unless the block belongs to a rotation-defined family and is a
/// member of it. Total: unknown blocks simply connect unrotated.
pub fn block_rotation(family: &dyn BlockFamily, block: BlockId) -> Rotation {
    orientation_of(family, block)
        .map(Orientation::rotation)
        .unwrap_or(Rotation::IDENTITY)
}

/// Physical side occupied by a logical side of the placed block
pub fn result_side(family: &dyn BlockFamily, block: BlockId, logical: Side) -> Side {
    block_rotation(family, block).rotate(logical)
}

/// Physical sides occupied by a logical connection mask
pub fn result_connections(
    family: &dyn BlockFamily,
    block: BlockId,
    logical: SideSet,
) -> SideSet {
    let rotation = block_rotation(family, block);
    logical.iter().map(|side| rotation.rotate(side)).collect()
}

/// Logical sides behind a physical connection mask
///
/// Exact inverse of [`result_connections`] for the same block.
pub fn source_connections(
    family: &dyn BlockFamily,
    block: BlockId,
    physical: SideSet,
) -> SideSet {
    let reverse = block_rotation(family, block).reversed();
    physical.iter().map(|side| reverse.rotate(side)).collect()
}
