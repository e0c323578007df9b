//! Screwdriver activation path
//!
//! Entry point wired to the external activation event: the player clicks a
//! block with the rotate tool, the event supplies the target position and
//! the normal of the clicked face. Every failure mode is a silent no-op so
//! an inconsistent family never breaks gameplay.

use crate::{next_orientation, BlockId, Result, RotateError, Side, WorldMutator};
use glam::{IVec3, Vec3};

fn resolve(world: &dyn WorldMutator, position: IVec3, hit_normal: Vec3) -> Result<BlockId> {
    let clicked = Side::from_normal(hit_normal).ok_or(RotateError::AmbiguousNormal)?;
    let block = world.block_at(position);
    next_orientation(world.family_of(block), block, clicked)
}

/// Rotate the block at `position`, clicked on the face with `hit_normal`
///
/// Resolves the next variant for the block's family and replaces the block
/// in place. Returns whether the world was mutated.
pub fn rotate_block_at(
    world: &mut dyn WorldMutator,
    position: IVec3,
    hit_normal: Vec3,
) -> bool {
    match resolve(world, position, hit_normal) {
        Ok(next) => {
            tracing::debug!(?position, to = next.0, "rotating block");
            world.set_block(position, next);
            true
        }
        Err(RotateError::NotOrientable) => false,
        Err(err) => {
            tracing::debug!(?position, %err, "rotate resolved to no-op");
            false
        }
    }
}
