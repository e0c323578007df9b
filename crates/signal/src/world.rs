//! World access contracts
//!
//! The authoritative world is external. These traits mirror the split
//! between read-only queries during resolution and the single-writer
//! mutation that replaces a block variant in place. Callers must re-fetch
//! a block before issuing a second resolve against the same position.

use crate::{BlockFamily, BlockId};
use glam::IVec3;

/// Read access to placed blocks and their families
pub trait WorldContext {
    /// The block currently at a world position
    fn block_at(&self, position: IVec3) -> BlockId;

    /// The family a block variant belongs to
    fn family_of(&self, block: BlockId) -> &dyn BlockFamily;
}

/// Write access for replacing a block variant at its position
pub trait WorldMutator: WorldContext {
    /// Replace the block at a position; assumed to always succeed
    fn set_block(&mut self, position: IVec3, block: BlockId);
}
