//! Block family contracts
//!
//! Families own the set of block variants and how those variants encode
//! orientation. Registration and storage are external; this module only
//! defines the narrow lookup contracts the resolvers need.

use orient::{Rotation, Side};
use serde::{Deserialize, Serialize};

/// Opaque handle to a registered block variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// Orientation carried by a placed block
///
/// Fixed per instance; changing orientation means replacing the block with
/// a sibling variant from the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// The block faces exactly one side (one variant per face)
    Face(Side),
    /// The block carries a full cube rotation (one variant per rotation)
    Full(Rotation),
}

impl Orientation {
    /// Rotation to apply when mapping the family's logical sides into the
    /// world. Face-oriented variants keep their connection mask unrotated.
    pub fn rotation(self) -> Rotation {
        match self {
            Orientation::Face(_) => Rotation::IDENTITY,
            Orientation::Full(rotation) => rotation,
        }
    }
}

/// Family whose variants each face a single side
pub trait SideDefinedFamily {
    /// The side a member variant faces, `None` if the block is not a member
    fn side_of(&self, block: BlockId) -> Option<Side>;

    /// The variant facing the given side, if one is registered
    fn block_for_side(&self, side: Side) -> Option<BlockId>;
}

/// Family whose variants each carry a full cube rotation
pub trait RotationDefinedFamily {
    /// The rotation of a member variant, `None` if the block is not a member
    fn rotation_of(&self, block: BlockId) -> Option<Rotation>;

    /// The variant for the given rotation, if one is registered
    fn block_for_rotation(&self, rotation: Rotation) -> Option<BlockId>;
}

/// How a family encodes orientation, resolved once per family
///
/// Dispatch happens on this sum type rather than by inspecting the family's
/// concrete type at every call site.
pub enum FamilyKind<'a> {
    SideDefined(&'a dyn SideDefinedFamily),
    RotationDefined(&'a dyn RotationDefinedFamily),
}

/// A block family as seen by the resolvers
pub trait BlockFamily {
    /// The family's orientation scheme; `None` for families whose variants
    /// have a fixed orientation (they are not cyclable and connect with
    /// identity rotation)
    fn kind(&self) -> Option<FamilyKind<'_>>;
}

/// Orientation of a placed block, `None` if its family has no scheme or
/// the block is not one of the family's variants
pub fn orientation_of(family: &dyn BlockFamily, block: BlockId) -> Option<Orientation> {
    match family.kind()? {
        FamilyKind::SideDefined(f) => f.side_of(block).map(Orientation::Face),
        FamilyKind::RotationDefined(f) => f.rotation_of(block).map(Orientation::Full),
    }
}
