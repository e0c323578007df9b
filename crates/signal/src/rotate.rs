//! Orientation cycling and the clockwise quarter-turn solver
//!
//! Two resolvers, one per family scheme:
//!
//! - side-defined families step through a fixed 6-cycle of faces, skipping
//!   faces the family has no variant for;
//! - rotation-defined families get the unique rotation that turns the block
//!   90° clockwise around the clicked face, found by constraint search over
//!   the 24-element rotation group.

use crate::{BlockFamily, BlockId, FamilyKind, RotateError, SideDefinedFamily};
use orient::{Rotation, Side};

/// Successor in the fixed face cycle:
/// Front → Left → Back → Right → Top → Bottom → Front
pub const fn next_in_cycle(side: Side) -> Side {
    match side {
        Side::Front => Side::Left,
        Side::Left => Side::Back,
        Side::Back => Side::Right,
        Side::Right => Side::Top,
        Side::Top => Side::Bottom,
        Side::Bottom => Side::Front,
    }
}

/// Next variant of a side-defined family, cycling from `current`
///
/// Advances along the fixed cycle and returns the first face the family has
/// a variant for. The search is bounded at the six faces of the cycle, so a
/// family with no variants at all yields `None` instead of looping.
/// Wrapping all the way around to `current` is a valid result.
pub fn cycle_side(family: &dyn SideDefinedFamily, current: Side) -> Option<BlockId> {
    let mut candidate = current;
    for _ in 0..6 {
        candidate = next_in_cycle(candidate);
        if let Some(block) = family.block_for_side(candidate) {
            return Some(block);
        }
    }
    None
}

/// Effect of a canonical clockwise quarter-turn around one axis side, in
/// the unrotated reference frame: the reference side `moves` ends up on
/// the reference side `to`.
struct QuarterTurn {
    moves: Side,
    to: Side,
}

const fn quarter_turn(axis: Side) -> QuarterTurn {
    match axis {
        Side::Top => QuarterTurn {
            moves: Side::Front,
            to: Side::Right,
        },
        Side::Bottom => QuarterTurn {
            moves: Side::Back,
            to: Side::Right,
        },
        Side::Right => QuarterTurn {
            moves: Side::Top,
            to: Side::Front,
        },
        Side::Left => QuarterTurn {
            moves: Side::Bottom,
            to: Side::Front,
        },
        Side::Front => QuarterTurn {
            moves: Side::Right,
            to: Side::Top,
        },
        Side::Back => QuarterTurn {
            moves: Side::Left,
            to: Side::Top,
        },
    }
}

/// Reference side that `rotation` carries onto `physical`
///
/// Exhaustive search; always succeeds because a rotation permutes the six
/// sides, but stays an `Option` so callers never need to panic.
fn pre_image(rotation: Rotation, physical: Side) -> Option<Side> {
    Side::iter().find(|&side| rotation.rotate(side) == physical)
}

/// Rotation for "turn the block 90° clockwise around `axis`"
///
/// Recovers the reference-frame identities of the clicked axis side and of
/// the quarter-turn's moving side under `current`, then searches the group
/// for the unique rotation that keeps the axis in place and carries the
/// moving side to its clockwise target. `None` if no rotation satisfies
/// both constraints.
pub fn solve_clockwise(current: Rotation, axis: Side) -> Option<Rotation> {
    let turn = quarter_turn(axis);
    let original_axis = pre_image(current, axis)?;
    let original_moved = pre_image(current, turn.moves)?;

    Rotation::iter().find(|rotation| {
        rotation.rotate(original_axis) == axis && rotation.rotate(original_moved) == turn.to
    })
}

/// Next variant after one use of the rotate tool on `block`
///
/// Dispatches on the family's orientation scheme: side-defined families
/// cycle to the next available face (the clicked side is irrelevant),
/// rotation-defined families turn clockwise around the clicked side.
pub fn next_orientation(
    family: &dyn BlockFamily,
    block: BlockId,
    clicked: Side,
) -> crate::Result<BlockId> {
    match family.kind() {
        None => Err(RotateError::NotOrientable),
        Some(FamilyKind::SideDefined(f)) => {
            let current = f.side_of(block).ok_or(RotateError::MissingOrientation)?;
            cycle_side(f, current).ok_or(RotateError::NoVariant)
        }
        Some(FamilyKind::RotationDefined(f)) => {
            let current = f
                .rotation_of(block)
                .ok_or(RotateError::MissingOrientation)?;
            let next = solve_clockwise(current, clicked).ok_or(RotateError::Unsolvable)?;
            f.block_for_rotation(next).ok_or(RotateError::NoVariant)
        }
    }
}
