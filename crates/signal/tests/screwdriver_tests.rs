//! End-to-end tests of the rotate tool against an in-memory world.

use glam::{IVec3, Vec3};
use signal::{
    next_orientation, rotate_block_at, BlockFamily, BlockId, FamilyKind, Rotation,
    RotateError, RotationDefinedFamily, Side, SideDefinedFamily, WorldContext,
    WorldMutator,
};
use std::collections::HashMap;

/// Side-defined family backed by an explicit variant list.
struct GateFamily {
    sides: Vec<Side>,
}

impl GateFamily {
    fn new(sides: &[Side]) -> Self {
        GateFamily {
            sides: sides.to_vec(),
        }
    }

    fn block(&self, side: Side) -> BlockId {
        BlockId(side.index() as u32)
    }
}

impl SideDefinedFamily for GateFamily {
    fn side_of(&self, block: BlockId) -> Option<Side> {
        Side::from_index(block.0 as usize).filter(|s| self.sides.contains(s))
    }

    fn block_for_side(&self, side: Side) -> Option<BlockId> {
        self.sides.contains(&side).then(|| self.block(side))
    }
}

impl BlockFamily for GateFamily {
    fn kind(&self) -> Option<FamilyKind<'_>> {
        Some(FamilyKind::SideDefined(self))
    }
}

/// Rotation-defined family with one variant per rotation.
struct RotorFamily;

impl RotorFamily {
    fn block(rotation: Rotation) -> BlockId {
        BlockId(100 + rotation.index() as u32)
    }
}

impl RotationDefinedFamily for RotorFamily {
    fn rotation_of(&self, block: BlockId) -> Option<Rotation> {
        block
            .0
            .checked_sub(100)
            .and_then(|i| Rotation::ALL.get(i as usize).copied())
    }

    fn block_for_rotation(&self, rotation: Rotation) -> Option<BlockId> {
        Some(Self::block(rotation))
    }
}

impl BlockFamily for RotorFamily {
    fn kind(&self) -> Option<FamilyKind<'_>> {
        Some(FamilyKind::RotationDefined(self))
    }
}

/// Rotation-defined family that registered no variants at all.
struct EmptyRotorFamily;

impl RotationDefinedFamily for EmptyRotorFamily {
    fn rotation_of(&self, _block: BlockId) -> Option<Rotation> {
        Some(Rotation::IDENTITY)
    }

    fn block_for_rotation(&self, _rotation: Rotation) -> Option<BlockId> {
        None
    }
}

impl BlockFamily for EmptyRotorFamily {
    fn kind(&self) -> Option<FamilyKind<'_>> {
        Some(FamilyKind::RotationDefined(self))
    }
}

/// Family with fixed orientation (a plain stone block).
struct StoneFamily;

impl BlockFamily for StoneFamily {
    fn kind(&self) -> Option<FamilyKind<'_>> {
        None
    }
}

/// Minimal single-writer world: blocks by position, one family for all.
struct TestWorld<'a> {
    family: &'a dyn BlockFamily,
    blocks: HashMap<IVec3, BlockId>,
}

impl<'a> TestWorld<'a> {
    fn new(family: &'a dyn BlockFamily) -> Self {
        TestWorld {
            family,
            blocks: HashMap::new(),
        }
    }

    fn place(mut self, position: IVec3, block: BlockId) -> Self {
        self.blocks.insert(position, block);
        self
    }
}

impl WorldContext for TestWorld<'_> {
    fn block_at(&self, position: IVec3) -> BlockId {
        self.blocks.get(&position).copied().unwrap_or(BlockId(u32::MAX))
    }

    fn family_of(&self, _block: BlockId) -> &dyn BlockFamily {
        self.family
    }
}

impl WorldMutator for TestWorld<'_> {
    fn set_block(&mut self, position: IVec3, block: BlockId) {
        self.blocks.insert(position, block);
    }
}

const POS: IVec3 = IVec3::new(1, 2, 3);

#[test]
fn gate_cycles_to_immediate_successor() {
    let family = GateFamily::new(&[Side::Front, Side::Left, Side::Top]);
    let mut world = TestWorld::new(&family).place(POS, family.block(Side::Front));

    assert!(rotate_block_at(&mut world, POS, Vec3::Z));
    assert_eq!(world.block_at(POS), family.block(Side::Left));
}

#[test]
fn gate_cycle_skips_missing_variants() {
    let family = GateFamily::new(&[Side::Front, Side::Left, Side::Top]);
    let mut world = TestWorld::new(&family).place(POS, family.block(Side::Left));

    // Back and Right have no variants; Top is the next stop.
    assert!(rotate_block_at(&mut world, POS, Vec3::Z));
    assert_eq!(world.block_at(POS), family.block(Side::Top));
}

#[test]
fn gate_cycle_visits_only_existing_variants_and_returns() {
    let family = GateFamily::new(&[Side::Front, Side::Left, Side::Top]);
    let mut world = TestWorld::new(&family).place(POS, family.block(Side::Front));

    let mut visited = Vec::new();
    for _ in 0..3 {
        assert!(rotate_block_at(&mut world, POS, Vec3::Y));
        visited.push(world.block_at(POS));
    }

    assert_eq!(
        visited,
        vec![
            family.block(Side::Left),
            family.block(Side::Top),
            family.block(Side::Front),
        ]
    );
}

#[test]
fn rotor_clicked_on_top_turns_front_to_right() {
    let mut world = TestWorld::new(&RotorFamily)
        .place(POS, RotorFamily::block(Rotation::IDENTITY));

    assert!(rotate_block_at(&mut world, POS, Vec3::Y));

    let rotation = RotorFamily.rotation_of(world.block_at(POS)).unwrap();
    assert_eq!(rotation.rotate(Side::Top), Side::Top);
    assert_eq!(rotation.rotate(Side::Front), Side::Right);
}

#[test]
fn rotor_four_clicks_restore_original_block() {
    for start in [Rotation::IDENTITY, Rotation::ALL[13], Rotation::ALL[21]] {
        for normal in [Vec3::Y, Vec3::NEG_Y, Vec3::X, Vec3::NEG_Z] {
            let mut world =
                TestWorld::new(&RotorFamily).place(POS, RotorFamily::block(start));

            for _ in 0..4 {
                assert!(rotate_block_at(&mut world, POS, normal));
            }
            assert_eq!(world.block_at(POS), RotorFamily::block(start));
        }
    }
}

#[test]
fn rotor_without_variants_is_a_no_op() {
    let mut world = TestWorld::new(&EmptyRotorFamily).place(POS, BlockId(0));

    assert!(!rotate_block_at(&mut world, POS, Vec3::Y));
    assert_eq!(world.block_at(POS), BlockId(0));
}

#[test]
fn fixed_family_is_a_no_op() {
    let mut world = TestWorld::new(&StoneFamily).place(POS, BlockId(7));

    assert!(!rotate_block_at(&mut world, POS, Vec3::Y));
    assert_eq!(world.block_at(POS), BlockId(7));
}

#[test]
fn ambiguous_hit_normal_is_a_no_op() {
    let family = GateFamily::new(&[Side::Front, Side::Left]);
    let mut world = TestWorld::new(&family).place(POS, family.block(Side::Front));

    assert!(!rotate_block_at(&mut world, POS, Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(world.block_at(POS), family.block(Side::Front));
}

#[test]
fn next_orientation_reports_reasons() {
    let gate = GateFamily::new(&[Side::Front]);
    let stranger = BlockId(9999);

    assert_eq!(
        next_orientation(&StoneFamily, BlockId(0), Side::Top),
        Err(RotateError::NotOrientable)
    );
    assert_eq!(
        next_orientation(&gate, stranger, Side::Top),
        Err(RotateError::MissingOrientation)
    );
    assert_eq!(
        next_orientation(&EmptyRotorFamily, BlockId(0), Side::Top),
        Err(RotateError::NoVariant)
    );
}
