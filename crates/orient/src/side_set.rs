use crate::Side;
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A set of cube sides, packed into one bit per side
///
/// Used for connection masks: which faces of a block are connection points.
/// Order-irrelevant, no duplicates. Only the low six bits are meaningful.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SideSet(u8);

const MASK: u8 = 0b0011_1111;

impl SideSet {
    /// The empty set
    pub const EMPTY: SideSet = SideSet(0);

    /// All six sides
    pub const ALL: SideSet = SideSet(MASK);

    /// Create an empty set
    pub const fn new() -> Self {
        SideSet::EMPTY
    }

    /// Raw bit representation (bit = `1 << side.index()`)
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits; the two unused high bits are ignored
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        SideSet(bits & MASK)
    }

    #[inline]
    pub const fn contains(self, side: Side) -> bool {
        self.0 & (1u8 << side.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, side: Side) {
        self.0 |= 1u8 << side.index();
    }

    #[inline]
    pub fn remove(&mut self, side: Side) {
        self.0 &= !(1u8 << side.index());
    }

    /// Copy of this set with the side added
    #[inline]
    pub const fn with(self, side: Side) -> Self {
        SideSet(self.0 | (1u8 << side.index()))
    }

    /// Number of sides in the set
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterator over the sides present, in index order
    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        SideSet::EMPTY.with(side)
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut set = SideSet::EMPTY;
        for side in iter {
            set.insert(side);
        }
        set
    }
}

impl IntoIterator for SideSet {
    type Item = Side;
    type IntoIter = std::vec::IntoIter<Side>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

impl BitOr for SideSet {
    type Output = SideSet;

    fn bitor(self, rhs: SideSet) -> SideSet {
        SideSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SideSet {
    fn bitor_assign(&mut self, rhs: SideSet) {
        self.0 |= rhs.0;
    }
}
