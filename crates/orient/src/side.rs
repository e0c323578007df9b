use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the six faces of a cube-shaped block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Top = 0,    // +Y
    Bottom = 1, // -Y
    Left = 2,   // -X
    Right = 3,  // +X
    Front = 4,  // +Z
    Back = 5,   // -Z
}

impl Side {
    /// All six sides in index order
    pub const ALL: [Side; 6] = [
        Side::Top,
        Side::Bottom,
        Side::Left,
        Side::Right,
        Side::Front,
        Side::Back,
    ];

    /// Get the opposite side
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }

    /// Index in `0..6`, matching the discriminant
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side for an index in `0..6`
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Get the outward normal vector for this side
    #[inline]
    pub fn normal(self) -> Vec3 {
        const TABLE: [Vec3; 6] = [
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::NEG_X,
            Vec3::X,
            Vec3::Z,
            Vec3::NEG_Z,
        ];
        TABLE[self.index()]
    }

    /// Unit offset toward the neighbor across this side
    #[inline]
    pub fn to_ivec3(self) -> IVec3 {
        const TABLE: [IVec3; 6] = [
            IVec3::Y,
            IVec3::NEG_Y,
            IVec3::NEG_X,
            IVec3::X,
            IVec3::Z,
            IVec3::NEG_Z,
        ];
        TABLE[self.index()]
    }

    /// Try to create from a vector (must be close to axis-aligned)
    ///
    /// Picks the dominant component; returns `None` for ties or the zero
    /// vector, where no single side is meant.
    pub fn from_normal(v: Vec3) -> Option<Self> {
        let abs = v.abs();
        if abs.x > abs.y && abs.x > abs.z {
            return Some(if v.x > 0.0 { Side::Right } else { Side::Left });
        }
        if abs.y > abs.x && abs.y > abs.z {
            return Some(if v.y > 0.0 { Side::Top } else { Side::Bottom });
        }
        if abs.z > abs.x && abs.z > abs.y {
            return Some(if v.z > 0.0 { Side::Front } else { Side::Back });
        }
        None
    }

    /// Position of the neighbor across this side
    #[inline]
    pub fn step(self, pos: IVec3) -> IVec3 {
        pos + self.to_ivec3()
    }

    /// Iterator over all sides
    #[inline]
    pub fn iter() -> impl Iterator<Item = Side> {
        Self::ALL.iter().copied()
    }
}
