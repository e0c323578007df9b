use crate::Side;
use serde::{Deserialize, Serialize};

/// Side permutation table: `table[side.index()]` is the index of the side
/// the rotation carries it to.
type Perm = [u8; 6];

const IDENT: Perm = [0, 1, 2, 3, 4, 5];

// Quarter-turn generators, side indices per `Side` (Top, Bottom, Left,
// Right, Front, Back). Derived from the right-handed rotation matrices
// about +Y, +X and +Z respectively.
const YAW: Perm = [0, 1, 4, 5, 3, 2];
const PITCH: Perm = [4, 5, 2, 3, 1, 0];
const ROLL: Perm = [2, 3, 1, 0, 4, 5];

/// Apply `first`, then `then`.
const fn compose(first: Perm, then: Perm) -> Perm {
    let mut out = [0u8; 6];
    let mut i = 0;
    while i < 6 {
        out[i] = then[first[i] as usize];
        i += 1;
    }
    out
}

const fn power(perm: Perm, n: usize) -> Perm {
    let mut out = IDENT;
    let mut i = 0;
    while i < n {
        out = compose(out, perm);
        i += 1;
    }
    out
}

/// All 24 cube rotations: one tilt carrying Top to each of the six sides,
/// times the four yaws that leave Top where the tilt put it. The yaw is
/// applied first, so `table[Top]` depends on the tilt alone and all 24
/// entries are distinct.
const TABLES: [Perm; 24] = build_tables();

const fn build_tables() -> [Perm; 24] {
    let tilts: [Perm; 6] = [
        IDENT,
        PITCH,
        power(PITCH, 2),
        power(PITCH, 3),
        ROLL,
        power(ROLL, 3),
    ];
    let mut tables = [IDENT; 24];
    let mut t = 0;
    while t < 6 {
        let mut k = 0;
        while k < 4 {
            tables[t * 4 + k] = compose(power(YAW, k), tilts[t]);
            k += 1;
        }
        t += 1;
    }
    tables
}

/// `INVERSE[i]` is the index of the rotation undoing rotation `i`.
/// Evaluated at compile time; fails the build if the table is not closed
/// under inversion.
const INVERSE: [u8; 24] = build_inverses();

const fn is_identity(perm: Perm) -> bool {
    let mut i = 0;
    while i < 6 {
        if perm[i] != i as u8 {
            return false;
        }
        i += 1;
    }
    true
}

const fn build_inverses() -> [u8; 24] {
    let mut inverse = [0u8; 24];
    let mut i = 0;
    while i < 24 {
        let mut j = 0;
        loop {
            if j == 24 {
                panic!("rotation table is not closed under inversion");
            }
            if is_identity(compose(TABLES[i], TABLES[j])) {
                inverse[i] = j as u8;
                break;
            }
            j += 1;
        }
        i += 1;
    }
    inverse
}

/// One of the 24 orientation-preserving rotations of a cube
///
/// A rotation acts on [`Side`] as a permutation of the six faces. The group
/// structure (composition, inverses) lives entirely in compile-time tables;
/// values are plain indices and every operation is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation(u8);

impl Rotation {
    /// The neutral rotation: every side stays in place
    pub const IDENTITY: Rotation = Rotation(0);

    /// Number of distinct cube rotations
    pub const COUNT: usize = 24;

    /// All rotations, identity first
    pub const ALL: [Rotation; 24] = build_all();

    /// Where this rotation carries the given side
    #[inline]
    pub fn rotate(self, side: Side) -> Side {
        Side::ALL[TABLES[self.0 as usize][side.index()] as usize]
    }

    /// The group inverse: `r.reversed().rotate(r.rotate(s)) == s`
    #[inline]
    pub fn reversed(self) -> Rotation {
        Rotation(INVERSE[self.0 as usize])
    }

    /// Index in `0..24`; stable across runs, identity is 0
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterator over all rotations
    #[inline]
    pub fn iter() -> impl Iterator<Item = Rotation> {
        Self::ALL.iter().copied()
    }
}

const fn build_all() -> [Rotation; 24] {
    let mut all = [Rotation(0); 24];
    let mut i = 0;
    while i < 24 {
        all[i] = Rotation(i as u8);
        i += 1;
    }
    all
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::IDENTITY
    }
}
