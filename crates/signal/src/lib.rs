//! Signal crate - orientation-aware block behavior
//!
//! This crate sits between the pure rotation algebra in `orient` and an
//! external voxel world. It answers two questions for oriented block
//! families:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Connectivity                                            │
//! │  ├── result_side / result_connections - logical side(s)  │
//! │  │   of a family, mapped to the faces they occupy in the │
//! │  │   world under the block's rotation                    │
//! │  └── source_connections - the inverse mapping            │
//! ├──────────────────────────────────────────────────────────┤
//! │  Orientation cycling (screwdriver tool)                  │
//! │  ├── side-defined families - next face in a fixed cycle, │
//! │  │   skipping faces with no registered variant           │
//! │  └── rotation-defined families - the unique rotation for │
//! │      a clockwise quarter-turn around the clicked face    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The world itself is reached only through the [`WorldContext`] and
//! [`WorldMutator`] traits; families through [`BlockFamily`]. All
//! resolution logic is pure and bounded (searches over at most the 24
//! cube rotations).

mod connectivity;
mod error;
mod family;
mod rotate;
mod tool;
mod world;

pub use connectivity::{
    block_rotation, result_connections, result_side, source_connections,
};
pub use error::{Result, RotateError};
pub use family::{
    orientation_of, BlockFamily, BlockId, FamilyKind, Orientation,
    RotationDefinedFamily, SideDefinedFamily,
};
pub use rotate::{cycle_side, next_in_cycle, next_orientation, solve_clockwise};
pub use tool::rotate_block_at;
pub use world::{WorldContext, WorldMutator};

// Re-export the algebra and glam for convenience
pub use orient::{self, glam, Rotation, Side, SideSet};
