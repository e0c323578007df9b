//! Orient crate - cube orientation algebra
//!
//! This crate provides the finite geometry shared by oriented blocks:
//!
//! - [`Side`] - the six faces of a cube-shaped block
//! - [`Rotation`] - the 24-element group of cube rotations, acting on sides
//! - [`SideSet`] - a bitset over the six sides
//!
//! Everything here is a pure function over immutable, compile-time data.
//! There is no world knowledge and no I/O; block semantics live in the
//! `signal` crate.

mod rotation;
mod side;
mod side_set;

pub use rotation::Rotation;
pub use side::Side;
pub use side_set::SideSet;

// Re-export glam for convenience
pub use glam;
