//! Planar geometry primitives: variable-length points, axis-aligned bounds with
//! their algebra, composite shapes built from points, and in-place coordinate
//! rounding over every geometry variant.

mod geometry;
mod round;
mod types;

pub use geometry::*;
pub use round::*;
pub use types::*;
