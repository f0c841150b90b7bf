//! Volumes and areas computed purely from edge lengths.
//!
//! Neither measure needs coordinates: the tetrahedron uses Gerald de Jong's
//! rearrangement of Euler's volume determinant and the triangle uses Heron's
//! formula. IVM measures convert to XYZ by dividing by `S3 = √(9/8)`.

pub mod tetrahedron;
pub mod triangle;

pub use ivm_core::GeometryError;
pub use tetrahedron::{EdgeLengthTetrahedron, make_tet};
pub use triangle::{EdgeLengthTriangle, make_tri};
