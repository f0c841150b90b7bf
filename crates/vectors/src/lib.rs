//! Vector types for the two coordinate systems.
//!
//! [`Vector`] is an ordinary Cartesian triple; [`Qvector`] is a quadray stored in
//! its canonical (minimum component zero) form. Both are immutable `Copy` values:
//! every operation returns a new vector.

pub mod cartesian;
pub mod quadray;

pub use cartesian::{Vector, vector_from_spherical};
pub use ivm_core::GeometryError;
pub use quadray::Qvector;

/// Anything with a Euclidean length; the only capability the edge-length
/// measures need from a vector.
pub trait HasLength {
    fn length(&self) -> f64;
}

/// Operations shared by both vector kinds, backing the free functions below.
pub trait VectorOps: HasLength + Sized {
    fn dot(&self, other: &Self) -> f64;
    fn cross(&self, other: &Self) -> Self;
    /// Angle between the two vectors in degrees, within `[0, 180]`.
    fn angle(&self, other: &Self) -> Result<f64, GeometryError>;
}

/// Dot product of two vectors of the same kind.
pub fn dot<V: VectorOps>(a: &V, b: &V) -> f64 {
    a.dot(b)
}

/// Cross product of two vectors of the same kind.
pub fn cross<V: VectorOps>(a: &V, b: &V) -> V {
    a.cross(b)
}

/// Angle between two vectors in degrees.
pub fn angle<V: VectorOps>(a: &V, b: &V) -> Result<f64, GeometryError> {
    a.angle(b)
}

/// Length of a vector.
pub fn length<V: HasLength>(v: &V) -> f64 {
    v.length()
}
