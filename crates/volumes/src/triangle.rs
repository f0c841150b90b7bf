//! Triangle area from its three edge lengths (Heron's formula).

use std::ops::Sub;

use ivm_core::GeometryError;
use ivm_core::constants::S3;
use ivm_core::numeric::checked_sqrt;
use ivm_vectors::HasLength;

/// A triangle known only by its edge lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengthTriangle {
    a: f64,
    b: f64,
    c: f64,
}

impl EdgeLengthTriangle {
    /// Build from three edge lengths; the triangle inequality is checked lazily.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Triangle with sides `v0` and `v1` from a common origin; the third edge is `|v1 - v0|`.
    pub fn from_vectors<V>(v0: V, v1: V) -> Self
    where
        V: HasLength + Sub<Output = V> + Copy,
    {
        Self::new(v0.length(), v1.length(), (v1 - v0).length())
    }

    pub fn edges(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn ivm_area(&self) -> Result<f64, GeometryError> {
        let s = (self.a + self.b + self.c) / 2.0;
        let radicand = s * (s - self.a) * (s - self.b) * (s - self.c);
        checked_sqrt(radicand).inspect_err(|_| {
            tracing::debug!(edges = ?self.edges(), radicand, "edges violate the triangle inequality");
        })
    }

    pub fn xyz_area(&self) -> Result<f64, GeometryError> {
        Ok(self.ivm_area()? / S3)
    }
}

/// Areas `(ivm, xyz)` of the triangle with sides `v0` and `v1` from a common origin.
pub fn make_tri<V>(v0: V, v1: V) -> Result<(f64, f64), GeometryError>
where
    V: HasLength + Sub<Output = V> + Copy,
{
    let tri = EdgeLengthTriangle::from_vectors(v0, v1);
    Ok((tri.ivm_area()?, tri.xyz_area()?))
}
