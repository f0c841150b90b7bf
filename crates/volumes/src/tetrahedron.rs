//! Tetrahedron volume from its six edge lengths.
//!
//! Edges `a`, `b`, `c` meet at one vertex; `d`, `e`, `f` bound the opposite
//! face. The four faces are `(a, b, d)`, `(b, c, e)`, `(c, a, f)` and
//! `(d, e, f)`, so the opposite-edge pairs are `(a, e)`, `(b, f)` and `(c, d)`.
//!
//! Reference: <http://www.grunch.net/synergetics/quadvols.html>

use std::ops::Sub;

use ivm_core::GeometryError;
use ivm_core::constants::S3;
use ivm_core::numeric::checked_sqrt;
use ivm_vectors::HasLength;

/// A tetrahedron known only by its edge lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengthTetrahedron {
    edges: [f64; 6],
    squares: [f64; 6],
}

impl EdgeLengthTetrahedron {
    /// Build from six non-negative edge lengths. Whether they close into a
    /// real tetrahedron is only checked when a volume is requested.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        let edges = [a, b, c, d, e, f];
        Self {
            edges,
            squares: edges.map(|edge| edge * edge),
        }
    }

    /// Tetrahedron spanned by three vectors from a common origin.
    ///
    /// Edges are `|v0|`, `|v1|`, `|v2|`, `|v0 - v1|`, `|v1 - v2|`, `|v2 - v0|`.
    pub fn from_vectors<V>(v0: V, v1: V, v2: V) -> Self
    where
        V: HasLength + Sub<Output = V> + Copy,
    {
        Self::new(
            v0.length(),
            v1.length(),
            v2.length(),
            (v0 - v1).length(),
            (v1 - v2).length(),
            (v2 - v0).length(),
        )
    }

    /// Edge lengths in `(a, b, c, d, e, f)` order.
    pub fn edges(&self) -> [f64; 6] {
        self.edges
    }

    /// Sum of the twelve triple products of squared edges that do not share a face.
    pub fn add_open(&self) -> f64 {
        let [a2, b2, c2, d2, e2, f2] = self.squares;
        f2 * a2 * b2
            + d2 * a2 * c2
            + a2 * b2 * e2
            + c2 * b2 * d2
            + e2 * c2 * a2
            + f2 * c2 * b2
            + e2 * d2 * a2
            + b2 * d2 * f2
            + b2 * e2 * f2
            + d2 * e2 * c2
            + a2 * f2 * e2
            + d2 * f2 * c2
    }

    /// Sum of the triple products of squared edges around each of the four faces.
    pub fn add_closed(&self) -> f64 {
        let [a2, b2, c2, d2, e2, f2] = self.squares;
        a2 * b2 * d2 + d2 * e2 * f2 + b2 * c2 * e2 + a2 * c2 * f2
    }

    /// Sum over opposite-edge pairs of `p² q² (p² + q²)`.
    pub fn add_opposite(&self) -> f64 {
        let [a2, b2, c2, d2, e2, f2] = self.squares;
        a2 * e2 * (a2 + e2) + b2 * f2 * (b2 + f2) + c2 * d2 * (c2 + d2)
    }

    /// The value whose square root is the IVM volume.
    pub fn radicand(&self) -> f64 {
        (self.add_open() - self.add_closed() - self.add_opposite()) / 2.0
    }

    /// Volume in IVM units; the regular tetrahedron of edge 1 has volume 1.
    pub fn ivm_volume(&self) -> Result<f64, GeometryError> {
        let radicand = self.radicand();
        tracing::trace!(edges = ?self.edges, radicand, "tetrahedron radicand");
        checked_sqrt(radicand).inspect_err(|_| {
            tracing::debug!(edges = ?self.edges, radicand, "edges do not close into a tetrahedron");
        })
    }

    /// Volume in XYZ units (cubic edge lengths).
    pub fn xyz_volume(&self) -> Result<f64, GeometryError> {
        Ok(self.ivm_volume()? / S3)
    }
}

/// Volumes `(ivm, xyz)` of the tetrahedron spanned by three vectors from a common origin.
pub fn make_tet<V>(v0: V, v1: V, v2: V) -> Result<(f64, f64), GeometryError>
where
    V: HasLength + Sub<Output = V> + Copy,
{
    let tet = EdgeLengthTetrahedron::from_vectors(v0, v1, v2);
    Ok((tet.ivm_volume()?, tet.xyz_volume()?))
}
