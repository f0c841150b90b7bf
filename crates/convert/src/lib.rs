//! Conversion between XYZ (Cartesian) triples and IVM (quadray) quadruples.
//!
//! These functions are the single implementation of the conversion math. The
//! vector types in `ivm_vectors` call straight into them, so the object path and
//! the raw-tuple path produce bit-identical results.

use ivm_core::constants::ROOT2;

/// Plain Cartesian coordinates `(x, y, z)`.
pub type Xyz = [f64; 3];

/// Plain quadray coordinates `(a, b, c, d)`.
pub type Ivm = [f64; 4];

/// Convert XYZ coordinates to canonical quadray coordinates.
///
/// Each quadray axis collects the positive parts of the Cartesian components
/// that point into its octants:
/// - A: `+x +y +z`
/// - B: `-x -y +z`
/// - C: `-x +y -z`
/// - D: `+x -y -z`
pub fn xyz_to_ivm(x: f64, y: f64, z: f64) -> Ivm {
    let k = 2.0 / ROOT2;
    let (px, nx) = split_sign(x);
    let (py, ny) = split_sign(y);
    let (pz, nz) = split_sign(z);
    normalize([
        k * (px + py + pz),
        k * (nx + ny + pz),
        k * (nx + py + nz),
        k * (px + ny + nz),
    ])
}

/// Convert quadray coordinates back to XYZ.
///
/// Inputs need not be canonical: adding the same amount to all four
/// components cancels in every output.
pub fn ivm_to_xyz(a: f64, b: f64, c: f64, d: f64) -> Xyz {
    let k = 0.5 / ROOT2;
    [
        k * (a - b - c + d),
        k * (a - b + c - d),
        k * (a + b - c - d),
    ]
}

/// Canonical quadray form: subtract the smallest component so that the minimum is 0.
pub fn normalize(q: Ivm) -> Ivm {
    let min = q.iter().copied().fold(f64::INFINITY, f64::min);
    [q[0] - min, q[1] - min, q[2] - min, q[3] - min]
}

/// Zero-sum quadray form: subtract the mean so that the components sum to 0.
pub fn zero_sum(q: Ivm) -> Ivm {
    let mean = (q[0] + q[1] + q[2] + q[3]) / 4.0;
    [q[0] - mean, q[1] - mean, q[2] - mean, q[3] - mean]
}

/// Split a component into its `(positive, negated-negative)` parts.
#[inline]
fn split_sign(v: f64) -> (f64, f64) {
    if v >= 0.0 { (v, 0.0) } else { (0.0, -v) }
}
