//! Quadray (IVM) vectors.
//!
//! A quadray is a point of ℝ⁴ modulo the direction `(1, 1, 1, 1)`: adding the
//! same amount to all four components does not move it. The stored form is the
//! canonical representative whose smallest component is exactly zero, which
//! makes equality, ordering, and hashing plain componentwise operations.
//! Comparison folds `-0.0` into `0.0` and every NaN into one value, so a
//! quadray always equals itself and `Eq`, `Ord` and `Hash` agree.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use ivm_convert::{Ivm, ivm_to_xyz, normalize, zero_sum};
use ivm_core::GeometryError;
use ivm_core::constants::ROOT2;

use crate::cartesian::Vector;
use crate::{HasLength, VectorOps};

/// A vector in the IVM coordinate system, stored in canonical form.
#[derive(Debug, Clone, Copy)]
pub struct Qvector {
    coords: Ivm,
}

impl Qvector {
    /// Basis direction A, `(1, 0, 0, 0)`.
    pub const A: Qvector = Qvector { coords: [1.0, 0.0, 0.0, 0.0] };
    /// Basis direction B, `(0, 1, 0, 0)`.
    pub const B: Qvector = Qvector { coords: [0.0, 1.0, 0.0, 0.0] };
    /// Basis direction C, `(0, 0, 1, 0)`.
    pub const C: Qvector = Qvector { coords: [0.0, 0.0, 1.0, 0.0] };
    /// Basis direction D, `(0, 0, 0, 1)`.
    pub const D: Qvector = Qvector { coords: [0.0, 0.0, 0.0, 1.0] };
    pub const ORIGIN: Qvector = Qvector { coords: [0.0; 4] };

    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::from([a, b, c, d])
    }

    pub fn a(&self) -> f64 {
        self.coords[0]
    }

    pub fn b(&self) -> f64 {
        self.coords[1]
    }

    pub fn c(&self) -> f64 {
        self.coords[2]
    }

    pub fn d(&self) -> f64 {
        self.coords[3]
    }

    /// Canonical components; the minimum is always 0.
    pub fn coords(&self) -> Ivm {
        self.coords
    }

    /// Representative whose components sum to zero.
    pub fn zero_sum(&self) -> Ivm {
        zero_sum(self.coords)
    }

    pub fn add(self, other: Qvector) -> Qvector {
        self + other
    }

    pub fn subtract(self, other: Qvector) -> Qvector {
        self - other
    }

    pub fn negate(self) -> Qvector {
        -self
    }

    pub fn scalar_multiply(self, scalar: f64) -> Qvector {
        self * scalar
    }

    pub fn scalar_divide(self, scalar: f64) -> Result<Qvector, GeometryError> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self * (1.0 / scalar))
    }

    /// Half the dot product of the zero-sum representatives.
    pub fn dot(self, other: Qvector) -> f64 {
        let p = self.zero_sum();
        let q = other.zero_sum();
        0.5 * (p[0] * q[0] + p[1] * q[1] + p[2] * q[2] + p[3] * q[3])
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn unit(self) -> Result<Qvector, GeometryError> {
        let length = self.length();
        if length == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self * (1.0 / length))
    }

    /// Quadray cross product.
    ///
    /// A bilinear, antisymmetric combination of the basis quadrays scaled by
    /// `√2/4`. Its Cartesian projection is parallel to the Cartesian cross
    /// product of the operands' projections.
    pub fn cross(self, other: Qvector) -> Qvector {
        let [a1, b1, c1, d1] = other.coords;
        let [a2, b2, c2, d2] = self.coords;

        // 2x2 minors of the operand pair, one per pair of axes.
        let ab = a1 * b2 - a2 * b1;
        let ac = a1 * c2 - a2 * c1;
        let ad = a1 * d2 - a2 * d1;
        let bc = b1 * c2 - b2 * c1;
        let bd = b1 * d2 - b2 * d1;
        let cd = c1 * d2 - c2 * d1;

        let k = ROOT2 / 4.0;
        Qvector::from([
            k * (cd - bd + bc),
            k * (ad - ac - cd),
            k * (bd - ad + ab),
            k * (ac - bc - ab),
        ])
    }

    /// Angle in degrees, measured between the Cartesian projections.
    pub fn angle(self, other: Qvector) -> Result<f64, GeometryError> {
        self.to_cartesian().angle(other.to_cartesian())
    }

    /// Project back to XYZ.
    pub fn to_cartesian(self) -> Vector {
        let [a, b, c, d] = self.coords;
        Vector::from(ivm_to_xyz(a, b, c, d))
    }

    /// Lexicographic ordering on the canonical components; same as `Ord`.
    pub fn lexicographic_cmp(&self, other: &Qvector) -> Ordering {
        self.cmp(other)
    }

    fn key(&self) -> [u64; 4] {
        self.coords.map(|c| fold(c).to_bits())
    }
}

impl From<Ivm> for Qvector {
    fn from(coords: Ivm) -> Self {
        Self {
            coords: normalize(coords),
        }
    }
}

impl fmt::Display for Qvector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.coords;
        write!(f, "ivm_vector(a={a}, b={b}, c={c}, d={d})")
    }
}

fn fold(c: f64) -> f64 {
    if c.is_nan() {
        f64::NAN
    } else if c == 0.0 {
        0.0
    } else {
        c
    }
}

impl PartialEq for Qvector {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Qvector {}

impl Hash for Qvector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Qvector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| fold(*a).total_cmp(&fold(*b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Qvector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Qvector {
    type Output = Qvector;

    fn add(self, rhs: Qvector) -> Qvector {
        let p = self.coords;
        let q = rhs.coords;
        Qvector::from([p[0] + q[0], p[1] + q[1], p[2] + q[2], p[3] + q[3]])
    }
}

impl Sub for Qvector {
    type Output = Qvector;

    fn sub(self, rhs: Qvector) -> Qvector {
        self + (-rhs)
    }
}

impl Neg for Qvector {
    type Output = Qvector;

    fn neg(self) -> Qvector {
        let [a, b, c, d] = self.coords;
        Qvector::from([-a, -b, -c, -d])
    }
}

impl Mul<f64> for Qvector {
    type Output = Qvector;

    fn mul(self, scalar: f64) -> Qvector {
        let [a, b, c, d] = self.coords;
        Qvector::from([scalar * a, scalar * b, scalar * c, scalar * d])
    }
}

impl Mul<Qvector> for f64 {
    type Output = Qvector;

    fn mul(self, q: Qvector) -> Qvector {
        q * self
    }
}

impl HasLength for Qvector {
    fn length(&self) -> f64 {
        Qvector::length(*self)
    }
}

impl VectorOps for Qvector {
    fn dot(&self, other: &Self) -> f64 {
        Qvector::dot(*self, *other)
    }

    fn cross(&self, other: &Self) -> Self {
        Qvector::cross(*self, *other)
    }

    fn angle(&self, other: &Self) -> Result<f64, GeometryError> {
        Qvector::angle(*self, *other)
    }
}
