//! Cartesian (XYZ) vectors with rotations and spherical/quadray projections.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use ivm_convert::xyz_to_ivm;
use ivm_core::GeometryError;
use ivm_core::numeric::round_to;

use crate::quadray::Qvector;
use crate::{HasLength, VectorOps};

/// Decimal places kept after each axis rotation.
const ROTATION_PLACES: i32 = 8;
/// Decimal places kept on the cosine before `acos`.
const ANGLE_PLACES: i32 = 10;
/// Decimal places kept on components built from spherical coordinates.
const SPHERICAL_PLACES: i32 = 15;

/// A vector in the XYZ coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn add(self, other: Vector) -> Vector {
        self + other
    }

    pub fn subtract(self, other: Vector) -> Vector {
        self - other
    }

    pub fn negate(self) -> Vector {
        -self
    }

    pub fn scalar_multiply(self, scalar: f64) -> Vector {
        self * scalar
    }

    /// Divide every component by `scalar`.
    pub fn scalar_divide(self, scalar: f64) -> Result<Vector, GeometryError> {
        if scalar == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self * (1.0 / scalar))
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    pub fn unit(self) -> Result<Vector, GeometryError> {
        let length = self.length();
        if length == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self * (1.0 / length))
    }

    /// Angle between `self` and `other` in degrees.
    ///
    /// The cosine is rounded to 10 places before `acos`, so round-off can never
    /// push it outside `[-1, 1]`.
    pub fn angle(self, other: Vector) -> Result<f64, GeometryError> {
        let denominator = self.length() * other.length();
        if denominator == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        let cos_theta = round_to(self.dot(other) / denominator, ANGLE_PLACES).clamp(-1.0, 1.0);
        Ok(round_to(cos_theta.acos().to_degrees(), ANGLE_PLACES))
    }

    /// Right-hand rotation about the X axis.
    pub fn rotate_x(self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        rounded(
            self.x,
            cos * self.y - sin * self.z,
            sin * self.y + cos * self.z,
        )
    }

    /// Right-hand rotation about the Y axis.
    pub fn rotate_y(self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        rounded(
            cos * self.x + sin * self.z,
            self.y,
            -sin * self.x + cos * self.z,
        )
    }

    /// Right-hand rotation about the Z axis.
    pub fn rotate_z(self, degrees: f64) -> Vector {
        let (sin, cos) = degrees.to_radians().sin_cos();
        rounded(
            cos * self.x - sin * self.y,
            sin * self.x + cos * self.y,
            self.z,
        )
    }

    /// Rotate counter-clockwise (right-hand rule) by `degrees` about `axis`.
    ///
    /// The axis is first brought onto +Z using its spherical angles, the
    /// rotation happens about Z, and the alignment is then undone.
    pub fn rotate_around_axis(self, axis: Vector, degrees: f64) -> Result<Vector, GeometryError> {
        let (radius, polar, azimuth) = axis.to_spherical();
        if radius == 0.0 {
            return Err(GeometryError::DegenerateVector);
        }
        let aligned = self.rotate_z(-azimuth).rotate_y(-polar);
        let turned = aligned.rotate_z(degrees);
        Ok(turned.rotate_y(polar).rotate_z(azimuth))
    }

    /// Spherical coordinates `(radius, polar_degrees, azimuth_degrees)`.
    ///
    /// The polar angle is measured from +Z; the azimuth from +X towards +Y and
    /// lies in `(-180, 180]`.
    pub fn to_spherical(self) -> (f64, f64, f64) {
        let radius = self.length();

        let azimuth = if self.x == 0.0 {
            if self.y == 0.0 {
                0.0
            } else if self.y < 0.0 {
                -90.0
            } else {
                90.0
            }
        } else {
            let theta = (self.y / self.x).atan().to_degrees();
            if self.x > 0.0 {
                theta
            } else if self.y >= 0.0 {
                theta + 180.0
            } else {
                theta - 180.0
            }
        };

        let polar = if radius == 0.0 {
            0.0
        } else {
            (self.z / radius).clamp(-1.0, 1.0).acos().to_degrees()
        };

        (radius, polar, azimuth)
    }

    /// Project onto the four quadray basis directions.
    pub fn to_quadray(self) -> Qvector {
        Qvector::from(xyz_to_ivm(self.x, self.y, self.z))
    }
}

/// Build a Cartesian vector from spherical coordinates (angles in degrees).
pub fn vector_from_spherical(radius: f64, polar_degrees: f64, azimuth_degrees: f64) -> Vector {
    let (sin_phi, cos_phi) = polar_degrees.to_radians().sin_cos();
    let (sin_theta, cos_theta) = azimuth_degrees.to_radians().sin_cos();
    Vector::new(
        round_to(radius * cos_theta * sin_phi, SPHERICAL_PLACES),
        round_to(radius * sin_theta * sin_phi, SPHERICAL_PLACES),
        round_to(radius * cos_phi, SPHERICAL_PLACES),
    )
}

fn rounded(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(
        round_to(x, ROTATION_PLACES),
        round_to(y, ROTATION_PLACES),
        round_to(z, ROTATION_PLACES),
    )
}

impl From<[f64; 3]> for Vector {
    fn from(xyz: [f64; 3]) -> Self {
        Vector::new(xyz[0], xyz[1], xyz[2])
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz_vector(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self + (-rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        Vector::new(scalar * self.x, scalar * self.y, scalar * self.z)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl HasLength for Vector {
    fn length(&self) -> f64 {
        Vector::length(*self)
    }
}

impl VectorOps for Vector {
    fn dot(&self, other: &Self) -> f64 {
        Vector::dot(*self, *other)
    }

    fn cross(&self, other: &Self) -> Self {
        Vector::cross(*self, *other)
    }

    fn angle(&self, other: &Self) -> Result<f64, GeometryError> {
        Vector::angle(*self, *other)
    }
}
