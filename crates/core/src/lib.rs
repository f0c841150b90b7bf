//! Core constants, numeric helpers, and shared error types for the IVM/XYZ workspace.

use thiserror::Error;

/// Scalar constants shared by both coordinate systems.
///
/// Values are literal so they are fixed at compile time; each matches the
/// correctly rounded `f64` of the expression in its doc comment.
pub mod constants {
    /// √2.
    pub const ROOT2: f64 = std::f64::consts::SQRT_2;
    /// √3.
    pub const ROOT3: f64 = 1.732_050_807_568_877_2;
    /// √5.
    pub const ROOT5: f64 = 2.236_067_977_499_79;
    /// Golden ratio, (1 + √5) / 2.
    pub const PHI: f64 = 1.618_033_988_749_895;
    /// √(9/8), the ratio between a shape's IVM measure and its XYZ measure.
    pub const S3: f64 = 1.060_660_171_779_821_2;
    /// Radius of a sphere in the IVM packing.
    pub const R: f64 = 0.5;
    /// Diameter of a sphere in the IVM packing (the unit tetrahedron edge).
    pub const D: f64 = 1.0;
}

/// Small numeric helpers used to keep trigonometric noise and round-off in check.
pub mod numeric {
    use super::GeometryError;

    /// Round `value` to `places` decimal digits (half away from zero).
    #[inline]
    pub fn round_to(value: f64, places: i32) -> f64 {
        let factor = 10f64.powi(places);
        (value * factor).round() / factor
    }

    /// Square root of a derived radicand, rejecting shapes that cannot exist.
    ///
    /// Zero is a flat but real shape. Any negative radicand, however small, or
    /// a non-finite one is `InvalidGeometry`; round-off is never absorbed.
    pub fn checked_sqrt(radicand: f64) -> Result<f64, GeometryError> {
        if radicand.is_finite() && radicand >= 0.0 {
            Ok(radicand.sqrt())
        } else {
            Err(GeometryError::InvalidGeometry { radicand })
        }
    }

}

/// Failures raised by the vector algebra and the edge-length measures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Scalar division by zero, or normalizing a zero-length vector.
    #[error("division by zero")]
    DivisionByZero,
    /// A zero rotation axis.
    #[error("vector has zero length and no direction")]
    DegenerateVector,
    #[error("edge lengths do not describe a real shape (radicand {radicand})")]
    InvalidGeometry { radicand: f64 },
}
