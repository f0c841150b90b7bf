//! Tuple-level conversion plus the vector-object adapters built on it.

pub use ivm_convert::{Ivm, Xyz, ivm_to_xyz, normalize, xyz_to_ivm, zero_sum};

use ivm_vectors::{Qvector, Vector};

/// Convert a Cartesian vector to its quadray equivalent.
pub fn vector_to_qvector(v: Vector) -> Qvector {
    v.to_quadray()
}

/// Convert a quadray vector to its Cartesian equivalent.
pub fn qvector_to_vector(q: Qvector) -> Vector {
    q.to_cartesian()
}
