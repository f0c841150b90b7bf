//! IVM/XYZ geometry toolkit.
//!
//! Quadray (IVM) and Cartesian (XYZ) vectors, conversion between the two,
//! edge-length volumes and areas, and the polyhedra of the Concentric
//! Hierarchy. The library crate ties the workspace members together so the
//! command-line front-ends share one entry point.

pub mod conversion;
pub mod logging;
pub mod report;

pub use ivm_config as config;
pub use ivm_core::{GeometryError, constants};
pub use ivm_export as export;
pub use ivm_polyhedra as polyhedra;
pub use ivm_vectors as vectors;
pub use ivm_volumes as volumes;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
