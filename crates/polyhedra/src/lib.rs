//! Polyhedra of Fuller's Concentric Hierarchy and closed-packed sphere edge counts.

pub mod catalog;
pub mod edge_counting;
pub mod polyhedron;

pub use catalog::{by_name, catalog, cube, cuboctahedron, icosahedron, octahedron, tetrahedron};
pub use polyhedron::{Edge, Polyhedron};
