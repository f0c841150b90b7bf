//! Vertex/face tables with edges distilled from the faces.

use std::collections::{BTreeMap, BTreeSet};

use ivm_core::GeometryError;
use ivm_vectors::Qvector;
use ivm_volumes::make_tet;

/// Segment between two labelled vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub labels: (char, char),
    pub v0: Qvector,
    pub v1: Qvector,
}

/// A polyhedron whose vertices are quadrays, keyed by single-letter labels.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    pub name: String,
    /// Nominal IVM volume from the Concentric Hierarchy.
    pub volume: f64,
    pub center: Qvector,
    pub vertices: BTreeMap<char, Qvector>,
    /// Faces as cyclic sequences of vertex labels.
    pub faces: Vec<Vec<char>>,
    edges: Vec<Edge>,
}

impl Polyhedron {
    pub fn new(
        name: impl Into<String>,
        volume: f64,
        center: Qvector,
        vertices: BTreeMap<char, Qvector>,
        faces: Vec<Vec<char>>,
    ) -> Self {
        let mut polyhedron = Self {
            name: name.into(),
            volume,
            center,
            vertices,
            faces,
            edges: Vec::new(),
        };
        polyhedron.edges = polyhedron.distill();
        polyhedron
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Scale every vertex about the origin; the volume scales with the cube of `factor`.
    pub fn scale(&self, factor: f64) -> Polyhedron {
        let vertices = self
            .vertices
            .iter()
            .map(|(label, v)| (*label, *v * factor))
            .collect();
        Polyhedron::new(
            self.name.clone(),
            self.volume * factor.powi(3),
            self.center,
            vertices,
            self.faces.clone(),
        )
    }

    /// Move every vertex, and the center, by `offset`.
    pub fn translate(&self, offset: Qvector) -> Polyhedron {
        let vertices = self
            .vertices
            .iter()
            .map(|(label, v)| (*label, *v + offset))
            .collect();
        Polyhedron::new(
            self.name.clone(),
            self.volume,
            self.center + offset,
            vertices,
            self.faces.clone(),
        )
    }

    /// IVM volume recomputed from the edge-length formula: each face is fanned
    /// into triangles, and each triangle forms a tetrahedron with the center.
    pub fn ivm_volume_from_center(&self) -> Result<f64, GeometryError> {
        let mut total = 0.0;
        for face in &self.faces {
            let corners: Vec<Qvector> = face
                .iter()
                .filter_map(|label| self.vertices.get(label))
                .map(|v| *v - self.center)
                .collect();
            let Some((&apex, rest)) = corners.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                let (ivm, _) = make_tet(apex, pair[0], pair[1])?;
                total += ivm;
            }
        }
        tracing::debug!(name = %self.name, total, nominal = self.volume, "fan volume");
        Ok(total)
    }

    /// Cartesian projection of every vertex, in label order.
    pub fn xyz_vertices(&self) -> Vec<(char, [f64; 3])> {
        self.vertices
            .iter()
            .map(|(label, v)| (*label, v.to_cartesian().to_array()))
            .collect()
    }

    /// Edges as index pairs into [`Polyhedron::xyz_vertices`].
    pub fn edge_indices(&self) -> Vec<[usize; 2]> {
        let labels: Vec<char> = self.vertices.keys().copied().collect();
        self.edges
            .iter()
            .filter_map(|edge| {
                let i = labels.binary_search(&edge.labels.0).ok()?;
                let j = labels.binary_search(&edge.labels.1).ok()?;
                Some([i, j])
            })
            .collect()
    }

    fn distill(&self) -> Vec<Edge> {
        let mut unique = BTreeSet::new();
        for face in &self.faces {
            for (i, &from) in face.iter().enumerate() {
                let to = face[(i + 1) % face.len()];
                unique.insert(if from <= to { (from, to) } else { (to, from) });
            }
        }
        unique
            .into_iter()
            .filter_map(|(p, q)| {
                Some(Edge {
                    labels: (p, q),
                    v0: *self.vertices.get(&p)?,
                    v1: *self.vertices.get(&q)?,
                })
            })
            .collect()
    }
}
