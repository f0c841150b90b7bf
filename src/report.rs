//! Turning catalog entries into measurements and polyhedra into export records.

use ivm_config::{ShapeConfig, ShapeSpec};
use ivm_core::GeometryError;
use ivm_export::measures::Record;
use ivm_export::polyhedra::{Sidecar, Vertex};
use ivm_polyhedra::Polyhedron;
use ivm_vectors::{Qvector, Vector};
use ivm_volumes::{EdgeLengthTetrahedron, EdgeLengthTriangle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("shape '{name}': {source}")]
    Geometry {
        name: String,
        #[source]
        source: GeometryError,
    },
    #[error("shape '{name}' has an unsupported type")]
    Unsupported { name: String },
}

/// Whether a measurement is a volume or an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Volume,
    Area,
}

impl Measure {
    pub fn label(self) -> &'static str {
        match self {
            Measure::Volume => "volume",
            Measure::Area => "area",
        }
    }
}

/// A measured catalog entry, in both unit systems.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub shape: &'static str,
    pub measure: Measure,
    pub ivm: f64,
    pub xyz: f64,
    pub edges: Vec<f64>,
}

impl Measurement {
    /// Borrow the measurement as a CSV row.
    pub fn record(&self) -> Record<'_> {
        Record {
            name: &self.name,
            shape: self.shape,
            measure: self.measure.label(),
            ivm: self.ivm,
            xyz: self.xyz,
            edges: &self.edges,
        }
    }
}

/// The shape a catalog entry describes, before it is measured.
enum Shape {
    Tetrahedron(EdgeLengthTetrahedron),
    Triangle(EdgeLengthTriangle),
}

impl Shape {
    fn from_spec(spec: &ShapeSpec) -> Option<Shape> {
        let shape = match spec {
            ShapeSpec::Tetrahedron { edges: [a, b, c, d, e, f] } => {
                Shape::Tetrahedron(EdgeLengthTetrahedron::new(*a, *b, *c, *d, *e, *f))
            }
            ShapeSpec::Triangle { edges: [a, b, c] } => {
                Shape::Triangle(EdgeLengthTriangle::new(*a, *b, *c))
            }
            ShapeSpec::XyzTetrahedron { vectors } => {
                let [v0, v1, v2] = vectors.map(Vector::from);
                Shape::Tetrahedron(EdgeLengthTetrahedron::from_vectors(v0, v1, v2))
            }
            ShapeSpec::QuadrayTetrahedron { vectors } => {
                let [v0, v1, v2] = vectors.map(Qvector::from);
                Shape::Tetrahedron(EdgeLengthTetrahedron::from_vectors(v0, v1, v2))
            }
            ShapeSpec::XyzTriangle { vectors } => {
                let [v0, v1] = vectors.map(Vector::from);
                Shape::Triangle(EdgeLengthTriangle::from_vectors(v0, v1))
            }
            ShapeSpec::QuadrayTriangle { vectors } => {
                let [v0, v1] = vectors.map(Qvector::from);
                Shape::Triangle(EdgeLengthTriangle::from_vectors(v0, v1))
            }
            ShapeSpec::Unsupported => return None,
        };
        Some(shape)
    }
}

/// Measure one catalog entry.
pub fn evaluate(config: &ShapeConfig) -> Result<Measurement, ReportError> {
    let shape = Shape::from_spec(&config.shape).ok_or_else(|| ReportError::Unsupported {
        name: config.name.clone(),
    })?;

    let geometry = |source| ReportError::Geometry {
        name: config.name.clone(),
        source,
    };
    let (measure, ivm, xyz, edges) = match shape {
        Shape::Tetrahedron(tet) => {
            let ivm = tet.ivm_volume().map_err(geometry)?;
            let xyz = tet.xyz_volume().map_err(geometry)?;
            (Measure::Volume, ivm, xyz, tet.edges().to_vec())
        }
        Shape::Triangle(tri) => {
            let ivm = tri.ivm_area().map_err(geometry)?;
            let xyz = tri.xyz_area().map_err(geometry)?;
            (Measure::Area, ivm, xyz, tri.edges().to_vec())
        }
    };
    tracing::debug!(name = %config.name, measure = measure.label(), ivm, xyz, "measured shape");

    Ok(Measurement {
        name: config.name.clone(),
        shape: config.shape.label(),
        measure,
        ivm,
        xyz,
        edges,
    })
}

/// Measure every entry, stopping at the first failure.
pub fn evaluate_catalog(configs: &[ShapeConfig]) -> Result<Vec<Measurement>, ReportError> {
    configs.iter().map(evaluate).collect()
}

/// Plot-ready sidecar for a polyhedron, with its volumes recomputed from edge lengths.
pub fn polyhedron_sidecar(
    polyhedron: &Polyhedron,
    generated_at: String,
) -> Result<Sidecar, GeometryError> {
    let ivm_volume = polyhedron.ivm_volume_from_center()?;
    Ok(Sidecar {
        name: polyhedron.name.clone(),
        ivm_volume,
        xyz_volume: ivm_volume / ivm_core::constants::S3,
        generated_at,
        vertices: polyhedron
            .xyz_vertices()
            .into_iter()
            .map(|(label, xyz)| Vertex { label, xyz })
            .collect(),
        edges: polyhedron.edge_indices(),
    })
}
