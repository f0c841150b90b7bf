use ivm_xyz::config::{ShapeConfig, ShapeSpec, load_shapes};
use ivm_xyz::polyhedra;
use ivm_xyz::vectors::Qvector;
use ivm_xyz::volumes::EdgeLengthTetrahedron;
use ivm_xyz::export::measures::Record;
use ivm_xyz::report::{Measure, ReportError, evaluate, evaluate_catalog, polyhedron_sidecar};

fn shape(name: &str, spec: ShapeSpec) -> ShapeConfig {
    ShapeConfig {
        name: name.to_string(),
        shape: spec,
        notes: None,
    }
}

#[test]
fn bundled_catalog_measures() {
    let shapes = load_shapes("data/shapes/concentric.yaml").expect("bundled catalog");
    let measurements = evaluate_catalog(&shapes).expect("all shapes valid");
    let get = |name: &str| {
        measurements
            .iter()
            .find(|m| m.name == name)
            .unwrap_or_else(|| panic!("{name} missing"))
    };

    assert!((get("unit_tetrahedron").ivm - 1.0).abs() < 1e-9);
    assert!((get("half_tetrahedron").xyz - 0.117851130).abs() < 1e-9);
    assert!((get("cube_corner").xyz * 6.0 - 1.0).abs() < 1e-9);
    assert!((get("quarter_octahedron").ivm - 1.0).abs() < 1e-9);
    assert!((get("martian_tetrahedron").ivm - 20.0).abs() < 1e-9);

    let right = get("right_triangle");
    assert_eq!(right.measure, Measure::Area);
    assert_eq!(right.ivm, 6.0);
    assert_eq!(right.edges, vec![3.0, 4.0, 5.0]);
}

#[test]
fn vector_shapes_record_their_edge_lengths() {
    let m = evaluate(&shape(
        "corner",
        ShapeSpec::XyzTriangle {
            vectors: [[3.0, 0.0, 0.0], [0.0, 4.0, 0.0]],
        },
    ))
    .expect("valid");
    assert_eq!(m.shape, "xyz_triangle");
    assert_eq!(m.measure, Measure::Area);
    assert_eq!(m.edges, vec![3.0, 4.0, 5.0]);

    let m = evaluate(&shape(
        "basis",
        ShapeSpec::QuadrayTetrahedron {
            vectors: [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
        },
    ))
    .expect("valid");
    assert_eq!(m.measure, Measure::Volume);
    assert_eq!(m.edges.len(), 6);
    assert!((m.ivm - 0.25).abs() < 1e-9);
}

#[test]
fn vector_shape_edges_match_the_volume_constructor() {
    let vectors = [[1.0, 0.0, 0.0, 0.0], [0.0, 2.0, 0.0, 0.0], [0.0, 0.0, 1.0, 1.0]];
    let m = evaluate(&shape("skew", ShapeSpec::QuadrayTetrahedron { vectors }))
        .expect("valid");
    let [v0, v1, v2] = vectors.map(Qvector::from);
    let tet = EdgeLengthTetrahedron::from_vectors(v0, v1, v2);
    assert_eq!(m.edges, tet.edges().to_vec());
    assert_eq!(Ok(m.ivm), tet.ivm_volume());
}

#[test]
fn invalid_geometry_names_the_shape() {
    let err = evaluate(&shape(
        "needle",
        ShapeSpec::Triangle {
            edges: [1.0, 1.0, 5.0],
        },
    ))
    .expect_err("impossible triangle");
    assert!(matches!(err, ReportError::Geometry { ref name, .. } if name == "needle"));
    assert!(err.to_string().contains("needle"));
}

#[test]
fn unsupported_shapes_are_rejected() {
    let err = evaluate(&shape("blob", ShapeSpec::Unsupported)).expect_err("unsupported");
    assert!(matches!(err, ReportError::Unsupported { .. }));
}

#[test]
fn records_serialize_in_header_order() {
    let m = evaluate(&shape(
        "right",
        ShapeSpec::Triangle {
            edges: [3.0, 4.0, 5.0],
        },
    ))
    .expect("valid");
    let mut buf = Vec::new();
    m.record().write_to(&mut buf).expect("write");
    let line = String::from_utf8(buf).expect("utf8");
    assert!(line.starts_with("right,triangle,area,6.000000000,5.656854249,"));
    assert!(line.trim_end().ends_with("3.000000;4.000000;5.000000"));
}

#[test]
fn names_with_delimiters_are_quoted() {
    let record = Record {
        name: "tet, \"skewed\"",
        shape: "tetrahedron",
        measure: "volume",
        ivm: 1.0,
        xyz: 0.5,
        edges: &[1.0, 2.0],
    };
    let mut buf = Vec::new();
    record.write_to(&mut buf).expect("write");
    let line = String::from_utf8(buf).expect("utf8");
    assert_eq!(
        line,
        "\"tet, \"\"skewed\"\"\",tetrahedron,volume,1.000000000,0.500000000,1.000000;2.000000\n"
    );

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());
    let row = reader.records().next().expect("one row").expect("parse");
    assert_eq!(&row[0], "tet, \"skewed\"");
    assert_eq!(row.len(), 6);
}

#[test]
fn sidecar_carries_recomputed_volume() {
    let cube = polyhedra::cube();
    let sidecar = polyhedron_sidecar(&cube, "2026-01-01T00:00:00+00:00".to_string())
        .expect("valid cube");
    assert_eq!(sidecar.name, "Cube");
    assert!((sidecar.ivm_volume - 3.0).abs() < 1e-6);
    assert_eq!(sidecar.vertices.len(), 8);
    assert_eq!(sidecar.edges.len(), 12);
}
