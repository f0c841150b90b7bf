use ivm_xyz::polyhedra::{self, Polyhedron};
use ivm_xyz::vectors::Qvector;

fn check_fan_volume(poly: &Polyhedron, expected: f64, tol: f64) {
    let fan = poly.ivm_volume_from_center().expect("valid faces");
    assert!(
        (fan - expected).abs() < tol,
        "{} fan volume {fan} != {expected}",
        poly.name
    );
}

#[test]
fn catalog_volumes_match_the_concentric_hierarchy() {
    let cases = [
        (polyhedra::tetrahedron(), 1.0, 6, 4),
        (polyhedra::cube(), 3.0, 12, 8),
        (polyhedra::octahedron(), 4.0, 12, 6),
        (polyhedra::cuboctahedron(), 20.0, 24, 12),
    ];
    for (poly, volume, edges, vertices) in cases {
        assert_eq!(poly.volume, volume);
        assert_eq!(poly.edges().len(), edges, "{}", poly.name);
        assert_eq!(poly.vertices.len(), vertices, "{}", poly.name);
        check_fan_volume(&poly, volume, 1e-6);
    }
}

#[test]
fn icosahedron_comes_from_the_jitterbug() {
    let ico = polyhedra::icosahedron().expect("icosahedron");
    assert_eq!(ico.edges().len(), 30);
    assert_eq!(ico.vertices.len(), 12);
    assert_eq!(ico.faces.len(), 20);
    check_fan_volume(&ico, 18.51229586821916, 1e-6);
    assert!((ico.volume - 18.51).abs() < 1e-9);
}

#[test]
fn tetrahedron_edges_are_unit_length() {
    let tet = polyhedra::tetrahedron();
    for edge in tet.edges() {
        assert!(((edge.v1 - edge.v0).length() - 1.0).abs() < 1e-12);
        assert!(edge.labels.0 < edge.labels.1);
    }
}

#[test]
fn scaling_cubes_the_volume() {
    let big = polyhedra::octahedron().scale(2.0);
    assert_eq!(big.volume, 32.0);
    check_fan_volume(&big, 32.0, 1e-6);
}

#[test]
fn translation_moves_center_and_keeps_volume() {
    let offset = Qvector::new(3.0, 0.0, 1.0, 0.0);
    let moved = polyhedra::cube().translate(offset);
    assert_eq!(moved.center, offset);
    assert_eq!(moved.volume, 3.0);
    check_fan_volume(&moved, 3.0, 1e-6);
}

#[test]
fn lookup_is_case_insensitive() {
    let found = polyhedra::by_name("OctaHedron").expect("catalog builds");
    assert_eq!(found.map(|p| p.name), Some("Octahedron".to_string()));
    assert!(polyhedra::by_name("dodecahedron").expect("catalog builds").is_none());
    assert_eq!(polyhedra::catalog().expect("catalog builds").len(), 5);
}

#[test]
fn xyz_projection_indexes_every_edge() {
    let cube = polyhedra::cube();
    let vertices = cube.xyz_vertices();
    let indices = cube.edge_indices();
    assert_eq!(indices.len(), cube.edges().len());
    for [i, j] in indices {
        assert!(i < vertices.len() && j < vertices.len() && i != j);
    }
}
