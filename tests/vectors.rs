use ivm_xyz::GeometryError;
use ivm_xyz::vectors::{self, Qvector, Vector, vector_from_spherical};

fn close(a: Vector, b: Vector, tol: f64) -> bool {
    (a - b).length() < tol
}

#[test]
fn add_then_subtract_restores_vector() {
    let samples = [
        (Vector::new(1.0, 2.0, 3.0), Vector::new(-4.5, 0.25, 9.0)),
        (Vector::new(-0.1, 1e3, 7.0), Vector::new(3.0, -3.0, 0.0)),
    ];
    for (v, w) in samples {
        let back = v.add(w).subtract(w);
        assert!(close(back, v, 1e-9), "{back} != {v}");
        assert!(close(v + w - w, v, 1e-9));
    }
}

#[test]
fn named_methods_and_operators_agree() {
    let v = Vector::new(1.0, -2.0, 0.5);
    assert_eq!(v.negate(), -v);
    assert_eq!(v.scalar_multiply(3.0), v * 3.0);
    assert_eq!(3.0 * v, v * 3.0);
    let halved = v.scalar_divide(2.0).expect("non-zero divisor");
    assert!(close(halved, Vector::new(0.5, -1.0, 0.25), 1e-12));
}

#[test]
fn dividing_by_zero_fails() {
    assert_eq!(
        Vector::new(1.0, 1.0, 1.0).scalar_divide(0.0),
        Err(GeometryError::DivisionByZero)
    );
    assert_eq!(
        Qvector::A.scalar_divide(0.0),
        Err(GeometryError::DivisionByZero)
    );
}

#[test]
fn unit_vectors_have_length_one() {
    for v in [
        Vector::new(3.0, 4.0, 0.0),
        Vector::new(-1.0, 2.0, -7.5),
        Vector::new(1e-4, 0.0, 0.0),
    ] {
        let unit = v.unit().expect("non-zero vector");
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }
    let q = Qvector::new(2.0, 1.0, 1.0, 0.0).unit().expect("non-zero quadray");
    assert!((q.length() - 1.0).abs() < 1e-6);
}

#[test]
fn unit_of_zero_vector_fails() {
    assert_eq!(Vector::default().unit(), Err(GeometryError::DivisionByZero));
    assert_eq!(Qvector::ORIGIN.unit(), Err(GeometryError::DivisionByZero));
    assert!(Vector::default().angle(Vector::new(1.0, 0.0, 0.0)).is_err());
}

#[test]
fn dot_cross_and_angle_in_xyz() {
    let x = Vector::new(1.0, 0.0, 0.0);
    let y = Vector::new(0.0, 1.0, 0.0);
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(x.cross(y), Vector::new(0.0, 0.0, 1.0));
    assert!((x.angle(y).expect("angle") - 90.0).abs() < 1e-9);
    assert!((x.angle(-x).expect("angle") - 180.0).abs() < 1e-9);
    assert!((x.angle(x * 5.0).expect("angle")).abs() < 1e-9);
}

#[test]
fn free_functions_dispatch_on_vector_kind() {
    let x = Vector::new(1.0, 0.0, 0.0);
    let y = Vector::new(0.0, 2.0, 0.0);
    assert_eq!(vectors::dot(&x, &y), 0.0);
    assert_eq!(vectors::length(&y), 2.0);
    assert_eq!(vectors::cross(&x, &y), Vector::new(0.0, 0.0, 2.0));
    let a = vectors::angle(&Qvector::A, &Qvector::B).expect("angle");
    assert!((a - (-1.0f64 / 3.0).acos().to_degrees()).abs() < 1e-6);
    assert!((vectors::length(&Qvector::A) - 0.6123724356957945).abs() < 1e-12);
}

#[test]
fn axis_rotations_follow_right_hand_rule() {
    let x = Vector::new(1.0, 0.0, 0.0);
    let y = Vector::new(0.0, 1.0, 0.0);
    let z = Vector::new(0.0, 0.0, 1.0);
    assert!(close(x.rotate_z(90.0), y, 1e-8));
    assert!(close(y.rotate_x(90.0), z, 1e-8));
    assert!(close(z.rotate_y(90.0), x, 1e-8));
    assert!(close(x.rotate_z(360.0), x, 1e-8));
}

#[test]
fn rotation_about_body_diagonal_cycles_axes() {
    let axis = Vector::new(1.0, 1.0, 1.0);
    let x = Vector::new(1.0, 0.0, 0.0);
    let turned = x.rotate_around_axis(axis, 120.0).expect("non-zero axis");
    assert!(close(turned, Vector::new(0.0, 1.0, 0.0), 1e-6), "{turned}");

    let on_axis = Vector::new(2.0, 2.0, 2.0);
    let unchanged = on_axis.rotate_around_axis(axis, 75.0).expect("non-zero axis");
    assert!(close(unchanged, on_axis, 1e-6));
}

#[test]
fn rotation_about_zero_axis_fails() {
    let v = Vector::new(1.0, 2.0, 3.0);
    assert_eq!(
        v.rotate_around_axis(Vector::default(), 45.0),
        Err(GeometryError::DegenerateVector)
    );
}

#[test]
fn spherical_coordinates_cover_every_quadrant() {
    let (r, polar, azimuth) = Vector::new(0.5, 0.5, 0.0).to_spherical();
    assert!((r - 0.5f64.sqrt()).abs() < 1e-12);
    assert!((polar - 90.0).abs() < 1e-9);
    assert!((azimuth - 45.0).abs() < 1e-9);

    let cases = [
        ((0.0, 0.0, 1.0), 0.0),
        ((0.0, -1.0, 0.0), -90.0),
        ((0.0, 1.0, 0.0), 90.0),
        ((-1.0, 0.0, 0.0), 180.0),
        ((-1.0, 1.0, 0.0), 135.0),
        ((-1.0, -1.0, 0.0), -135.0),
        ((1.0, -1.0, 0.0), -45.0),
    ];
    for ((x, y, z), expected) in cases {
        let (_, _, azimuth) = Vector::new(x, y, z).to_spherical();
        assert!((azimuth - expected).abs() < 1e-9, "({x}, {y}, {z}) -> {azimuth}");
    }
    assert_eq!(Vector::default().to_spherical(), (0.0, 0.0, 0.0));
}

#[test]
fn spherical_factory_round_trips() {
    for v in [
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(-2.0, 0.5, -1.0),
        Vector::new(-1.0, -1.0, 4.0),
    ] {
        let (r, polar, azimuth) = v.to_spherical();
        assert!(close(vector_from_spherical(r, polar, azimuth), v, 1e-9));
    }
    let up = vector_from_spherical(2.0, 0.0, 0.0);
    assert_eq!(up, Vector::new(0.0, 0.0, 2.0));
}

#[test]
fn display_names_the_coordinate_system() {
    assert_eq!(
        Vector::new(1.0, 2.0, 3.0).to_string(),
        "xyz_vector(x=1, y=2, z=3)"
    );
    assert_eq!(Qvector::A.to_string(), "ivm_vector(a=1, b=0, c=0, d=0)");
}
