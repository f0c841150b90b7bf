//! Canonical polyhedra of the Concentric Hierarchy, built from sums of the
//! four basis quadrays.
//!
//! Nominal volumes are in IVM units, where the regular tetrahedron of unit
//! edge has volume 1.

use std::collections::BTreeMap;

use ivm_core::GeometryError;
use ivm_core::constants::PHI;
use ivm_vectors::Qvector;

use crate::polyhedron::Polyhedron;

/// Named points of the IVM built up from the basis quadrays.
struct Points {
    a: Qvector,
    b: Qvector,
    c: Qvector,
    d: Qvector,
    e: Qvector,
    f: Qvector,
    g: Qvector,
    h: Qvector,
    i: Qvector,
    j: Qvector,
    k: Qvector,
    l: Qvector,
    m: Qvector,
    n: Qvector,
    o: Qvector,
    p: Qvector,
    q: Qvector,
    r: Qvector,
    s: Qvector,
    t: Qvector,
    u: Qvector,
    v: Qvector,
    w: Qvector,
    x: Qvector,
    y: Qvector,
    z: Qvector,
}

impl Points {
    fn new() -> Self {
        let (a, b, c, d) = (Qvector::A, Qvector::B, Qvector::C, Qvector::D);
        // Cube corners opposite the tetrahedron's.
        let (e, f, g, h) = (b + c + d, a + c + d, a + b + d, a + b + c);
        // Octahedron: midpoints of the tetrahedron's edges, doubled.
        let (i, j, k, l, m, n) = (a + b, a + c, a + d, b + c, b + d, c + d);
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
            j,
            k,
            l,
            m,
            n,
            o: i + j,
            p: i + k,
            q: i + l,
            r: i + m,
            s: n + j,
            t: n + k,
            u: n + l,
            v: n + m,
            w: j + l,
            x: l + m,
            y: m + k,
            z: k + j,
        }
    }
}

fn vertex_map(entries: &[(char, Qvector)]) -> BTreeMap<char, Qvector> {
    entries.iter().copied().collect()
}

fn face_list(faces: &[&str]) -> Vec<Vec<char>> {
    faces.iter().map(|face| face.chars().collect()).collect()
}

/// Regular tetrahedron, volume 1.
pub fn tetrahedron() -> Polyhedron {
    let p = Points::new();
    Polyhedron::new(
        "Tetrahedron",
        1.0,
        Qvector::ORIGIN,
        vertex_map(&[('a', p.a), ('b', p.b), ('c', p.c), ('d', p.d)]),
        face_list(&["abc", "acd", "adb", "bdc"]),
    )
}

/// Cube (duo-tet), volume 3.
pub fn cube() -> Polyhedron {
    let p = Points::new();
    Polyhedron::new(
        "Cube",
        3.0,
        Qvector::ORIGIN,
        vertex_map(&[
            ('a', p.a),
            ('b', p.b),
            ('c', p.c),
            ('d', p.d),
            ('e', p.e),
            ('f', p.f),
            ('g', p.g),
            ('h', p.h),
        ]),
        face_list(&["afch", "hceb", "bedg", "gdfa", "cfde", "ahbg"]),
    )
}

/// Regular octahedron, volume 4.
pub fn octahedron() -> Polyhedron {
    let p = Points::new();
    Polyhedron::new(
        "Octahedron",
        4.0,
        Qvector::ORIGIN,
        vertex_map(&[
            ('i', p.i),
            ('j', p.j),
            ('k', p.k),
            ('l', p.l),
            ('m', p.m),
            ('n', p.n),
        ]),
        face_list(&["jki", "jil", "jln", "jnk", "mki", "mil", "mln", "mnk"]),
    )
}

/// Cuboctahedron (vector equilibrium), volume 20.
pub fn cuboctahedron() -> Polyhedron {
    let p = Points::new();
    Polyhedron::new(
        "Cuboctahedron",
        20.0,
        Qvector::ORIGIN,
        vertex_map(&[
            ('o', p.o),
            ('p', p.p),
            ('q', p.q),
            ('r', p.r),
            ('s', p.s),
            ('t', p.t),
            ('u', p.u),
            ('v', p.v),
            ('w', p.w),
            ('x', p.x),
            ('y', p.y),
            ('z', p.z),
        ]),
        face_list(&[
            "owsz", "zpyt", "tvus", "wqxu", "oprq", "ryvx", "zst", "tyv", "ypr", "rqx", "xuv",
            "usw", "wqo", "ozp",
        ]),
    )
}

/// Regular icosahedron, nominal volume 18.51.
///
/// Vertices come from the cuboctahedron by the jitterbug transformation: each
/// pair of opposite square-face diagonals is pushed out along the golden
/// section of its face midline.
pub fn icosahedron() -> Result<Polyhedron, GeometryError> {
    let p = Points::new();
    let control = (p.z - p.t).length();

    let (zi, yi) = jitterbug(p.z + p.y, p.j, p.m, control)?;
    let (wi, xi) = jitterbug(p.w + p.x, p.j, p.m, control)?;
    let (ri, vi) = jitterbug(p.r + p.v, p.i, p.n, control)?;
    let (oi, si) = jitterbug(p.o + p.s, p.i, p.n, control)?;
    let (ti, ui) = jitterbug(p.t + p.u, p.k, p.l, control)?;
    let (pi, qi) = jitterbug(p.p + p.q, p.k, p.l, control)?;

    Ok(Polyhedron::new(
        "Icosahedron",
        18.51,
        Qvector::ORIGIN,
        vertex_map(&[
            ('o', oi),
            ('p', pi),
            ('q', qi),
            ('r', ri),
            ('s', si),
            ('t', ti),
            ('u', ui),
            ('v', vi),
            ('w', wi),
            ('x', xi),
            ('y', yi),
            ('z', zi),
        ]),
        face_list(&[
            "ows", "ozs", "zpy", "zty", "tvu", "tsu", "wqx", "wux", "poq", "prq", "ryv", "rxv",
            "zst", "tyv", "ypr", "rqx", "xuv", "usw", "wqo", "ozp",
        ]),
    ))
}

fn jitterbug(
    midface: Qvector,
    toward_first: Qvector,
    toward_second: Qvector,
    control: f64,
) -> Result<(Qvector, Qvector), GeometryError> {
    let gold = midface.unit()? * (0.5 * PHI);
    let reach = control / 2.0;
    Ok((
        gold + toward_first.unit()? * reach,
        gold + toward_second.unit()? * reach,
    ))
}

/// Every catalog polyhedron, smallest nominal volume first.
pub fn catalog() -> Result<Vec<Polyhedron>, GeometryError> {
    Ok(vec![
        tetrahedron(),
        cube(),
        octahedron(),
        icosahedron()?,
        cuboctahedron(),
    ])
}

/// Look a polyhedron up by case-insensitive name.
pub fn by_name(name: &str) -> Result<Option<Polyhedron>, GeometryError> {
    let wanted = name.to_lowercase();
    Ok(catalog()?
        .into_iter()
        .find(|poly| poly.name.to_lowercase() == wanted))
}
