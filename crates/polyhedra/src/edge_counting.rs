//! Contact counts between equal spheres packed into IVM shapes.
//!
//! `f` is the frequency: the number of intervals along each edge. The
//! iterative functions grow the packing layer by layer; the `aNNNNNN`
//! functions are the matching closed forms from the OEIS. Every count is
//! `None` once it no longer fits in a `u64`.

/// Triangular number.
pub fn tri(n: u64) -> Option<u64> {
    Some(n.checked_mul(n.checked_add(1)?)? / 2)
}

/// Square number.
pub fn sqr(n: u64) -> Option<u64> {
    n.checked_mul(n)
}

/// Contacts in a tetrahedral packing: each layer of `tri(n)` balls spawns `n`
/// tetrahedra of six edges each. See <https://oeis.org/A007531>.
pub fn tet_edges(f: u64) -> Option<u64> {
    (2..=f).try_fold(if f >= 1 { 6 } else { 0 }, |acc: u64, layer| {
        acc.checked_add(tri(layer)?.checked_mul(6)?)
    })
}

/// Contacts in a half-octahedral (square pyramid) packing. See <https://oeis.org/A035006>.
pub fn half_oct_edges(f: u64) -> Option<u64> {
    (2..=f).try_fold(if f >= 1 { 8 } else { 0 }, |acc: u64, layer| {
        let square = sqr(layer)?.checked_mul(4)?;
        let rim = layer.checked_mul(layer + 1)?.checked_mul(2)?;
        acc.checked_add(square)?.checked_add(rim)
    })
}

/// Contacts in an octahedral packing: two half-octahedra minus their shared
/// square layer. See <https://oeis.org/A300758>.
pub fn oct_edges(f: u64) -> Option<u64> {
    let doubled = half_oct_edges(f)?.checked_mul(2)?;
    doubled.checked_sub(f.checked_mul(f + 1)?.checked_mul(2)?)
}

/// Contacts in a cuboctahedral packing with `f` intervals along each edge.
pub fn cubocta_edges(f: u64) -> Option<u64> {
    let x = f.checked_add(1)?;
    let grow = x.checked_pow(3)?.checked_mul(20)?.checked_add(40 * x)?;
    let shrink = x.checked_pow(2)?.checked_mul(48)?.checked_add(12)?;
    grow.checked_sub(shrink)
}

/// Contacts in layer `f` (counting from 1) of a cuboctahedral packing.
/// See <https://oeis.org/A069074>.
pub fn cubocta_layer(f: u64) -> Option<u64> {
    if f == 0 {
        return Some(0);
    }
    let x = f - 1;
    x.checked_pow(3)?
        .checked_mul(8)?
        .checked_add(x.checked_pow(2)?.checked_mul(36)?)?
        .checked_add(x.checked_mul(52)?)?
        .checked_add(24)
}

/// Closed form of [`tet_edges`].
pub fn a007531(n: u64) -> Option<u64> {
    n.checked_mul(n.checked_add(1)?)?.checked_mul(n.checked_add(2)?)
}

/// Closed form of [`half_oct_edges`].
pub fn a035006(n: u64) -> Option<u64> {
    n.checked_mul(2)?.checked_mul(n.checked_add(1)?.checked_pow(2)?)
}

/// Closed form of [`oct_edges`].
pub fn a300758(n: u64) -> Option<u64> {
    let odd = n.checked_mul(2)?.checked_add(1)?;
    n.checked_mul(2)?
        .checked_mul(n.checked_add(1)?)?
        .checked_mul(odd)
}
