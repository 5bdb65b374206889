//! Lines, ranges, rings and spirals

use crate::hex::{FractionalHex, Hex, MAX_COORDINATE};

/// Nudge applied to both line endpoints so interpolated points never sit
/// exactly on a hex edge. Sums to zero.
const LINE_NUDGE: FractionalHex = FractionalHex {
    q: 1e-6,
    r: 1e-6,
    s: -2e-6,
};

fn nudged(hex: Hex) -> FractionalHex {
    FractionalHex {
        q: hex.q as f64 + LINE_NUDGE.q,
        r: hex.r as f64 + LINE_NUDGE.r,
        s: hex.s as f64 + LINE_NUDGE.s,
    }
}

/// Cells on the straight segment from `a` to `b`, both included.
///
/// Returns exactly `distance(a, b) + 1` cells; consecutive cells are
/// neighbours.
pub fn line(a: Hex, b: Hex) -> Vec<Hex> {
    let n = a.distance(b);
    let a_nudge = nudged(a);
    let b_nudge = nudged(b);
    let step = 1.0 / n.max(1) as f64;

    (0..=n)
        .map(|i| a_nudge.lerp(b_nudge, step * i as f64).round_unchecked())
        .collect()
}

/// All cells within `radius` of `center`: `3r^2 + 3r + 1` of them.
///
/// `radius` is capped at [`MAX_COORDINATE`].
pub fn range(center: Hex, radius: u32) -> Vec<Hex> {
    let n = clamp_radius(radius);
    let mut results = Vec::with_capacity(range_len(n as u32).unwrap_or(0));
    for q in -n..=n {
        let r_min = (-n).max(-q - n);
        let r_max = n.min(-q + n);
        for r in r_min..=r_max {
            results.push(center + Hex::axial(q, r));
        }
    }
    results
}

/// Number of cells within `radius` of a cell, or `None` if that does not
/// fit in a `usize`.
pub fn range_len(radius: u32) -> Option<usize> {
    let r = usize::try_from(radius).ok()?;
    r.checked_mul(r)?
        .checked_mul(3)?
        .checked_add(r.checked_mul(3)?)?
        .checked_add(1)
}

fn clamp_radius(radius: u32) -> i32 {
    i32::try_from(radius).map_or(MAX_COORDINATE, |n| n.min(MAX_COORDINATE))
}

/// The cells at exactly `radius` from `center`, walked as one loop.
///
/// Starts `radius` steps along direction 4 and walks `radius` steps in each
/// of the six directions. Radius 0 yields nothing.
pub fn ring(center: Hex, radius: u32) -> Vec<Hex> {
    let n = clamp_radius(radius);
    let mut results = Vec::with_capacity(6 * n as usize);
    let mut hex = center + Hex::direction(4) * n;
    for direction in 0..6 {
        for _ in 0..n {
            results.push(hex);
            hex = hex.neighbor(direction);
        }
    }
    results
}

/// `center` followed by every ring out to `radius`, innermost first.
pub fn spiral(center: Hex, radius: u32) -> Vec<Hex> {
    let radius = clamp_radius(radius) as u32;
    let mut results = Vec::with_capacity(range_len(radius).unwrap_or(0));
    results.push(center);
    for k in 1..=radius {
        results.extend(ring(center, k));
    }
    results
}
