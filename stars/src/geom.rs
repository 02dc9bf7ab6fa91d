//! Pure {p/q} star-polygon formulas.
//!
//! All functions here are closed-form arithmetic over the polygon order `p`,
//! the step `q`, and the circumradius. Angles are in degrees throughout,
//! matching the turtle convention used by [`crate::canvas::Canvas`].

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::collections::BTreeMap;

use crate::{Error, Result, consts::MIN_STEP};

/// Interior turning angles for every valid star ratio of order `p`.
///
/// For each step `q` in `[2, ceil(p/2) - 1]` the table holds
/// `theta(q) = (180/p)·(p − 2q)` degrees — the angle enclosed at each star
/// point. The upper bound deliberately excludes `q = 1` (the convex polygon)
/// and, for even `p`, `q = p/2` (degenerate chords through the center).
/// The table is empty for `p` of 3 or 4.
///
/// # Errors
///
/// Returns [`Error::InvalidOrder`] when `p < 3`.
pub fn turning_angles(p: u32) -> Result<BTreeMap<u32, f64>> {
    if p < 3 {
        return Err(Error::InvalidOrder { p });
    }
    let mut angles = BTreeMap::new();
    for q in MIN_STEP..(p / 2 + p % 2) {
        angles.insert(q, theta(q, p));
    }
    Ok(angles)
}

/// Turning angle `(180/p)·(p − 2q)` at each point of the {p/q} star, degrees.
#[must_use]
pub fn theta(q: u32, p: u32) -> f64 {
    180.0 / f64::from(p) * (f64::from(p) - 2.0 * f64::from(q))
}

/// Repositioning angle `(q − 1)·180/p` between sub-polygon passes, degrees.
#[must_use]
pub fn beta(q: u32, p: u32) -> f64 {
    f64::from(q - 1) * 180.0 / f64::from(p)
}

/// Central angle `q·360/p` subtended by one chord of the {p/q} star, degrees.
#[must_use]
pub fn gamma(q: u32, p: u32) -> f64 {
    f64::from(q) * 360.0 / f64::from(p)
}

/// Euclidean chord length `2r·sin(gamma/2)` for a central angle in degrees.
#[must_use]
pub fn chord(radius: f64, gamma_deg: f64) -> f64 {
    2.0 * radius * (gamma_deg / 2.0).to_radians().sin()
}

/// Side length `2r·sin(180/p)` of the regular p-gon with circumradius `r`.
///
/// Used as the offset distance between successive sub-polygon passes.
#[must_use]
pub fn side(radius: f64, p: u32) -> f64 {
    2.0 * radius * (180.0 / f64::from(p)).to_radians().sin()
}
