//! Shape formulas shared across kinds.
//!
//! Degenerate inputs are not rejected: collinear triangles give zero (or NaN
//! from rounding under the square root), self-intersecting quadrilaterals give
//! whatever the Shoelace sum yields.

use crate::primitives::Point;

/// Sum of consecutive-vertex distances, wrapping from the last point back to
/// the first.
pub(crate) fn closed_perimeter(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n).map(|i| points[i].distance(&points[(i + 1) % n])).sum()
}

/// Heron's formula from the three side lengths.
pub(crate) fn heron_area(p: &[Point; 3]) -> f64 {
    let a = p[0].distance(&p[1]);
    let b = p[1].distance(&p[2]);
    let c = p[2].distance(&p[0]);
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Shoelace area `|Σ x_i y_{i+1} - y_i x_{i+1}| / 2` over the ordered ring.
pub(crate) fn shoelace_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i].to_na();
            let b = points[(i + 1) % n].to_na();
            // z-component of a × b
            a.x * b.y - a.y * b.x
        })
        .sum();
    twice.abs() / 2.0
}
