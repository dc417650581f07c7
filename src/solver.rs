use geo::Coordinate;

/// Error returned by [`solve`] when the two supporting lines are
/// parallel or coincident, or a segment has zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degenerate;

/// Computes the crossing point of the supporting lines of segments
/// `p1`-`q1` and `p2`-`q2`.
///
/// Each line is written as `a*x + b*y = c` and the 2x2 system is solved
/// by Cramer's rule. Meant to be called on pairs accepted by
/// [`intersects`](crate::predicate::intersects); a zero determinant is
/// reported as [`Degenerate`].
pub fn solve(
    p1: Coordinate<f64>,
    q1: Coordinate<f64>,
    p2: Coordinate<f64>,
    q2: Coordinate<f64>,
) -> Result<Coordinate<f64>, Degenerate> {
    let (a1, b1, c1) = line_coefficients(p1, q1);
    let (a2, b2, c2) = line_coefficients(p2, q2);

    let det = a1 * b2 - a2 * b1;
    if det == 0. {
        return Err(Degenerate);
    }

    // Adding zero maps `-0.0` to `0.0`.
    let x = (b2 * c1 - b1 * c2) / det + 0.;
    let y = (a1 * c2 - a2 * c1) / det + 0.;
    Ok(Coordinate { x, y })
}

#[inline]
fn line_coefficients(p: Coordinate<f64>, q: Coordinate<f64>) -> (f64, f64, f64) {
    let a = q.y - p.y;
    let b = p.x - q.x;
    (a, b, a * p.x + b * p.y)
}
