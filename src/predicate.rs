//! Segment intersection predicate.
//!
//! Classifies the turn taken by ordered triples of points and uses it
//! to decide whether two segments meet: either by properly crossing,
//! or by one end point touching (or overlapping with) the other
//! segment.
use geo::{kernels::Orientation, Coordinate};

/// Orientation of the ordered triple `(p, q, r)`.
///
/// Evaluates `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`
/// in plain floating point. A positive value is a clockwise turn, a
/// negative value a counter-clockwise turn and zero is collinear.
#[inline]
pub fn orientation(p: Coordinate<f64>, q: Coordinate<f64>, r: Coordinate<f64>) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val > 0. {
        Orientation::Clockwise
    } else if val < 0. {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if `q` lies in the axis-aligned bounding box of `p` and `r`.
///
/// This is only a containment test for the box; callers use it on
/// points already known to be collinear with `p` and `r`.
#[inline]
pub fn on_bounding_box(p: Coordinate<f64>, q: Coordinate<f64>, r: Coordinate<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Checks if segment `p1`-`q1` meets segment `p2`-`q2`.
///
/// Returns `true` for proper crossings, for an end point touching the
/// other segment, and for collinear overlaps.
pub fn intersects(
    p1: Coordinate<f64>,
    q1: Coordinate<f64>,
    p2: Coordinate<f64>,
    q2: Coordinate<f64>,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    use Orientation::Collinear;
    (o1 == Collinear && on_bounding_box(p1, p2, q1))
        || (o2 == Collinear && on_bounding_box(p1, q2, q1))
        || (o3 == Collinear && on_bounding_box(p2, p1, q2))
        || (o4 == Collinear && on_bounding_box(p2, q1, q2))
}
