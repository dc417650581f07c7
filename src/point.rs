use std::{cmp::Ordering, convert::TryFrom, fmt};

use geo::Coordinate;

/// Wraps a [`Coordinate`] to support exact, lexicographic ordering.
///
/// The ordering is by `x` and then by `y`. Implements `Ord` and `Eq`
/// even though `Coordinate` doesn't, so that crossing points can be
/// used as keys of ordered collections. Two points are equal only if
/// both components are exactly equal; no tolerance is applied.
///
/// Construction checks that both components are finite, which is what
/// makes the total order sound.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CrossingPoint(Coordinate<f64>);

impl CrossingPoint {
    /// The wrapped coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<f64> {
        self.0
    }
}

/// Lexicographic ordering by `x` and then by `y` coordinate.
impl PartialOrd for CrossingPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CrossingPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both components are finite, so `partial_cmp` never fails.
        self.0
            .x
            .partial_cmp(&other.0.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.0
                    .y
                    .partial_cmp(&other.0.y)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl Eq for CrossingPoint {}

/// Error returned when a coordinate has a NaN or infinite component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonFinite(pub Coordinate<f64>);

impl TryFrom<Coordinate<f64>> for CrossingPoint {
    type Error = NonFinite;

    fn try_from(pt: Coordinate<f64>) -> Result<Self, Self::Error> {
        if pt.x.is_finite() && pt.y.is_finite() {
            Ok(CrossingPoint(pt))
        } else {
            Err(NonFinite(pt))
        }
    }
}

impl From<CrossingPoint> for Coordinate<f64> {
    fn from(pt: CrossingPoint) -> Self {
        pt.0
    }
}

/// Renders as `(x, y)`, so integral values print without a fraction.
impl fmt::Display for CrossingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coord(f, self.0)
    }
}

pub(crate) fn write_coord(f: &mut fmt::Formatter<'_>, c: Coordinate<f64>) -> fmt::Result {
    write!(f, "({}, {})", c.x, c.y)
}
