//! Incremental maintenance of street crossings.
//!
//! Every mutation recomputes crossings of the affected street against
//! all other streets by brute force over segment pairs, and updates
//! both sides of each crossing. Pairs of unaffected streets are never
//! revisited.
use std::convert::TryFrom;

use geo::{Coordinate, LineString};
use itertools::iproduct;
use log::{debug, trace};

use crate::{
    error::CrossingError,
    graph::Graph,
    point::CrossingPoint,
    predicate::intersects,
    solver::{solve, Degenerate},
    street::{Street, StreetStore},
};

/// Computes every crossing point between the segments of `a` and the
/// segments of `b`.
///
/// Each segment pair accepted by [`intersects`] contributes the output
/// of [`solve`], so the result may contain repeated points (eg. when a
/// crossing is at a shared vertex of two consecutive segments).
pub fn crossings_between(
    a: &LineString<f64>,
    b: &LineString<f64>,
) -> Result<Vec<Coordinate<f64>>, Degenerate> {
    let mut output = Vec::new();
    let other: Vec<_> = b.lines().collect();
    for (l1, l2) in iproduct!(a.lines(), other) {
        if intersects(l1.start, l1.end, l2.start, l2.end) {
            output.push(solve(l1.start, l1.end, l2.start, l2.end)?);
        }
    }
    Ok(output)
}

/// A crossing point waiting to be committed, with the name of the
/// other street.
type Pending = (String, CrossingPoint);

/// Owns the street store and keeps every intersection set consistent
/// across `add`, `modify` and `remove`.
///
/// Each mutation is all-or-nothing: all fallible work happens before
/// the store is written, so an error leaves the store untouched.
///
/// ```rust
/// use street_crossings::Crossings;
/// let mut crossings = Crossings::new();
/// crossings.add("A", vec![(0., 0.), (10., 0.)]).unwrap();
/// crossings.add("B", vec![(5., -5.), (5., 5.)]).unwrap();
/// let graph = crossings.graph();
/// assert_eq!(graph.edges().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Crossings {
    store: StreetStore,
}

impl Crossings {
    pub fn new() -> Self {
        Default::default()
    }

    /// Read-only access to the streets.
    #[inline]
    pub fn store(&self) -> &StreetStore {
        &self.store
    }

    /// Get a street by name.
    pub fn street(&self, name: &str) -> Option<&Street> {
        self.store.get(name)
    }

    /// Derive the street graph from the current state.
    pub fn graph(&self) -> Graph {
        Graph::from_store(&self.store)
    }

    /// Add a new street and record its crossings with every existing
    /// street.
    pub fn add<S, P>(&mut self, name: S, polyline: P) -> Result<(), CrossingError>
    where
        S: Into<String>,
        P: Into<LineString<f64>>,
    {
        let name = name.into();
        let polyline = polyline.into();
        if self.store.contains(&name) {
            return Err(CrossingError::DuplicateStreet(name));
        }
        validate(&name, &polyline)?;

        let pending = self.pending_crossings(&name, &polyline)?;
        debug!(
            "add {name}: {n} crossings",
            name = name,
            n = pending.len()
        );

        self.store.push(Street::new(name.clone(), polyline));
        self.commit(&name, pending);
        Ok(())
    }

    /// Replace the polyline of an existing street.
    ///
    /// Crossings contributed by the old polyline are withdrawn from
    /// every other street, and crossings of the new polyline are
    /// recorded. A point still contributed by a third street survives.
    pub fn modify<P>(&mut self, name: &str, polyline: P) -> Result<(), CrossingError>
    where
        P: Into<LineString<f64>>,
    {
        let polyline = polyline.into();
        if !self.store.contains(name) {
            return Err(CrossingError::UnknownStreet(name.to_owned()));
        }
        validate(name, &polyline)?;

        let pending = self.pending_crossings(name, &polyline)?;
        debug!(
            "modify {name}: {n} crossings",
            name = name,
            n = pending.len()
        );

        self.withdraw(name);
        if let Some(street) = self.store.get_mut(name) {
            street.clear_intersections();
            street.set_polyline(polyline);
        }
        self.commit(name, pending);
        Ok(())
    }

    /// Remove a street, purging every crossing it contributed to the
    /// remaining streets. Returns the removed street.
    pub fn remove(&mut self, name: &str) -> Result<Street, CrossingError> {
        let street = self
            .store
            .remove(name)
            .ok_or_else(|| CrossingError::UnknownStreet(name.to_owned()))?;
        debug!("remove {name}", name = name);
        self.withdraw(name);
        Ok(street)
    }

    /// Compute crossings of `polyline` (the new shape of `name`)
    /// against every other street, without touching the store.
    fn pending_crossings(
        &self,
        name: &str,
        polyline: &LineString<f64>,
    ) -> Result<Vec<Pending>, CrossingError> {
        let mut pending = Vec::new();
        for other in self.store.iter().filter(|s| s.name() != name) {
            let points = crossings_between(polyline, other.polyline()).map_err(|_| {
                CrossingError::DegenerateIntersection(name.to_owned(), other.name().to_owned())
            })?;
            for coord in points {
                let pt = CrossingPoint::try_from(coord)
                    .map_err(|_| CrossingError::NonFiniteCoordinate(name.to_owned()))?;
                pending.push((other.name().to_owned(), pt));
            }
        }
        Ok(pending)
    }

    /// Record each pending crossing on both streets.
    fn commit(&mut self, name: &str, pending: Vec<Pending>) {
        for (other, pt) in pending {
            trace!("crossing {name} x {other} @ {pt}", name = name, other = other, pt = pt);
            if let Some(street) = self.store.get_mut(&other) {
                street.add_intersection(pt, name);
            }
            if let Some(street) = self.store.get_mut(name) {
                street.add_intersection(pt, &other);
            }
        }
    }

    /// Withdraw every point contributed by `name` from the other
    /// streets.
    fn withdraw(&mut self, name: &str) {
        for street in self.store.iter_mut().filter(|s| s.name() != name) {
            let dropped = street.withdraw(name);
            if dropped > 0 {
                trace!(
                    "withdraw {name} from {other}: {dropped} points",
                    name = name,
                    other = street.name(),
                    dropped = dropped
                );
            }
        }
    }
}

fn validate(name: &str, polyline: &LineString<f64>) -> Result<(), CrossingError> {
    if polyline.0.is_empty() {
        return Err(CrossingError::EmptyPolyline(name.to_owned()));
    }
    if polyline.0.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(CrossingError::NonFiniteCoordinate(name.to_owned()));
    }
    Ok(())
}
