use std::{collections::BTreeMap, convert::TryFrom};

use geo::{Coordinate, LineString};
use smallvec::SmallVec;

use crate::point::CrossingPoint;

/// Names of the streets whose crossing produced a point. Nearly
/// always a single name; kept sorted and free of duplicates.
pub type Contributors = SmallVec<[String; 2]>;

/// A named polyline together with the points where it crosses other
/// streets.
#[derive(Debug, Clone)]
pub struct Street {
    name: String,
    polyline: LineString<f64>,
    intersections: BTreeMap<CrossingPoint, Contributors>,
}

impl Street {
    pub(crate) fn new(name: String, polyline: LineString<f64>) -> Self {
        Street {
            name,
            polyline,
            intersections: BTreeMap::new(),
        }
    }

    /// Get the street's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the street's polyline.
    #[inline]
    pub fn polyline(&self) -> &LineString<f64> {
        &self.polyline
    }

    /// Iterate over the distinct crossing points of this street, in
    /// lexicographic order.
    pub fn intersections(&self) -> impl Iterator<Item = CrossingPoint> + '_ {
        self.intersections.keys().copied()
    }

    /// Number of distinct crossing points.
    pub fn num_intersections(&self) -> usize {
        self.intersections.len()
    }

    /// Checks if `coord` is one of the crossing points (exact match).
    pub fn has_intersection(&self, coord: Coordinate<f64>) -> bool {
        CrossingPoint::try_from(coord)
            .map(|pt| self.intersections.contains_key(&pt))
            .unwrap_or(false)
    }

    /// The streets that produced the crossing point `pt`; empty if
    /// `pt` is not a crossing point of this street.
    pub fn contributors(&self, pt: &CrossingPoint) -> &[String] {
        self.intersections
            .get(pt)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn set_polyline(&mut self, polyline: LineString<f64>) {
        self.polyline = polyline;
    }

    /// Record that crossing `other` produced `pt`.
    pub(crate) fn add_intersection(&mut self, pt: CrossingPoint, other: &str) {
        let contributors = self.intersections.entry(pt).or_default();
        if let Err(idx) = contributors.binary_search_by(|c| c.as_str().cmp(other)) {
            contributors.insert(idx, other.to_owned());
        }
    }

    /// Withdraw every point contributed by `other`. Points that no
    /// longer have any contributor are dropped. Returns the number of
    /// dropped points.
    pub(crate) fn withdraw(&mut self, other: &str) -> usize {
        let before = self.intersections.len();
        self.intersections.retain(|_, contributors| {
            contributors.retain(|c| c.as_str() != other);
            !contributors.is_empty()
        });
        before - self.intersections.len()
    }

    pub(crate) fn clear_intersections(&mut self) {
        self.intersections.clear();
    }
}

/// Owns every street of a session, in insertion order.
///
/// The store performs no geometry; it is mutated exclusively through
/// [`Crossings`](crate::Crossings), which keeps the intersection sets
/// consistent.
#[derive(Debug, Clone, Default)]
pub struct StreetStore {
    streets: Vec<Street>,
}

impl StreetStore {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.streets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Street> {
        self.position(name).map(|idx| &self.streets[idx])
    }

    /// Iterate over the streets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Street> {
        self.streets.iter()
    }

    /// Iterate over `(name, polyline)` pairs in insertion order.
    pub fn polylines(&self) -> impl Iterator<Item = (&str, &LineString<f64>)> {
        self.streets.iter().map(|s| (s.name(), s.polyline()))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Street> {
        self.position(name).map(move |idx| &mut self.streets[idx])
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Street> {
        self.streets.iter_mut()
    }

    pub(crate) fn push(&mut self, street: Street) {
        debug_assert!(!self.contains(street.name()), "duplicate street pushed");
        self.streets.push(street);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Street> {
        self.position(name).map(|idx| self.streets.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.streets.iter().position(|s| s.name() == name)
    }
}
