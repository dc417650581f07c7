//! Maintains a dynamic collection of polyline streets and the points
//! where they cross, and derives a street graph from them.
//!
//! 1. [Crossing Maintenance](#crossing-maintenance)
//! 1. [Street Graph](#street-graph)
//!
//! # Crossing Maintenance
//!
//! [`Crossings`] owns a [`StreetStore`] and supports adding,
//! modifying and removing streets one at a time. Each mutation
//! recomputes crossings of the affected street against every other
//! street by testing all segment pairs with [`intersects`] and
//! computing crossing points with [`solve`]. Crossings between
//! unaffected streets are never recomputed.
//!
//! Every crossing point remembers which streets produced it, so that
//! modifying or removing a street withdraws exactly the points it
//! contributed.
//!
//! ## Usage
//!
//! ```rust
//! use geo::Coordinate;
//! use street_crossings::Crossings;
//!
//! let mut crossings = Crossings::new();
//! crossings.add("A", vec![(0., 0.), (10., 0.)])?;
//! crossings.add("B", vec![(5., -5.), (5., 5.)])?;
//!
//! let a = crossings.street("A").unwrap();
//! assert!(a.has_intersection(Coordinate { x: 5., y: 0. }));
//!
//! crossings.remove("A")?;
//! assert_eq!(crossings.street("B").unwrap().num_intersections(), 0);
//! # Ok::<(), street_crossings::CrossingError>(())
//! ```
//!
//! # Street Graph
//!
//! [`Graph`] is derived on demand: one vertex per street and one edge
//! per pair of streets sharing a crossing point. Its `Display` impl
//! prints the `V = { ... }` / `E = { ... }` listing used by the
//! `street-graph` binary, which reads [`Command`]s from stdin.
mod point;
pub use point::{CrossingPoint, NonFinite};

pub mod predicate;
pub use predicate::intersects;

pub mod solver;
pub use solver::solve;

mod street;
pub use street::{Contributors, Street, StreetStore};

mod maintainer;
pub use maintainer::{crossings_between, Crossings};

mod graph;
pub use graph::{Edge, Graph, Vertex};

mod command;
pub use command::Command;

mod error;
pub use error::{CrossingError, ParseError};
