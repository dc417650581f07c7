use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use geo::LineString;
use itertools::Itertools;

use crate::{
    point::{write_coord, CrossingPoint},
    street::StreetStore,
};

/// A street as a vertex of the [`Graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// 1-based position of the street in insertion order.
    pub index: usize,
    pub name: String,
    pub polyline: LineString<f64>,
}

/// An undirected edge between two streets that share a crossing
/// point. `u` is always lexicographically smaller than `v`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub u: String,
    pub v: String,
}

/// Snapshot of the street graph derived from a [`StreetStore`].
///
/// Vertices are listed in insertion order; edges are unique and
/// sorted by `(u, v)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build the graph of `store`.
    ///
    /// Two streets are adjacent iff their intersection sets share a
    /// point. When more than two streets meet at one point, every pair
    /// among them gets an edge.
    pub fn from_store(store: &StreetStore) -> Self {
        let vertices = store
            .iter()
            .enumerate()
            .map(|(i, s)| Vertex {
                index: i + 1,
                name: s.name().to_owned(),
                polyline: s.polyline().clone(),
            })
            .collect();

        let mut incident: BTreeMap<CrossingPoint, BTreeSet<&str>> = BTreeMap::new();
        for street in store.iter() {
            for pt in street.intersections() {
                incident.entry(pt).or_default().insert(street.name());
            }
        }

        let edges = incident
            .values()
            .flat_map(|names| names.iter().tuple_combinations())
            .map(|(&u, &v)| Edge {
                u: u.to_owned(),
                v: v.to_owned(),
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Graph { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Checks if streets `a` and `b` are adjacent, in either order.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        self.edges.iter().any(|e| e.u == u && e.v == v)
    }

    /// Names of the streets adjacent to `name`, sorted.
    pub fn neighbors<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter_map(move |e| {
                if e.u == name {
                    Some(e.v.as_str())
                } else if e.v == name {
                    Some(e.u.as_str())
                } else {
                    None
                }
            })
            .sorted()
    }
}

/// Renders the vertex and edge listing:
///
/// ```text
/// V = {
/// 1: [(0, 0), (10, 0)]
/// 2: [(5, -5), (5, 5)]
/// }
/// E = {
/// <1,A,B>
/// }
/// ```
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "V = {{")?;
        for vertex in &self.vertices {
            write!(f, "{}: [", vertex.index)?;
            for (i, coord) in vertex.polyline.0.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_coord(f, *coord)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "E = {{")?;
        for (i, edge) in self.edges.iter().enumerate() {
            writeln!(f, "<{},{},{}>", i + 1, edge.u, edge.v)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maintainer::tests::init_log, Crossings};

    #[test]
    fn test_single_edge() {
        init_log();
        let mut crossings = Crossings::new();
        crossings.add("A", vec![(0., 0.), (10., 0.)]).unwrap();
        crossings.add("B", vec![(5., -5.), (5., 5.)]).unwrap();

        let graph = crossings.graph();
        assert_eq!(graph.vertices().len(), 2);
        assert_eq!(
            graph.edges(),
            &[Edge {
                u: "A".into(),
                v: "B".into()
            }]
        );
        assert!(graph.has_edge("B", "A"));
    }

    #[test]
    fn test_remove_drops_vertex_and_edges() {
        init_log();
        let mut crossings = Crossings::new();
        crossings.add("A", vec![(0., 0.), (10., 0.)]).unwrap();
        crossings.add("B", vec![(5., -5.), (5., 5.)]).unwrap();
        crossings.remove("A").unwrap();

        let graph = crossings.graph();
        let names: Vec<_> = graph.vertices().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
        assert_eq!(graph.vertices()[0].index, 1);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_coincident_streets() {
        init_log();
        let mut crossings = Crossings::new();
        // Three streets through (5, 0), one more crossing only A.
        crossings.add("C", vec![(0., -5.), (10., 5.)]).unwrap();
        crossings.add("A", vec![(0., 0.), (10., 0.)]).unwrap();
        crossings.add("B", vec![(5., -5.), (5., 5.)]).unwrap();
        crossings.add("D", vec![(8., -1.), (8., 1.)]).unwrap();

        let graph = crossings.graph();
        let edges: Vec<_> = graph
            .edges()
            .iter()
            .map(|e| (e.u.as_str(), e.v.as_str()))
            .collect();
        assert_eq!(edges, vec![("A", "B"), ("A", "C"), ("A", "D"), ("B", "C")]);
        assert_eq!(graph.neighbors("A").collect::<Vec<_>>(), vec!["B", "C", "D"]);
        assert_eq!(graph.neighbors("D").collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_display() {
        init_log();
        let mut crossings = Crossings::new();
        crossings.add("A", vec![(0., 0.), (10., 0.)]).unwrap();
        crossings.add("B", vec![(5., -5.), (5., 5.)]).unwrap();
        crossings.add("Far", vec![(2.5, 20.)]).unwrap();

        let expected = "V = {\n\
                        1: [(0, 0), (10, 0)]\n\
                        2: [(5, -5), (5, 5)]\n\
                        3: [(2.5, 20)]\n\
                        }\n\
                        E = {\n\
                        <1,A,B>\n\
                        }";
        assert_eq!(crossings.graph().to_string(), expected);
    }

    #[test]
    fn test_empty() {
        let graph = Crossings::new().graph();
        assert_eq!(graph.to_string(), "V = {\n}\nE = {\n}");
    }
}
