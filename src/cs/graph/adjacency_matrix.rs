//! Dense adjacency-matrix graph over vertices `0..vertex_count`.
//!
//! The matrix is fixed in size at construction. Edges may be added and removed freely
//! afterwards, and undirected graphs keep the matrix symmetric at all times.
//!
//! # Example
//! ```
//! use hamiltonian::cs::graph::adjacency_matrix::Graph;
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! assert!(g.has_edge(1, 0));
//! assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
//! assert!(g.add_edge(0, 3).is_err());
//! ```

use std::fmt;

use log::warn;
use ndarray::Array2;

use crate::error::{Error, Result};

/// Directed or undirected graph backed by a `vertex_count x vertex_count` boolean matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: Array2<bool>,
    vertex_count: usize,
    directed: bool,
}

impl Graph {
    /// Create an undirected graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, false)
    }

    /// Create a directed graph with `vertex_count` vertices and no edges.
    pub fn new_directed(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, true)
    }

    pub fn with_direction(vertex_count: usize, directed: bool) -> Self {
        Graph {
            adjacency: Array2::from_elem((vertex_count, vertex_count), false),
            vertex_count,
            directed,
        }
    }

    /// Build a graph and insert every `(origin, destination)` pair.
    ///
    /// Fails on the first out-of-range pair.
    pub fn from_edges(vertex_count: usize, directed: bool, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::with_direction(vertex_count, directed);
        for &(origin, destination) in edges {
            graph.add_edge(origin, destination)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add an edge from `origin` to `destination` (and back, if undirected).
    ///
    /// Returns `Error::InvalidVertex` naming the first out-of-range index; the graph is
    /// left untouched in that case.
    pub fn add_edge(&mut self, origin: usize, destination: usize) -> Result<()> {
        if let Err(err) = self.check_vertex(origin).and(self.check_vertex(destination)) {
            warn!("rejected edge ({}, {}): {}", origin, destination, err);
            return Err(err);
        }

        self.adjacency[[origin, destination]] = true;
        if !self.directed {
            self.adjacency[[destination, origin]] = true;
        }
        Ok(())
    }

    /// Remove the edge from `origin` to `destination` (and back, if undirected).
    ///
    /// Out-of-range indices are ignored, the same as removing an edge that does not exist.
    pub fn remove_edge(&mut self, origin: usize, destination: usize) {
        if !self.contains(origin) || !self.contains(destination) {
            return;
        }

        self.adjacency[[origin, destination]] = false;
        if !self.directed {
            self.adjacency[[destination, origin]] = false;
        }
    }

    /// Whether an edge from `origin` to `destination` exists. False for any out-of-range pair.
    pub fn has_edge(&self, origin: usize, destination: usize) -> bool {
        self.adjacency
            .get([origin, destination])
            .copied()
            .unwrap_or(false)
    }

    /// Vertices reachable from `vertex` by one edge, in ascending index order.
    ///
    /// Yields nothing for an out-of-range vertex.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row = if self.contains(vertex) {
            Some(self.adjacency.row(vertex))
        } else {
            None
        };

        row.into_iter().flat_map(|row| {
            row.into_iter()
                .enumerate()
                .filter_map(|(w, &present)| present.then_some(w))
        })
    }

    /// Every edge as `(origin, destination)` in row-major order.
    ///
    /// Undirected edges are listed once, with `origin <= destination`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let directed = self.directed;
        self.adjacency
            .indexed_iter()
            .filter(move |&((u, v), &present)| present && (directed || u <= v))
            .map(|((u, v), _)| (u, v))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn contains(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed {
            "Directed"
        } else {
            "Undirected"
        };
        writeln!(f, "{} graph with {} vertices", kind, self.vertex_count)?;

        writeln!(f, "Adjacency matrix:")?;
        for (i, row) in self.adjacency.outer_iter().enumerate() {
            let cells: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
            writeln!(f, "  {}: {}", i, cells.join(" "))?;
        }

        writeln!(f, "Edges:")?;
        let symbol = if self.directed { "->" } else { "--" };
        for (u, v) in self.edges() {
            writeln!(f, "  {} {} {}", u, symbol, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut g = Graph::new(4);
        g.add_edge(1, 3).unwrap();
        assert!(g.has_edge(1, 3));
        assert!(g.has_edge(3, 1));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut g = Graph::new_directed(3);
        g.add_edge(0, 2).unwrap();
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(2, 0));
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut g = Graph::new(3);
        let before = g.clone();

        let err = g.add_edge(0, 3).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            }
        );

        // Origin is reported first when both are bad.
        let err = g.add_edge(5, 9).unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { vertex: 5, .. }));

        assert_eq!(g, before);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1).unwrap();
        g.remove_edge(1, 0);
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
    }

    #[test]
    fn test_remove_directed_edge_keeps_reverse() {
        let mut g = Graph::new_directed(2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        g.remove_edge(0, 1);
        assert!(!g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn test_remove_edge_out_of_range_is_noop() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        let before = g.clone();
        g.remove_edge(0, 7);
        g.remove_edge(9, 9);
        assert_eq!(g, before);
    }

    #[test]
    fn test_has_edge_out_of_range() {
        let g = Graph::new(2);
        assert!(!g.has_edge(0, 2));
        assert!(!g.has_edge(usize::MAX, 0));
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = Graph::new(5);
        g.add_edge(2, 4).unwrap();
        g.add_edge(2, 0).unwrap();
        g.add_edge(2, 3).unwrap();
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(g.neighbors(1).count(), 0);
        assert_eq!(g.neighbors(5).count(), 0);
    }

    #[test]
    fn test_self_loop_is_stored() {
        let mut g = Graph::new(2);
        g.add_edge(1, 1).unwrap();
        assert!(g.has_edge(1, 1));
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edges_listing() {
        let g = Graph::from_edges(3, false, &[(1, 0), (2, 1)]).unwrap();
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);

        let d = Graph::from_edges(3, true, &[(1, 0), (2, 1)]).unwrap();
        assert_eq!(d.edges().collect::<Vec<_>>(), vec![(1, 0), (2, 1)]);
        assert_eq!(d.edge_count(), 2);
    }

    #[test]
    fn test_from_edges_rejects_bad_pair() {
        let result = Graph::from_edges(2, true, &[(0, 1), (1, 2)]);
        assert!(matches!(result, Err(Error::InvalidVertex { vertex: 2, .. })));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(0, 0));
    }

    #[test]
    fn test_display() {
        let g = Graph::from_edges(3, true, &[(0, 1), (1, 2)]).unwrap();
        let expected = "Directed graph with 3 vertices\n\
                        Adjacency matrix:\n  0: 0 1 0\n  1: 0 0 1\n  2: 0 0 0\n\
                        Edges:\n  0 -> 1\n  1 -> 2\n";
        assert_eq!(g.to_string(), expected);

        let u = Graph::from_edges(2, false, &[(0, 1)]).unwrap();
        assert!(u.to_string().starts_with("Undirected graph with 2 vertices"));
        assert!(u.to_string().ends_with("Edges:\n  0 -- 1\n"));
    }
}
