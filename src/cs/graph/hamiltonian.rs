//! A backtracking search for Hamiltonian paths: paths that visit every vertex of a graph
//! exactly once. Works on both directed and undirected [`Graph`]s.
//!
//! Roots are tried in ascending vertex order and, at every branch point, neighbors are
//! explored in ascending order, so results are deterministic. The search is exhaustive and
//! takes O(n!) steps in the worst case (dense graphs).
//!
//! # Example
//! ```
//! use hamiltonian::cs::graph::adjacency_matrix::Graph;
//! use hamiltonian::cs::graph::hamiltonian::HamiltonianPath;
//!
//! // A line: 0 - 1 - 2 - 3.
//! let mut g = Graph::new(4);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//!
//! let search = HamiltonianPath::new(&g);
//! assert_eq!(search.find_path(None).unwrap(), Some(vec![0, 1, 2, 3]));
//!
//! // The line can be walked from either end.
//! assert_eq!(
//!     search.find_all_paths(),
//!     vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0]]
//! );
//! ```
use std::ops::ControlFlow;

use bitvec::prelude::*;
use log::{debug, trace, warn};

use crate::cs::graph::adjacency_matrix::Graph;
use crate::error::{Error, Result};

/// Counters collected during one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Root vertices a backtracking attempt was started from.
    pub roots_tried: usize,
    /// Placements made, i.e. recursive calls across all roots.
    pub states_explored: usize,
}

/// Working state of one backtracking attempt. Allocated once per search call
/// and reset in place before every root.
struct SearchState {
    /// `None` marks a slot not yet filled.
    sequence: Vec<Option<usize>>,
    visited: BitVec,
    stats: SearchStats,
}

impl SearchState {
    fn new(vertex_count: usize) -> Self {
        SearchState {
            sequence: vec![None; vertex_count],
            visited: bitvec![0; vertex_count],
            stats: SearchStats::default(),
        }
    }

    fn reset(&mut self) {
        self.sequence.fill(None);
        self.visited.fill(false);
    }

    /// The current sequence, if every slot is filled.
    fn path(&self) -> Option<Vec<usize>> {
        self.sequence.iter().copied().collect()
    }
}

/// Hamiltonian path search bound to a borrowed graph.
///
/// Edge changes made to the graph between searches are seen by later searches.
#[derive(Clone, Copy, Debug)]
pub struct HamiltonianPath<'g> {
    graph: &'g Graph,
}

impl<'g> HamiltonianPath<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        HamiltonianPath { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Find one Hamiltonian path.
    ///
    /// With `start = Some(v)` only paths beginning at `v` are considered. With `None`, every
    /// vertex is tried as the root in ascending order and the first success wins.
    ///
    /// Returns `Ok(None)` when no path exists (including the empty graph) and
    /// `Err(Error::InvalidVertex)` when `start` is out of range.
    pub fn find_path(&self, start: Option<usize>) -> Result<Option<Vec<usize>>> {
        self.find_path_with_stats(start).map(|(path, _)| path)
    }

    /// Same as [`find_path`](Self::find_path), also returning search counters.
    pub fn find_path_with_stats(
        &self,
        start: Option<usize>,
    ) -> Result<(Option<Vec<usize>>, SearchStats)> {
        let n = self.graph.vertex_count();
        let roots = match start {
            Some(vertex) if vertex >= n => {
                warn!("search start {} is out of range for {} vertices", vertex, n);
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count: n,
                });
            }
            Some(vertex) => vertex..vertex + 1,
            None => 0..n,
        };

        let mut state = SearchState::new(n);
        for root in roots {
            state.reset();
            state.stats.roots_tried += 1;
            trace!("trying root {}", root);

            let flow = self.backtrack(&mut state, root, 0, &mut |_| ControlFlow::Break(()));
            if flow.is_break() {
                debug!(
                    "found Hamiltonian path from root {} ({} roots, {} states)",
                    root, state.stats.roots_tried, state.stats.states_explored
                );
                return Ok((state.path(), state.stats));
            }
        }

        debug!(
            "no Hamiltonian path in {} vertices ({} roots, {} states)",
            n, state.stats.roots_tried, state.stats.states_explored
        );
        Ok((None, state.stats))
    }

    /// Enumerate every Hamiltonian path, in discovery order.
    ///
    /// Paths are grouped by root (ascending) and ordered by ascending neighbor choice within a
    /// root. Nothing is deduplicated: in an undirected graph each path also appears reversed,
    /// discovered from its other endpoint.
    pub fn find_all_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let stats = self.explore_all(&mut |state| {
            if let Some(path) = state.path() {
                paths.push(path);
            }
            ControlFlow::Continue(())
        });
        debug!(
            "enumerated {} Hamiltonian paths ({} states)",
            paths.len(),
            stats.states_explored
        );
        paths
    }

    /// Number of paths [`find_all_paths`](Self::find_all_paths) would return.
    pub fn count_paths(&self) -> usize {
        let mut count = 0;
        let stats = self.explore_all(&mut |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        debug!(
            "counted {} Hamiltonian paths ({} states)",
            count, stats.states_explored
        );
        count
    }

    fn explore_all<F>(&self, on_complete: &mut F) -> SearchStats
    where
        F: FnMut(&SearchState) -> ControlFlow<()>,
    {
        let n = self.graph.vertex_count();
        let mut state = SearchState::new(n);
        for root in 0..n {
            state.reset();
            state.stats.roots_tried += 1;
            trace!("enumerating from root {}", root);
            // Enumeration callbacks never break.
            let _ = self.backtrack(&mut state, root, 0, on_complete);
        }
        state.stats
    }

    /// Place `current` at `position`, then extend through unvisited neighbors.
    ///
    /// On `Break` the placements along the current branch are left in `state` so the
    /// caller can read the finished path.
    fn backtrack<F>(
        &self,
        state: &mut SearchState,
        current: usize,
        position: usize,
        on_complete: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&SearchState) -> ControlFlow<()>,
    {
        state.stats.states_explored += 1;
        state.visited.set(current, true);
        state.sequence[position] = Some(current);

        if position + 1 == self.graph.vertex_count() {
            if on_complete(state).is_break() {
                return ControlFlow::Break(());
            }
        } else {
            for next in self.graph.neighbors(current) {
                if state.visited[next] {
                    continue;
                }
                if self
                    .backtrack(state, next, position + 1, on_complete)
                    .is_break()
                {
                    return ControlFlow::Break(());
                }
            }
        }

        // backtrack
        state.visited.set(current, false);
        state.sequence[position] = None;
        ControlFlow::Continue(())
    }
}

/// Check that `path` visits every vertex of `graph` exactly once along existing edges.
///
/// The empty graph has no Hamiltonian path, so an empty `path` is never accepted.
pub fn is_hamiltonian_path(graph: &Graph, path: &[usize]) -> bool {
    let n = graph.vertex_count();
    if n == 0 || path.len() != n {
        return false;
    }

    let mut seen = bitvec![0; n];
    for &v in path {
        if v >= n || seen[v] {
            return false;
        }
        seen.set(v, true);
    }

    path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}
