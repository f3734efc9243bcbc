//! Constructors for well-known graph families and the small sample graphs used in demos
//! and benchmarks.
//!
//! # Example
//! ```
//! use hamiltonian::cs::graph::generators;
//! use hamiltonian::cs::graph::hamiltonian::HamiltonianPath;
//!
//! let star = generators::star(5);
//! assert_eq!(HamiltonianPath::new(&star).find_path(None).unwrap(), None);
//!
//! let ring = generators::cycle(5);
//! assert!(HamiltonianPath::new(&ring).find_path(None).unwrap().is_some());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::graph::adjacency_matrix::Graph;
use crate::error::{Error, Result};

// Every generator below only touches indices in `0..n`, so `add_edge` cannot fail.
fn connect(graph: &mut Graph, u: usize, v: usize) {
    let _ = graph.add_edge(u, v);
}

/// Undirected complete graph `K_n`.
pub fn complete(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for i in 0..n {
        for j in i + 1..n {
            connect(&mut graph, i, j);
        }
    }
    graph
}

/// Undirected line `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for i in 1..n {
        connect(&mut graph, i - 1, i);
    }
    graph
}

/// Undirected ring `0 - 1 - ... - (n-1) - 0`. For `n < 3` this is the same as [`path`].
pub fn cycle(n: usize) -> Graph {
    let mut graph = path(n);
    if n >= 3 {
        connect(&mut graph, n - 1, 0);
    }
    graph
}

/// Undirected star with centre `0` and leaves `1..n`.
pub fn star(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for leaf in 1..n {
        connect(&mut graph, 0, leaf);
    }
    graph
}

/// Erdős–Rényi `G(n, p)`: each possible edge is present with probability `p`.
///
/// Self-loops are never generated. The same `seed` always yields the same graph.
pub fn random(n: usize, p: f64, directed: bool, seed: u64) -> Result<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_input(format!(
            "edge probability must be in [0, 1], got {}",
            p
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = Graph::with_direction(n, directed);
    for u in 0..n {
        let targets = if directed { 0..n } else { u + 1..n };
        for v in targets {
            if u != v && rng.gen_bool(p) {
                connect(&mut graph, u, v);
            }
        }
    }
    Ok(graph)
}

/// Undirected 5-vertex graph with a Hamiltonian path and a few extra chords.
pub fn sample_undirected() -> Graph {
    let mut graph = Graph::new(5);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (1, 3), (0, 4)] {
        connect(&mut graph, u, v);
    }
    graph
}

/// Directed 4-vertex graph whose only Hamiltonian path is `0 -> 1 -> 2 -> 3`.
pub fn sample_directed() -> Graph {
    let mut graph = Graph::new_directed(4);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (0, 3)] {
        connect(&mut graph, u, v);
    }
    graph
}

/// Two disjoint edges; no Hamiltonian path.
pub fn sample_disconnected() -> Graph {
    let mut graph = Graph::new(4);
    for (u, v) in [(0, 1), (2, 3)] {
        connect(&mut graph, u, v);
    }
    graph
}
