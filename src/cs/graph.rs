pub mod adjacency_matrix;
pub mod generators;
pub mod hamiltonian;

pub use adjacency_matrix::Graph;
pub use hamiltonian::{is_hamiltonian_path, HamiltonianPath, SearchStats};
