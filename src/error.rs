use thiserror::Error;

/// Errors reported by graph construction and path search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index outside `0..vertex_count`.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
