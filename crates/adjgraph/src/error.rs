pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read graph source: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph source is empty: expected a vertex count")]
    MissingVertexCount,

    #[error("invalid integer {token:?} at token {position}")]
    InvalidToken { position: usize, token: String },

    #[error("vertex count must be non-negative, got {count}")]
    NegativeVertexCount { count: i64 },

    #[error("weight matrix is truncated: expected {expected} weights, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

impl Error {
    /// Whether this error came from reading a weight-matrix source.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Error::VertexOutOfRange { .. })
    }
}
