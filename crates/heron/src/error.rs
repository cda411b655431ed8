pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] heron_graphlib::Error),

    #[error("key not found")]
    KeyNotFound,

    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("graph contains a cycle")]
    NotADag,

    #[error("internal invariant violated: {message}")]
    InvariantViolation { message: String },
}
