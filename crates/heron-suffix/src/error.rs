#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("not enough sentinel values to separate {inputs} inputs")]
    TooManyInputs { inputs: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
