use crate::graph::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node {id} does not exist")]
    NodeNotFound { id: NodeId },

    #[error("edge {from} -> {to} does not exist")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("index {index} is out of range for {len} nodes")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
