#![forbid(unsafe_code)]

//! Graph container APIs used by `heron`.
//!
//! Two containers live here: [`AdjacencyList`], a mutable weighted graph keyed by integer node
//! ids, and [`FlowGraph`], a capacity/flow graph with paired residual edges for max-flow
//! algorithms.

pub mod error;
pub mod flow;
pub mod graph;

pub use error::{Error, Result};
pub use flow::{FlowEdge, FlowGraph};
pub use graph::{AdjacencyList, AdjacencyMatrix, GraphOptions, NodeId};
