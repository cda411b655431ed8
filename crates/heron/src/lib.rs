#![forbid(unsafe_code)]

//! Classic data structures and graph algorithms.
//!
//! The containers in [`data`] are generic; the algorithms in [`alg`] run over the graph types
//! re-exported from `heron-graphlib` as [`graphlib`].

pub use heron_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alg;
pub mod data;
pub mod error;

pub use data::indexed_pq::IndexedPriorityQueue;
pub use data::list::List;
pub use error::{Error, Result};
