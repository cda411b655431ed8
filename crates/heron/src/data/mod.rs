//! Generic containers.

pub mod indexed_pq;
pub mod list;
