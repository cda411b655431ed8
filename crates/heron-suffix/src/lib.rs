#![forbid(unsafe_code)]

//! Suffix ordering with adjacent longest-common-prefix lengths, and the substring searches built
//! on top of it.
//!
//! Everything works on slices of any `Ord` element type; the `*_substrings` helpers are thin
//! `&str` wrappers that operate on `char`s.

pub mod error;
pub mod lcp;
pub mod sentinel;
pub mod substrings;

pub use error::{Error, Result};
pub use lcp::{LcpEntry, LongestCommonPrefix};
pub use sentinel::Sentinel;
pub use substrings::{
    longest_common_subarrays, longest_common_substrings, longest_repeated_subarrays,
    longest_repeated_substrings, unique_subarrays, unique_substrings,
};
