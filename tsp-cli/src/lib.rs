//! A TSP command line library public API: problem and config formats, result writers,
//! problem generation and interactive session.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod extensions;
