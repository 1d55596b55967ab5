//! Contains logic to build a graph from raw textual input.
//!
//! Input consists of three whitespace separated lists:
//!
//! - **nodes**: declared nodes, used only to catch typos: each of them must be an edge endpoint;
//! - **edges**: endpoints taken in pairs, a trailing unpaired token is ignored;
//! - **costs**: one non-negative integer per edge, aligned with edge pairs by position.
//!
//! The authoritative node set is derived from edges, so it is fine to declare fewer nodes
//! than edges use.

mod token_reader;
pub use self::token_reader::*;
