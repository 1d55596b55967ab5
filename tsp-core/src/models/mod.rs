//! A collection of models to represent a graph and tours over it.

mod graph;
pub use self::graph::*;

mod tour;
pub use self::tour::*;
