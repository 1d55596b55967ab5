//! Core crate contains a graph model and a tour engine to solve small instances of
//! ***Traveling Salesman Problem*** over weighted undirected graphs.
//!
//! # Overview
//!
//! A graph is built from three raw token lists: declared nodes, edge endpoints (consumed in
//! pairs) and edge costs. Once built, the graph is read-only and can be queried by two solvers:
//!
//! - **nearest neighbor**: a greedy heuristic which starts from a given node, see [`solver::solve_heuristic`];
//! - **exact**: a brute-force search over all node permutations, see [`solver::solve_exact`].
//!
//! Both solvers return a [`models::Tour`] with the node sequence, total cost and the wall-clock
//! time spent in search.
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let graph = read_graph("A B C", "A B B C C A", "1 2 3")?;
//!
//! let heuristic = solve_heuristic(&graph, "A")?;
//! assert_eq!(heuristic.nodes, vec!["A", "B", "C", "A"]);
//! assert_eq!(heuristic.cost, 6);
//!
//! let exact = solve_exact(&graph)?;
//! assert_eq!(exact.nodes, vec!["A", "B", "C"]);
//! assert_eq!(exact.cost, 6);
//! # Ok::<(), TspError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/integration/scenarios_test.rs"]
mod scenarios_test;

#[cfg(test)]
#[path = "../tests/integration/properties_test.rs"]
mod properties_test;

pub mod format;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
