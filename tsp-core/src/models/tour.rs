#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::{Cost, Node};
use std::fmt;
use std::time::Duration;

/// Specifies a method used to construct a tour.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SolverMethod {
    /// Greedy nearest neighbor heuristic.
    NearestNeighbor,
    /// Brute-force search over all permutations.
    Exact,
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearestNeighbor => write!(f, "heuristic"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Represents a closed walk over the graph nodes.
///
/// A tour produced by nearest neighbor heuristic lists start node twice: as the first and the
/// last element. A tour produced by exact search lists every node once, the edge from the last
/// node back to the first one is implied. In both cases, `cost` includes the closing edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Visited nodes in order.
    pub nodes: Vec<Node>,
    /// Total cost including closing edge.
    pub cost: Cost,
    /// Time spent in search.
    pub elapsed: Duration,
    /// A method which produced the tour.
    pub method: SolverMethod,
}

impl Tour {
    /// Returns true if closing node is listed explicitly.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() > 1 && self.nodes.first() == self.nodes.last()
    }

    /// Returns visited nodes without repeated closing node.
    pub fn cycle(&self) -> &[Node] {
        if self.is_closed() { &self.nodes[..self.nodes.len() - 1] } else { self.nodes.as_slice() }
    }

    /// Returns time spent in search as fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
