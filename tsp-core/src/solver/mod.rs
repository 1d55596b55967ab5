//! The tour engine: cost evaluation and two independent solvers which work read-only on a graph.
//!
//! # Solvers
//!
//! - [`NearestNeighborSolver`]: greedy heuristic, `O(V^2)`, requires a start node;
//! - [`ExactSolver`]: brute force over all node permutations, `O(V! * V)`, practical only for
//!   graphs up to about ten nodes.
//!
//! Both measure only the search itself with a monotonic clock and store elapsed time in the tour.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod cost;
pub use self::cost::{path_cost, tour_cost};

mod exact;
pub use self::exact::*;

mod nearest_neighbor;
pub use self::nearest_neighbor::*;

use crate::models::{Graph, Node, Tour};
use crate::utils::{Environment, TspError};
use std::sync::Arc;

/// A common interface of tour solvers.
pub trait TourSolver {
    /// Builds a tour over the graph.
    fn solve(&self, graph: &Graph, environment: &Environment) -> Result<Tour, TspError>;
}

/// Specifies which solver to run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverKind {
    /// Nearest neighbor heuristic from the start node.
    NearestNeighbor {
        /// A start node.
        start: Node,
    },
    /// Exact search with the given infeasible permutation policy.
    Exact {
        /// A policy for permutations using missing edges.
        policy: InfeasiblePolicy,
    },
}

impl SolverKind {
    fn create_solver(&self) -> Box<dyn TourSolver> {
        match self {
            Self::NearestNeighbor { start } => Box::new(NearestNeighborSolver::new(start)),
            Self::Exact { policy } => Box::new(ExactSolver::new(*policy)),
        }
    }
}

/// Runs solvers on a graph reporting progress to the environment logger.
pub struct Solver {
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }

    /// Solves the graph using a solver of the given kind.
    pub fn solve(&self, graph: &Graph, kind: &SolverKind) -> Result<Tour, TspError> {
        let name = match kind {
            SolverKind::NearestNeighbor { start } => format!("heuristic (start: '{start}')"),
            SolverKind::Exact { policy } => format!("exact (infeasible: {policy:?})"),
        };

        self.environment.log(&format!(
            "{name} solver started on graph with {} nodes and {} edges",
            graph.size(),
            graph.edge_count()
        ));

        let result = kind.create_solver().solve(graph, self.environment.as_ref());

        match &result {
            Ok(tour) => self.environment.log(&format!(
                "{name} solver found tour of {} nodes with cost {} in {}ms",
                tour.cycle().len(),
                tour.cost,
                tour.elapsed.as_millis()
            )),
            Err(err) => self.environment.log(&format!("{name} solver failed: {err}")),
        }

        result
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}
