//! This module reimports commonly used types.

pub use crate::format::{build_graph, read_graph};

pub use crate::models::{Cost, Graph, GraphBuilder, Node, SolverMethod, Tour, Weight};

pub use crate::solver::{path_cost, solve_exact, solve_heuristic, tour_cost};
pub use crate::solver::{ExactSolver, InfeasiblePolicy, NearestNeighborSolver, Solver, SolverKind, TourSolver};

pub use crate::utils::{Environment, ErrorKind, GenericError, GenericResult, InfoLogger, Timer, TspError};
