#[cfg(test)]
#[path = "../../tests/unit/solver/exact_test.rs"]
mod exact_test;

use super::TourSolver;
use super::cost::{cycle_cost_by_index, missing_edge_by_index};
use super::nearest_neighbor::to_labels;
use crate::models::{Cost, Graph, SolverMethod, Tour};
use crate::utils::{Environment, Timer, TspError, get_permutations};

/// Amount of nodes after which exact search becomes impractically slow.
const PRACTICAL_SIZE_LIMIT: usize = 10;

/// Finds a minimum cost tour by evaluating every node permutation, failing on the first
/// infeasible one.
pub fn solve_exact(graph: &Graph) -> Result<Tour, TspError> {
    ExactSolver::default().solve(graph, &Environment::default())
}

/// Specifies how exact search treats permutations which use a missing edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum InfeasiblePolicy {
    /// The whole search fails with missing edge error.
    #[default]
    Fail,
    /// Permutation is skipped. Search fails only if no permutation is feasible.
    Skip,
}

/// A brute-force search over all permutations of graph nodes.
///
/// Permutations are generated in lexicographic order over node discovery order, starting from
/// discovery order itself. Among permutations of equal cost the first generated one wins, so
/// the result is deterministic for a given graph. The returned tour lists each node once.
#[derive(Default)]
pub struct ExactSolver {
    policy: InfeasiblePolicy,
}

struct SearchResult {
    best: Option<(Vec<usize>, Cost)>,
    first_missing: Option<(usize, usize)>,
    evaluated: usize,
    skipped: usize,
}

impl ExactSolver {
    /// Creates a new instance of `ExactSolver`.
    pub fn new(policy: InfeasiblePolicy) -> Self {
        Self { policy }
    }

    fn search(&self, graph: &Graph) -> Result<SearchResult, TspError> {
        let mut result = SearchResult { best: None, first_missing: None, evaluated: 0, skipped: 0 };
        let mut permutations = get_permutations(graph.size());

        while let Some(order) = permutations.advance() {
            result.evaluated += 1;

            match cycle_cost_by_index(graph, order) {
                Ok(cost) => {
                    if result.best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost) {
                        result.best = Some((order.to_vec(), cost));
                    }
                }
                Err(pair) => match self.policy {
                    InfeasiblePolicy::Fail => return Err(missing_edge_by_index(graph, pair)),
                    InfeasiblePolicy::Skip => {
                        result.skipped += 1;
                        result.first_missing.get_or_insert(pair);
                    }
                },
            }
        }

        Ok(result)
    }
}

impl TourSolver for ExactSolver {
    fn solve(&self, graph: &Graph, environment: &Environment) -> Result<Tour, TspError> {
        if graph.is_empty() {
            return Err(TspError::EmptyGraph);
        }

        if graph.size() > PRACTICAL_SIZE_LIMIT {
            environment.log(&format!(
                "exact search over {} nodes evaluates {}! permutations, it might take very long",
                graph.size(),
                graph.size()
            ));
        }

        let (result, elapsed) = Timer::measure_duration(|| self.search(graph));
        let result = result?;

        environment.log(&format!(
            "exact search evaluated {} permutations, skipped {} infeasible",
            result.evaluated, result.skipped
        ));

        match (result.best, result.first_missing) {
            (Some((order, cost)), _) => {
                Ok(Tour { nodes: to_labels(graph, &order), cost, elapsed, method: SolverMethod::Exact })
            }
            (None, Some(pair)) => Err(missing_edge_by_index(graph, pair)),
            (None, None) => Err(TspError::EmptyGraph),
        }
    }
}
