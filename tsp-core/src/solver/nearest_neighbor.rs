#[cfg(test)]
#[path = "../../tests/unit/solver/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::cost::missing_edge_by_index;
use super::TourSolver;
use crate::models::{Cost, Graph, Node, SolverMethod, Tour};
use crate::utils::{Environment, Timer, TspError};

/// Builds a tour using greedy nearest neighbor heuristic from the given start node.
pub fn solve_heuristic(graph: &Graph, start: &str) -> Result<Tour, TspError> {
    NearestNeighborSolver::new(start).solve(graph, &Environment::default())
}

/// A greedy heuristic: repeatedly moves to the cheapest unvisited neighbor of the current node.
///
/// Ties are broken in favor of the neighbor whose edge was added first. When the current node
/// has no unvisited neighbors, the walk stops early and the tour is closed from there, so
/// a disconnected graph produces a partial tour or a missing edge error, not a hang.
pub struct NearestNeighborSolver {
    start: Node,
}

impl NearestNeighborSolver {
    /// Creates a new instance of `NearestNeighborSolver`.
    pub fn new(start: &str) -> Self {
        Self { start: start.to_string() }
    }

    fn search(&self, graph: &Graph, start: usize) -> Result<(Vec<usize>, Cost), TspError> {
        let size = graph.size();

        let mut is_visited = vec![false; size];
        let mut visited = Vec::with_capacity(size + 1);
        let mut current = start;
        let mut cost: Cost = 0;

        is_visited[start] = true;
        visited.push(start);

        while visited.len() < size {
            // NOTE min_by_key returns the first of equally minimal elements
            let Some(&(next, weight)) = graph
                .neighbors_by_index(current)
                .iter()
                .filter(|(neighbor, _)| !is_visited[*neighbor])
                .min_by_key(|(_, weight)| *weight)
            else {
                break;
            };

            cost += Cost::from(weight);
            is_visited[next] = true;
            visited.push(next);
            current = next;
        }

        let closing =
            graph.weight_by_index(current, start).ok_or_else(|| missing_edge_by_index(graph, (current, start)))?;

        visited.push(start);

        Ok((visited, cost + Cost::from(closing)))
    }
}

impl TourSolver for NearestNeighborSolver {
    fn solve(&self, graph: &Graph, environment: &Environment) -> Result<Tour, TspError> {
        let start = graph.index_of(&self.start).ok_or_else(|| TspError::NodeNotFound { node: self.start.clone() })?;

        let (result, elapsed) = Timer::measure_duration(|| self.search(graph, start));
        let (visited, cost) = result?;

        if visited.len() <= graph.size() {
            environment.log(&format!(
                "nearest neighbor reached a dead end: visited {} of {} nodes",
                visited.len() - 1,
                graph.size()
            ));
        }

        Ok(Tour { nodes: to_labels(graph, &visited), cost, elapsed, method: SolverMethod::NearestNeighbor })
    }
}

pub(crate) fn to_labels(graph: &Graph, order: &[usize]) -> Vec<Node> {
    order.iter().filter_map(|&idx| graph.node_at(idx)).cloned().collect()
}
