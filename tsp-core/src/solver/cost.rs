#[cfg(test)]
#[path = "../../tests/unit/solver/cost_test.rs"]
mod cost_test;

use crate::models::{Cost, Graph, Weight};
use crate::utils::TspError;

/// Returns cost of the cycle over given nodes: a sum of weights between consecutive nodes plus
/// weight of the closing edge from the last node back to the first one. Empty sequence costs nothing.
pub fn tour_cost<S: AsRef<str>>(graph: &Graph, nodes: &[S]) -> Result<Cost, TspError> {
    let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
        return Ok(0);
    };

    let cost = path_cost(graph, nodes)?;

    edge_weight(graph, last.as_ref(), first.as_ref()).map(|closing| cost + Cost::from(closing))
}

/// Returns cost of the open path over given nodes, without closing edge.
pub fn path_cost<S: AsRef<str>>(graph: &Graph, nodes: &[S]) -> Result<Cost, TspError> {
    nodes.windows(2).try_fold(0 as Cost, |acc, pair| {
        edge_weight(graph, pair[0].as_ref(), pair[1].as_ref()).map(|weight| acc + Cost::from(weight))
    })
}

/// Returns cycle cost over node indices or the first pair of indices without an edge.
pub(crate) fn cycle_cost_by_index(graph: &Graph, order: &[usize]) -> Result<Cost, (usize, usize)> {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return Ok(0);
    };

    order.windows(2).map(|pair| (pair[0], pair[1])).chain(std::iter::once((last, first))).try_fold(
        0 as Cost,
        |acc, (from, to)| graph.weight_by_index(from, to).map(|weight| acc + Cost::from(weight)).ok_or((from, to)),
    )
}

pub(crate) fn missing_edge_by_index(graph: &Graph, (from, to): (usize, usize)) -> TspError {
    let label = |idx: usize| graph.node_at(idx).cloned().unwrap_or_default();

    TspError::MissingEdge { from: label(from), to: label(to) }
}

fn edge_weight(graph: &Graph, from: &str, to: &str) -> Result<Weight, TspError> {
    graph.weight(from, to).ok_or_else(|| TspError::MissingEdge { from: from.to_string(), to: to.to_string() })
}
