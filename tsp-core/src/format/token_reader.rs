#[cfg(test)]
#[path = "../../tests/unit/format/token_reader_test.rs"]
mod token_reader_test;

use crate::models::{Graph, GraphBuilder, Weight};
use crate::utils::TspError;
use rustc_hash::FxHashSet;

/// Reads a graph from raw whitespace separated node, edge and cost lists.
pub fn read_graph(nodes: &str, edges: &str, costs: &str) -> Result<Graph, TspError> {
    build_graph(
        &nodes.split_whitespace().collect::<Vec<_>>(),
        &edges.split_whitespace().collect::<Vec<_>>(),
        &costs.split_whitespace().collect::<Vec<_>>(),
    )
}

/// Builds a graph from node, edge and cost tokens.
pub fn build_graph<S: AsRef<str>>(
    node_tokens: &[S],
    edge_tokens: &[S],
    cost_tokens: &[S],
) -> Result<Graph, TspError> {
    let costs = parse_costs(cost_tokens)?;

    let edges = edge_tokens.chunks_exact(2).map(|pair| (pair[0].as_ref(), pair[1].as_ref())).collect::<Vec<_>>();

    if edges.len() != costs.len() {
        return Err(TspError::LengthMismatch { edges: edges.len(), costs: costs.len() });
    }

    let graph = edges
        .iter()
        .zip(costs)
        .try_fold(GraphBuilder::new(), |builder, (&(from, to), cost)| builder.add_edge(from, to, cost))?
        .build();

    validate_declared_nodes(&graph, node_tokens)?;

    Ok(graph)
}

fn parse_costs<S: AsRef<str>>(cost_tokens: &[S]) -> Result<Vec<Weight>, TspError> {
    cost_tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            let token = token.as_ref();
            token.parse::<Weight>().map_err(|_| TspError::InvalidCost { position, token: token.to_string() })
        })
        .collect()
}

/// Checks that every declared node is an endpoint of some edge.
fn validate_declared_nodes<S: AsRef<str>>(graph: &Graph, node_tokens: &[S]) -> Result<(), TspError> {
    let mut seen = FxHashSet::default();
    let unknown = node_tokens
        .iter()
        .map(|token| token.as_ref())
        .filter(|&token| !graph.contains(token))
        .filter(|&token| seen.insert(token))
        .map(|token| token.to_string())
        .collect::<Vec<_>>();

    if unknown.is_empty() { Ok(()) } else { Err(TspError::UnknownNodes { nodes: unknown }) }
}
