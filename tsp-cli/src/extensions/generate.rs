//! Generates random problems for testing and benchmarking.

#[cfg(test)]
#[path = "../../tests/unit/extensions/generate_test.rs"]
mod generate_test;

use super::problem::ProblemDefinition;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tsp_core::prelude::GenericResult;

/// Generates a complete graph problem with costs sampled uniformly from `min_cost..=max_cost`.
///
/// The first 26 nodes are labeled with latin letters, the rest as `N<index>`.
pub fn generate_problem(
    nodes_size: usize,
    min_cost: u64,
    max_cost: u64,
    seed: Option<u64>,
) -> GenericResult<ProblemDefinition> {
    if nodes_size < 2 {
        return Err(format!("cannot generate problem with {nodes_size} nodes, at least 2 are required").into());
    }

    if min_cost > max_cost {
        return Err(format!("min cost ({min_cost}) is greater than max cost ({max_cost})").into());
    }

    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let labels = (0..nodes_size).map(get_label).collect::<Vec<_>>();
    let pairs = (0..nodes_size).flat_map(|from| (from + 1..nodes_size).map(move |to| (from, to))).collect::<Vec<_>>();

    let edges = pairs.iter().map(|&(from, to)| format!("{} {}", labels[from], labels[to])).collect::<Vec<_>>();
    let costs = pairs.iter().map(|_| rng.gen_range(min_cost..=max_cost).to_string()).collect::<Vec<_>>();

    Ok(ProblemDefinition { nodes: labels.join(" "), edges: edges.join(" "), costs: costs.join(" ") })
}

fn get_label(idx: usize) -> String {
    match u8::try_from(idx) {
        Ok(idx) if idx < 26 => char::from(b'A' + idx).to_string(),
        _ => format!("N{idx}"),
    }
}
