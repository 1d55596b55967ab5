use super::*;
use crate::helpers::*;
use crate::models::Weight;
use std::sync::{Arc, Mutex};

fn to_strs(tour: &Tour) -> Vec<&str> {
    tour.nodes.iter().map(|node| node.as_str()).collect()
}

parameterized_test! {can_build_tour_from_start_node, (edges, start, expected_nodes, expected_cost), {
    can_build_tour_from_start_node_impl(edges, start, expected_nodes, expected_cost);
}}

can_build_tour_from_start_node! {
    case_01_triangle_from_a: (vec![("A", "B", 1), ("B", "C", 2), ("C", "A", 3)], "A", vec!["A", "B", "C", "A"], 6),
    case_02_triangle_from_c: (vec![("A", "B", 1), ("B", "C", 2), ("C", "A", 3)], "C", vec!["C", "B", "A", "C"], 6),
    case_03_tie_first_inserted: (
        vec![("A", "B", 1), ("A", "C", 1), ("B", "C", 5)],
        "A",
        vec!["A", "B", "C", "A"],
        7
    ),
    case_04_tie_other_order: (
        vec![("A", "C", 1), ("A", "B", 1), ("B", "C", 5)],
        "A",
        vec!["A", "C", "B", "A"],
        7
    ),
    case_05_greedy_is_not_optimal: (
        vec![("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 10), ("A", "C", 2), ("B", "D", 2)],
        "A",
        vec!["A", "B", "C", "D", "A"],
        13
    ),
    case_06_pair: (vec![("A", "B", 4)], "B", vec!["B", "A", "B"], 8),
}

fn can_build_tour_from_start_node_impl(
    edges: Vec<(&str, &str, Weight)>,
    start: &str,
    expected_nodes: Vec<&str>,
    expected_cost: Cost,
) {
    let graph = create_graph(edges.as_slice());

    let tour = solve_heuristic(&graph, start).expect("cannot solve");

    assert_eq!(to_strs(&tour), expected_nodes);
    assert_eq!(tour.cost, expected_cost);
    assert_eq!(tour.method, SolverMethod::NearestNeighbor);
    assert_eq!(crate::solver::tour_cost(&graph, tour.cycle()), Ok(tour.cost));
}

#[test]
fn can_fail_on_unknown_start_node() {
    let graph = create_triangle_graph();

    let result = solve_heuristic(&graph, "Z");

    assert_eq!(result, Err(TspError::NodeNotFound { node: "Z".to_string() }));
}

#[test]
fn can_return_partial_tour_on_dead_end() {
    let graph = create_graph(&[("A", "B", 1), ("A", "C", 5), ("C", "D", 1)]);
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let environment = Environment::new_with_logger({
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    });

    let tour = NearestNeighborSolver::new("A").solve(&graph, &environment).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "B", "A"]);
    assert_eq!(tour.cost, 2);
    assert_eq!(tour.cycle().len(), 2);
    assert_eq!(
        *messages.lock().unwrap(),
        vec!["nearest neighbor reached a dead end: visited 2 of 4 nodes".to_string()]
    );
}

#[test]
fn can_fail_when_closing_edge_is_missing() {
    let graph = create_graph(&[("A", "B", 1), ("B", "C", 2)]);

    let result = solve_heuristic(&graph, "A");

    assert_eq!(result, Err(TspError::MissingEdge { from: "C".to_string(), to: "A".to_string() }));
}

#[test]
fn can_start_and_end_at_start_node_on_random_graphs() {
    for seed in 0..10 {
        let graph = create_random_complete_graph(7, 20, seed);

        for start in graph.nodes() {
            let tour = solve_heuristic(&graph, start).expect("cannot solve");

            assert_eq!(tour.nodes.first(), Some(start));
            assert_eq!(tour.nodes.last(), Some(start));
            assert_eq!(tour.nodes.len(), graph.size() + 1);
            assert_eq!(crate::solver::tour_cost(&graph, tour.cycle()), Ok(tour.cost));
        }
    }
}

#[test]
fn can_sum_large_weights_exactly() {
    let max = Weight::MAX;
    let graph = create_graph(&[
        ("A", "B", max),
        ("B", "C", max),
        ("C", "D", max),
        ("D", "A", 0),
        ("A", "C", 0),
        ("B", "D", max),
    ]);

    let tour = solve_heuristic(&graph, "A").expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "D", "C", "B", "A"]);
    assert_eq!(tour.cost, 3 * Cost::from(max));
}
