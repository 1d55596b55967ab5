use super::*;
use crate::helpers::*;
use crate::models::{GraphBuilder, Weight};
use crate::solver::tour_cost;

fn to_strs(tour: &Tour) -> Vec<&str> {
    tour.nodes.iter().map(|node| node.as_str()).collect()
}

#[test]
fn can_find_optimal_tour_in_triangle() {
    let graph = create_triangle_graph();

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "B", "C"]);
    assert_eq!(tour.cost, 6);
    assert_eq!(tour.method, SolverMethod::Exact);
    assert!(!tour.is_closed());
}

#[test]
fn can_find_optimal_tour_where_greedy_fails() {
    let graph =
        create_graph(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 10), ("A", "C", 2), ("B", "D", 2)]);

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "B", "D", "C"]);
    assert_eq!(tour.cost, 6);
}

#[test]
fn can_prefer_first_generated_permutation_on_ties() {
    let graph = create_square_graph();

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "B", "C", "D"]);
    assert_eq!(tour.cost, 4);
}

#[test]
fn can_solve_pair_graph() {
    let graph = create_graph(&[("A", "B", 3)]);

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "B"]);
    assert_eq!(tour.cost, 6);
}

#[test]
fn can_fail_on_empty_graph() {
    let graph = GraphBuilder::new().build();

    assert_eq!(solve_exact(&graph), Err(TspError::EmptyGraph));
}

parameterized_test! {can_handle_incomplete_graph, (policy, expected), {
    can_handle_incomplete_graph_impl(policy, expected);
}}

can_handle_incomplete_graph! {
    case_01_fail: (InfeasiblePolicy::Fail, Err(("B", "D"))),
    case_02_skip: (InfeasiblePolicy::Skip, Ok((vec!["A", "B", "C", "D"], 10))),
}

fn can_handle_incomplete_graph_impl(policy: InfeasiblePolicy, expected: Result<(Vec<&str>, Cost), (&str, &str)>) {
    // a ring without diagonals: only rotations and reflections of A-B-C-D are feasible
    let graph = create_graph(&[("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("D", "A", 4)]);

    let result = ExactSolver::new(policy).solve(&graph, &Environment::default());

    match (result, expected) {
        (Ok(tour), Ok((nodes, cost))) => {
            assert_eq!(to_strs(&tour), nodes);
            assert_eq!(tour.cost, cost);
        }
        (Err(err), Err((from, to))) => {
            assert_eq!(err, TspError::MissingEdge { from: from.to_string(), to: to.to_string() })
        }
        (result, expected) => panic!("unexpected result: {result:?}, expected: {expected:?}"),
    }
}

#[test]
fn can_fail_with_first_missing_edge_when_nothing_is_feasible() {
    let graph = create_graph(&[("A", "B", 1), ("B", "C", 2)]);

    for policy in [InfeasiblePolicy::Fail, InfeasiblePolicy::Skip] {
        let result = ExactSolver::new(policy).solve(&graph, &Environment::default());

        assert_eq!(result, Err(TspError::MissingEdge { from: "C".to_string(), to: "A".to_string() }));
    }
}

#[test]
fn can_fail_on_disconnected_graph() {
    let graph = create_graph(&[("A", "B", 1), ("C", "D", 2)]);

    let result = solve_exact(&graph);

    assert_eq!(result, Err(TspError::MissingEdge { from: "B".to_string(), to: "C".to_string() }));
}

#[test]
fn can_return_same_tour_on_repeated_calls() {
    let graph = create_random_complete_graph(6, 5, 7);

    let first = solve_exact(&graph).expect("cannot solve");
    let second = solve_exact(&graph).expect("cannot solve");

    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.cost, second.cost);
}

#[test]
fn can_distinguish_cycle_costs_above_max_weight() {
    let max = Weight::MAX;
    let graph = create_graph(&[
        ("A", "B", max),
        ("B", "C", max),
        ("C", "D", max),
        ("D", "A", 0),
        ("A", "C", 0),
        ("B", "D", max),
    ]);

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(to_strs(&tour), vec!["A", "C", "B", "D"]);
    assert_eq!(tour.cost, 2 * Cost::from(max));
    assert_eq!(tour_cost(&graph, tour.cycle()), Ok(tour.cost));
}
