use crate::prelude::*;

#[test]
fn can_solve_triangle_exactly() {
    let graph = read_graph("A B C", "A B B C C A", "1 2 3").expect("cannot read graph");

    let tour = solve_exact(&graph).expect("cannot solve");

    assert_eq!(tour.nodes, vec!["A", "B", "C"]);
    assert_eq!(tour.cost, 6);
}

#[test]
fn can_solve_triangle_with_heuristic() {
    let graph = read_graph("A B C", "A B B C C A", "1 2 3").expect("cannot read graph");

    let tour = solve_heuristic(&graph, "A").expect("cannot solve");

    assert_eq!(tour.nodes, vec!["A", "B", "C", "A"]);
    assert_eq!(tour.cost, 6);
}

#[test]
fn can_build_disconnected_graph_but_fail_exact_search() {
    let graph = read_graph("A B", "A B B C C A D E", "1 2 3 4").expect("cannot read graph");

    let result = solve_exact(&graph);

    assert_eq!(graph.nodes(), &["A", "B", "C", "D", "E"]);
    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::MissingEdge));
}

#[test]
fn can_reject_mismatched_edge_and_cost_lengths() {
    let result = read_graph("A B C", "A B B C C A", "1 2");

    assert_eq!(result, Err(TspError::LengthMismatch { edges: 3, costs: 2 }));
    assert_eq!(TspError::LengthMismatch { edges: 3, costs: 2 }.kind(), ErrorKind::Parse);
}

#[test]
fn can_replace_graph_on_rebuild() {
    let mut graph = read_graph("A B C", "A B B C C A", "1 2 3").expect("cannot read graph");
    let first = solve_exact(&graph).expect("cannot solve");

    graph = read_graph("", "X Y Y Z Z X", "5 5 5").expect("cannot read graph");
    let second = solve_exact(&graph).expect("cannot solve");

    assert_eq!(first.cost, 6);
    assert_eq!(second.nodes, vec!["X", "Y", "Z"]);
    assert_eq!(second.cost, 15);
    assert!(!graph.contains("A"));
}
