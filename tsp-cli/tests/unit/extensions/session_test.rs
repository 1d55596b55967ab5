use super::*;
use crate::helpers::*;

fn create_session() -> Session {
    Session::new(Arc::new(Environment::default()), InfeasiblePolicy::Fail)
}

fn get_output(reply: Reply) -> String {
    match reply {
        Reply::Output(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn can_submit_graph_and_solve() {
    let mut session = create_session();

    session.submit("A B C", "A B B C C A", "1 2 3").unwrap();

    let heuristic = session.solve(&SolverKind::NearestNeighbor { start: "A".to_string() }).unwrap();
    let exact = session.solve(&SolverKind::Exact { policy: InfeasiblePolicy::Fail }).unwrap();

    assert_eq!(heuristic.nodes, vec!["A", "B", "C", "A"]);
    assert_eq!(exact.nodes, vec!["A", "B", "C"]);
    assert_eq!(exact.cost, 6);
}

#[test]
fn can_replace_graph_on_new_submission() {
    let mut session = create_session();

    session.submit("A B C", "A B B C C A", "1 2 3").unwrap();
    session.submit("X Y", "X Y", "5").unwrap();

    let graph = session.graph().unwrap();
    assert_eq!(graph.nodes(), &["X", "Y"]);
    assert!(!graph.contains("A"));
}

#[test]
fn can_keep_previous_graph_on_failed_submission() {
    let mut session = create_session();

    session.submit("A B C", "A B B C C A", "1 2 3").unwrap();
    let err = session.submit("A B", "A B", "oops").unwrap_err();

    assert_eq!(err, TspError::InvalidCost { position: 0, token: "oops".to_string() });
    assert_eq!(session.graph().unwrap().size(), 3);
}

#[test]
fn can_return_error_when_solving_without_graph() {
    let session = create_session();

    let err = session.solve(&SolverKind::Exact { policy: InfeasiblePolicy::Fail }).unwrap_err();

    assert_eq!(err.to_string(), "no graph submitted yet");
}

#[test]
fn can_execute_commands() {
    let mut session = create_session();

    let cases = vec![
        ("graph A B C | A B B C C A | 1 2 3", "graph built with 3 nodes and 3 edges"),
        ("cost A C B", "Total Cost: 6"),
        ("show", "nodes: A B C\nedges:\n  A - B: 1\n  B - C: 2\n  C - A: 3"),
        ("", ""),
        ("heuristic", "error: heuristic requires start node"),
        ("jump", "error: unknown command: 'jump', type 'help' to see available commands"),
        ("graph A B | A B", "error: graph expects three parts separated by '|': nodes, edges and costs"),
    ];

    for (line, expected) in cases {
        assert_eq!(get_output(session.execute(line)), expected, "line: '{line}'");
    }
}

#[test]
fn can_execute_solver_commands() {
    let mut session = create_session();
    session.execute("graph A B C | A B B C C A | 1 2 3");

    let heuristic = get_output(session.execute("heuristic B"));
    let exact = get_output(session.execute("exact"));
    let unknown = get_output(session.execute("heuristic Z"));

    assert!(heuristic.starts_with("Heuristic TSP Solution (starting from B): [B, A, C, B]\nTotal Cost: 6\n"));
    assert!(exact.starts_with("Exact TSP Solution: [A, B, C]\nTotal Cost: 6\n"));
    assert_eq!(unknown, format!("error: {}", TspError::NodeNotFound { node: "Z".to_string() }));
}

#[test]
fn can_use_skip_policy_for_exact_command() {
    let mut session = Session::new(Arc::new(Environment::default()), InfeasiblePolicy::Skip);
    let ring = create_ring_problem();
    session.execute(&format!("graph {} | {} | {}", ring.nodes, ring.edges, ring.costs));

    let exact = get_output(session.execute("exact"));

    assert!(exact.starts_with("Exact TSP Solution: [A, B, C, D]\nTotal Cost: 10\n"), "{exact}");
}

#[test]
fn can_log_solver_progress() {
    let (environment, messages) = create_collecting_environment();
    let mut session = Session::new(environment, InfeasiblePolicy::Fail);
    session.execute("graph | A B B C C A | 1 2 3");

    session.execute("exact");

    assert!(!messages.lock().unwrap().is_empty());
}

#[test]
fn can_quit_session() {
    assert_eq!(create_session().execute("quit"), Reply::Quit);
    assert_eq!(create_session().execute(" exit "), Reply::Quit);
}

#[test]
fn can_run_session_until_quit() {
    let input = "graph A B C | A B B C C A | 1 2 3\nexact\ngraph A B | A B | x\nquit\nshow\n";
    let mut output = Vec::new();

    run_session(create_session(), input.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "graph built with 3 nodes and 3 edges");
    assert_eq!(lines[1], "Exact TSP Solution: [A, B, C]");
    assert!(lines[4].starts_with("error: "));
    assert!(!output.contains("nodes:"));
}
