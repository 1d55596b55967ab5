//! An interactive session: the user submits a graph, then runs solvers on it on demand.
//!
//! Each successfully submitted graph replaces the previous one wholesale. A submission which
//! fails to build leaves the previous graph in place.

#[cfg(test)]
#[path = "../../tests/unit/extensions/session_test.rs"]
mod session_test;

use super::solve::writer::format_tour;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tsp_core::prelude::*;

const HELP_TEXT: &str = "commands:
  graph <nodes> | <edges> | <costs>  build a new graph replacing the current one
  heuristic <start>                  run nearest neighbor heuristic from start node
  exact                              run exact search
  cost <nodes>                       evaluate closed tour cost
  show                               print current graph
  help                               print this help
  quit                               end session";

/// A reply of the session to a single command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    /// A text to show to the user.
    Output(String),
    /// The session is over.
    Quit,
}

/// Keeps the latest successfully built graph and runs solvers on it.
pub struct Session {
    graph: Option<Graph>,
    solver: Solver,
    policy: InfeasiblePolicy,
}

impl Session {
    /// Creates a new instance of `Session`.
    pub fn new(environment: Arc<Environment>, policy: InfeasiblePolicy) -> Self {
        Self { graph: None, solver: Solver::new(environment), policy }
    }

    /// Returns the current graph, if any.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Builds a graph from raw token strings. The current graph is replaced only on success.
    pub fn submit(&mut self, nodes: &str, edges: &str, costs: &str) -> Result<&Graph, TspError> {
        let graph = read_graph(nodes, edges, costs)?;

        Ok(&*self.graph.insert(graph))
    }

    /// Runs a solver of the given kind on the current graph.
    pub fn solve(&self, kind: &SolverKind) -> GenericResult<Tour> {
        let graph = self.graph.as_ref().ok_or_else(|| GenericError::from("no graph submitted yet"))?;

        Ok(self.solver.solve(graph, kind)?)
    }

    /// Executes a single command line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args = args.trim();

        let result = match command {
            "" => Ok(String::new()),
            "quit" | "exit" => return Reply::Quit,
            "help" => Ok(HELP_TEXT.to_string()),
            "graph" => self.execute_graph(args),
            "heuristic" if args.is_empty() => Err("heuristic requires start node".into()),
            "heuristic" => {
                self.solve(&SolverKind::NearestNeighbor { start: args.to_string() }).map(|tour| format_tour(&tour))
            }
            "exact" => self.solve(&SolverKind::Exact { policy: self.policy }).map(|tour| format_tour(&tour)),
            "cost" => self.execute_cost(args),
            "show" => self.execute_show(),
            _ => Err(format!("unknown command: '{command}', type 'help' to see available commands").into()),
        };

        Reply::Output(result.unwrap_or_else(|err| format!("error: {err}")))
    }

    fn execute_graph(&mut self, args: &str) -> GenericResult<String> {
        let parts = args.split('|').collect::<Vec<_>>();

        let [nodes, edges, costs] = parts.as_slice() else {
            return Err("graph expects three parts separated by '|': nodes, edges and costs".into());
        };

        let graph = self.submit(nodes, edges, costs)?;

        Ok(format!("graph built with {} nodes and {} edges", graph.size(), graph.edge_count()))
    }

    fn execute_cost(&self, args: &str) -> GenericResult<String> {
        let graph = self.graph.as_ref().ok_or_else(|| GenericError::from("no graph submitted yet"))?;
        let nodes = args.split_whitespace().collect::<Vec<_>>();

        Ok(format!("Total Cost: {}", tour_cost(graph, &nodes)?))
    }

    fn execute_show(&self) -> GenericResult<String> {
        let graph = self.graph.as_ref().ok_or_else(|| GenericError::from("no graph submitted yet"))?;

        let edges = graph.edges().map(|(from, to, weight)| format!("  {from} - {to}: {weight}")).collect::<Vec<_>>();

        Ok(format!("nodes: {}\nedges:\n{}", graph.nodes().join(" "), edges.join("\n")))
    }
}

/// Runs session reading commands line by line until input ends or quit command is received.
pub fn run_session<R: BufRead, W: Write>(mut session: Session, reader: R, mut writer: W) -> GenericResult<()> {
    for line in reader.lines() {
        match session.execute(&line?) {
            Reply::Quit => break,
            Reply::Output(text) if text.is_empty() => {}
            Reply::Output(text) => writeln!(writer, "{text}")?,
        }

        writer.flush()?;
    }

    Ok(())
}
