//! A json problem format: raw node, edge and cost lists as whitespace separated strings.
//!
//! ```json
//! {
//!   "nodes": "A B C",
//!   "edges": "A B B C C A",
//!   "costs": "1 2 3"
//! }
//! ```

#[cfg(test)]
#[path = "../../tests/unit/extensions/problem_test.rs"]
mod problem_test;

use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use tsp_core::prelude::*;

/// A problem definition as it is entered by user.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProblemDefinition {
    /// Declared nodes, used only to validate edges.
    #[serde(default)]
    pub nodes: String,
    /// Edge endpoints taken in pairs.
    pub edges: String,
    /// Edge costs.
    pub costs: String,
}

impl ProblemDefinition {
    /// Creates a new instance of `ProblemDefinition`.
    pub fn new(nodes: &str, edges: &str, costs: &str) -> Self {
        Self { nodes: nodes.to_string(), edges: edges.to_string(), costs: costs.to_string() }
    }

    /// Builds a graph from the definition.
    pub fn read_graph(&self) -> Result<Graph, TspError> {
        read_graph(&self.nodes, &self.edges, &self.costs)
    }
}

/// Reads problem definition from json.
pub fn read_problem<R: Read>(reader: BufReader<R>) -> GenericResult<ProblemDefinition> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize problem: '{err}'").into())
}

/// Writes problem definition as json.
pub fn write_problem<W: Write>(writer: BufWriter<W>, problem: &ProblemDefinition) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, problem).map_err(|err| format!("cannot serialize problem: '{err}'").into())
}
