//! Specifies a weighted undirected graph model.

#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::utils::TspError;
use rustc_hash::FxHashMap;

/// A node identifier: a short label.
pub type Node = String;

/// An edge cost.
pub type Weight = u64;

/// A total cost of a path or a tour. Sums of edge weights are accumulated without overflow.
pub type Cost = u128;

/// Represents a weighted undirected graph. Nodes are kept in discovery order and neighbors of
/// each node in order of edge insertion, so iteration over graph is deterministic.
///
/// Graph is immutable once built: use [`GraphBuilder`] to create a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    index: FxHashMap<Node, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edges: Vec<(usize, usize)>,
    matrix: Vec<Option<Weight>>,
}

impl Graph {
    /// Returns nodes in discovery order.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns amount of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether node is present in the graph.
    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    /// Returns position of the node in discovery order.
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Returns node label by its position in discovery order.
    pub fn node_at(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Returns neighbors of the node with edge weights in edge insertion order.
    /// Unknown node has no neighbors.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a Node, Weight)> + use<'a> {
        self.index_of(node).into_iter().flat_map(move |idx| {
            self.adjacency[idx].iter().map(move |&(neighbor, weight)| (&self.nodes[neighbor], weight))
        })
    }

    /// Returns weight of the edge between two nodes, if it is recorded.
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.index_of(from).zip(self.index_of(to)).and_then(|(from, to)| self.weight_by_index(from, to))
    }

    /// Returns each edge once in order of its first insertion.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, Weight)> + '_ {
        self.edges.iter().filter_map(move |&(from, to)| {
            self.weight_by_index(from, to).map(|weight| (&self.nodes[from], &self.nodes[to], weight))
        })
    }

    /// Returns true if every pair of distinct nodes is connected.
    pub fn is_complete(&self) -> bool {
        let size = self.size();
        self.edge_count() == size * size.saturating_sub(1) / 2
    }

    pub(crate) fn weight_by_index(&self, from: usize, to: usize) -> Option<Weight> {
        self.matrix.get(from * self.size() + to).copied().flatten()
    }

    pub(crate) fn neighbors_by_index(&self, idx: usize) -> &[(usize, Weight)] {
        self.adjacency[idx].as_slice()
    }
}

/// Provides the way to build a graph edge by edge.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    index: FxHashMap<Node, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Creates a new instance of `GraphBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an undirected edge. Unknown endpoints are registered as nodes in order of appearance.
    /// When an edge between the same nodes already exists, its weight is overwritten.
    pub fn add_edge(mut self, from: &str, to: &str, weight: Weight) -> Result<Self, TspError> {
        if from == to {
            return Err(TspError::SelfLoop { node: from.to_string() });
        }

        let from = self.get_or_insert_node(from);
        let to = self.get_or_insert_node(to);

        let is_new = upsert_neighbor(&mut self.adjacency[from], to, weight);
        upsert_neighbor(&mut self.adjacency[to], from, weight);

        if is_new {
            self.edges.push((from, to));
        }

        Ok(self)
    }

    /// Builds a graph.
    pub fn build(self) -> Graph {
        let size = self.nodes.len();

        let mut matrix = vec![None; size * size];
        self.adjacency.iter().enumerate().for_each(|(from, neighbors)| {
            neighbors.iter().for_each(|&(to, weight)| matrix[from * size + to] = Some(weight));
        });

        Graph { nodes: self.nodes, index: self.index, adjacency: self.adjacency, edges: self.edges, matrix }
    }

    fn get_or_insert_node(&mut self, node: &str) -> usize {
        if let Some(&idx) = self.index.get(node) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(node.to_string());
        self.index.insert(node.to_string(), idx);
        self.adjacency.push(Vec::new());

        idx
    }
}

/// Inserts or updates neighbor weight, returns true if neighbor was not known before.
fn upsert_neighbor(neighbors: &mut Vec<(usize, Weight)>, neighbor: usize, weight: Weight) -> bool {
    match neighbors.iter_mut().find(|(idx, _)| *idx == neighbor) {
        Some(entry) => {
            entry.1 = weight;
            false
        }
        None => {
            neighbors.push((neighbor, weight));
            true
        }
    }
}
