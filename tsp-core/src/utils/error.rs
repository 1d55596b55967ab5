#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// Specifies a category of engine error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Raw input cannot be parsed: bad cost token or edge/cost length mismatch.
    Parse,
    /// Input is parsed, but it is logically inconsistent.
    Validation,
    /// A requested node is not part of the graph.
    NotFound,
    /// A cost lookup was attempted between two nodes without a recorded edge.
    MissingEdge,
}

/// An error returned by graph construction or by tour engine.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TspError {
    /// A cost token is not a non-negative integer.
    InvalidCost {
        /// Zero-based position of the token in cost list.
        position: usize,
        /// The offending token.
        token: String,
    },
    /// Amount of edges derived from edge tokens differs from amount of costs.
    LengthMismatch {
        /// Amount of edges.
        edges: usize,
        /// Amount of costs.
        costs: usize,
    },
    /// Declared nodes which are not endpoints of any edge.
    UnknownNodes {
        /// Offending node tokens in declaration order, without duplicates.
        nodes: Vec<String>,
    },
    /// An edge connects a node with itself.
    SelfLoop {
        /// The offending node.
        node: String,
    },
    /// Operation requires at least one node.
    EmptyGraph,
    /// A node is not present in the graph.
    NodeNotFound {
        /// The requested node.
        node: String,
    },
    /// No edge is recorded between two nodes.
    MissingEdge {
        /// Edge start.
        from: String,
        /// Edge end.
        to: String,
    },
}

impl TspError {
    /// Returns error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCost { .. } | Self::LengthMismatch { .. } => ErrorKind::Parse,
            Self::UnknownNodes { .. } | Self::SelfLoop { .. } | Self::EmptyGraph => ErrorKind::Validation,
            Self::NodeNotFound { .. } => ErrorKind::NotFound,
            Self::MissingEdge { .. } => ErrorKind::MissingEdge,
        }
    }

    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCost { .. } => "E1000",
            Self::LengthMismatch { .. } => "E1001",
            Self::UnknownNodes { .. } => "E2000",
            Self::SelfLoop { .. } => "E2001",
            Self::EmptyGraph => "E2002",
            Self::NodeNotFound { .. } => "E3000",
            Self::MissingEdge { .. } => "E4000",
        }
    }

    /// Returns a description of what went wrong.
    pub fn cause(&self) -> String {
        match self {
            Self::InvalidCost { position, token } => {
                format!("cannot parse cost '{token}' at position {position} as non-negative integer")
            }
            Self::LengthMismatch { edges, costs } => {
                format!("amount of edges ({edges}) does not match amount of costs ({costs})")
            }
            Self::UnknownNodes { nodes } => format!("nodes {} are not defined in the graph", nodes.join(", ")),
            Self::SelfLoop { node } => format!("edge connects node '{node}' with itself"),
            Self::EmptyGraph => "graph has no nodes".to_string(),
            Self::NodeNotFound { node } => format!("node '{node}' is not found in the graph"),
            Self::MissingEdge { from, to } => format!("no edge between '{from}' and '{to}'"),
        }
    }

    /// Returns an action to take in order to recover from error.
    pub fn action(&self) -> &'static str {
        match self {
            Self::InvalidCost { .. } => "use non-negative integers as costs",
            Self::LengthMismatch { .. } => "specify exactly one cost per edge",
            Self::UnknownNodes { .. } => "add edges for declared nodes or remove them from node list",
            Self::SelfLoop { .. } => "use two distinct nodes for each edge",
            Self::EmptyGraph => "specify at least one edge",
            Self::NodeNotFound { .. } => "use one of the graph nodes",
            Self::MissingEdge { .. } => "add missing edge to make tour possible",
        }
    }
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code(), self.cause(), self.action())
    }
}

impl std::error::Error for TspError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<TspError> for GenericError {
    fn from(value: TspError) -> Self {
        Self(value.to_string())
    }
}
