//! Error types for clique percolation

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CpmError>;

/// Broad classification of a [`CpmError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid parameters, detected before any graph processing
    Configuration,
    /// The graph description could not be turned into a graph
    MalformedInput,
    /// An algorithm produced a state it should never reach
    InternalInvariant,
    /// Reading or writing files failed
    Io,
}

/// Errors produced by the clique percolation crate.
#[derive(Debug, Error)]
pub enum CpmError {
    /// Clique size below the smallest percolating clique (an edge).
    #[error("invalid clique size k={k}: k must be at least 2")]
    InvalidCliqueSize { k: usize },

    /// A line of the graph description could not be parsed.
    #[error("line {line}: syntax error: '{content}'")]
    Syntax { line: usize, content: String },

    /// A label is already taken in the graph.
    #[error("'{label}': duplicate node; unable to add to graph")]
    DuplicateLabel { label: String },

    /// A node label was declared twice in a graph definition.
    #[error("line {line}: '{label}': duplicate node; unable to add to graph")]
    DuplicateNode { line: usize, label: String },

    /// A neighbor label refers to a node that was never declared.
    #[error("line {line}: '{label}': doesn't exist")]
    UndeclaredNeighbor { line: usize, label: String },

    /// An edge is declared in one direction only and the symmetry policy rejects it.
    #[error("edge '{from}' -> '{to}' has no reverse edge")]
    AsymmetricEdge { from: String, to: String },

    /// Internal consistency check failed; indicates a bug, not bad input.
    #[error("internal invariant violated: {reason}")]
    InvariantViolation { reason: String },

    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CpmError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CpmError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CpmError::InvalidCliqueSize { .. } => ErrorKind::Configuration,
            CpmError::Syntax { .. }
            | CpmError::DuplicateLabel { .. }
            | CpmError::DuplicateNode { .. }
            | CpmError::UndeclaredNeighbor { .. }
            | CpmError::AsymmetricEdge { .. } => ErrorKind::MalformedInput,
            CpmError::InvariantViolation { .. } => ErrorKind::InternalInvariant,
            CpmError::Io { .. } | CpmError::Serialization(_) => ErrorKind::Io,
        }
    }
}
