//! Error types for tree building and checking

use super::types::NodeId;
use thiserror::Error;

/// Input rejected before construction starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input already contains the terminal symbol '$' at position {position}")]
    DuplicateTerminal { position: usize },

    #[error("unsupported symbol {symbol:?} at position {position} (expected a-z)")]
    InvalidAlphabet { symbol: char, position: usize },

    #[error("input is {len} bytes, limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

/// A structural property that does not hold on a finished tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("expected {expected} leaves, found {found}")]
    LeafCount { expected: usize, found: usize },

    #[error("no leaf for suffix {0}")]
    MissingSuffix(usize),

    #[error("suffix {0} has more than one leaf")]
    DuplicateSuffix(usize),

    #[error("leaf for suffix {id} spells {found:?}")]
    WrongLabel { id: usize, found: String },

    #[error("node {0} has an empty edge")]
    EmptyEdge(NodeId),

    #[error("node {child} is stored under the wrong symbol of node {parent}")]
    MisplacedChild { parent: NodeId, child: NodeId },

    #[error("node {child} does not point back at parent {parent}")]
    ParentMismatch { parent: NodeId, child: NodeId },

    #[error("internal node {0} has no suffix link")]
    MissingLink(NodeId),

    #[error("suffix link of node {from} points at {to}, which does not spell its label minus the first symbol")]
    WrongLink { from: NodeId, to: NodeId },

    #[error("suffix links starting at node {0} never reach the root")]
    LinkCycle(NodeId),
}
