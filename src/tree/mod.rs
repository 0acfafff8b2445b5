//! Suffix tree construction module
//!
//! Builds the explicit suffix tree of a lowercase string in O(n) with
//! Ukkonen's algorithm, then answers enumeration and pattern queries on it.
//!
//! ## Architecture
//!
//! - `types`: Nodes, end markers, alphabet and configuration
//! - `builder`: Input validation and the phase/extension state machine
//! - `suffix_tree`: The finished, read-only tree
//! - `enumerate`: Lexicographic suffix enumeration
//! - `query`: Substring, suffix and occurrence queries
//! - `verify`: Structural invariant checks
//! - `error`: Build and invariant errors

pub mod builder;
pub mod enumerate;
pub mod error;
pub mod query;
pub mod suffix_tree;
pub mod types;
pub mod verify;

// Re-exports for convenience
pub use builder::TreeBuilder;
pub use enumerate::Suffixes;
pub use error::{BuildError, InvariantError};
pub use query::Locus;
pub use suffix_tree::SuffixTree;
pub use types::{BuildStats, EndHandle, EndMarker, Node, NodeId, TreeConfig, ROOT, TERMINAL};
