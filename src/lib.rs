//! # sfx - Linear-time suffix trees
//!
//! `sfx` builds the explicit suffix tree of a lowercase string with
//! Ukkonen's online algorithm in O(n) time and space.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Construction, enumeration, queries and invariant checks
//! - [`output`] - Result formatting (colored listings and JSON lines)
//! - [`utils`] - Configuration loading
//!
//! ## Quick Start
//!
//! ```
//! use sfx::SuffixTree;
//!
//! let tree = SuffixTree::build("banana").unwrap();
//!
//! // Every suffix of "banana$", in lexicographic order
//! let ids: Vec<_> = tree.suffixes().map(|(id, _)| id).collect();
//! assert_eq!(ids, vec![6, 5, 3, 1, 0, 4, 2]);
//!
//! // Pattern queries walk the tree in O(m)
//! assert!(tree.contains("nan"));
//! assert_eq!(tree.find_all("ana"), vec![1, 3]);
//! ```
//!
//! ## Construction
//!
//! The builder applies the four classical optimizations:
//!
//! 1. **Rapid leaf extension** - all leaves share one end marker
//! 2. **Edge ranges** - edges store `[start, end]` instead of strings
//! 3. **Skip-count** - whole edges are hopped in O(1) when descending
//! 4. **Showstopper** - a phase stops at the first suffix already present
//!
//! Together with suffix links, the total work is linear in the input length.

pub mod output;
pub mod tree;
pub mod utils;

pub use tree::{BuildError, BuildStats, InvariantError, SuffixTree, TreeBuilder, TreeConfig};
