//! Types for suffix tree construction
//!
//! Nodes and end markers live in dense arenas and refer to each other by
//! index, so parent pointers and suffix links never form ownership cycles.

use serde::{Deserialize, Serialize};

/// Index of a node in the tree arena
pub type NodeId = usize;

/// The root is always the first node allocated
pub const ROOT: NodeId = 0;

/// Terminal symbol appended to every input
pub const TERMINAL: u8 = b'$';

/// One slot for the terminal plus one per lowercase letter
pub const ALPHABET_SIZE: usize = 27;

/// Default cap on input length (16 MiB)
pub const DEFAULT_MAX_INPUT_LEN: usize = 16 * 1024 * 1024;

/// Map a byte to its child-table slot.
///
/// Slot 0 holds the terminal and slots 1..=26 hold `a`..=`z`, so iterating the
/// table in slot order visits children in lexicographic order with `$` first.
#[inline]
pub fn symbol_slot(byte: u8) -> Option<usize> {
    match byte {
        TERMINAL => Some(0),
        b'a'..=b'z' => Some((byte - b'a') as usize + 1),
        _ => None,
    }
}

/// Handle to an [`EndMarker`] owned by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndHandle(pub(crate) usize);

/// The shared end marker every leaf points at
pub(crate) const LEAF_END: EndHandle = EndHandle(0);

/// Inclusive end position of an edge.
///
/// Leaves all hold [`LEAF_END`]; advancing it once per phase extends every
/// leaf edge at the same time. Internal nodes own a private marker that is
/// written once at split time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndMarker {
    pub value: usize,
}

/// A vertex of the suffix tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Text index where the incoming edge starts
    pub start: usize,
    /// End of the incoming edge (inclusive)
    pub end: EndHandle,
    /// Children indexed by [`symbol_slot`]
    pub children: [Option<NodeId>; ALPHABET_SIZE],
    /// Starting offset of the suffix this leaf spells; `None` for internal nodes
    pub suffix_id: Option<usize>,
    /// `None` only for the root
    pub parent: Option<NodeId>,
    /// Root links to itself, internal nodes to another internal node or the
    /// root, leaves have no link
    pub suffix_link: Option<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            start: 0,
            end: LEAF_END,
            children: [None; ALPHABET_SIZE],
            suffix_id: None,
            parent: None,
            suffix_link: Some(ROOT),
        }
    }

    pub(crate) fn leaf(start: usize, suffix_id: usize, parent: NodeId) -> Self {
        Self {
            start,
            end: LEAF_END,
            children: [None; ALPHABET_SIZE],
            suffix_id: Some(suffix_id),
            parent: Some(parent),
            suffix_link: None,
        }
    }

    pub(crate) fn internal(start: usize, end: EndHandle, parent: NodeId) -> Self {
        Self {
            start,
            end,
            children: [None; ALPHABET_SIZE],
            suffix_id: None,
            parent: Some(parent),
            suffix_link: Some(ROOT),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.suffix_id.is_some()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Children in slot order
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|c| *c)
    }
}

/// Configuration for tree building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Lowercase ASCII letters before validation (default: false)
    pub case_insensitive: bool,
    /// Longest accepted input in bytes, terminal excluded
    pub max_input_len: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Work counters collected while building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Phases run (equals the augmented text length)
    pub phases: usize,
    /// Nodes created, root excluded
    pub nodes_created: usize,
    pub leaves_created: usize,
    pub internal_created: usize,
    /// Active-node moves along a suffix link after a rule-2 extension
    pub suffix_link_follows: usize,
    /// Whole edges skipped by skip-count descent
    pub skip_count_hops: usize,
    /// Phases ended early by a rule-3 extension
    pub showstoppers: usize,
}

impl BuildStats {
    /// Sum of the per-extension work counters
    pub fn total_work(&self) -> usize {
        self.nodes_created + self.suffix_link_follows + self.skip_count_hops + self.showstoppers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_slots() {
        assert_eq!(symbol_slot(b'$'), Some(0));
        assert_eq!(symbol_slot(b'a'), Some(1));
        assert_eq!(symbol_slot(b'z'), Some(26));
        assert_eq!(symbol_slot(b'A'), None);
        assert_eq!(symbol_slot(b'#'), None);
    }

    #[test]
    fn test_terminal_sorts_first() {
        let mut slots: Vec<_> = b"zab$".iter().map(|&b| symbol_slot(b).unwrap()).collect();
        slots.sort();
        assert_eq!(slots, vec![0, 1, 2, 26]);
    }

    #[test]
    fn test_node_kinds() {
        let root = Node::root();
        assert!(root.is_root());
        assert!(!root.is_leaf());
        assert_eq!(root.suffix_link, Some(ROOT));

        let leaf = Node::leaf(3, 1, ROOT);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.end, LEAF_END);
        assert_eq!(leaf.suffix_link, None);

        let internal = Node::internal(1, EndHandle(4), ROOT);
        assert!(!internal.is_leaf());
        assert_eq!(internal.suffix_link, Some(ROOT));
    }

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert!(!config.case_insensitive);
        assert_eq!(config.max_input_len, DEFAULT_MAX_INPUT_LEN);
    }
}
