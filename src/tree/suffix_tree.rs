//! The finished suffix tree
//!
//! A `SuffixTree` is immutable once built. Leaf edges all share the global
//! end marker, which after the last phase points at the terminal.

use super::builder::TreeBuilder;
use super::error::BuildError;
use super::types::*;

/// Explicit suffix tree of `input$`
#[derive(Debug, Clone)]
pub struct SuffixTree {
    pub(crate) text: String,
    pub(crate) symbols: Vec<u8>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) ends: Vec<EndMarker>,
    pub(crate) stats: BuildStats,
}

impl SuffixTree {
    /// Build the suffix tree of `input` with the default configuration
    ///
    /// # Example
    /// ```
    /// use sfx::SuffixTree;
    ///
    /// let tree = SuffixTree::build("banana").unwrap();
    /// assert_eq!(tree.text(), "banana$");
    /// assert_eq!(tree.leaf_count(), 7);
    /// ```
    pub fn build(input: &str) -> Result<Self, BuildError> {
        Ok(TreeBuilder::new(input)?.build())
    }

    /// Build with an explicit configuration
    pub fn build_with(input: &str, config: &TreeConfig) -> Result<Self, BuildError> {
        Ok(TreeBuilder::with_config(input, config)?.build())
    }

    pub(crate) fn from_parts(
        text: String,
        symbols: Vec<u8>,
        nodes: Vec<Node>,
        ends: Vec<EndMarker>,
        stats: BuildStats,
    ) -> Self {
        Self {
            text,
            symbols,
            nodes,
            ends,
            stats,
        }
    }

    /// Augmented text, terminal included
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The original input, terminal excluded
    pub fn input(&self) -> &str {
        &self.text[..self.input_len()]
    }

    /// Length of the augmented text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: the augmented text holds at least the terminal
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn input_len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Nodes in the tree, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Work counters recorded during construction
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Children of `id` in lexicographic order of their first symbol
    pub fn children(&self, id: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes[id].child_ids()
    }

    /// Child of `id` whose edge starts with `byte`
    pub fn child(&self, id: NodeId, byte: u8) -> Option<NodeId> {
        symbol_slot(byte).and_then(|slot| self.nodes[id].children[slot])
    }

    /// Inclusive text index where the edge into `id` ends
    pub fn edge_end(&self, id: NodeId) -> usize {
        self.ends[self.nodes[id].end.0].value
    }

    /// Number of symbols on the edge into `id`; zero for the root
    pub fn edge_length(&self, id: NodeId) -> usize {
        if id == ROOT {
            return 0;
        }
        self.edge_end(id) + 1 - self.nodes[id].start
    }

    /// Label of the edge into `id`
    pub fn edge_label(&self, id: NodeId) -> &str {
        let start = self.nodes[id].start;
        &self.text[start..start + self.edge_length(id)]
    }

    /// Concatenated edge labels from the root down to `id`
    pub fn path_label(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            parts.push(self.edge_label(current));
            current = parent;
        }
        parts.iter().rev().copied().collect()
    }

    /// Number of symbols from the root down to `id`
    pub fn string_depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            depth += self.edge_length(current);
            current = parent;
        }
        depth
    }
}
