//! Lexicographic suffix enumeration
//!
//! Depth-first walk with an explicit stack, so long inputs cannot overflow
//! the call stack. Children are visited in slot order (`$` before `a`..`z`).

use super::suffix_tree::SuffixTree;
use super::types::{NodeId, ROOT};
use std::iter::FusedIterator;

/// Iterator over `(suffix_id, suffix)` pairs in lexicographic order.
///
/// **Read-only** - borrows the tree and yields slices of its text.
pub struct Suffixes<'a> {
    tree: &'a SuffixTree,
    stack: Vec<NodeId>,
}

impl<'a> Suffixes<'a> {
    pub(crate) fn new(tree: &'a SuffixTree, start: NodeId) -> Self {
        let mut stack = Vec::with_capacity(64);
        stack.push(start);
        Self { tree, stack }
    }
}

impl<'a> Iterator for Suffixes<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);

            if let Some(suffix_id) = node.suffix_id {
                return Some((suffix_id, &self.tree.text()[suffix_id..]));
            }

            // Reverse so the smallest symbol is popped first
            self.stack.extend(node.child_ids().rev());
        }
        None
    }
}

impl FusedIterator for Suffixes<'_> {}

impl SuffixTree {
    /// Enumerate every suffix of the augmented text in lexicographic order
    ///
    /// # Example
    /// ```
    /// use sfx::SuffixTree;
    ///
    /// let tree = SuffixTree::build("aab").unwrap();
    /// let ids: Vec<_> = tree.suffixes().map(|(id, _)| id).collect();
    /// assert_eq!(ids, vec![3, 0, 1, 2]);
    /// ```
    pub fn suffixes(&self) -> Suffixes<'_> {
        Suffixes::new(self, ROOT)
    }

    /// Enumerate the suffixes whose leaves lie below `id`
    pub fn suffixes_below(&self, id: NodeId) -> Suffixes<'_> {
        Suffixes::new(self, id)
    }

    /// Suffix array of the augmented text, read off the tree
    pub fn suffix_array(&self) -> Vec<usize> {
        self.suffixes().map(|(id, _)| id).collect()
    }
}
