//! Pattern queries on a finished tree
//!
//! A pattern is walked down from the root one edge at a time. Every
//! occurrence of the pattern is a leaf below the point where the walk ends,
//! so counting and locating cost O(m + occ).

use super::suffix_tree::SuffixTree;
use super::types::{symbol_slot, NodeId, ROOT, TERMINAL};

/// Where a pattern walk ended: `offset` symbols into the edge entering `node`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locus {
    pub node: NodeId,
    pub offset: usize,
}

impl SuffixTree {
    /// Walk `pattern` from the root.
    ///
    /// Returns `None` when the pattern does not occur. Patterns containing
    /// the terminal or bytes outside the alphabet never occur.
    pub fn locate(&self, pattern: &[u8]) -> Option<Locus> {
        if pattern.contains(&TERMINAL) {
            return None;
        }

        let mut locus = Locus { node: ROOT, offset: 0 };
        let mut matched = 0;

        while matched < pattern.len() {
            let slot = symbol_slot(pattern[matched])?;
            let child = self.nodes[locus.node].children[slot]?;

            let start = self.nodes[child].start;
            let len = self.edge_length(child);
            let take = len.min(pattern.len() - matched);

            let edge = &self.symbols[start..start + take];
            let wanted = pattern[matched..matched + take].iter().map(|&b| symbol_slot(b));
            if !edge.iter().zip(wanted).all(|(&s, w)| w == Some(s as usize)) {
                return None;
            }

            matched += take;
            locus = Locus {
                node: child,
                offset: take,
            };
        }

        Some(locus)
    }

    /// Whether `pattern` occurs anywhere in the input
    ///
    /// # Example
    /// ```
    /// use sfx::SuffixTree;
    ///
    /// let tree = SuffixTree::build("mississippi").unwrap();
    /// assert!(tree.contains("ssis"));
    /// assert!(!tree.contains("sss"));
    /// ```
    pub fn contains(&self, pattern: &str) -> bool {
        self.locate(pattern.as_bytes()).is_some()
    }

    /// Whether `pattern` is a suffix of the input
    pub fn is_suffix(&self, pattern: &str) -> bool {
        let Some(locus) = self.locate(pattern.as_bytes()) else {
            return false;
        };

        if locus.offset < self.edge_length(locus.node) {
            // Mid-edge: the next symbol must be the terminal
            let next = self.nodes[locus.node].start + locus.offset;
            self.text.as_bytes()[next] == TERMINAL
        } else {
            self.child(locus.node, TERMINAL).is_some()
        }
    }

    /// Start positions of every occurrence of `pattern`, ascending
    pub fn find_all(&self, pattern: &str) -> Vec<usize> {
        let Some(locus) = self.locate(pattern.as_bytes()) else {
            return Vec::new();
        };

        let input_len = self.input_len();
        let mut positions: Vec<usize> = self
            .suffixes_below(locus.node)
            .map(|(id, _)| id)
            .filter(|&id| id < input_len)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &str) -> usize {
        let Some(locus) = self.locate(pattern.as_bytes()) else {
            return 0;
        };

        let input_len = self.input_len();
        self.suffixes_below(locus.node)
            .filter(|&(id, _)| id < input_len)
            .count()
    }

    /// Longest substring occurring at least twice, first in lexicographic
    /// order on ties
    pub fn longest_repeat(&self) -> &str {
        let mut best: Option<(usize, NodeId)> = None;
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                continue;
            }
            if best.is_none_or(|(d, _)| depth > d) {
                best = Some((depth, id));
            }
            for child in node.child_ids().rev() {
                stack.push((child, depth + self.edge_length(child)));
            }
        }

        match best {
            Some((depth, id)) if depth > 0 => {
                // Any leaf below an internal node starts with its path label
                let start = self.suffixes_below(id).next().map_or(0, |(k, _)| k);
                &self.text[start..start + depth]
            }
            _ => "",
        }
    }
}
