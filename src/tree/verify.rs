//! Structural checks for a finished tree
//!
//! Used by tests, the fuzz target and `sfx check`. The label checks walk
//! every root-to-leaf path, so this is quadratic in the worst case and meant
//! for verification rather than the hot path.

use super::error::InvariantError;
use super::suffix_tree::SuffixTree;
use super::types::{symbol_slot, NodeId, ROOT};

impl SuffixTree {
    /// Check every structural property of an explicit suffix tree
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.check_edges()?;
        self.check_leaves()?;
        self.check_suffix_links()?;
        Ok(())
    }

    /// Non-empty edges, children stored under their first symbol, parents
    /// pointing back
    fn check_edges(&self) -> Result<(), InvariantError> {
        let text = self.text.as_bytes();

        if let Some(id) = (1..self.node_count()).find(|&id| self.edge_length(id) == 0) {
            return Err(InvariantError::EmptyEdge(id));
        }

        for (id, node) in self.nodes.iter().enumerate() {
            for (slot, child) in node.children.iter().enumerate() {
                let Some(child) = *child else { continue };

                if self.nodes[child].parent != Some(id) {
                    return Err(InvariantError::ParentMismatch { parent: id, child });
                }
                let first = text[self.nodes[child].start];
                if symbol_slot(first) != Some(slot) {
                    return Err(InvariantError::MisplacedChild { parent: id, child });
                }
            }
        }
        Ok(())
    }

    /// Exactly one leaf per suffix, spelling that suffix
    fn check_leaves(&self) -> Result<(), InvariantError> {
        let n = self.len();
        let found = self.leaf_count();
        if found != n {
            return Err(InvariantError::LeafCount { expected: n, found });
        }

        let mut seen = vec![false; n];
        for (id, node) in self.nodes.iter().enumerate() {
            let Some(suffix_id) = node.suffix_id else { continue };

            if suffix_id >= n {
                return Err(InvariantError::MissingSuffix(suffix_id));
            }
            if std::mem::replace(&mut seen[suffix_id], true) {
                return Err(InvariantError::DuplicateSuffix(suffix_id));
            }

            let label = self.path_label(id);
            if label != self.text[suffix_id..] {
                return Err(InvariantError::WrongLabel { id: suffix_id, found: label });
            }
        }

        match seen.iter().position(|&s| !s) {
            Some(missing) => Err(InvariantError::MissingSuffix(missing)),
            None => Ok(()),
        }
    }

    /// Every internal node links to the node spelling its label minus the
    /// first symbol, and following links always reaches the root
    fn check_suffix_links(&self) -> Result<(), InvariantError> {
        if self.root().suffix_link != Some(ROOT) {
            return Err(InvariantError::WrongLink {
                from: ROOT,
                to: self.root().suffix_link.unwrap_or(ROOT),
            });
        }

        for (id, node) in self.nodes.iter().enumerate() {
            if id == ROOT || node.is_leaf() {
                continue;
            }

            let Some(link) = node.suffix_link else {
                return Err(InvariantError::MissingLink(id));
            };

            let label = self.path_label(id);
            if self.nodes[link].is_leaf() || self.path_label(link) != label[1..] {
                return Err(InvariantError::WrongLink { from: id, to: link });
            }

            self.check_link_chain(id)?;
        }
        Ok(())
    }

    fn check_link_chain(&self, from: NodeId) -> Result<(), InvariantError> {
        let mut current = from;
        for _ in 0..self.node_count() {
            if current == ROOT {
                return Ok(());
            }
            current = match self.nodes[current].suffix_link {
                Some(next) => next,
                None => return Err(InvariantError::MissingLink(current)),
            };
        }
        Err(InvariantError::LinkCycle(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::types::LEAF_END;

    const SAMPLES: &[&str] = &[
        "abcabxabcyababcdaaaabc",
        "mississi",
        "xyzxyaxyz",
        "banana",
        "mississippi",
        "gattaca",
        "tggtggtggtgcggtgatggtgc",
        "woolloomooloo",
        "acttatcattt",
        "abacabad",
    ];

    #[test]
    fn test_samples_are_valid() {
        for input in SAMPLES {
            let tree = SuffixTree::build(input).unwrap();
            assert_eq!(tree.check_invariants(), Ok(()), "input {:?}", input);
        }
    }

    #[test]
    fn test_detects_wrong_suffix_link() {
        let mut tree = SuffixTree::build("abcabxabcd").unwrap();
        let abc = tree.locate(b"abc").unwrap().node;
        tree.nodes[abc].suffix_link = Some(ROOT);

        assert_eq!(
            tree.check_invariants(),
            Err(InvariantError::WrongLink { from: abc, to: ROOT })
        );
    }

    #[test]
    fn test_detects_misplaced_child() {
        let mut tree = SuffixTree::build("banana").unwrap();
        let b = tree.child(ROOT, b'b').unwrap();
        let n = tree.child(ROOT, b'n').unwrap();
        let slot_b = symbol_slot(b'b').unwrap();
        let slot_n = symbol_slot(b'n').unwrap();
        tree.nodes[ROOT].children[slot_b] = Some(n);
        tree.nodes[ROOT].children[slot_n] = Some(b);

        assert!(matches!(
            tree.check_invariants(),
            Err(InvariantError::MisplacedChild { parent: ROOT, .. })
        ));
    }

    #[test]
    fn test_detects_duplicate_suffix() {
        let mut tree = SuffixTree::build("ab").unwrap();
        let a = tree.child(ROOT, b'a').unwrap();
        let b = tree.child(ROOT, b'b').unwrap();
        tree.nodes[b].suffix_id = tree.nodes[a].suffix_id;

        assert!(matches!(
            tree.check_invariants(),
            Err(InvariantError::DuplicateSuffix(_)) | Err(InvariantError::WrongLabel { .. })
        ));
    }

    #[test]
    fn test_detects_empty_edge() {
        let mut tree = SuffixTree::build("ab").unwrap();
        let a = tree.child(ROOT, b'a').unwrap();
        // Leaf edge [end + 1, end] is empty
        tree.nodes[a].start = tree.ends[LEAF_END.0].value + 1;

        assert_eq!(tree.check_invariants(), Err(InvariantError::EmptyEdge(a)));
    }
}
