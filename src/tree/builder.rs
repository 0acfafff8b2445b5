//! Suffix tree builder
//!
//! Builds the explicit suffix tree of `input$` with Ukkonen's online
//! algorithm. Each phase `i` appends `text[i]`:
//! 1. Every leaf grows by one through the shared end marker (rule 1)
//! 2. Pending suffixes are inserted from the active point until one is
//!    already present (rule 3), which ends the phase early
//!
//! The suffix counter `j` carries over between phases and only moves forward,
//! which bounds the total number of extensions by `2n`.

use super::error::BuildError;
use super::suffix_tree::SuffixTree;
use super::types::*;
use log::{debug, trace};

/// Where the next extension starts: `length` symbols down the edge leaving
/// `node` that begins with the symbol at text position `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    node: NodeId,
    edge: usize,
    length: usize,
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self {
            node: ROOT,
            edge: 0,
            length: 0,
        }
    }
}

/// Outcome of the extension attempted at an existing edge
enum Extension {
    /// Rule 2: the edge was split and a leaf hung off the new node
    Split(NodeId),
    /// Rule 3: the next symbol is already on the edge
    Present,
}

/// Builder for the suffix tree of a single string
pub struct TreeBuilder {
    /// Augmented text (input + terminal)
    text: String,
    /// Child-table slot for every text position
    symbols: Vec<u8>,
    nodes: Vec<Node>,
    ends: Vec<EndMarker>,
    active: ActivePoint,
    stats: BuildStats,
}

impl TreeBuilder {
    /// Validate `input` with the default configuration
    pub fn new(input: &str) -> Result<Self, BuildError> {
        Self::with_config(input, &TreeConfig::default())
    }

    /// Validate `input` and prepare the arenas.
    ///
    /// Nothing beyond the root is allocated until [`build`](Self::build) runs,
    /// and a rejected input never produces a builder.
    pub fn with_config(input: &str, config: &TreeConfig) -> Result<Self, BuildError> {
        let (text, symbols) = prepare(input, config)?;
        let n = text.len();

        let mut nodes = Vec::with_capacity(2 * n);
        nodes.push(Node::root());

        Ok(Self {
            text,
            symbols,
            nodes,
            ends: vec![EndMarker::default()],
            active: ActivePoint::default(),
            stats: BuildStats::default(),
        })
    }

    /// Augmented text the tree will index
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Nodes allocated so far, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Run every phase and return the finished tree
    pub fn build(mut self) -> SuffixTree {
        let n = self.symbols.len();
        let mut j = 0;

        for i in 0..n {
            j = self.phase(i, j);
        }
        debug_assert_eq!(j, n, "terminal phase must insert every remaining suffix");

        debug!(
            "built suffix tree for {} symbols: {} nodes, {} suffix-link follows, {} skip-count hops, {} showstoppers",
            n,
            self.nodes.len(),
            self.stats.suffix_link_follows,
            self.stats.skip_count_hops,
            self.stats.showstoppers
        );

        SuffixTree::from_parts(self.text, self.symbols, self.nodes, self.ends, self.stats)
    }

    /// Run phase `i` starting at suffix `j`; returns the first suffix still
    /// missing when the phase ends.
    fn phase(&mut self, i: usize, mut j: usize) -> usize {
        // Rule 1 for every leaf at once
        self.ends[LEAF_END.0].value = i;
        self.stats.phases += 1;

        // Internal node created earlier in this phase, still waiting for its
        // suffix link
        let mut pending: Option<NodeId> = None;

        while j <= i {
            if self.active.length == 0 {
                self.active.edge = i;
            }

            let node = self.active.node;
            let slot = self.symbols[self.active.edge] as usize;
            let existing = self.nodes[node].children[slot];

            match existing {
                None => {
                    self.add_leaf(node, i, j);
                    trace!("phase {}: leaf for suffix {} under node {}", i, j, node);

                    if let Some(prev) = pending.take() {
                        self.nodes[prev].suffix_link = Some(node);
                    }
                }
                Some(child) => {
                    if self.skip_count(child) {
                        continue;
                    }

                    match self.extend_edge(child, i, j) {
                        Extension::Split(mid) => {
                            trace!("phase {}: split above node {} for suffix {}", i, child, j);

                            if let Some(prev) = pending.replace(mid) {
                                self.nodes[prev].suffix_link = Some(mid);
                            }
                        }
                        Extension::Present => {
                            if let Some(prev) = pending {
                                if node != ROOT {
                                    self.nodes[prev].suffix_link = Some(node);
                                }
                            }
                            self.active.length += 1;
                            self.stats.showstoppers += 1;
                            trace!("phase {}: suffix {} already present, phase stops", i, j);
                            break;
                        }
                    }
                }
            }

            self.advance_after_insert(j);
            j += 1;
        }

        j
    }

    /// Move the active point to the locus of suffix `j + 1`
    fn advance_after_insert(&mut self, j: usize) {
        if self.active.node == ROOT {
            if self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = j + 1;
            }
        } else {
            self.active.node = self.nodes[self.active.node].suffix_link.unwrap_or(ROOT);
            self.stats.suffix_link_follows += 1;
        }
    }

    /// Skip-count descent: hop over `child` when the active length covers
    /// its whole edge
    fn skip_count(&mut self, child: NodeId) -> bool {
        let len = self.edge_length(child);
        if len > self.active.length {
            return false;
        }

        self.active.edge += len;
        self.active.length -= len;
        self.active.node = child;
        self.stats.skip_count_hops += 1;
        true
    }

    /// Rule 2 (split) or rule 3 at `active.length` symbols into `child`'s edge
    fn extend_edge(&mut self, child: NodeId, i: usize, j: usize) -> Extension {
        let split = self.nodes[child].start + self.active.length;

        if self.symbols[i] == self.symbols[split] {
            Extension::Present
        } else {
            Extension::Split(self.split_edge(child, split, i, j))
        }
    }

    /// Split `child`'s edge before `split` and hang a leaf for suffix `j`
    /// off the new internal node
    fn split_edge(&mut self, child: NodeId, split: usize, i: usize, j: usize) -> NodeId {
        let parent = self.active.node;
        let start = self.nodes[child].start;
        let parent_slot = self.symbols[start] as usize;
        let child_slot = self.symbols[split] as usize;
        let leaf_slot = self.symbols[i] as usize;

        // Active length is at least one here, so split > start
        let end = self.alloc_end(split - 1);
        let mid = self.alloc(Node::internal(start, end, parent));
        self.stats.internal_created += 1;

        self.nodes[parent].children[parent_slot] = Some(mid);

        self.nodes[child].start = split;
        self.nodes[child].parent = Some(mid);
        self.nodes[mid].children[child_slot] = Some(child);

        let leaf = self.alloc(Node::leaf(i, j, mid));
        self.stats.leaves_created += 1;
        self.nodes[mid].children[leaf_slot] = Some(leaf);

        mid
    }

    /// Rule 2 without a split: new leaf for suffix `j` directly under `parent`
    fn add_leaf(&mut self, parent: NodeId, i: usize, j: usize) {
        let slot = self.symbols[i] as usize;
        let leaf = self.alloc(Node::leaf(i, j, parent));
        self.stats.leaves_created += 1;
        self.nodes[parent].children[slot] = Some(leaf);
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.stats.nodes_created += 1;
        id
    }

    fn alloc_end(&mut self, value: usize) -> EndHandle {
        let handle = EndHandle(self.ends.len());
        self.ends.push(EndMarker { value });
        handle
    }

    #[inline]
    fn edge_length(&self, id: NodeId) -> usize {
        let node = &self.nodes[id];
        self.ends[node.end.0].value + 1 - node.start
    }
}

/// Validate `input` and append the terminal.
///
/// Returns the augmented text and the child-table slot of every position.
/// The first offending character decides the error.
fn prepare(input: &str, config: &TreeConfig) -> Result<(String, Vec<u8>), BuildError> {
    if input.is_empty() {
        return Err(BuildError::EmptyInput);
    }
    if input.len() > config.max_input_len {
        return Err(BuildError::InputTooLong {
            len: input.len(),
            max: config.max_input_len,
        });
    }

    let mut text = String::with_capacity(input.len() + 1);
    let mut symbols = Vec::with_capacity(input.len() + 1);

    for (position, ch) in input.chars().enumerate() {
        let ch = if config.case_insensitive {
            ch.to_ascii_lowercase()
        } else {
            ch
        };

        match ch {
            '$' => return Err(BuildError::DuplicateTerminal { position }),
            'a'..='z' => {
                text.push(ch);
                symbols.push(ch as u8 - b'a' + 1);
            }
            _ => return Err(BuildError::InvalidAlphabet { symbol: ch, position }),
        }
    }

    text.push(TERMINAL as char);
    symbols.push(0);

    Ok((text, symbols))
}
