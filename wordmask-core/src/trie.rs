//! trie.rs - Character-keyed prefix tree backing the sensitive-word index.
//!
//! Nodes live in a flat table and refer to their children by index, so the
//! tree owns every node outright and has no back edges. Node `0` is the
//! root; it has no incoming edge and is never terminal.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use log::debug;

use crate::match_result::loggable;

/// Index of a node inside a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single node of the prefix tree.
///
/// `word` is `Some` exactly when a registered word ends here. It holds the
/// literal string that was inserted rather than the path that leads to it.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, NodeId>,
    word: Option<String>,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }
}

/// An arena-backed prefix tree keyed by Unicode scalar values.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Registers `word`, creating nodes along its characters as needed.
    ///
    /// The empty string is ignored so the root never becomes terminal.
    /// Inserting a word that is already present changes nothing.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            debug!("Ignoring empty word insertion.");
            return;
        }

        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = match self.nodes[current.0].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0];
        if node.word.is_none() {
            self.word_count += 1;
        }
        node.word = Some(word.to_string());
        debug!("Inserted word {} into trie ({} nodes).", loggable(word), self.nodes.len());
    }

    /// Applies [`Trie::insert`] to every word in order.
    pub fn insert_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Returns the child of `node` reached through `c`, if any.
    pub fn child_at(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(&c).copied()
    }

    /// Returns the node stored under `id`.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0)
    }

    /// The word ending at `id`, if that node is terminal.
    pub fn word_at(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).and_then(TrieNode::word)
    }

    /// Exact lookup of a complete registered word.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            match self.child_at(current, c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current != NodeId::ROOT && self.nodes[current.0].is_terminal()
    }

    /// Number of distinct registered words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
