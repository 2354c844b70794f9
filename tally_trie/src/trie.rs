// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core trie implementation: node arena, insertion, and read accessors.

use alloc::{boxed::Box, vec, vec::Vec};
use hashbrown::HashMap;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::types::{EdgeKey, EdgeRef, NodeId};

/// A prefix tree over string tokens with a per-node occurrence counter.
///
/// All nodes live in one arena owned by the trie. Children are kept in the
/// order they were first inserted, and looked up by token through a single
/// edge map keyed by `(parent, token)`.
///
/// ## Example
///
/// ```rust
/// use tally_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert(["a", "b"]);
/// trie.insert(["a", "b"]);
///
/// let a = trie.child(trie.root(), "a").unwrap();
/// let b = trie.child(a, "b").unwrap();
/// assert_eq!(trie.hit_count(a), Some(2));
/// assert_eq!(trie.hit_count(b), Some(2));
/// assert!(trie.is_terminal(b));
/// assert_eq!(trie.len(), 2);
/// ```
pub struct Trie {
    /// slot 0 is always the root
    nodes: Vec<Node>,
    edges: HashMap<EdgeKey, NodeId>,
    generation: u32,
}

impl core::fmt::Debug for Trie {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let terminal = self.nodes.iter().filter(|n| n.terminal).count();
        f.debug_struct("Trie")
            .field("nodes", &self.len())
            .field("terminal", &terminal)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
struct Node {
    label: Option<Box<str>>,
    children: Vec<NodeId>,
    hit_count: u64,
    terminal: bool,
}

impl Node {
    fn root() -> Self {
        Self {
            label: None,
            children: Vec::new(),
            hit_count: 0,
            terminal: false,
        }
    }

    fn labeled(token: &str) -> Self {
        Self {
            label: Some(token.into()),
            ..Self::root()
        }
    }
}

impl Trie {
    /// Create an empty trie holding only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            edges: HashMap::new(),
            generation: 0,
        }
    }

    /// Insert one token sequence.
    ///
    /// Walks from the root, creating a child for every token not yet present
    /// under the current node, and increments the hit count of every node on
    /// the path. The node reached by the last token is marked terminal.
    ///
    /// An empty sequence is a no-op. Empty-string tokens are ordinary labels.
    pub fn insert<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        #[cfg(feature = "tracing")]
        let nodes_before = self.nodes.len();

        let mut current = self.root();
        let mut depth = 0_usize;
        for token in tokens {
            let token = token.as_ref();
            let next = match self.child(current, token) {
                Some(id) => id,
                None => self.push_child(current, token),
            };
            self.node_mut(next).hit_count += 1;
            current = next;
            depth += 1;
        }
        if depth == 0 {
            return;
        }
        self.node_mut(current).terminal = true;

        #[cfg(feature = "tracing")]
        trace!(
            depth,
            created = self.nodes.len() - nodes_before,
            "inserted token sequence"
        );
    }

    /// Split `text` on Unicode whitespace and [`insert`](Self::insert) the tokens.
    ///
    /// Blank text inserts nothing.
    pub fn insert_text(&mut self, text: &str) {
        self.insert(text.split_whitespace());
    }

    /// Drop every node except the root.
    ///
    /// Ids handed out before the call no longer resolve.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::root());
        self.edges.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// The synthetic root. It has no label, no hit count, and is never terminal.
    pub fn root(&self) -> NodeId {
        NodeId::new(0, self.generation)
    }

    /// Returns `true` if `id` names a node of this trie.
    pub fn contains(&self, id: NodeId) -> bool {
        id.generation() == self.generation && id.idx() < self.nodes.len()
    }

    /// Children of `id` in the order they were first inserted.
    ///
    /// Returns an empty slice if `id` does not name a node of this trie.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        if !self.contains(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// The token a node represents, or `None` for the root.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        if !self.contains(id) {
            return None;
        }
        self.node(id).label.as_deref()
    }

    /// Number of inserted sequences that have this node's path as a prefix.
    ///
    /// Returns `None` for the root, whose count is not tracked.
    pub fn hit_count(&self, id: NodeId) -> Option<u64> {
        if !self.contains(id) || id.idx() == 0 {
            return None;
        }
        Some(self.node(id).hit_count)
    }

    /// Returns `true` if at least one inserted sequence ends exactly at `id`.
    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.contains(id) && self.node(id).terminal
    }

    /// The child of `parent` reached by `token`, if one exists.
    pub fn child(&self, parent: NodeId, token: &str) -> Option<NodeId> {
        if !self.contains(parent) {
            return None;
        }
        self.edges.get(&EdgeRef { parent, token }).copied()
    }

    /// Follow `path` from the root.
    ///
    /// The empty path resolves to the root.
    pub fn find<I>(&self, path: I) -> Option<NodeId>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        path.into_iter()
            .try_fold(self.root(), |node, token| self.child(node, token.as_ref()))
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns `true` if nothing has been inserted since construction or the last [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_child(&mut self, parent: NodeId, token: &str) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.nodes.len() as u32, self.generation);
        self.nodes.push(Node::labeled(token));
        self.node_mut(parent).children.push(id);
        self.edges.insert(
            EdgeKey {
                parent,
                token: token.into(),
            },
            id,
        );
        id
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.idx()]
    }
}
