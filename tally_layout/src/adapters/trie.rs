// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Tally Trie.
//!
//! ## Feature
//!
//! Enable with `trie_adapter`.
//!
//! ## Notes
//!
//! The trie's root has no token, so it is drawn with the fixed label
//! [`ROOT_LABEL`]. Every other node is drawn as `"{token} ({hit_count})"`.
//! Children keep the trie's insertion order.

use alloc::{borrow::Cow, format};

use tally_trie::{NodeId, Trie};

use crate::{LayoutConfig, LayoutNode, LayoutTree, TextMeasure, layout};

/// Label drawn for the trie's synthetic root.
pub const ROOT_LABEL: &str = "Root";

/// Read-only [`LayoutTree`] view of a [`Trie`].
#[derive(Clone, Copy, Debug)]
pub struct TrieView<'a> {
    trie: &'a Trie,
}

impl<'a> TrieView<'a> {
    /// Wrap `trie` for layout.
    pub fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// The wrapped trie.
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }
}

impl LayoutTree for TrieView<'_> {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.trie.root()
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.trie.children(node)
    }

    fn label(&self, node: NodeId) -> Cow<'_, str> {
        match (self.trie.label(node), self.trie.hit_count(node)) {
            (Some(token), Some(hits)) => Cow::Owned(format!("{token} ({hits})")),
            _ => Cow::Borrowed(ROOT_LABEL),
        }
    }
}

/// Lay out `trie` through a [`TrieView`].
pub fn layout_trie<M: TextMeasure>(trie: &Trie, config: &LayoutConfig<M>) -> LayoutNode<NodeId> {
    layout(&TrieView::new(trie), config)
}
