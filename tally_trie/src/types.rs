// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node handles and the edge keys used to index children by token.

use alloc::boxed::Box;
use core::hash::{Hash, Hasher};

use hashbrown::Equivalent;

/// Identifier for a node in a [`Trie`](crate::Trie).
///
/// Ids are only meaningful for the trie that produced them. The second field is
/// the trie's generation, bumped by [`Trie::clear`](crate::Trie::clear), so ids
/// handed out before a reset stop resolving afterwards. Accessors treat an id
/// that does not name a live node as absent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Owned key of the edge map: a parent node and the token leading out of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EdgeKey {
    pub(crate) parent: NodeId,
    pub(crate) token: Box<str>,
}

/// Borrowed form of [`EdgeKey`] so lookups do not allocate.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeRef<'a> {
    pub(crate) parent: NodeId,
    pub(crate) token: &'a str,
}

// Both key forms must hash identically for `Equivalent` lookups to work.
impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        EdgeRef::from(self).hash(state);
    }
}

impl Hash for EdgeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.token.hash(state);
    }
}

impl<'a> From<&'a EdgeKey> for EdgeRef<'a> {
    fn from(key: &'a EdgeKey) -> Self {
        Self {
            parent: key.parent,
            token: &key.token,
        }
    }
}

impl Equivalent<EdgeKey> for EdgeRef<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        self.parent == key.parent && self.token == &*key.token
    }
}
