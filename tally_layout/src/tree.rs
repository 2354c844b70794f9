// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only tree view consumed by [`layout`](crate::layout).

use alloc::borrow::Cow;

/// A tree the layout engine can walk.
///
/// Implementors expose a root, an ordered child list per node, and the text
/// to measure and draw for each node. The layout never mutates the tree and
/// visits every reachable node exactly once, so the structure must be acyclic.
///
/// Child order is significant: children are placed left to right in the order
/// returned by [`LayoutTree::children`].
pub trait LayoutTree {
    /// Handle for a node of this tree. Carried into the scene as
    /// [`LayoutNode::key`](crate::LayoutNode::key).
    type Node: Copy;

    /// The node drawn at the top of the scene.
    fn root(&self) -> Self::Node;

    /// Children of `node`, left to right.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Text shown in `node`'s box.
    fn label(&self, node: Self::Node) -> Cow<'_, str>;
}

impl<T: LayoutTree + ?Sized> LayoutTree for &T {
    type Node = T::Node;

    fn root(&self) -> Self::Node {
        (**self).root()
    }

    fn children(&self, node: Self::Node) -> &[Self::Node] {
        (**self).children(node)
    }

    fn label(&self, node: Self::Node) -> Cow<'_, str> {
        (**self).label(node)
    }
}
