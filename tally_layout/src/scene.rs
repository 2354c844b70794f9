// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned scene produced by [`layout`](crate::layout).

use alloc::{string::String, vec, vec::Vec};

use kurbo::{BezPath, CubicBez, Point, Rect, RoundedRect};

/// One positioned node of a laid-out tree, owning its positioned children.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode<K> {
    /// The source-tree node this entry was produced from.
    pub key: K,
    /// The label that was measured for this node.
    pub label: String,
    /// Bounds of this node's label box.
    pub bounds: Rect,
    /// Span reserved for this node and all of its descendants.
    pub subtree: Rect,
    /// Positioned children, in the source tree's order.
    pub children: Vec<LayoutNode<K>>,
    /// Curve from the parent's bottom anchor to this node's top anchor.
    /// `None` for the root.
    pub connector: Option<CubicBez>,
}

impl<K> LayoutNode<K> {
    /// Midpoint of the top edge of [`bounds`](Self::bounds); where the incoming connector ends.
    pub fn anchor_top(&self) -> Point {
        Point::new(self.bounds.center().x, self.bounds.y0)
    }

    /// Midpoint of the bottom edge of [`bounds`](Self::bounds); where outgoing connectors start.
    pub fn anchor_bottom(&self) -> Point {
        Point::new(self.bounds.center().x, self.bounds.y1)
    }

    /// Rounded label shape for this node's box.
    pub fn chip(&self, radius: f64) -> RoundedRect {
        RoundedRect::from_rect(self.bounds, radius)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order traversal of this subtree, starting with `self`.
    pub fn iter(&self) -> DepthFirst<'_, K> {
        DepthFirst { stack: vec![self] }
    }

    /// Union of every label box in this subtree.
    pub fn bounding_box(&self) -> Rect {
        self.iter()
            .fold(self.bounds, |acc, node| acc.union(node.bounds))
    }

    /// Every connector in this subtree as one path, for a single stroke call.
    pub fn connector_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for curve in self.iter().filter_map(|node| node.connector) {
            path.move_to(curve.p0);
            path.curve_to(curve.p1, curve.p2, curve.p3);
        }
        path
    }
}

// Drop glue would recurse once per level; unlink children onto a work list so
// deep scenes free in constant stack.
impl<K> Drop for LayoutNode<K> {
    fn drop(&mut self) {
        let mut pending = core::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Iterator returned by [`LayoutNode::iter`].
#[derive(Clone, Debug)]
pub struct DepthFirst<'a, K> {
    stack: Vec<&'a LayoutNode<K>>,
}

impl<'a, K> Iterator for DepthFirst<'a, K> {
    type Item = &'a LayoutNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
