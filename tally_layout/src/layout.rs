// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two layout passes: bottom-up sizing, then top-down positioning.
//!
//! Both passes run over a flat arena in pre-order instead of recursing, so
//! tree depth only costs heap, never stack. In pre-order every parent sits
//! before its children, and each node's children occupy a contiguous index
//! range.

use alloc::{borrow::Cow, vec, vec::Vec};
use core::ops::Range;

use kurbo::{CubicBez, Point, Rect, Size};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::config::LayoutConfig;
use crate::measure::TextMeasure;
use crate::scene::LayoutNode;
use crate::tree::LayoutTree;

/// Lay out `tree` and return the positioned scene rooted at `tree.root()`.
///
/// The root's subtree occupies a rectangle whose top-left corner is
/// [`LayoutConfig::origin`]. A tree whose root has no children lays out as a
/// single box with no connectors.
///
/// Layout cannot fail. It is deterministic: the same tree and config always
/// produce identical geometry. Arbitrarily deep trees are fine; neither pass
/// recurses.
pub fn layout<T, M>(tree: &T, config: &LayoutConfig<M>) -> LayoutNode<T::Node>
where
    T: LayoutTree + ?Sized,
    M: TextMeasure,
{
    debug_assert!(
        config.horizontal_gap.is_finite() && config.vertical_gap.is_finite(),
        "layout gaps must be finite; got {config:?}"
    );

    let mut arena = collect(tree, config);
    measure(&mut arena, config);
    place(&mut arena, config);
    let scene = assemble(arena);

    #[cfg(feature = "tracing")]
    debug!(
        nodes = scene.node_count(),
        width = scene.subtree.width(),
        height = scene.subtree.height(),
        "laid out tree"
    );

    scene
}

/// Per-node working state shared by the passes.
struct Slot<'a, N> {
    node: N,
    label: Cow<'a, str>,
    /// Own label box.
    size: Size,
    /// Arena indices of this node's children.
    children: Range<usize>,
    /// Whole subtree, including this node's box.
    subtree: Size,
    /// Children subtree widths plus the gaps between them.
    children_span: f64,
    /// Top-left corner of the subtree.
    origin: Point,
    bounds: Rect,
    parent_anchor: Option<Point>,
}

impl<'a, N> Slot<'a, N> {
    fn new<M: TextMeasure>(node: N, label: Cow<'a, str>, config: &LayoutConfig<M>) -> Self {
        let size = config.box_size(&label);
        Self {
            node,
            label,
            size,
            children: 0..0,
            subtree: size,
            children_span: 0.0,
            origin: Point::ZERO,
            bounds: Rect::ZERO,
            parent_anchor: None,
        }
    }
}

/// Flatten `tree` into pre-order, measuring every label on the way.
fn collect<'a, T, M>(tree: &'a T, config: &LayoutConfig<M>) -> Vec<Slot<'a, T::Node>>
where
    T: LayoutTree + ?Sized,
    M: TextMeasure,
{
    let root = tree.root();
    let mut arena = vec![Slot::new(root, tree.label(root), config)];
    let mut stack = vec![0_usize];
    while let Some(idx) = stack.pop() {
        let first = arena.len();
        for &child in tree.children(arena[idx].node) {
            arena.push(Slot::new(child, tree.label(child), config));
        }
        arena[idx].children = first..arena.len();
        stack.extend(first..arena.len());
    }
    arena
}

/// Sizing pass. Children always have larger indices than their parent, so a
/// reverse sweep sees every child before its parent.
fn measure<N, M>(arena: &mut [Slot<'_, N>], config: &LayoutConfig<M>) {
    for idx in (0..arena.len()).rev() {
        let mut children_span = 0.0;
        let mut tallest = 0.0_f64;
        for (i, child) in arena[idx].children.clone().enumerate() {
            if i > 0 {
                children_span += config.horizontal_gap;
            }
            children_span += arena[child].subtree.width;
            tallest = tallest.max(arena[child].subtree.height);
        }

        let slot = &mut arena[idx];
        slot.children_span = children_span;
        if !slot.children.is_empty() {
            slot.subtree = Size::new(
                slot.size.width.max(children_span),
                slot.size.height + config.vertical_gap + tallest,
            );
        }
    }
}

/// Positioning pass. A forward sweep places every parent before its children.
fn place<N, M>(arena: &mut [Slot<'_, N>], config: &LayoutConfig<M>) {
    if let Some(root) = arena.first_mut() {
        root.origin = config.origin;
    }
    for idx in 0..arena.len() {
        let slot = &mut arena[idx];
        let center_x = slot.origin.x + slot.subtree.width / 2.0;
        slot.bounds = Rect::from_origin_size(
            Point::new(center_x - slot.size.width / 2.0, slot.origin.y),
            slot.size,
        );
        let bottom = Point::new(slot.bounds.center().x, slot.bounds.y1);
        let row_y = slot.bounds.y1 + config.vertical_gap;
        let mut x = center_x - slot.children_span / 2.0;

        for child in arena[idx].children.clone() {
            let child = &mut arena[child];
            child.origin = Point::new(x, row_y);
            child.parent_anchor = Some(bottom);
            x += child.subtree.width + config.horizontal_gap;
        }
    }
}

/// Turn the arena into the owned scene, building children before parents.
fn assemble<N>(mut arena: Vec<Slot<'_, N>>) -> LayoutNode<N> {
    let mut built: Vec<Option<LayoutNode<N>>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    while let Some(slot) = arena.pop() {
        let idx = arena.len();
        let children = slot
            .children
            .filter_map(|child| built[child].take())
            .collect();
        let top = Point::new(slot.bounds.center().x, slot.bounds.y0);
        built[idx] = Some(LayoutNode {
            key: slot.node,
            label: slot.label.into_owned(),
            bounds: slot.bounds,
            subtree: Rect::from_origin_size(slot.origin, slot.subtree),
            children,
            connector: slot.parent_anchor.map(|from| connector(from, top)),
        });
    }

    built
        .swap_remove(0)
        .expect("the arena always starts with the root")
}

/// Vertical S-curve from `from` down to `to`: both control points sit halfway
/// down, directly below `from` and directly above `to`.
fn connector(from: Point, to: Point) -> CubicBez {
    let pull = (to.y - from.y) / 2.0;
    CubicBez::new(
        from,
        Point::new(from.x, from.y + pull),
        Point::new(to.x, to.y - pull),
        to,
    )
}
