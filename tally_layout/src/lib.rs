// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tally Layout: a Kurbo-native layered layout for labeled trees.
//!
//! Given any tree that can report its children and a label per node, [`layout`]
//! computes where each label box goes and how to connect it to its parent:
//!
//! - Every node gets a box sized from its measured label plus padding.
//! - Siblings sit side by side, separated by a horizontal gap between their
//!   whole subtrees, so no two subtrees overlap.
//! - A parent is centered over the span of its children; the children row
//!   starts a vertical gap below the parent's box.
//! - Each child gets a cubic connector from the midpoint of its parent's bottom
//!   edge to the midpoint of its own top edge. Both control points pull
//!   vertically, so horizontally offset children get an S-curve instead of a
//!   straight diagonal.
//!
//! The layout runs as an explicit two-pass function. A bottom-up pass measures
//! label boxes and subtree extents; a top-down pass assigns absolute positions.
//! The result is an immutable [`LayoutNode`] scene. It is a pure function of the
//! tree and the [`LayoutConfig`], so identical inputs give bit-identical
//! geometry.
//!
//! ## Not a renderer
//!
//! This crate does not draw anything. Hosts stroke the connectors and paint the
//! label boxes using whatever surface they have; [`LayoutNode::chip`] and
//! [`LayoutNode::connector_path`] return ready-made Kurbo shapes for that.
//!
//! ## API overview
//!
//! - [`LayoutTree`]: read-only view of a source tree (children and labels).
//! - [`TextMeasure`]: label measurement. Closures `Fn(&str) -> Size` work, and
//!   [`MonospaceMeasure`] is a fixed-advance default.
//! - [`LayoutConfig`]: gaps, label padding, scene origin, and the measurer.
//! - [`layout`] → [`LayoutNode`]: the positioned scene.
//!
//! ## Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use tally_layout::{LayoutConfig, LayoutTree, layout};
//!
//! // A root with two leaves, stored as (label, children) by index.
//! struct Small(Vec<(&'static str, Vec<usize>)>);
//!
//! impl LayoutTree for Small {
//!     type Node = usize;
//!     fn root(&self) -> usize {
//!         0
//!     }
//!     fn children(&self, node: usize) -> &[usize] {
//!         &self.0[node].1
//!     }
//!     fn label(&self, node: usize) -> Cow<'_, str> {
//!         Cow::Borrowed(self.0[node].0)
//!     }
//! }
//!
//! let tree = Small(vec![("Root", vec![1, 2]), ("left", vec![]), ("right", vec![])]);
//! let scene = layout(&tree, &LayoutConfig::default());
//!
//! assert_eq!(scene.children.len(), 2);
//! let first = &scene.children[0];
//! assert_eq!(first.connector.unwrap().p0, scene.anchor_bottom());
//! assert_eq!(first.connector.unwrap().p3, first.anchor_top());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `tracing`: emit a `debug` level event per layout call.
//! - `trie_adapter`: [`adapters::trie`], laying out a `tally_trie::Trie`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adapters;

mod config;
mod layout;
mod measure;
mod scene;
mod tree;

#[cfg(test)]
mod proptests;

pub use config::LayoutConfig;
pub use layout::layout;
pub use measure::{MonospaceMeasure, TextMeasure};
pub use scene::{DepthFirst, LayoutNode};
pub use tree::LayoutTree;
