// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that expose other Tally data structures as a [`LayoutTree`](crate::LayoutTree).
//!
//! Each adapter is gated behind a feature flag so the layout core stays free of
//! extra dependencies by default.
//!
//! ## Available Adapters
//!
//! - [`trie`] (`trie_adapter` feature): lays out a [`tally_trie::Trie`] under a
//!   synthetic "Root" box, labeling every other node with its token and hit count.

#[cfg(feature = "trie_adapter")]
pub mod trie;
