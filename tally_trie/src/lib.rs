// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tally Trie: a token prefix tree that counts prefix occurrences.
//!
//! Each inserted sequence of tokens (usually the whitespace-separated words of
//! a line of text) is walked from the root. Missing nodes are created on the
//! way down, and every node along the path has its hit count incremented. The
//! last node of the sequence is marked terminal.
//!
//! The counts answer "how many inserted sequences started with this prefix?",
//! not "how many distinct sequences pass through here?". Inserting the same
//! sequence twice is therefore not idempotent: the structure is unchanged but
//! every count along the path grows by one.
//!
//! ## API overview
//!
//! - [`Trie`]: owns every node in a single arena rooted at [`Trie::root`].
//! - [`NodeId`]: handle of a node inside the trie that produced it.
//!
//! Key operations:
//! - [`Trie::insert`] / [`Trie::insert_text`] mutate the trie.
//! - [`Trie::children`] lists a node's children in insertion order.
//! - [`Trie::label`], [`Trie::hit_count`] and [`Trie::is_terminal`] read node data.
//! - [`Trie::child`] and [`Trie::find`] walk edges by token.
//!
//! There is no removal. To start over, construct a new [`Trie`] or call
//! [`Trie::clear`].
//!
//! ## Example
//!
//! ```rust
//! use tally_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert(["cat"]);
//! trie.insert_text("cat nap");
//!
//! let cat = trie.find(["cat"]).unwrap();
//! assert_eq!(trie.hit_count(cat), Some(2));
//! assert!(trie.is_terminal(cat));
//!
//! let nap = trie.child(cat, "nap").unwrap();
//! assert_eq!(trie.hit_count(nap), Some(1));
//! assert_eq!(trie.label(nap), Some("nap"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace` level event per insertion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod trie;
mod types;

#[cfg(test)]
mod proptests;

pub use trie::Trie;
pub use types::NodeId;
