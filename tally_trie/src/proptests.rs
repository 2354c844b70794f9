// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;
use std::string::String;
use std::vec::Vec;

use proptest::prelude::*;

use crate::{NodeId, Trie};

type Path = Vec<String>;

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(&["a", "b", "c", ""][..]).prop_map(String::from)
}

fn sequences() -> impl Strategy<Value = Vec<Path>> {
    prop::collection::vec(prop::collection::vec(token(), 0..5), 0..24)
}

/// Every node of the trie keyed by its path, with `(hit_count, terminal)`.
fn snapshot(trie: &Trie) -> BTreeMap<Path, (u64, bool)> {
    fn walk(trie: &Trie, id: NodeId, path: &mut Path, out: &mut BTreeMap<Path, (u64, bool)>) {
        for &child in trie.children(id) {
            path.push(String::from(trie.label(child).unwrap()));
            out.insert(
                path.clone(),
                (trie.hit_count(child).unwrap(), trie.is_terminal(child)),
            );
            walk(trie, child, path, out);
            path.pop();
        }
    }
    let mut out = BTreeMap::new();
    walk(trie, trie.root(), &mut Vec::new(), &mut out);
    out
}

fn build(seqs: &[Path]) -> Trie {
    let mut trie = Trie::new();
    for seq in seqs {
        trie.insert(seq);
    }
    trie
}

proptest! {
    #[test]
    fn hit_count_equals_prefix_occurrences(seqs in sequences()) {
        let trie = build(&seqs);
        let nodes = snapshot(&trie);

        for (path, (hits, terminal)) in &nodes {
            let expected = seqs.iter().filter(|s| s.starts_with(path)).count() as u64;
            prop_assert_eq!(*hits, expected);
            prop_assert_eq!(*terminal, seqs.iter().any(|s| s == path));
        }
        // Every non-empty prefix of an inserted sequence is a node, and nothing else is.
        let mut prefixes = std::collections::BTreeSet::new();
        for s in &seqs {
            for k in 1..=s.len() {
                prefixes.insert(s[..k].to_vec());
            }
        }
        prop_assert_eq!(nodes.len(), prefixes.len());
        prop_assert_eq!(trie.len(), prefixes.len());
    }

    #[test]
    fn insertion_order_does_not_change_structure(seqs in sequences()) {
        let forward = build(&seqs);
        let mut reversed = seqs.clone();
        reversed.reverse();
        let backward = build(&reversed);
        prop_assert_eq!(snapshot(&forward), snapshot(&backward));
    }

    #[test]
    fn reinserting_creates_no_nodes(seqs in sequences(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!seqs.is_empty());
        let mut trie = build(&seqs);
        let before = trie.len();
        let seq = pick.get(&seqs);
        trie.insert(seq);
        prop_assert_eq!(trie.len(), before);
        if !seq.is_empty() {
            let node = trie.find(seq).unwrap();
            let expected = seqs.iter().filter(|s| s.starts_with(seq)).count() as u64 + 1;
            prop_assert_eq!(trie.hit_count(node), Some(expected));
        }
    }
}
