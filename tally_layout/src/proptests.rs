// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::string::String;
use std::vec;
use std::vec::Vec;

use kurbo::{Insets, Rect};
use proptest::prelude::*;

use crate::{LayoutConfig, LayoutNode, LayoutTree, MonospaceMeasure, layout};

const EPS: f64 = 1e-9;

/// Random tree: node `i > 0` hangs off some earlier node.
#[derive(Debug)]
struct RandomTree {
    labels: Vec<String>,
    children: Vec<Vec<usize>>,
}

impl LayoutTree for RandomTree {
    type Node = usize;

    fn root(&self) -> usize {
        0
    }

    fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    fn label(&self, node: usize) -> Cow<'_, str> {
        Cow::Borrowed(&self.labels[node])
    }
}

fn random_tree() -> impl Strategy<Value = RandomTree> {
    prop::collection::vec((any::<prop::sample::Index>(), "[a-z]{0,12}"), 0..40).prop_map(
        |nodes| {
            let mut labels = vec![String::from("Root")];
            let mut children = vec![Vec::new()];
            for (i, (parent, label)) in nodes.into_iter().enumerate() {
                let parent = parent.index(i + 1);
                children[parent].push(i + 1);
                children.push(Vec::new());
                labels.push(label);
            }
            RandomTree { labels, children }
        },
    )
}

fn config(h_gap: f64, v_gap: f64) -> LayoutConfig {
    LayoutConfig::new(MonospaceMeasure::new(7.0, 14.0))
        .with_gaps(h_gap, v_gap)
        .with_label_padding(Insets::uniform_xy(4.0, 2.0))
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 - EPS && b.x0 < a.x1 - EPS && a.y0 < b.y1 - EPS && b.y0 < a.y1 - EPS
}

fn check_node(node: &LayoutNode<usize>, h_gap: f64, v_gap: f64) -> Result<(), TestCaseError> {
    // The box sits inside its own subtree span.
    prop_assert!(node.bounds.x0 >= node.subtree.x0 - EPS);
    prop_assert!(node.bounds.x1 <= node.subtree.x1 + EPS);

    for pair in node.children.windows(2) {
        prop_assert!(pair[0].subtree.x1 + h_gap <= pair[1].subtree.x0 + EPS);
    }
    for child in &node.children {
        prop_assert!(child.subtree.x0 >= node.subtree.x0 - EPS);
        prop_assert!(child.subtree.x1 <= node.subtree.x1 + EPS);
        prop_assert!((child.bounds.y0 - (node.bounds.y1 + v_gap)).abs() < EPS);

        let curve = child.connector.expect("non-root nodes have connectors");
        prop_assert_eq!(curve.p0, node.anchor_bottom());
        prop_assert_eq!(curve.p3, child.anchor_top());
        check_node(child, h_gap, v_gap)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn subtrees_are_ordered_and_nested(tree in random_tree(), h_gap in 0.0..40.0, v_gap in 0.0..60.0) {
        let scene = layout(&tree, &config(h_gap, v_gap));
        prop_assert_eq!(scene.node_count(), tree.labels.len());
        prop_assert!(scene.connector.is_none());
        check_node(&scene, h_gap, v_gap)?;
    }

    #[test]
    fn label_boxes_never_overlap(tree in random_tree()) {
        let scene = layout(&tree, &config(10.0, 20.0));
        let boxes: Vec<Rect> = scene.iter().map(|n| n.bounds).collect();
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                prop_assert!(!overlaps(*a, *b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn repeated_layout_is_identical(tree in random_tree()) {
        let config = config(12.0, 24.0);
        prop_assert_eq!(layout(&tree, &config), layout(&tree, &config));
    }
}
