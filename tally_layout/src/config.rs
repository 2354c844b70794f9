// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout options.

use kurbo::{Insets, Point, Size};

use crate::measure::{MonospaceMeasure, TextMeasure};

/// Options for [`layout`](crate::layout).
///
/// All distances are in the scene's coordinate space (typically logical
/// pixels) and are expected to be finite and non-negative.
#[derive(Clone)]
pub struct LayoutConfig<M = MonospaceMeasure> {
    /// Space between adjacent sibling subtrees.
    pub horizontal_gap: f64,
    /// Space between the bottom of a node's box and the top of its children row.
    pub vertical_gap: f64,
    /// Inset between a label's text and the edge of its box.
    pub label_padding: Insets,
    /// Top-left corner of the root's subtree.
    pub origin: Point,
    /// Label measurer.
    pub measure: M,
}

impl<M> core::fmt::Debug for LayoutConfig<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutConfig")
            .field("horizontal_gap", &self.horizontal_gap)
            .field("vertical_gap", &self.vertical_gap)
            .field("label_padding", &self.label_padding)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(MonospaceMeasure::default())
    }
}

impl<M> LayoutConfig<M> {
    /// Default gaps and padding with a custom measurer.
    pub fn new(measure: M) -> Self {
        Self {
            horizontal_gap: 16.0,
            vertical_gap: 40.0,
            label_padding: Insets::uniform_xy(10.0, 6.0),
            origin: Point::ZERO,
            measure,
        }
    }

    /// Replace the measurer, keeping every other option.
    pub fn with_measure<N>(self, measure: N) -> LayoutConfig<N> {
        LayoutConfig {
            horizontal_gap: self.horizontal_gap,
            vertical_gap: self.vertical_gap,
            label_padding: self.label_padding,
            origin: self.origin,
            measure,
        }
    }

    /// Set the sibling and row gaps.
    pub fn with_gaps(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_gap = horizontal;
        self.vertical_gap = vertical;
        self
    }

    /// Set the padding around label text.
    pub fn with_label_padding(mut self, padding: Insets) -> Self {
        self.label_padding = padding;
        self
    }

    /// Set the top-left corner of the scene.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }
}

impl<M: TextMeasure> LayoutConfig<M> {
    /// Size of the box drawn for `label`: measured text plus padding.
    pub fn box_size(&self, label: &str) -> Size {
        let text = self.measure.measure(label);
        Size::new(
            text.width + self.label_padding.x_value(),
            text.height + self.label_padding.y_value(),
        )
    }
}
