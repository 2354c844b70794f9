// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement.

use kurbo::Size;

/// Measures the natural size of a label's text, before padding.
///
/// Any `Fn(&str) -> Size` is a measurer, which is the usual way to plug in a
/// real text shaper:
///
/// ```rust
/// use kurbo::Size;
/// use tally_layout::TextMeasure;
///
/// let measure = |text: &str| Size::new(7.5 * text.len() as f64, 18.0);
/// assert_eq!(measure.measure("abcd"), Size::new(30.0, 18.0));
/// ```
///
/// Measurements are expected to be finite and non-negative.
pub trait TextMeasure {
    /// Natural size of `text`.
    fn measure(&self, text: &str) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> Size,
{
    fn measure(&self, text: &str) -> Size {
        self(text)
    }
}

/// Single-line measurer with a fixed advance per `char`.
///
/// Good enough for monospace output and for tests; hosts with a text stack
/// should supply their own [`TextMeasure`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Horizontal advance of one character.
    pub advance: f64,
    /// Height of the single text line.
    pub line_height: f64,
}

impl MonospaceMeasure {
    /// Create a measurer with the given advance and line height.
    pub const fn new(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Size {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Label lengths are far below 2^52 characters."
        )]
        let chars = text.chars().count() as f64;
        Size::new(chars * self.advance, self.line_height)
    }
}
