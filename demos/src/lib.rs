// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Tally demos.
//!
//! [`render_svg`] turns a laid-out trie into a standalone SVG document: one
//! rounded, shadowed chip per node and one stroked path for all connectors.
//! Terminal nodes get a heavier outline.

use std::fmt::{self, Write as _};

use kurbo::{Rect, Shape};
use tally_layout::LayoutNode;
use tally_trie::{NodeId, Trie};

/// Corner radius of the label chips.
pub const CHIP_RADIUS: f64 = 6.0;

/// Blank space around the scene.
pub const MARGIN: f64 = 12.0;

/// Render `scene` (laid out from `trie`) as an SVG document.
pub fn render_svg(scene: &LayoutNode<NodeId>, trie: &Trie) -> String {
    let mut out = String::new();
    write_svg(&mut out, scene, trie).expect("writing to a String cannot fail");
    out
}

fn write_svg(out: &mut String, scene: &LayoutNode<NodeId>, trie: &Trie) -> fmt::Result {
    let view = scene.bounding_box().inflate(MARGIN, MARGIN);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    )?;
    out.push_str(
        r#"<defs><filter id="shadow"><feDropShadow dx="1" dy="2" stdDeviation="2" flood-opacity="0.3"/></filter></defs>"#,
    );
    out.push('\n');

    let connectors = scene.connector_path();
    if !connectors.elements().is_empty() {
        writeln!(
            out,
            r##"<path d="{}" fill="none" stroke="#888" stroke-width="1.5"/>"##,
            connectors.to_svg()
        )?;
    }

    for node in scene.iter() {
        write_chip(out, node.bounds, trie.is_terminal(node.key))?;
        let center = node.bounds.center();
        writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="monospace" font-size="13">{}</text>"#,
            center.x,
            center.y,
            escape(&node.label)
        )?;
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn write_chip(out: &mut String, bounds: Rect, terminal: bool) -> fmt::Result {
    let chip = bounds.to_rounded_rect(CHIP_RADIUS);
    let stroke_width = if terminal { 2.0 } else { 1.0 };
    writeln!(
        out,
        r##"<path d="{}" fill="#fff" stroke="#333" stroke-width="{stroke_width}" filter="url(#shadow)"/>"##,
        chip.to_path(0.1).to_svg()
    )
}

/// Escape text for use inside an SVG element.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
