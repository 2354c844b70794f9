// Copyright 2025 the Tally Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a counted trie from stdin and draw it as SVG.
//!
//! Every input line is split on whitespace and inserted as one token sequence.
//! After the input ends, the trie is laid out and the SVG is written to stdout.
//! Blank lines are ignored.
//!
//! Run:
//! - `printf 'the cat\nthe cat sat\nthe dog\n' | cargo run -p tally_demos --example trie_svg > trie.svg`
//!
//! Set `RUST_LOG=debug` (or `trace` for one event per line) to see the
//! layout and insertion events on stderr.

use std::io::{self, BufRead, Write};

use tally_demos::render_svg;
use tally_layout::LayoutConfig;
use tally_layout::adapters::trie::layout_trie;
use tally_trie::Trie;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut trie = Trie::new();
    let mut lines = 0_usize;
    for line in io::stdin().lock().lines() {
        trie.insert_text(&line?);
        lines += 1;
    }
    info!(lines, nodes = trie.len(), "read input");

    let config = LayoutConfig::default().with_gaps(20.0, 48.0);
    let scene = layout_trie(&trie, &config);

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_svg(&scene, &trie).as_bytes())?;
    stdout.flush()
}
