// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable render-tree output.
//!
//! [`TreePrinter`] writes one line per block to a
//! [`Write`](std::io::Write) destination (default: stderr), indented by
//! tree depth through the line tags.

use std::io::{self, Write};

use gridset_core::layout::RenderTree;

/// Writes human-readable render-tree lines to a [`Write`](std::io::Write)
/// destination.
pub struct TreePrinter<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for TreePrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreePrinter").finish_non_exhaustive()
    }
}

impl TreePrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr()),
        }
    }

    /// Creates a printer that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> TreePrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the whole tree, one line per block.
    ///
    /// # Errors
    ///
    /// Propagates the first write error.
    pub fn print(&mut self, tree: &RenderTree) -> io::Result<()> {
        writeln!(
            self.writer,
            "[tree] widths={} grids={}",
            tree.blocks.len(),
            tree.grid_count(),
        )?;
        for block in &tree.blocks {
            writeln!(
                self.writer,
                "[width {}] px={} hides=\"{}\" grids={}",
                block.key,
                block.width,
                block.hides.join(" "),
                block.grids.len(),
            )?;
            for grid in &block.grids {
                writeln!(
                    self.writer,
                    "  [grid {}] {} pad={:.2}%/{:.2}% cols={}",
                    grid.prefix,
                    grid.name,
                    grid.pad_left,
                    grid.pad_right,
                    grid.columns.len(),
                )?;
                for column in &grid.columns {
                    writeln!(self.writer, "    [col] {}", column.label)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gridset_core::layout::{ColumnBlock, GridBlock, WidthBlock};

    use super::*;

    fn tree() -> RenderTree {
        RenderTree {
            blocks: vec![WidthBlock {
                key: "768".to_string(),
                width: 768.0,
                hides: vec!["m-hide".to_string()],
                grids: vec![GridBlock {
                    name: "Tablet".to_string(),
                    prefix: "t".to_string(),
                    pad_left: 5.0,
                    pad_right: 2.5,
                    columns: vec![ColumnBlock {
                        label: "t1".to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn prints_one_line_per_block() {
        let mut printer = TreePrinter::with_writer(Vec::<u8>::new());
        printer.print(&tree()).unwrap();
        let output = String::from_utf8(printer.writer).unwrap();

        assert!(output.contains("[tree] widths=1 grids=1"), "got: {output}");
        assert!(
            output.contains("[width 768] px=768 hides=\"m-hide\" grids=1"),
            "got: {output}"
        );
        assert!(
            output.contains("[grid t] Tablet pad=5.00%/2.50% cols=1"),
            "got: {output}"
        );
        assert!(output.contains("[col] t1"), "got: {output}");
    }

    #[test]
    fn empty_tree_prints_the_summary_line_only() {
        let mut printer = TreePrinter::with_writer(Vec::<u8>::new());
        printer.print(&RenderTree::default()).unwrap();
        let output = String::from_utf8(printer.writer).unwrap();
        assert_eq!(output, "[tree] widths=0 grids=0\n");
    }
}
