// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON render-tree export.
//!
//! [`export`] writes a complete JSON document for one
//! [`RenderTree`](gridset_core::layout::RenderTree), suitable for diffing
//! overlay layouts across specification revisions or feeding external
//! tooling.

use std::io::{self, Write};

use gridset_core::layout::RenderTree;

/// Exports a render tree as pretty-printed JSON.
///
/// # Errors
///
/// Propagates write errors; serialization of a render tree itself cannot
/// fail.
pub fn export(tree: &RenderTree, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, tree).map_err(io::Error::from)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use gridset_core::layout::{ColumnBlock, GridBlock, WidthBlock};
    use serde_json::Value;

    use super::*;

    #[test]
    fn export_round_trips_through_serde_json() {
        let tree = RenderTree {
            blocks: vec![WidthBlock {
                key: "320".to_string(),
                width: 320.0,
                hides: vec!["t-hide".to_string()],
                grids: vec![GridBlock {
                    name: "Mobile".to_string(),
                    prefix: "m".to_string(),
                    pad_left: 0.0,
                    pad_right: 0.0,
                    columns: vec![
                        ColumnBlock {
                            label: "m1".to_string(),
                        },
                        ColumnBlock {
                            label: "m2".to_string(),
                        },
                    ],
                }],
            }],
        };

        let mut buffer = Vec::new();
        export(&tree, &mut buffer).unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["blocks"][0]["key"], "320");
        assert_eq!(value["blocks"][0]["hides"][0], "t-hide");
        assert_eq!(value["blocks"][0]["grids"][0]["prefix"], "m");
        assert_eq!(
            value["blocks"][0]["grids"][0]["columns"][1]["label"],
            "m2"
        );
    }

    #[test]
    fn export_ends_with_a_newline() {
        let mut buffer = Vec::new();
        export(&RenderTree::default(), &mut buffer).unwrap();
        assert_eq!(buffer.last(), Some(&b'\n'));
    }
}
