// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout calculator: one render tree per target.
//!
//! [`build_render_tree`] combines a [`GridSpec`], one target's
//! [`TargetGeometry`], and a [`GridSelection`] into an ordered
//! [`RenderTree`]:
//!
//! - one [`WidthBlock`] per breakpoint, in declared order, carrying the
//!   hide-class tokens of every *other* breakpoint so the host page's own
//!   responsive stylesheet can suppress non-applicable panels;
//! - one [`GridBlock`] per included grid system, carrying the target's
//!   padding percentages — the padding frame is per target, so every panel
//!   of the same target shares the same two values;
//! - one [`ColumnBlock`] per column, declaration order preserved.
//!
//! The tree is plain ordered data; backends and the markup builder consume
//! it without reaching back into the specification.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::spec::GridSpec;
use crate::target::{GridSelection, TargetGeometry};

/// The computed overlay layout for one render target.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderTree {
    /// One block per breakpoint, in declared order.
    pub blocks: Vec<WidthBlock>,
}

/// One breakpoint's panel group.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WidthBlock {
    /// The breakpoint key the block was built from.
    pub key: String,
    /// The breakpoint's pixel width.
    pub width: f64,
    /// Hide-class tokens for every other breakpoint's prefixes.
    pub hides: Vec<String>,
    /// One panel per included grid system, in declared order.
    pub grids: Vec<GridBlock>,
}

/// One grid system's panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridBlock {
    /// The grid system's human-readable label.
    pub name: String,
    /// The grid system's prefix code.
    pub prefix: String,
    /// Left padding as a percentage of the target's width.
    pub pad_left: f64,
    /// Right padding as a percentage of the target's width.
    pub pad_right: f64,
    /// One labeled block per column, declaration order preserved.
    pub columns: Vec<ColumnBlock>,
}

/// One rendered column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnBlock {
    /// The column's name, shown in the overlay and used as its class.
    pub label: String,
}

impl RenderTree {
    /// Total number of grid panels across all breakpoints.
    #[must_use]
    pub fn grid_count(&self) -> usize {
        self.blocks.iter().map(|block| block.grids.len()).sum()
    }
}

/// Computes the render tree for one target.
///
/// Padding is normalized once, from the target's own box (see
/// [`TargetGeometry::padding_percentages`]); grid inclusion follows
/// `selection`. Breakpoints whose grid systems are all filtered out still
/// produce an (empty) [`WidthBlock`] so the overlay's panel structure stays
/// aligned with the specification.
#[must_use]
pub fn build_render_tree(
    spec: &GridSpec,
    geometry: &TargetGeometry,
    selection: &GridSelection,
) -> RenderTree {
    let (pad_left, pad_right) = geometry.padding_percentages();

    let blocks = spec
        .widths_in_declared_order()
        .map(|breakpoint| WidthBlock {
            key: breakpoint.key.clone(),
            width: breakpoint.width,
            hides: spec.prefixes_hidden_at(&breakpoint.key),
            grids: breakpoint
                .grids
                .iter()
                .filter(|grid| selection.includes(&grid.prefix))
                .map(|grid| GridBlock {
                    name: grid.name.clone(),
                    prefix: grid.prefix.clone(),
                    pad_left,
                    pad_right,
                    columns: grid
                        .columns
                        .iter()
                        .map(|column| ColumnBlock {
                            label: column.name.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    RenderTree { blocks }
}
