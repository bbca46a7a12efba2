// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid specification model.
//!
//! A *grid specification* is the root configuration of the overlay: an
//! ordered set of breakpoints, each carrying the grid systems valid at that
//! pixel width, each of those carrying its columns in declared order. It is
//! parsed once from a JSON payload via [`GridSpec::from_json`] and is
//! immutable afterwards; every other component reads it through the lookups
//! on [`GridSpec`].
//!
//! Two conventions from the payload are semantically meaningful:
//!
//! - **Declaration order.** Columns render left-to-right in the order the
//!   payload declares them, and breakpoints keep their declared order too.
//!   JSON object members are therefore deserialized through an
//!   order-preserving visitor, never through a sorted map.
//! - **The `"index"` prefix list.** The `prefixes` table maps breakpoint
//!   keys to the grid-system prefix codes relevant at that width, and the
//!   literal key `"index"` lists every prefix that exists anywhere. The
//!   `"index"` entry never contributes to hide-class computation.
//!
//! A malformed payload (missing `widths` or `prefixes`, or any shape
//! mismatch) is a fatal [`SpecError`]: the overlay must not render from a
//! partial specification. A prefix listed in `prefixes` with no matching
//! grid system is tolerated and simply never shown.

mod model;
mod parse;

pub use model::{Breakpoint, Column, GridSpec, GridSystem, Gutter, HIDE_SUFFIX, PrefixIndex, Ratio};
pub use parse::SpecError;
