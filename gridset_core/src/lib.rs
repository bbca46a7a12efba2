// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the gridset diagnostic overlay.
//!
//! `gridset_core` provides the data model and pure computation behind a
//! responsive-grid debug overlay: a breakpoint → grid system → column
//! specification loaded once from JSON, a layout calculator that normalizes
//! a page element's box metrics into per-panel percentages, and a markup
//! builder that turns the computed tree into a mountable overlay subtree.
//! It is `no_std` compatible (with `alloc`) and never touches the DOM;
//! browser integration lives in backend crates.
//!
//! # Architecture
//!
//! The crate is organized around a single activation pass that turns a page
//! element into a mounted overlay:
//!
//! ```text
//!   GridSpec::from_json (once per page)
//!       │
//!       ▼
//!   Region probe ──► TargetGeometry + MarkerSet
//!                          │
//!                          ▼
//!   build_render_tree ──► RenderTree ──► overlay_document ──► OverlayNode
//!                                                                  │
//!                                                                  ▼
//!                                                          backend mount
//! ```
//!
//! **[`spec`]** — The immutable grid specification: breakpoints, grid
//! systems, and columns in declared order, with read-only lookups.
//!
//! **[`target`]** — Per-element inputs: observed box geometry with padding
//! normalization, and the marker set controlling which grid systems render.
//!
//! **[`layout`]** — The layout calculator producing a [`RenderTree`](layout::RenderTree)
//! of width, grid, and column blocks.
//!
//! **[`markup`]** — The pure render-tree → overlay-subtree translation and
//! its HTML serialization.
//!
//! **[`backend`]** — The [`Region`](backend::Region) trait that platform
//! backends implement to expose element geometry to the calculator.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod layout;
pub mod markup;
pub mod spec;
pub mod target;
