// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for gridset overlay diagnostics.
//!
//! This crate inspects computed [`RenderTree`](gridset_core::layout::RenderTree)s
//! outside the browser, for development and test tooling:
//!
//! - [`pretty::TreePrinter`] — human-readable one-line-per-block output.
//! - [`json::export`] — JSON dump of a render tree for external tooling.

pub mod json;
pub mod pretty;
