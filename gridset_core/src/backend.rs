// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! The overlay splits page-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Region discovery** — Finds the elements opting into the overlay via
//!   `<prefix>-showgrid` marker classes (or falls back to the document
//!   body). This is backend-specific and not abstracted by a trait because
//!   query mechanisms differ across hosts.
//!
//! - **Geometry probe** — Implements the [`Region`] trait to expose one
//!   element's class attribute and computed box metrics to the calculator.
//!
//! - **Mounting** — Serializes the [`OverlayNode`](crate::markup::OverlayNode)
//!   subtree into the host tree and, for region-scoped overlays, forces a
//!   positioning context so the absolutely-positioned overlay anchors to
//!   its region.
//!
//! - **Readout and events** — Injects the viewport-width readout, keeps it
//!   current from the host's resize events, and wires the keyboard
//!   activation toggle.
//!
//! # Crate boundaries
//!
//! `gridset_core` owns the specification model, the layout calculator, the
//! markup builder, and this contract module. Backend crates depend on
//! `gridset_core` and provide host glue. A host page depends on both and
//! wires them together once at load.

use alloc::string::String;

use kurbo::Insets;

use crate::layout::{RenderTree, build_render_tree};
use crate::spec::GridSpec;
use crate::target::{GridSelection, TargetGeometry};

/// Read-side view of one render target.
///
/// Both DOM-backed regions and test doubles implement this trait, enabling
/// generic activation passes.
pub trait Region {
    /// The target's full class attribute.
    fn class_attr(&self) -> String;

    /// The target's client (box) width in CSS pixels.
    fn client_width(&self) -> f64;

    /// The target's computed padding in CSS pixels.
    fn padding(&self) -> Insets;
}

/// Probes a region's geometry and computes its render tree.
///
/// Convenience composition of the [`Region`] probe,
/// [`TargetGeometry`], and [`build_render_tree`].
#[must_use]
pub fn render_tree_for_region(
    spec: &GridSpec,
    region: &impl Region,
    selection: &GridSelection,
) -> RenderTree {
    let geometry = TargetGeometry::new(region.client_width(), region.padding());
    build_render_tree(spec, &geometry, selection)
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;
    use crate::target::MarkerSet;

    struct FakeRegion {
        classes: String,
        width: f64,
        padding: Insets,
    }

    impl Region for FakeRegion {
        fn class_attr(&self) -> String {
            self.classes.clone()
        }

        fn client_width(&self) -> f64 {
            self.width
        }

        fn padding(&self) -> Insets {
            self.padding
        }
    }

    const PAYLOAD: &str = r#"{
        "widths": {
            "640": {
                "width": 640,
                "grids": {
                    "a": {
                        "name": "A", "prefix": "a", "width": 640,
                        "columns": {"a1": {"name": "a1", "unit": "%", "percent": 50, "px": 320}},
                        "gutter": {"unit": "px", "px": 10, "percent": 1.5625},
                        "ratio": {"name": "even", "value": 1}
                    },
                    "b": {
                        "name": "B", "prefix": "b", "width": 640,
                        "columns": {"b1": {"name": "b1", "unit": "%", "percent": 25, "px": 160}},
                        "gutter": {"unit": "px", "px": 10, "percent": 1.5625},
                        "ratio": {"name": "even", "value": 1}
                    }
                }
            }
        },
        "prefixes": {"index": ["a", "b"], "640": ["a", "b"]}
    }"#;

    #[test]
    fn region_geometry_flows_into_the_tree() {
        let spec = GridSpec::from_json(PAYLOAD).unwrap();
        let region = FakeRegion {
            classes: "a-showgrid".to_string(),
            width: 400.0,
            padding: Insets::new(20.0, 0.0, 40.0, 0.0),
        };
        let selection = GridSelection::Marked(MarkerSet::from_class_attr(&region.class_attr()));
        let tree = render_tree_for_region(&spec, &region, &selection);

        assert_eq!(tree.grid_count(), 1);
        let grid = &tree.blocks[0].grids[0];
        assert_eq!(grid.prefix, "a");
        assert_eq!(grid.pad_left, 5.0);
        assert_eq!(grid.pad_right, 10.0);
    }

    #[test]
    fn unmarked_region_in_show_all_gets_every_grid() {
        let spec = GridSpec::from_json(PAYLOAD).unwrap();
        let region = FakeRegion {
            classes: String::new(),
            width: 640.0,
            padding: Insets::ZERO,
        };
        let tree = render_tree_for_region(&spec, &region, &GridSelection::All);
        assert_eq!(tree.grid_count(), 2);
    }
}
