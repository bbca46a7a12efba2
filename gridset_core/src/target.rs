// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target inputs: observed box geometry and marker classes.
//!
//! A *render target* is a host-page element the overlay attaches to. The
//! engine reads two things from it, once, before any layout math:
//!
//! - its box geometry ([`TargetGeometry`]): client width and computed
//!   left/right padding, normalized here to percentages of the target's own
//!   width so the overlay aligns with the *actual* rendered box rather than
//!   any grid system's nominal design width;
//! - its marker classes ([`MarkerSet`]): which grid-system prefixes the
//!   host opted into via `<prefix>-showgrid` tokens. The set is computed
//!   once per target and flows through the pipeline as data.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Insets;

/// Suffix of a marker class token opting an element into one grid system.
pub const SHOWGRID_SUFFIX: &str = "-showgrid";

/// Observed box metrics of one render target, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    /// The target's client (box) width.
    pub width: f64,
    /// The target's computed padding. Only the horizontal components
    /// (`x0` left, `x1` right) participate in layout.
    pub padding: Insets,
}

impl TargetGeometry {
    /// Creates a geometry snapshot from a client width and computed padding.
    #[must_use]
    pub fn new(width: f64, padding: Insets) -> Self {
        Self { width, padding }
    }

    /// Left and right padding as percentages of the target's own width.
    ///
    /// A target with zero (or unmeasurable, non-positive) width yields
    /// `(0.0, 0.0)` instead of propagating a division by zero; the overlay
    /// still renders, degenerately, rather than aborting the pass.
    #[must_use]
    pub fn padding_percentages(&self) -> (f64, f64) {
        if !self.width.is_finite() || self.width <= 0.0 {
            log::warn!(
                "target width {} is unmeasurable; padding treated as zero",
                self.width
            );
            return (0.0, 0.0);
        }
        (
            self.padding.x0 / self.width * 100.0,
            self.padding.x1 / self.width * 100.0,
        )
    }
}

/// The set of grid-system prefixes a target opted into, in first-seen order.
///
/// Built once from the element's class attribute. Matching is whole-token:
/// class `dl-showgrid` yields prefix `dl` and is never a match for prefix
/// `d` or `l`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerSet {
    prefixes: Vec<String>,
}

impl MarkerSet {
    /// Extracts marker prefixes from a class attribute.
    ///
    /// Tokens are split on ASCII whitespace; each token ending in
    /// [`SHOWGRID_SUFFIX`] contributes its stem. Duplicates collapse.
    #[must_use]
    pub fn from_class_attr(attr: &str) -> Self {
        let mut prefixes = Vec::new();
        for token in attr.split_ascii_whitespace() {
            if let Some(stem) = token.strip_suffix(SHOWGRID_SUFFIX)
                && !stem.is_empty()
                && !prefixes.iter().any(|p| p == stem)
            {
                prefixes.push(stem.to_string());
            }
        }
        Self { prefixes }
    }

    /// Whether `prefix` was marked (exact match against a full stem).
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|p| p == prefix)
    }

    /// Whether no marker was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// The marked prefixes in first-seen order.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// Which grid systems of a specification a render pass includes.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSelection {
    /// Show-all mode: every grid system renders. Used when the page has no
    /// marker-classed element and the overlay covers the document body.
    All,
    /// Show-specific mode: only grid systems whose prefix appears in the
    /// target's marker set render.
    Marked(MarkerSet),
}

impl GridSelection {
    /// Whether a grid system with the given prefix is included.
    #[must_use]
    pub fn includes(&self, prefix: &str) -> bool {
        match self {
            Self::All => true,
            Self::Marked(markers) => markers.contains(prefix),
        }
    }

    /// Whether this is show-all mode.
    #[must_use]
    pub fn is_show_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_normalizes_to_target_width() {
        let geometry = TargetGeometry::new(1000.0, Insets::new(50.0, 0.0, 50.0, 0.0));
        assert_eq!(geometry.padding_percentages(), (5.0, 5.0));
    }

    #[test]
    fn asymmetric_padding_keeps_sides_apart() {
        let geometry = TargetGeometry::new(800.0, Insets::new(40.0, 0.0, 20.0, 0.0));
        assert_eq!(geometry.padding_percentages(), (5.0, 2.5));
    }

    #[test]
    fn zero_width_degrades_to_zero_padding() {
        let geometry = TargetGeometry::new(0.0, Insets::new(50.0, 0.0, 50.0, 0.0));
        assert_eq!(geometry.padding_percentages(), (0.0, 0.0));
    }

    #[test]
    fn negative_width_degrades_to_zero_padding() {
        let geometry = TargetGeometry::new(-1.0, Insets::uniform(10.0));
        assert_eq!(geometry.padding_percentages(), (0.0, 0.0));
    }

    #[test]
    fn marker_matching_is_whole_token() {
        let markers = MarkerSet::from_class_attr("hero dl-showgrid");
        assert!(markers.contains("dl"));
        assert!(!markers.contains("d"), "prefix must not match a substring");
        assert!(!markers.contains("l"));
    }

    #[test]
    fn multiple_markers_collect_in_order() {
        let markers = MarkerSet::from_class_attr("dl-showgrid t-showgrid");
        assert_eq!(markers.prefixes(), &["dl".to_string(), "t".to_string()]);
    }

    #[test]
    fn duplicate_markers_collapse() {
        let markers = MarkerSet::from_class_attr("m-showgrid m-showgrid");
        assert_eq!(markers.prefixes().len(), 1);
    }

    #[test]
    fn bare_suffix_token_is_ignored() {
        let markers = MarkerSet::from_class_attr("-showgrid");
        assert!(markers.is_empty());
    }

    #[test]
    fn unrelated_classes_yield_empty_set() {
        let markers = MarkerSet::from_class_attr("wrapper content main");
        assert!(markers.is_empty());
    }

    #[test]
    fn selection_show_all_includes_everything() {
        assert!(GridSelection::All.includes("anything"));
    }

    #[test]
    fn selection_marked_filters_by_prefix() {
        let selection = GridSelection::Marked(MarkerSet::from_class_attr("t-showgrid"));
        assert!(selection.includes("t"));
        assert!(!selection.includes("dl"));
        assert!(!selection.is_show_all());
    }
}
