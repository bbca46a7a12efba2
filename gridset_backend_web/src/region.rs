// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed-style geometry probe for one DOM element.

use alloc::string::String;

use kurbo::Insets;
use web_sys::{HtmlElement, Window};

use gridset_core::backend::Region;

/// A [`Region`] backed by a live element.
///
/// Reads are taken from the element at call time; the overlay probes each
/// region exactly once per activation, so no values are cached here.
pub struct DomRegion {
    window: Window,
    element: HtmlElement,
}

impl core::fmt::Debug for DomRegion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRegion")
            .field("element", &"HtmlElement")
            .finish()
    }
}

impl DomRegion {
    /// Creates a probe over `element`. The window supplies
    /// `getComputedStyle`.
    #[must_use]
    pub fn new(window: Window, element: HtmlElement) -> Self {
        Self { window, element }
    }

    /// Reads one computed length property in pixels.
    ///
    /// Unreadable or unparsable values degrade to `0.0`; the overlay still
    /// renders for this region rather than aborting the pass.
    fn computed_px(&self, property: &str) -> f64 {
        let style = match self.window.get_computed_style(&self.element) {
            Ok(Some(style)) => style,
            _ => {
                log::warn!("computed style unavailable; {property} treated as zero");
                return 0.0;
            }
        };
        match style.get_property_value(property) {
            Ok(value) => parse_px(&value),
            Err(_) => 0.0,
        }
    }
}

impl Region for DomRegion {
    fn class_attr(&self) -> String {
        self.element.class_name()
    }

    fn client_width(&self) -> f64 {
        f64::from(self.element.client_width())
    }

    fn padding(&self) -> Insets {
        Insets::new(
            self.computed_px("padding-left"),
            0.0,
            self.computed_px("padding-right"),
            0.0,
        )
    }
}

/// Parses a computed CSS length ("12.5px") to pixels, zero on anything else.
fn parse_px(value: &str) -> f64 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_pixel_lengths() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px("12.5px"), 12.5);
        assert_eq!(parse_px(" 30px "), 30.0);
    }

    #[test]
    fn parses_bare_numbers() {
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px("42"), 42.0);
    }

    #[test]
    fn unparsable_lengths_degrade_to_zero() {
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("1em"), 0.0);
    }
}
