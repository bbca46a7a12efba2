// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay controller: the only component that touches global page state.
//!
//! [`GridsetOverlay`] orchestrates one activation pass — style and readout
//! injection, region discovery, per-region mounting — and keeps the
//! viewport readout current afterwards. Every DOM mutation on the page
//! originates here (or in the hooks it installs); `gridset_core` stays
//! pure.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlLinkElement, HtmlStyleElement, Window};

use gridset_core::backend::render_tree_for_region;
use gridset_core::markup::overlay_document;
use gridset_core::spec::GridSpec;
use gridset_core::target::{GridSelection, MarkerSet};

use crate::region::DomRegion;
use crate::resize::ResizeHook;
use crate::style::{
    FAVICON_ID, FAVICON_URL, NO_AREAS_CLASS, OVERLAY_STYLESHEET, READOUT_MARKUP, READOUT_VALUE_ID,
    READOUT_WRAP_ID, REMOTE_STYLE_ID, REMOTE_STYLESHEET_BASE, STYLE_ID,
};

/// Attribute query for marker-classed regions. This is a substring match by
/// CSS semantics; whole-token filtering happens in [`MarkerSet`].
const MARKER_SELECTOR: &str = "[class*=-showgrid]";

/// The overlay controller for one page.
///
/// Constructed explicitly by the host with the window it should operate on
/// and the grid specification to render; there is no ambient global.
#[derive(Debug)]
pub struct GridsetOverlay {
    window: Window,
    document: Document,
    spec: GridSpec,
}

impl GridsetOverlay {
    /// Creates a controller over `window` rendering `spec`.
    ///
    /// # Errors
    ///
    /// Fails when the window has no document.
    pub fn new(window: Window, spec: GridSpec) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window,
            document,
            spec,
        })
    }

    /// Runs one activation pass and returns the installed resize hook.
    ///
    /// Call exactly once per page life: activation is **not** idempotent —
    /// a second call injects a second stylesheet, readout, and overlay per
    /// region. The returned [`ResizeHook`] must be kept alive (or leaked)
    /// for the readout to track resizes; all other DOM mutations complete
    /// before the hook is registered, so the readout the hook references
    /// always exists.
    ///
    /// A region whose overlay cannot be built is skipped with a warning;
    /// the pass continues with the remaining regions.
    ///
    /// # Errors
    ///
    /// Fails only on page-level conditions (no body, selector query
    /// rejected, listener registration rejected) — never on a single
    /// region.
    pub fn activate(&self) -> Result<ResizeHook, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let readout = self.inject_overlay_styles(&body)?;
        self.inject_remote_assets(&readout);

        let regions = self.document.query_selector_all(MARKER_SELECTOR)?;
        let count = regions.length();
        if count > 0 {
            // Reverse order: mounting appends to a region, which must not
            // shift the indices of regions not yet visited.
            for i in (0..count).rev() {
                let Some(element) = regions
                    .get(i)
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                else {
                    continue;
                };
                if let Err(err) = self.mount_region(&element) {
                    log::warn!("skipping grid region {i}: {err:?}");
                }
            }
        } else {
            // No explicit regions: one whole-page overlay on the body,
            // switched to fixed positioning by the page-level class.
            body.class_list().add_1(NO_AREAS_CLASS)?;
            if let Err(err) = self.mount_overlay(&body, &GridSelection::All) {
                log::warn!("skipping body overlay: {err:?}");
            }
        }

        self.update_readout();
        ResizeHook::install(self.window.clone(), self.document.clone())
    }

    /// Rewrites the viewport-width readout. Cheap and idempotent; this is
    /// all the resize hook re-runs. Layout is recomputed only by a full
    /// reload.
    pub fn update_readout(&self) {
        write_viewport_width(&self.window, &self.document);
    }

    /// Builds and mounts the show-specific overlay for one marker-classed
    /// region.
    fn mount_region(&self, element: &HtmlElement) -> Result<(), JsValue> {
        let markers = MarkerSet::from_class_attr(&element.class_name());
        self.mount_overlay(element, &GridSelection::Marked(markers))?;
        self.ensure_positioning_context(element);
        Ok(())
    }

    /// Probes the host element, computes its render tree, and appends the
    /// overlay subtree.
    fn mount_overlay(&self, host: &HtmlElement, selection: &GridSelection) -> Result<(), JsValue> {
        let region = DomRegion::new(self.window.clone(), host.clone());
        let tree = render_tree_for_region(&self.spec, &region, selection);
        let overlay = overlay_document(&tree, selection);

        let wrap = self.document.create_element("div")?;
        wrap.set_class_name(&overlay.classes.join(" "));
        wrap.set_inner_html(&overlay.children_html());
        host.append_child(&wrap)?;
        Ok(())
    }

    /// Forces a positioning context so the overlay's absolute children
    /// anchor to the region instead of an ancestor.
    fn ensure_positioning_context(&self, element: &HtmlElement) {
        let position = self
            .window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("position").ok())
            .unwrap_or_default();
        if position == "static" {
            let _ = element.style().set_property("position", "relative");
        }
    }

    /// Appends the overlay stylesheet and the readout panel to the body and
    /// returns the readout element.
    fn inject_overlay_styles(&self, body: &HtmlElement) -> Result<Element, JsValue> {
        let styles: HtmlStyleElement = self.document.create_element("style")?.unchecked_into();
        styles.set_id(STYLE_ID);
        styles.set_type("text/css");
        styles.set_inner_html(OVERLAY_STYLESHEET);
        body.append_child(&styles)?;

        let readout = self.document.create_element("div")?;
        readout.set_id(READOUT_WRAP_ID);
        readout.set_inner_html(READOUT_MARKUP);
        body.append_child(&readout)?;
        Ok(readout)
    }

    /// Injects the cosmetic remote assets: the favicon always, the hosted
    /// stylesheet only when no gridset styling is active yet.
    ///
    /// Fire-and-forget: nothing here is awaited, retried, or surfaced —
    /// the overlay is correct without these assets.
    fn inject_remote_assets(&self, readout: &Element) {
        let Some(head) = self.document.head() else {
            return;
        };

        if let Ok(element) = self.document.create_element("link") {
            let favicon: HtmlLinkElement = element.unchecked_into();
            favicon.set_rel("shortcut icon");
            favicon.set_id(FAVICON_ID);
            favicon.set_href(FAVICON_URL);
            let _ = head.append_child(&favicon);
        }

        // The baseline stylesheet keeps the readout at display:none; a
        // computed value of "block" means a gridset stylesheet (hosted or
        // the page's own) is already styling it.
        if self.readout_display(readout) == "block" {
            log::debug!("gridset styling already active; remote stylesheet skipped");
            return;
        }
        if self.spec.id().is_empty() {
            return;
        }
        if let Ok(element) = self.document.create_element("link") {
            let link: HtmlLinkElement = element.unchecked_into();
            link.set_rel("stylesheet");
            link.set_id(REMOTE_STYLE_ID);
            link.set_href(&format!("{REMOTE_STYLESHEET_BASE}/{}/", self.spec.id()));
            let _ = head.append_child(&link);
        }
    }

    fn readout_display(&self, readout: &Element) -> String {
        self.window
            .get_computed_style(readout)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("display").ok())
            .unwrap_or_default()
    }
}

/// Writes the current viewport width into the readout, if present.
pub(crate) fn write_viewport_width(window: &Window, document: &Document) {
    let Some(value) = document.get_element_by_id(READOUT_VALUE_ID) else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    value.set_inner_html(&format!("{width}px"));
}
