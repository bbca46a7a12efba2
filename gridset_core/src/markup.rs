// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay markup builder.
//!
//! [`overlay_document`] is a pure function from a computed [`RenderTree`] to
//! the overlay subtree a backend mounts: the `gridsetoverlaywrap` wrapper,
//! the `gridwrap`/`gridoverlay` shell, a `gridset` container per breakpoint
//! tagged with its hide classes, a panel per grid system with the padding
//! frame as inline style, and a labeled block per column.
//!
//! The subtree is transient data ([`OverlayNode`]), not DOM: backends either
//! walk it or serialize it with [`OverlayNode::to_html`] and mount via
//! `innerHTML`. Panels for non-applicable breakpoints are not removed here —
//! their hide classes let the host page's own responsive stylesheet
//! suppress them.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::layout::RenderTree;
use crate::target::GridSelection;

/// Class of the outermost overlay wrapper appended to a render target.
pub const WRAP_CLASS: &str = "gridsetoverlaywrap";
/// Class of the inner shell element.
pub const GRIDWRAP_CLASS: &str = "gridwrap";
/// Class of the panel-stack element.
pub const OVERLAY_CLASS: &str = "gridoverlay";
/// Extra class the panel stack carries in show-all mode.
pub const SHOW_ALL_CLASS: &str = "wrapper";
/// Class of one breakpoint's panel container.
pub const SET_CLASS: &str = "gridset";

/// A transient, backend-agnostic markup node.
///
/// Built per target per activation and destroyed only with the page; there
/// is no teardown operation.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayNode {
    /// Element tag name.
    pub tag: &'static str,
    /// Class tokens, serialized space-separated.
    pub classes: Vec<String>,
    /// Inline style properties, serialized in order.
    pub style: Vec<(&'static str, String)>,
    /// Text content, rendered before any children.
    pub text: Option<String>,
    /// Child nodes in render order.
    pub children: Vec<OverlayNode>,
}

impl OverlayNode {
    fn element(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Serializes the node and its subtree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serializes only the node's children, for mounting into an
    /// already-created wrapper element.
    #[must_use]
    pub fn children_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                escape_into(class, out);
            }
            out.push('"');
        }
        if !self.style.is_empty() {
            out.push_str(" style=\"");
            for (property, value) in &self.style {
                out.push_str(property);
                out.push(':');
                escape_into(value, out);
                out.push(';');
            }
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            escape_into(text, out);
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Minimal text/attribute escaping; column names and class tokens are
/// host-supplied strings.
fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Builds the overlay subtree for one render tree.
///
/// The `gridoverlay` node additionally carries [`SHOW_ALL_CLASS`] in
/// show-all mode, switching the overlay's own styling for the whole-page
/// case.
#[must_use]
pub fn overlay_document(tree: &RenderTree, selection: &GridSelection) -> OverlayNode {
    let mut overlay = OverlayNode::element("div");
    overlay.classes.push(String::from(OVERLAY_CLASS));
    if selection.is_show_all() {
        overlay.classes.push(String::from(SHOW_ALL_CLASS));
    }

    for block in &tree.blocks {
        let mut set = OverlayNode::element("div");
        set.classes.push(String::from(SET_CLASS));
        set.classes.extend(block.hides.iter().cloned());

        for grid in &block.grids {
            let mut panel = OverlayNode::element("div");
            panel
                .style
                .push(("padding-left", format!("{}%", grid.pad_left)));
            panel
                .style
                .push(("padding-right", format!("{}%", grid.pad_right)));

            for column in &grid.columns {
                let mut cell = OverlayNode::element("div");
                cell.classes.push(column.label.clone());
                let mut label = OverlayNode::element("small");
                label.text = Some(column.label.clone());
                cell.children.push(label);
                panel.children.push(cell);
            }
            set.children.push(panel);
        }
        overlay.children.push(set);
    }

    let mut shell = OverlayNode::element("div");
    shell.classes.push(String::from(GRIDWRAP_CLASS));
    shell.children.push(overlay);

    let mut wrap = OverlayNode::element("div");
    wrap.classes.push(String::from(WRAP_CLASS));
    wrap.children.push(shell);
    wrap
}
