// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injected assets: the overlay stylesheet, fixed element ids, and the
//! optional remote asset locations.
//!
//! The ids are the overlay's presence protocol — the keyboard toggle and
//! host tooling detect an active overlay by querying for them — so they are
//! fixed constants, not configuration.

/// Id of the injected `<style>` element.
pub const STYLE_ID: &str = "gridsetoverlaystyles";
/// Id of the viewport-width readout panel.
pub const READOUT_WRAP_ID: &str = "gridscreenwidthwrap";
/// Id of the readout's text paragraph.
pub const READOUT_TEXT_ID: &str = "gridscreenwidth";
/// Id of the element receiving the current viewport width.
pub const READOUT_VALUE_ID: &str = "gridscreenwidthval";
/// Id of the injected favicon link.
pub const FAVICON_ID: &str = "gridsetfavicon";
/// Id of the optional remote stylesheet link.
pub const REMOTE_STYLE_ID: &str = "gridsetstyles";

/// Page-level class set when no marker-classed region exists and the overlay
/// covers the document body.
pub const NO_AREAS_CLASS: &str = "gridsetnoareas";

/// Favicon swapped in while the overlay is active.
pub const FAVICON_URL: &str = "http://dev.gridsetapp.com/app/img/favicon.ico";
/// Base URL of the hosted per-specification stylesheet; the specification id
/// is appended as a path segment.
pub const REMOTE_STYLESHEET_BASE: &str = "https://get.gridsetapp.com";

/// The overlay's global stylesheet, injected once per activation under
/// [`STYLE_ID`].
///
/// The overlay draws over arbitrary host pages; the blanket `!important`s
/// keep host typography and box styling from bleeding in. The first four
/// panels of a `gridset` stack are distinguished by border style (solid,
/// dashed, dotted, double) and stacked headers.
pub const OVERLAY_STYLESHEET: &str = "\
.gridsetoverlaywrap{padding:0 !important;display:block;position:absolute;top:0;left:0;width:100%;height:100%;z-index:10000;pointer-events:none;}\
.gridsetnoareas .gridsetoverlaywrap{position:fixed;}\
.gridwrap{padding:0 !important;display:block;position:absolute;top:0;left:0;width:100%;height:100%;font-family:Helvetica, Arial, sans-serif !important;}\
.gridoverlay{padding:0 !important;position:relative;height:100%;overflow:hidden !important;background:none !important;}\
.gridoverlay .gridset{padding:0 !important;position:absolute;width:100%;height:100%;top:0;left:0;opacity:0.8; display:block;}\
.gridoverlay .gridset div{padding:0;text-align:left;font-size:10px !important;border:1px solid #FFD800 !important;-moz-box-sizing:border-box;-webkit-box-sizing:border-box;box-sizing:border-box;height:100%;}\
.gridoverlay .gridset > div{border:none !important;height:100%;position:absolute;top:0;left:0;width:100%;}\
.gridoverlay div small{width:100%;display:block;text-align:center;font-weight:400 !important;letter-spacing: 1px !important;padding-top:0 !important;text-transform:none !important;height:22px !important;line-height:22px !important;text-style:normal !important;border-bottom:1px solid #FFD800 !important;color:#333 !important;background-color:#FFF79F !important;}\
.gridoverlay .gridset > div:nth-child(2){padding-top:23px !important;}\
.gridoverlay .gridset > div:nth-child(2) small{border-bottom:1px dashed #FFD800 !important;}\
.gridoverlay .gridset > div:nth-child(2) > div{border:1px dashed #FFD800 !important;}\
.gridoverlay .gridset > div:nth-child(3){padding-top:45px !important;}\
.gridoverlay .gridset > div:nth-child(3) small{border-bottom:1px dotted #FFD800 !important;}\
.gridoverlay .gridset > div:nth-child(3) > div{border:1px dotted #FFD800 !important;}\
.gridoverlay .gridset > div:nth-child(4){padding-top:67px !important;}\
.gridoverlay .gridset > div:nth-child(4) small{border-bottom:1px double #FFD800 !important;}\
.gridoverlay .gridset > div:nth-child(4) > div{border:1px double #FFD800 !important;}\
.gridsetoverlaywrap .noshow{display:none;}\
#gridscreenwidthwrap{margin:0 !important;padding:0 !important;display:none;width:100%;position:fixed !important;z-index:10000 !important;bottom:0 !important;left:0 !important;height:30px !important;opacity:0.95;border-top:1px solid #FFD800 !important;color:#333;background-color:#FFF79F !important;font-family:Helvetica, Arial, sans-serif !important;}\
#gridscreenwidth{margin:0 !important;display:block;width:100% !important;max-width:none !important;text-align:center !important;font-size:12px;line-height:1;padding-top:8px !important;}\
#gridscreenwidth strong{text-transform:none;}";

/// Inner markup of the readout panel.
pub const READOUT_MARKUP: &str =
    r#"<p id="gridscreenwidth">Screen width: <strong id="gridscreenwidthval"></strong></p>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_hides_the_readout_until_styled() {
        // The readout is revealed by the hosted stylesheet (or the host
        // page's own); the injected baseline keeps it hidden.
        assert!(OVERLAY_STYLESHEET.contains("#gridscreenwidthwrap{margin:0 !important;padding:0 !important;display:none;"));
    }

    #[test]
    fn readout_markup_carries_the_value_id() {
        assert!(READOUT_MARKUP.contains(READOUT_VALUE_ID));
        assert!(READOUT_MARKUP.contains(READOUT_TEXT_ID));
    }

    #[test]
    fn stylesheet_styles_the_no_areas_page_mode() {
        assert!(OVERLAY_STYLESHEET.contains(".gridsetnoareas .gridsetoverlaywrap{position:fixed;}"));
    }
}
