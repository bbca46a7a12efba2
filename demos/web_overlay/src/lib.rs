// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the gridset overlay wired up the way a host page would.
//!
//! Installs the Ctrl/Cmd+G toggle unconditionally, then activates the
//! overlay when the page URL carries `?gridset=show`, rendering the
//! bundled three-breakpoint grid definition.
//!
//! Build with: `wasm-pack build --target web demos/web_overlay`
//!
//! Then serve `demos/web_overlay/` and open `index.html` in a browser.

use wasm_bindgen::prelude::*;

use gridset_backend_web::{GridsetOverlay, ShortcutToggle, should_activate};
use gridset_core::spec::GridSpec;

/// The grid definition the overlay renders: three breakpoints (320, 768,
/// 990) with four grid systems.
const GRID_DEFINITION: &str = include_str!("../grid.json");

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    // The toggle must outlive this function; there is no graceful shutdown
    // on the web.
    let toggle = ShortcutToggle::install(window.clone(), document)?;
    core::mem::forget(toggle);

    let href = window.location().href()?;
    if should_activate(&href) {
        let spec = GridSpec::from_json(GRID_DEFINITION)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let overlay = GridsetOverlay::new(window, spec)?;
        let resize = overlay.activate()?;
        core::mem::forget(resize);
    }

    Ok(())
}
