// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard activation toggle.
//!
//! Ctrl/Cmd+G toggles the overlay by rewriting the page URL's
//! `?gridset=show` query and navigating. Activation runs once per page
//! life, so turning the overlay on or off goes through a fresh load rather
//! than a live re-render.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, KeyboardEvent, Window};

use crate::ACTIVATION_QUERY;

/// Query for any injected overlay DOM; a non-empty result means the overlay
/// is currently active.
const PRESENCE_SELECTOR: &str = ".gridsetoverlaywrap, #gridsetoverlaystyles, #gridscreenwidthwrap";

/// The installed Ctrl/Cmd+G `keydown` listener.
pub struct ShortcutToggle {
    document: Document,
    closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl core::fmt::Debug for ShortcutToggle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShortcutToggle")
            .field("installed", &self.closure.is_some())
            .finish()
    }
}

impl ShortcutToggle {
    /// Registers the listener on `document`.
    ///
    /// Hosts install this unconditionally at load — it is what lets the
    /// shortcut turn the overlay *on* when it is not yet active. Keep the
    /// returned hook alive (or leak it) for the page life.
    ///
    /// # Errors
    ///
    /// Fails when listener registration is rejected.
    pub fn install(window: Window, document: Document) -> Result<Self, JsValue> {
        let handler_document = document.clone();
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if !(event.meta_key() || event.ctrl_key()) {
                return;
            }
            if !event.key().eq_ignore_ascii_case("g") {
                return;
            }
            toggle_activation(&window, &handler_document);
            event.prevent_default();
        }) as Box<dyn FnMut(KeyboardEvent)>);

        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            document,
            closure: Some(closure),
        })
    }

    /// Unregisters the listener. Idempotent.
    pub fn uninstall(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ShortcutToggle {
    fn drop(&mut self) {
        self.uninstall();
    }
}

/// Flips the activation query and navigates.
fn toggle_activation(window: &Window, document: &Document) {
    let overlay_present = document
        .query_selector_all(PRESENCE_SELECTOR)
        .map_or(false, |list| list.length() > 0);
    let location = window.location();
    let Ok(href) = location.href() else {
        return;
    };
    let _ = location.set_href(&toggled_href(&href, overlay_present));
}

/// The href to navigate to: appends the activation query when the overlay
/// is off, strips it when on. The literal `?`-append matches the original
/// tool; hosts activate from plain URLs.
fn toggled_href(href: &str, overlay_present: bool) -> String {
    if overlay_present {
        href.replace(&format!("?{ACTIVATION_QUERY}"), "")
    } else {
        format!("{href}?{ACTIVATION_QUERY}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_off_strips_the_query() {
        assert_eq!(
            toggled_href("https://example.org/?gridset=show", true),
            "https://example.org/"
        );
    }

    #[test]
    fn toggling_on_appends_the_query() {
        assert_eq!(
            toggled_href("https://example.org/", false),
            "https://example.org/?gridset=show"
        );
    }

    #[test]
    fn toggle_round_trips_from_a_plain_url() {
        let on = toggled_href("https://example.org/page", false);
        let off = toggled_href(&on, true);
        assert_eq!(off, "https://example.org/page");
    }
}
