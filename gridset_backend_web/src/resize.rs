// Copyright 2026 the Gridset Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport readout resize hook.
//!
//! [`ResizeHook`] owns the `resize` closure registered on the window. The
//! handler only rewrites the viewport-width readout; the layout tree is
//! rebuilt only by a full page reload, where breakpoint changes arrive.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Window};

use crate::controller::write_viewport_width;

/// The installed `resize` listener.
///
/// Returned by [`GridsetOverlay::activate`](crate::GridsetOverlay::activate).
/// Dropping it unregisters the listener; hosts that want the readout live
/// for the whole page life keep it (or `core::mem::forget` it — there is no
/// graceful shutdown on the web).
pub struct ResizeHook {
    window: Window,
    closure: Option<Closure<dyn FnMut()>>,
}

impl core::fmt::Debug for ResizeHook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResizeHook")
            .field("installed", &self.closure.is_some())
            .finish()
    }
}

impl ResizeHook {
    /// Registers the listener. The closure captures its own window and
    /// document handles, so the hook stays valid however long the host
    /// keeps it.
    pub(crate) fn install(window: Window, document: Document) -> Result<Self, JsValue> {
        let handler_window = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            write_viewport_width(&handler_window, &document);
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            closure: Some(closure),
        })
    }

    /// Unregisters the listener. Idempotent.
    pub fn uninstall(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }

    /// Returns `true` while the listener is registered.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.closure.is_some()
    }
}

impl Drop for ResizeHook {
    fn drop(&mut self) {
        self.uninstall();
    }
}
