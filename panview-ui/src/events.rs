//! Listener plumbing for page lifecycle and element events.
//!
//! Listeners registered here live as long as the page, so their closures are
//! leaked with `forget()`.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget};

/// Run `f` once the DOM is parsed. Runs immediately if that already happened,
/// which is the usual case since the wasm module loads asynchronously.
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let document = leptos::document();
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let handler = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", handler.unchecked_ref());
}

/// Run `f` once the window has fully loaded (images and stylesheets).
pub fn on_window_load(f: impl FnOnce() + 'static) {
    if leptos::document().ready_state() == "complete" {
        f();
        return;
    }

    let handler = Closure::once_into_js(f);
    let _ = leptos::window().add_event_listener_with_callback("load", handler.unchecked_ref());
}

/// Attach a page-lifetime listener to `target`.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`], but explicitly non-passive so `prevent_default` works for
/// wheel events.
pub fn listen_active<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
