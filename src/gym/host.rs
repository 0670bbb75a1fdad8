//! Access to the host page's modal widget.
//!
//! The platform ships Bootstrap modals driven by jQuery: the close
//! notification is the jQuery-fired `hidden.bs.modal` event, which a native
//! `addEventListener` cannot observe. The [`ModalHost`] capability hides
//! that difference behind "given an element id, report presence and
//! subscribe to close". The installer probes for a jQuery global exactly
//! once and injects the matching adapter; everything downstream is
//! oblivious to which one it got.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Window};

/// Element id of the challenge modal on the challenges page.
pub const MODAL_ID: &str = "challenge-window";

/// Name of the Bootstrap modal close event.
pub const MODAL_CLOSED_EVENT: &str = "hidden.bs.modal";

/// Subscribe-to-close access to a modal element, keyed by element id.
pub trait ModalHost {
    /// Run `callback` once the widget machinery can be queried; runs it
    /// immediately when the page is already ready.
    fn when_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), JsValue>;

    /// True once the modal element exists in the document.
    fn modal_present(&self, id: &str) -> bool;

    /// Register a one-shot listener for the modal close event.
    fn on_closed(&self, id: &str, callback: Box<dyn FnOnce()>) -> Result<(), JsValue>;
}

/// Pick the adapter for this page: jQuery-backed when the global exists,
/// plain DOM otherwise.
pub fn detect_host(window: &Window) -> Box<dyn ModalHost> {
    match jquery_global(window) {
        Some(jquery) => Box::new(JQueryHost::new(jquery)),
        None => Box::new(NativeHost::new(window.clone())),
    }
}

fn jquery_global(window: &Window) -> Option<Function> {
    for name in ["jQuery", "$"] {
        if let Ok(value) = Reflect::get(window.as_ref(), &JsValue::from_str(name)) {
            if let Some(function) = value.dyn_ref::<Function>() {
                return Some(function.clone());
            }
        }
    }
    None
}

/// Adapter over the host page's jQuery global.
pub struct JQueryHost {
    jquery: Function,
}

impl JQueryHost {
    pub fn new(jquery: Function) -> Self {
        Self { jquery }
    }

    /// `$("#id")`, returning the jQuery wrapper object.
    fn select(&self, id: &str) -> Result<JsValue, JsValue> {
        self.jquery
            .call1(&JsValue::NULL, &JsValue::from_str(&format!("#{id}")))
    }
}

impl ModalHost for JQueryHost {
    fn when_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        // `$(fn)` runs fn on DOM ready, immediately if already parsed.
        let closure = Closure::once(callback);
        let result = self.jquery.call1(&JsValue::NULL, closure.as_ref());
        closure.forget();
        result.map(|_| ())
    }

    fn modal_present(&self, id: &str) -> bool {
        let Ok(wrapper) = self.select(id) else {
            return false;
        };
        Reflect::get(&wrapper, &JsValue::from_str("length"))
            .ok()
            .and_then(|length| length.as_f64())
            .is_some_and(|length| length > 0.0)
    }

    fn on_closed(&self, id: &str, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let wrapper = self.select(id)?;
        // `.one`, not `.on`: the subscription is one-shot per page load.
        let one = Reflect::get(&wrapper, &JsValue::from_str("one"))?.dyn_into::<Function>()?;
        let closure = Closure::once(callback);
        one.call2(
            &wrapper,
            &JsValue::from_str(MODAL_CLOSED_EVENT),
            closure.as_ref(),
        )?;
        closure.forget();
        Ok(())
    }
}

/// Fallback adapter for pages without jQuery: Bootstrap 5 fires
/// `hidden.bs.modal` as a native DOM event.
pub struct NativeHost {
    window: Window,
}

impl NativeHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ModalHost for NativeHost {
    fn when_ready(&self, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let Some(document) = self.window.document() else {
            return Err(JsValue::from_str("no document"));
        };
        if document.ready_state() == "loading" {
            let closure = Closure::once(callback);
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        } else {
            callback();
        }
        Ok(())
    }

    fn modal_present(&self, id: &str) -> bool {
        self.window
            .document()
            .and_then(|document| document.get_element_by_id(id))
            .is_some()
    }

    fn on_closed(&self, id: &str, callback: Box<dyn FnOnce()>) -> Result<(), JsValue> {
        let document = self
            .window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let modal = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str("modal element not in document"))?;

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let closure = Closure::once(callback);
        modal.add_event_listener_with_callback_and_add_event_listener_options(
            MODAL_CLOSED_EVENT,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
        Ok(())
    }
}
