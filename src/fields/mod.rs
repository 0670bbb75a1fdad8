//! Field Enhancer: swaps configured free-text inputs for dropdowns on
//! registration and settings pages.
//!
//! - `config` — the static label/option table.
//! - `plan` — pure replacement planner ([`plan::SelectSpec`]).
//! - `dom` — browser adapter applying the plan to the live page.

pub mod config;
pub mod dom;
pub mod plan;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use crate::page::PageContext;
use config::FIELD_CONFIGS;

/// Install the enhancer: on matching pages, run one enhancement pass once
/// the document structure is fully parsed.
pub fn install(window: &Window, context: &PageContext) {
    if !context.is_enhanced_form_page() {
        return;
    }
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        // Labels are not in the DOM yet; defer until DOMContentLoaded.
        let deferred = Closure::once(move || {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                dom::enhance_document(&document, FIELD_CONFIGS);
            }
        });
        let attached = document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.as_ref().unchecked_ref());
        match attached {
            Ok(()) => deferred.forget(),
            Err(err) => web_sys::console::warn_2(
                &"didlab-hooks: could not defer field enhancement".into(),
                &err,
            ),
        }
    } else {
        dom::enhance_document(&document, FIELD_CONFIGS);
    }
}
