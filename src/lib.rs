//! Browser-side page hooks for the DidLab challenge platform.
//!
//! Two independent, stateless hooks, installed once per page load:
//!
//! - [`fields`] — replaces configured free-text inputs with dropdowns on
//!   registration and settings pages.
//! - [`gym`] — on the challenges page, sends users who arrived from the gym
//!   landing page back to it as soon as the challenge modal closes.
//!
//! Both hooks degrade to a no-op when the page does not match their URL
//! contract, and neither ever surfaces an error to the user: a missing
//! label, input, or modal must never break the underlying page.
//!
//! # Architecture
//!
//! - `page`, `fields::config`, `fields::plan`, `gym::guard` — pure decision
//!   logic. NO web_sys; unit-tested on the native target.
//! - `fields::dom`, `gym::host`, the installers — thin browser adapters.

pub mod fields;
pub mod gym;
pub mod page;

use page::PageContext;

/// Install both hooks on the current page.
///
/// Outside a browser page (no window or location) nothing is installed.
pub fn install_hooks() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(context) = PageContext::capture() else {
        return;
    };
    fields::install(&window, &context);
    gym::install(&window, &context);
}

/// Wasm entry point: hooks attach as soon as the module is evaluated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    install_hooks();
}
