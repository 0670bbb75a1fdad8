//! Modal-Redirect Guard: on `/challenges?from_gym=1`, waits for the
//! challenge modal and navigates back to `/gym` when it closes.
//!
//! - `guard` — pure guard condition, retry policy, and state machine.
//! - `host` — the modal widget capability (jQuery or native adapter).

pub mod guard;
pub mod host;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::page::{GYM_PATH, PageContext};
use guard::{GuardState, RetryPolicy};
use host::{MODAL_ID, ModalHost, detect_host};

/// Install the guard with the default retry policy (200 ms, unbounded).
pub fn install(window: &Window, context: &PageContext) {
    install_with_policy(window, context, RetryPolicy::default());
}

/// Install the guard with an explicit retry policy.
pub fn install_with_policy(window: &Window, context: &PageContext, policy: RetryPolicy) {
    if !guard::should_guard(context) {
        return;
    }

    let host: Rc<dyn ModalHost> = detect_host(window).into();
    let deferred_window = window.clone();
    let deferred_host = host.clone();
    let result = host.when_ready(Box::new(move || {
        poll_for_modal(deferred_window, deferred_host, policy);
    }));
    if let Err(err) = result {
        web_sys::console::warn_2(&"didlab-hooks: could not defer modal lookup".into(), &err);
    }
}

/// Repeatedly look for the modal element, then arm the close listener.
///
/// The tick closure reschedules itself through `setTimeout`. It is dropped
/// as soon as the lookup succeeds or the retry budget runs out; a pending
/// timer with no closure left is a no-op. Page unload cancels everything.
fn poll_for_modal(window: Window, host: Rc<dyn ModalHost>, policy: RetryPolicy) {
    let state = Rc::new(Cell::new(GuardState::new()));
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick: Closure<dyn FnMut()> = Closure::new({
        let slot = slot.clone();
        let state = state.clone();
        let window = window.clone();
        move || {
            let found = host.modal_present(MODAL_ID);
            let next = state.get().after_lookup(found);
            state.set(next);
            match next {
                GuardState::Listening => {
                    arm_close_listener(&window, host.clone(), state.clone());
                    slot.borrow_mut().take();
                }
                GuardState::WaitingForModal { attempts } => {
                    if policy.allows_retry(attempts) {
                        schedule_tick(&window, &slot, policy.interval_ms);
                    } else {
                        slot.borrow_mut().take();
                    }
                }
                GuardState::Redirected => {}
            }
        }
    });
    *slot.borrow_mut() = Some(tick);

    // The first lookup also goes through the timer so the closure is only
    // ever entered from there.
    schedule_tick(&window, &slot, 0);
}

fn schedule_tick(
    window: &Window,
    slot: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    delay_ms: i32,
) {
    let borrowed = slot.borrow();
    let Some(closure) = borrowed.as_ref() else {
        return;
    };
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    if let Err(err) = scheduled {
        web_sys::console::warn_2(&"didlab-hooks: could not schedule modal lookup".into(), &err);
    }
}

fn arm_close_listener(window: &Window, host: Rc<dyn ModalHost>, state: Rc<Cell<GuardState>>) {
    let window = window.clone();
    let result = host.on_closed(
        MODAL_ID,
        Box::new(move || {
            state.set(state.get().after_close());
            redirect_to_gym(&window);
        }),
    );
    if let Err(err) = result {
        web_sys::console::warn_2(&"didlab-hooks: could not watch modal close".into(), &err);
    }
}

/// Terminal transition: a successful navigation unloads the page.
fn redirect_to_gym(window: &Window) {
    if let Err(err) = window.location().set_href(GYM_PATH) {
        web_sys::console::warn_2(&"didlab-hooks: redirect to gym failed".into(), &err);
    }
}
