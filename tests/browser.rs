//! Browser-side properties of the DOM adapters.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use didlab_hooks::fields::config::{FieldConfig, FieldOption};
use didlab_hooks::fields::dom::enhance_document;
use didlab_hooks::gym::host::{MODAL_CLOSED_EVENT, ModalHost, NativeHost};

wasm_bindgen_test_configure!(run_in_browser);

const COURSE_OPTIONS: &[FieldOption] = &[
    FieldOption {
        value: "COMP_SCI-361",
        text: "COMP_SCI-361 (Intro Cybersecurity)",
    },
    FieldOption {
        value: "PRACTICE",
        text: "General Practice / Non-course",
    },
];

const COURSE_CONFIG: FieldConfig = FieldConfig {
    label: "course_code",
    options: COURSE_OPTIONS,
};

fn render(html: &str) -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);
    document
}

fn course_field_html(value: &str) -> String {
    format!(
        r#"<div class="form-group">
            <label for="course_code-input">course_code</label>
            <input class="form-control" id="course_code-input" name="course_code" type="text" value="{value}">
        </div>"#
    )
}

#[wasm_bindgen_test]
fn replaces_input_with_matching_select() {
    let document = render(&course_field_html(""));
    enhance_document(&document, &[COURSE_CONFIG]);

    assert!(
        document
            .query_selector("input.form-control")
            .unwrap()
            .is_none(),
        "input should be gone"
    );
    let select: HtmlSelectElement = document
        .get_element_by_id("course_code-input")
        .expect("select takes over the input's id")
        .dyn_into()
        .unwrap();
    assert_eq!(select.name(), "course_code");
    assert_eq!(select.class_name(), "form-control");

    let options = document.query_selector_all("select option").unwrap();
    assert_eq!(options.length(), 3, "placeholder plus two configured options");

    let placeholder: HtmlOptionElement = options.item(0).unwrap().dyn_into().unwrap();
    assert_eq!(placeholder.text(), "Select course code");
    assert_eq!(placeholder.value(), "");
    assert!(placeholder.disabled());
    assert!(placeholder.selected());

    let values: Vec<String> = (0..options.length())
        .map(|index| {
            options
                .item(index)
                .unwrap()
                .dyn_into::<HtmlOptionElement>()
                .unwrap()
                .value()
        })
        .collect();
    assert_eq!(values, ["", "COMP_SCI-361", "PRACTICE"]);
}

#[wasm_bindgen_test]
fn prior_value_survives_replacement() {
    let document = render(&course_field_html("PRACTICE"));
    enhance_document(&document, &[COURSE_CONFIG]);

    let select: HtmlSelectElement = document
        .get_element_by_id("course_code-input")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(select.value(), "PRACTICE");

    let placeholder: HtmlOptionElement = document
        .query_selector("select option")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(!placeholder.selected(), "placeholder is demoted on a match");
}

#[wasm_bindgen_test]
fn unknown_prior_value_keeps_placeholder() {
    let document = render(&course_field_html("MATH-101"));
    enhance_document(&document, &[COURSE_CONFIG]);

    let select: HtmlSelectElement = document
        .get_element_by_id("course_code-input")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(select.value(), "", "placeholder stays selected");
}

#[wasm_bindgen_test]
fn missing_label_does_not_block_other_fields() {
    let document = render(&course_field_html(""));
    let absent = FieldConfig {
        label: "no_such_field",
        options: COURSE_OPTIONS,
    };
    enhance_document(&document, &[absent, COURSE_CONFIG]);

    let selects = document.query_selector_all("select").unwrap();
    assert_eq!(selects.length(), 1, "only the present field is enhanced");
}

#[wasm_bindgen_test]
fn label_match_is_exact_not_substring() {
    let document = render(
        r#"<div class="form-group">
            <label>course_code_extra</label>
            <input class="form-control" id="other-input" name="other" type="text">
        </div>"#,
    );
    enhance_document(&document, &[COURSE_CONFIG]);

    assert!(document.query_selector("select").unwrap().is_none());
    let input: HtmlInputElement = document
        .get_element_by_id("other-input")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(input.name(), "other", "unrelated input left untouched");
}

#[wasm_bindgen_test]
fn rerunning_on_enhanced_page_is_a_no_op() {
    let document = render(&course_field_html(""));
    enhance_document(&document, &[COURSE_CONFIG]);
    enhance_document(&document, &[COURSE_CONFIG]);

    let selects = document.query_selector_all("select").unwrap();
    assert_eq!(selects.length(), 1);
    let options = document.query_selector_all("select option").unwrap();
    assert_eq!(options.length(), 3, "second pass must not append options");
}

#[wasm_bindgen_test]
fn input_without_form_control_class_is_skipped() {
    let document = render(
        r#"<div class="form-group">
            <label>course_code</label>
            <input id="course_code-input" name="course_code" type="text">
        </div>"#,
    );
    enhance_document(&document, &[COURSE_CONFIG]);

    assert!(document.query_selector("select").unwrap().is_none());
    assert!(document.query_selector("input").unwrap().is_some());
}

#[wasm_bindgen_test]
fn native_host_reports_modal_presence() {
    render(r#"<div id="challenge-window"></div>"#);
    let host = NativeHost::new(web_sys::window().unwrap());
    assert!(host.modal_present("challenge-window"));
    assert!(!host.modal_present("some-other-modal"));
}

#[wasm_bindgen_test]
fn native_host_close_listener_fires_once() {
    let document = render(r#"<div id="challenge-window"></div>"#);
    let host = NativeHost::new(web_sys::window().unwrap());

    let closes = Rc::new(Cell::new(0u32));
    let seen = closes.clone();
    host.on_closed(
        "challenge-window",
        Box::new(move || seen.set(seen.get() + 1)),
    )
    .unwrap();

    let modal = document.get_element_by_id("challenge-window").unwrap();
    modal
        .dispatch_event(&Event::new(MODAL_CLOSED_EVENT).unwrap())
        .unwrap();
    modal
        .dispatch_event(&Event::new(MODAL_CLOSED_EVENT).unwrap())
        .unwrap();
    assert_eq!(closes.get(), 1, "subscription is one-shot");
}

#[wasm_bindgen_test]
fn native_host_on_closed_without_modal_is_an_error() {
    render("");
    let host = NativeHost::new(web_sys::window().unwrap());
    assert!(
        host.on_closed("challenge-window", Box::new(|| {}))
            .is_err()
    );
}

#[wasm_bindgen_test]
fn native_host_runs_ready_callback_on_parsed_document() {
    render("");
    let host = NativeHost::new(web_sys::window().unwrap());
    let ran = Rc::new(Cell::new(false));
    let seen = ran.clone();
    host.when_ready(Box::new(move || seen.set(true))).unwrap();
    assert!(ran.get(), "document is already parsed under the test harness");
}
