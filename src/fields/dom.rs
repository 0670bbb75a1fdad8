//! DOM adapter for the field enhancer.
//!
//! Scans the live page for configured labels, snapshots the inputs they
//! describe, and swaps in the select elements planned by [`super::plan`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use super::config::FieldConfig;
use super::plan::{FieldSnapshot, SelectSpec, plan_select};

/// Selector for the input the host platform renders next to each label.
const FIELD_INPUT_SELECTOR: &str = "input.form-control";

/// Run one enhancement pass over the document.
///
/// Per-field failures (missing label, missing input, DOM errors) skip that
/// field only; one bad field never blocks the rest. Missing elements are
/// not even logged since "field not on this page" is the common case.
pub fn enhance_document(document: &Document, configs: &[FieldConfig]) {
    for config in configs {
        if let Err(err) = enhance_field(document, config) {
            web_sys::console::warn_2(
                &format!("didlab-hooks: failed to enhance field {:?}", config.label).into(),
                &err,
            );
        }
    }
}

fn enhance_field(document: &Document, config: &FieldConfig) -> Result<(), JsValue> {
    let Some(label) = find_label(document, config.label) else {
        // Field not present on this page.
        return Ok(());
    };
    let Some(input) = find_field_input(&label) else {
        // No plain input left to replace; a previous pass may already have
        // swapped in the select.
        return Ok(());
    };

    let snapshot = FieldSnapshot {
        value: input.value(),
        class_name: input.class_name(),
        id: input.id(),
        name: input.name(),
    };
    let spec = plan_select(config.label, config.options, &snapshot);
    let select = build_select(document, &spec)?;

    let parent = input
        .parent_element()
        .ok_or_else(|| JsValue::from_str("input has no parent element"))?;
    parent.replace_child(&select, &input)?;
    Ok(())
}

/// Find the label whose trimmed text equals `text` exactly.
///
/// Deliberately strict: no case folding and no whitespace collapsing, so a
/// similarly named field is never matched by accident.
fn find_label(document: &Document, text: &str) -> Option<Element> {
    let labels = document.query_selector_all("label").ok()?;
    for index in 0..labels.length() {
        let Some(node) = labels.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        if element.text_content().unwrap_or_default().trim() == text {
            return Some(element);
        }
    }
    None
}

/// The input a label describes: the first `input.form-control` inside the
/// label's parent container.
fn find_field_input(label: &Element) -> Option<HtmlInputElement> {
    let container = label.parent_element()?;
    let input = container.query_selector(FIELD_INPUT_SELECTOR).ok()??;
    input.dyn_into::<HtmlInputElement>().ok()
}

/// Materialize a [`SelectSpec`] as a live element.
fn build_select(document: &Document, spec: &SelectSpec) -> Result<HtmlSelectElement, JsValue> {
    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_class_name(&spec.class_name);
    select.set_id(&spec.id);
    select.set_name(&spec.name);

    for option in &spec.options {
        let element = HtmlOptionElement::new_with_text(&option.text)?;
        element.set_value(&option.value);
        element.set_disabled(option.disabled);
        // default_selected keeps the choice stable across form resets.
        element.set_default_selected(option.selected);
        element.set_selected(option.selected);
        select.append_child(&element)?;
    }
    Ok(select)
}
