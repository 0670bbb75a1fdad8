//! Pure planner for input-to-select replacement.
//!
//! Decides what the replacement `<select>` looks like without touching the
//! DOM; `fields::dom` snapshots the live input and applies the resulting
//! spec. Keeping the decision here makes the selection rules testable on
//! the native target.

use serde::{Deserialize, Serialize};

use super::config::FieldOption;

/// What the enhancer reads off the input it is about to replace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Current value, possibly pre-filled by a validation-error redisplay.
    pub value: String,
    pub class_name: String,
    pub id: String,
    pub name: String,
}

/// One `<option>` of the replacement element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub value: String,
    pub text: String,
    pub disabled: bool,
    pub selected: bool,
}

/// Description of the replacement select element.
///
/// Class, id, and name are carried over from the snapshot so form
/// submission and any code referencing the input keep working. The first
/// option is always the placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectSpec {
    pub class_name: String,
    pub id: String,
    pub name: String,
    pub options: Vec<OptionSpec>,
}

/// Plan the select that replaces one configured field.
///
/// The placeholder is selected unless the snapshot carries a non-empty
/// value equal to one of the configured option values; in that case the
/// matching option is selected instead, preserving the prior value across
/// re-renders.
pub fn plan_select(label: &str, options: &[FieldOption], snapshot: &FieldSnapshot) -> SelectSpec {
    let matched = !snapshot.value.is_empty()
        && options.iter().any(|option| option.value == snapshot.value);

    let mut specs = Vec::with_capacity(options.len() + 1);
    specs.push(OptionSpec {
        value: String::new(),
        text: placeholder_text(label),
        disabled: true,
        selected: !matched,
    });
    for option in options {
        specs.push(OptionSpec {
            value: option.value.to_owned(),
            text: option.text.to_owned(),
            disabled: false,
            selected: matched && option.value == snapshot.value,
        });
    }

    SelectSpec {
        class_name: snapshot.class_name.clone(),
        id: snapshot.id.clone(),
        name: snapshot.name.clone(),
        options: specs,
    }
}

fn placeholder_text(label: &str) -> String {
    format!("Select {}", label.replace('_', " "))
}
