//! Static field configuration for the enhancer.
//!
//! Labels must match the host form's label text exactly (after trimming);
//! option order is display order.

/// One selectable entry of a field's dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOption {
    /// Submitted form value.
    pub value: &'static str,
    /// Text shown to the user.
    pub text: &'static str,
}

/// A labeled form field and the options that replace its free-text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Exact trimmed text of the field's `<label>`.
    pub label: &'static str,
    pub options: &'static [FieldOption],
}

/// Fields enhanced on registration/settings pages, in processing order.
pub const FIELD_CONFIGS: &[FieldConfig] = &[
    FieldConfig {
        label: "course_code",
        options: &[
            FieldOption {
                value: "COMP_SCI-361",
                text: "COMP_SCI-361 (Intro Cybersecurity)",
            },
            FieldOption {
                value: "COMP_SCI-381",
                text: "COMP_SCI-381 (Info Sec Assurance)",
            },
            FieldOption {
                value: "COMP_SCI-5533",
                text: "COMP_SCI-5533 (Blockchain)",
            },
            FieldOption {
                value: "PRACTICE",
                text: "General Practice / Non-course",
            },
        ],
    },
    FieldConfig {
        label: "section",
        options: &[
            FieldOption {
                value: "0001",
                text: "Section 0001",
            },
            FieldOption {
                value: "0002",
                text: "Section 0002",
            },
            FieldOption {
                value: "PRACTICE",
                text: "N/A (Practice only)",
            },
        ],
    },
    FieldConfig {
        label: "term",
        // New terms are appended here each semester.
        options: &[FieldOption {
            value: "2026SP",
            text: "2026 Spring",
        }],
    },
];
