use serde_json::{Map, Value};

use crate::label::Label;
use crate::value::{format_number, OptionValue};

/// Uniform shape of an option entry, derived from whatever the host supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOption {
    pub label: Label,
    pub value: OptionValue,
    pub disabled: bool,
    /// The original structured entry, when there was one.
    pub raw: Option<Map<String, Value>>,
}

impl NormalizedOption {
    /// Normalize a single option entry.
    ///
    /// - primitives (string, number, boolean) label themselves
    /// - structured records keep their label, identity, disabled flag and the raw record
    /// - anything else becomes an option with an empty label
    pub fn from_entry(entry: &Value) -> Self {
        match entry {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                let value = OptionValue::from(entry);
                Self {
                    label: Label::Text(value.to_string()),
                    value,
                    disabled: false,
                    raw: None,
                }
            }
            Value::Object(record) => Self {
                label: Label::parse(record.get("label").unwrap_or(&Value::Null)),
                value: OptionValue::from(record.get("value").unwrap_or(&Value::Null)),
                disabled: record.get("disabled").is_some_and(is_truthy),
                raw: Some(record.clone()),
            },
            _ => Self {
                label: Label::text(""),
                value: OptionValue::from(entry),
                disabled: false,
                raw: None,
            },
        }
    }

    /// Text shown for this option.
    pub fn display_label(&self) -> String {
        self.label.display(&self.value)
    }

    /// Secondary search text: the record's `search` field, or the display label.
    pub fn search_text(&self) -> String {
        self.raw_text("search")
            .unwrap_or_else(|| self.display_label())
    }

    /// Tooltip text from the record's `title` field.
    pub fn title(&self) -> Option<String> {
        self.raw_text("title")
    }

    fn raw_text(&self, key: &str) -> Option<String> {
        match self.raw.as_ref()?.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => n.as_f64().map(format_number),
            _ => None,
        }
    }
}

/// Normalize the host's option list. A non-list input yields no options;
/// output order matches input order.
pub fn normalize_options(options: &Value) -> Vec<NormalizedOption> {
    match options {
        Value::Array(entries) => entries.iter().map(NormalizedOption::from_entry).collect(),
        _ => Vec::new(),
    }
}

/// First option whose identity matches `value`.
pub fn find_option<'a>(
    options: &'a [NormalizedOption],
    value: &OptionValue,
) -> Option<&'a NormalizedOption> {
    options.iter().find(|option| option.value == *value)
}

/// Truthiness of a host-supplied flag.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
