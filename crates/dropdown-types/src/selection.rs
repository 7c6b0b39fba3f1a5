use serde_json::Value;

use crate::option::NormalizedOption;
use crate::value::OptionValue;

/// Selected identities derived from the host's `value` and the mode flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    multi: bool,
    values: Vec<OptionValue>,
}

impl Selection {
    /// Derive the selection. In multi mode a non-list value selects nothing;
    /// in single mode `null` selects nothing.
    pub fn derive(value: &Value, multi: bool) -> Self {
        let values = if multi {
            match value {
                Value::Array(items) => items.iter().map(OptionValue::from).collect(),
                _ => Vec::new(),
            }
        } else if value.is_null() {
            Vec::new()
        } else {
            vec![OptionValue::from(value)]
        };
        Self { multi, values }
    }

    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn values(&self) -> &[OptionValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &OptionValue) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_selected(&self, option: &NormalizedOption) -> bool {
        self.contains(&option.value)
    }

    /// Multi-mode toggle: drop `value` if selected, otherwise append it.
    pub fn toggled(&self, value: &OptionValue) -> Vec<OptionValue> {
        if self.contains(value) {
            self.without(value)
        } else {
            let mut next = self.values.clone();
            next.push(value.clone());
            next
        }
    }

    /// The selection with every entry equal to `value` removed, order kept.
    pub fn without(&self, value: &OptionValue) -> Vec<OptionValue> {
        self.values.iter().filter(|v| *v != value).cloned().collect()
    }

    /// Host value representing "nothing selected" for this mode.
    pub fn cleared(&self) -> Value {
        if self.multi {
            Value::Array(Vec::new())
        } else {
            Value::Null
        }
    }
}

/// Host-facing list value.
pub fn values_to_json(values: &[OptionValue]) -> Value {
    Value::Array(values.iter().map(OptionValue::to_json).collect())
}
