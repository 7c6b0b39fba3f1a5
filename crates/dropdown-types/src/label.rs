use serde_json::Value;

use crate::value::{format_number, OptionValue};

/// Display label of an option.
///
/// Plain strings and numbers become `Text`. A rendered fragment
/// (`{"props": {"children": ...}}` or `{"children": ...}`) becomes a
/// `Fragment` wrapping its parsed content. Anything else is kept verbatim as
/// `Unresolved` and resolves to nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Text(String),
    Fragment(Box<Label>),
    Unresolved(Value),
}

impl Label {
    pub fn text(s: impl Into<String>) -> Self {
        Label::Text(s.into())
    }

    /// Parse a label as supplied on a structured option entry.
    pub fn parse(value: &Value) -> Self {
        match value {
            Value::String(s) => Label::Text(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Label::Text(format_number(f)),
                None => Label::Text(n.to_string()),
            },
            Value::Object(map) => {
                let children = map
                    .get("props")
                    .and_then(|props| props.get("children"))
                    .or_else(|| map.get("children"));
                match children {
                    Some(content) => Label::Fragment(Box::new(Label::parse(content))),
                    None => Label::Unresolved(value.clone()),
                }
            }
            _ => Label::Unresolved(value.clone()),
        }
    }

    /// Text content of the label, unwrapping fragments.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            Label::Fragment(content) => content.resolve(),
            Label::Unresolved(_) => None,
        }
    }

    /// Text to display for an option carrying this label, falling back to the
    /// stringified identity when the label has no usable content.
    pub fn display(&self, value: &OptionValue) -> String {
        match self.resolve() {
            Some(text) => text.to_string(),
            None if !value.is_null() => value.to_string(),
            None => String::new(),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}
