use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identity of a dropdown option.
///
/// Equality is strict: two values match only when they carry the same
/// primitive kind and the same content. Composite identities (arrays,
/// objects) are kept as supplied but never compare equal to anything,
/// because they cannot share a reference once they cross the JSON boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OptionValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Composite(Value),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// JSON form proposed back to the host.
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Null => Value::Null,
            OptionValue::Bool(b) => Value::Bool(*b),
            OptionValue::Number(n) => number_to_json(*n),
            OptionValue::Text(s) => Value::String(s.clone()),
            OptionValue::Composite(v) => v.clone(),
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OptionValue::Null, OptionValue::Null) => true,
            (OptionValue::Bool(a), OptionValue::Bool(b)) => a == b,
            (OptionValue::Number(a), OptionValue::Number(b)) => a == b,
            (OptionValue::Text(a), OptionValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&Value> for OptionValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => OptionValue::Null,
            Value::Bool(b) => OptionValue::Bool(*b),
            Value::Number(n) => n
                .as_f64()
                .map(OptionValue::Number)
                .unwrap_or_else(|| OptionValue::Composite(value.clone())),
            Value::String(s) => OptionValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => OptionValue::Composite(value.clone()),
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        OptionValue::from(&value)
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        value.to_json()
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n as f64)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// Stringified form used for labels and fallbacks (`5` not `5.0`).
impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => write!(f, "null"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Number(n) => write!(f, "{}", format_number(*n)),
            OptionValue::Text(s) => write!(f, "{s}"),
            OptionValue::Composite(v) => write!(f, "{v}"),
        }
    }
}

/// Format a number the way a page would print it.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        format!("{n}")
    } else {
        // exponent form, with an explicit sign on positive exponents
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
