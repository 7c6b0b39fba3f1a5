use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DropdownError;
use crate::option::{normalize_options, NormalizedOption};
use crate::selection::Selection;

/// Style applied to the root element before the caller's overrides.
pub const ROOT_DEFAULT_STYLE: &[(&str, &str)] = &[("position", "relative"), ("width", "100%")];

/// Loading information forwarded by the host. Not interpreted beyond
/// reflecting `is_loading` on the root element.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoadingState {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub prop_name: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
}

/// Host-supplied configuration of a dropdown, as received over JSON props or
/// read from a config file. Missing keys take the component defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "empty_list")]
    pub options: Value,
    #[serde(default)]
    pub value: Value,
    #[serde(default = "default_true")]
    pub multi: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default = "default_true")]
    pub clearable: bool,
    #[serde(default, rename = "className")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub style: Map<String, Value>,
    #[serde(default)]
    pub loading_state: Option<LoadingState>,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn default_true() -> bool {
    true
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            id: None,
            options: empty_list(),
            value: Value::Null,
            multi: true,
            placeholder: String::new(),
            disabled: false,
            searchable: true,
            clearable: true,
            class_name: None,
            style: Map::new(),
            loading_state: None,
        }
    }
}

impl DropdownConfig {
    pub fn from_json(contents: &str) -> Result<Self, DropdownError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, DropdownError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self, DropdownError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn normalized_options(&self) -> Vec<NormalizedOption> {
        normalize_options(&self.options)
    }

    pub fn selection(&self) -> Selection {
        Selection::derive(&self.value, self.multi)
    }

    pub fn menu_id(&self) -> String {
        menu_id(self.id.as_deref())
    }

    pub fn root_style(&self) -> String {
        merge_style(ROOT_DEFAULT_STYLE, &self.style)
    }

    pub fn is_loading(&self) -> bool {
        self.loading_state.as_ref().is_some_and(|s| s.is_loading)
    }
}

/// Id of the option menu overlay: `"<id>-menu"`.
pub fn menu_id(id: Option<&str>) -> String {
    format!("{}-menu", id.unwrap_or_default())
}

/// Merge the caller's style over `defaults` and render it as an inline CSS
/// declaration list. Caller keys win; camelCase keys become CSS properties.
pub fn merge_style(defaults: &[(&str, &str)], overrides: &Map<String, Value>) -> String {
    let mut declarations: Vec<(String, String)> = defaults
        .iter()
        .map(|(k, v)| (css_property(k), v.to_string()))
        .collect();

    for (key, value) in overrides {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => continue,
        };
        let property = css_property(key);
        match declarations.iter_mut().find(|(k, _)| *k == property) {
            Some(existing) => existing.1 = value,
            None => declarations.push((property, value)),
        }
    }

    declarations
        .iter()
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `backgroundColor` -> `background-color`. Already-hyphenated names pass through.
pub fn css_property(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
