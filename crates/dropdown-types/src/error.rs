use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of dropdown errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DropdownErrorKind {
    InvalidConfig,
    UnsupportedPlatform,
}

impl fmt::Display for DropdownErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropdownErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            DropdownErrorKind::UnsupportedPlatform => write!(f, "UnsupportedPlatform"),
        }
    }
}

/// Error raised while configuring or launching a dropdown.
///
/// Rendering itself never fails; only host-side setup does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownError {
    pub kind: DropdownErrorKind,
    pub message: String,
}

impl DropdownError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: DropdownErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn unsupported_platform(message: impl Into<String>) -> Self {
        Self {
            kind: DropdownErrorKind::UnsupportedPlatform,
            message: message.into(),
        }
    }
}

impl fmt::Display for DropdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DropdownError {}

impl From<serde_json::Error> for DropdownError {
    fn from(err: serde_json::Error) -> Self {
        DropdownError::invalid_config(err.to_string())
    }
}

impl From<toml::de::Error> for DropdownError {
    fn from(err: toml::de::Error) -> Self {
        DropdownError::invalid_config(err.to_string())
    }
}
