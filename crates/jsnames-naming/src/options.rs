//! Naming pass configuration.

use jsnames_scanner::{is_identifier_text, is_reserved_word};
use serde::{Deserialize, Serialize};

use crate::name_generator::DEFAULT_PREFIX;

/// Which naming pass to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Short synthetic names recorded in a [`VariableMap`](crate::VariableMap).
    #[default]
    Mapped,
    /// Names spelled after the qualified path, no map.
    Unmapped,
}

/// Options shared by both naming passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingOptions {
    /// Leading text of every synthetic name.
    pub prefix: String,
    /// Names the generator must never produce.
    pub reserved_names: Vec<String>,
    pub mode: NamingMode,
}

impl Default for NamingOptions {
    fn default() -> Self {
        NamingOptions {
            prefix: DEFAULT_PREFIX.to_string(),
            reserved_names: Vec::new(),
            mode: NamingMode::Mapped,
        }
    }
}

impl NamingOptions {
    /// Check that generated names will be valid identifiers.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_identifier_text(&self.prefix) {
            return Err(OptionsError::InvalidPrefix(self.prefix.clone()));
        }
        if let Some(name) = self
            .reserved_names
            .iter()
            .find(|name| !is_identifier_text(name))
        {
            return Err(OptionsError::InvalidReservedName(name.clone()));
        }
        Ok(())
    }

    /// Whether `name` may never be generated.
    pub fn is_reserved(&self, name: &str) -> bool {
        is_reserved_word(name) || self.reserved_names.iter().any(|reserved| reserved == name)
    }
}

/// Invalid [`NamingOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    InvalidPrefix(String),
    InvalidReservedName(String),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::InvalidPrefix(prefix) => {
                write!(f, "name prefix '{prefix}' is not a valid identifier")
            }
            OptionsError::InvalidReservedName(name) => {
                write!(f, "reserved name '{name}' is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for OptionsError {}
