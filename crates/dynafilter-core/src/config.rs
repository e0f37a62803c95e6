//! Substitution configuration.
//!
//! Driven by environment variables, falling back to the `#n` / `:v` prefixes
//! commonly used by DynamoDB client libraries.

use std::env;

use crate::error::ConfigError;

/// Environment variable overriding [`SubstitutionConfig::name_prefix`].
pub const NAME_PREFIX_ENV: &str = "DYNAFILTER_NAME_PREFIX";
/// Environment variable overriding [`SubstitutionConfig::value_prefix`].
pub const VALUE_PREFIX_ENV: &str = "DYNAFILTER_VALUE_PREFIX";

/// Placeholder naming used when rewriting an expression into native form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionConfig {
    /// Prefix for expression attribute names; a counter is appended (`#n0`).
    pub name_prefix: String,
    /// Prefix for expression attribute values; a counter is appended (`:v0`).
    pub value_prefix: String,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            name_prefix: "#n".to_owned(),
            value_prefix: ":v".to_owned(),
        }
    }
}

impl SubstitutionConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source, e.g. a test fixture.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup(NAME_PREFIX_ENV) {
            config.name_prefix = v;
        }
        if let Some(v) = lookup(VALUE_PREFIX_ENV) {
            config.value_prefix = v;
        }

        config
    }

    /// Check that both prefixes form valid DynamoDB placeholder tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_prefix("name_prefix", '#', &self.name_prefix)?;
        check_prefix("value_prefix", ':', &self.value_prefix)
    }
}

fn check_prefix(field: &'static str, sigil: char, value: &str) -> Result<(), ConfigError> {
    let Some(rest) = value.strip_prefix(sigil) else {
        return Err(ConfigError::MissingSigil {
            field,
            sigil,
            value: value.to_owned(),
        });
    };
    if !rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::InvalidCharacter {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}
