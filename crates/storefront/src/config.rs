//! Cart configuration.
//!
//! Every name the page contract and the rendered table depend on lives here,
//! with defaults matching the shop's templates:
//!
//! | Field | Default |
//! |-------|---------|
//! | `storage_key` | `local_cart` |
//! | `body_id` | `local-cart-body` |
//! | `total_id` | `local-cart-total` |
//! | `count_id` | `local-cart-count` |
//! | `currency_suffix` | `lei` |
//! | `count_label` | `produse` |
//! | `empty_message` | `Coșul local este gol.` |
//! | `collation_locale` | `ro` |
//!
//! There are no environment variables. Hosts that need different labels pass
//! a partial JSON object to [`CartConfig::from_json`].

use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage slot used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "local_cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value {0}: {1}")]
    Invalid(String, String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Key of the persistent storage slot
    pub storage_key: String,
    /// Element id of the table body receiving rows
    pub body_id: String,
    /// Element id of the total cost summary
    pub total_id: String,
    /// Element id of the item count summary
    pub count_id: String,
    /// Suffix appended to every amount
    pub currency_suffix: String,
    /// Unit label appended to the item count
    pub count_label: String,
    /// Text of the placeholder row shown for an empty cart
    pub empty_message: String,
    /// BCP-47 locale whose collation orders names in the table
    pub collation_locale: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            body_id: "local-cart-body".to_string(),
            total_id: "local-cart-total".to_string(),
            count_id: "local-cart-count".to_string(),
            currency_suffix: "lei".to_string(),
            count_label: "produse".to_string(),
            empty_message: "Coșul local este gol.".to_string(),
            collation_locale: "ro".to_string(),
        }
    }
}

impl CartConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or a required
    /// identifier is empty.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the storage key and element ids are non-empty and that the
    /// collation locale is a well-formed locale tag.
    ///
    /// Labels may be empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("body_id", &self.body_id),
            ("total_id", &self.total_id),
            ("count_id", &self.count_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    field.to_string(),
                    "must not be empty".to_string(),
                ));
            }
        }
        if let Err(e) = self.collation_locale.parse::<Locale>() {
            return Err(ConfigError::Invalid(
                "collation_locale".to_string(),
                e.to_string(),
            ));
        }
        Ok(())
    }

    /// Format an item count with its unit label, e.g. `"4 produse"`.
    #[must_use]
    pub fn format_count(&self, count: i64) -> String {
        if self.count_label.is_empty() {
            count.to_string()
        } else {
            format!("{count} {}", self.count_label)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, "local_cart");
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            CartConfig::from_json(r#"{"currency_suffix": "EUR", "count_label": "items"}"#).unwrap();
        assert_eq!(config.currency_suffix, "EUR");
        assert_eq!(config.count_label, "items");
        assert_eq!(config.body_id, "local-cart-body");
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let err = CartConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(field, _) if field == "storage_key"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            CartConfig::from_json("{\"body_id\": 3}"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_locale() {
        let config = CartConfig::from_json(r#"{"collation_locale": "en-GB"}"#).unwrap();
        assert_eq!(config.collation_locale, "en-GB");

        let err = CartConfig::from_json(r#"{"collation_locale": "not a locale!"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(field, _) if field == "collation_locale"));
    }

    #[test]
    fn test_format_count() {
        let mut config = CartConfig::default();
        assert_eq!(config.format_count(4), "4 produse");
        config.count_label = String::new();
        assert_eq!(config.format_count(0), "0");
    }
}
