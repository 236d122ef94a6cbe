//! Storefront configuration from environment variables.

use techstore_catalog::ALL_CATEGORIES;
use techstore_observability::LogFormat;

pub const DEFAULT_STORE_NAME: &str = "TechStore";
pub const DEFAULT_CURRENCY: &str = "₽";
pub const DEFAULT_FREE_DELIVERY_FROM: u64 = 5000;

/// An environment value that could not be used and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl core::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}={:?} ignored ({}); using default", self.key, self.value, self.reason)
    }
}

/// Runtime settings for the storefront binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// `TECHSTORE_NAME`
    pub store_name: String,
    /// `TECHSTORE_CURRENCY`, appended to rendered prices.
    pub currency: String,
    /// `TECHSTORE_CATEGORY`, the category selected when the page opens.
    pub initial_category: String,
    /// `TECHSTORE_FREE_DELIVERY_FROM`, cart total from which delivery is free.
    pub free_delivery_from: u64,
    /// `TECHSTORE_LOG_FORMAT` (`json` or `text`).
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            initial_category: ALL_CATEGORIES.to_string(),
            free_delivery_from: DEFAULT_FREE_DELIVERY_FROM,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    ///
    /// Logging is usually not set up yet when this runs (the log format is part
    /// of the config), so fallbacks are returned for the caller to log after
    /// `techstore_observability::init`.
    pub fn from_env() -> (Self, Vec<ConfigWarning>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset
    /// or unparsable values. Every unparsable value yields a [`ConfigWarning`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigWarning>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let free_delivery_from = match non_empty("TECHSTORE_FREE_DELIVERY_FROM") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(amount) => amount,
                Err(e) => {
                    warnings.push(ConfigWarning {
                        key: "TECHSTORE_FREE_DELIVERY_FROM",
                        value: raw,
                        reason: format!("not a whole amount: {e}"),
                    });
                    defaults.free_delivery_from
                }
            },
            None => defaults.free_delivery_from,
        };

        let log_format = match non_empty("TECHSTORE_LOG_FORMAT") {
            Some(raw) => match raw.parse::<LogFormat>() {
                Ok(format) => format,
                Err(e) => {
                    warnings.push(ConfigWarning {
                        key: "TECHSTORE_LOG_FORMAT",
                        value: raw,
                        reason: e,
                    });
                    defaults.log_format
                }
            },
            None => defaults.log_format,
        };

        let config = Self {
            store_name: non_empty("TECHSTORE_NAME").unwrap_or(defaults.store_name),
            currency: non_empty("TECHSTORE_CURRENCY").unwrap_or(defaults.currency),
            initial_category: non_empty("TECHSTORE_CATEGORY").unwrap_or(defaults.initial_category),
            free_delivery_from,
            log_format,
        };

        (config, warnings)
    }
}
