//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::{search::DEFAULT_LIMIT, Currency};

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Query defaults.
    #[serde(default)]
    pub query: QuerySection,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CatalogConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format from the file name.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Display currency, if the configured code is known.
    pub fn currency(&self) -> Option<Currency> {
        Currency::from_code(&self.catalog.currency)
    }

    /// Check the config for problems. Returns `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.currency().is_none() {
            errors.push(format!(
                "catalog.currency '{}' is not a supported currency code",
                self.catalog.currency
            ));
        }

        if let Some(path) = &self.catalog.products_path {
            if path.trim().is_empty() {
                errors.push("catalog.products_path must not be empty".to_string());
            } else if !path.ends_with(".json") {
                warnings.push(format!(
                    "catalog.products_path '{}' does not look like a JSON document",
                    path
                ));
            }
        }

        if self.query.default_limit < 1 {
            errors.push("query.default_limit must be at least 1".to_string());
        } else if self.query.default_limit > 100 {
            warnings.push(format!(
                "query.default_limit {} is unusually large",
                self.query.default_limit
            ));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            errors.push(format!(
                "logging.level '{}' must be one of trace, debug, info, warn, error",
                self.logging.level
            ));
        }

        (errors, warnings)
    }
}

/// Product source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// JSON product document; the built-in sample catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_path: Option<String>,

    /// Currency code used when printing prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            products_path: None,
            currency: default_currency(),
        }
    }
}

/// Query settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySection {
    /// Page size when `--limit` is not given.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront catalog configuration

[catalog]
# products_path = "data/products.json"
currency = "{currency}"

[query]
default_limit = {limit}

[logging]
format = "human"
level = "warn"
"#,
        currency = default_currency(),
        limit = DEFAULT_LIMIT,
    )
}
