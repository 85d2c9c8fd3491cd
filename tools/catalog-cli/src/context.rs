//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::{CatalogStore, Currency};

use crate::config::{CatalogConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CatalogConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// `--products` override.
    products_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, products: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CatalogConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CatalogConfig::default(), None),
            }
        };

        let products_override = products.map(|p| resolve_against(&cwd, p));

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            products_override,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CatalogConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CatalogConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Product document to load: `--products`, else the configured path
    /// (relative to the config file), else none.
    pub fn products_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.products_override {
            return Some(path.clone());
        }
        let configured = self.config.catalog.products_path.as_deref()?;
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| resolve_against(&self.cwd, &dir.to_string_lossy()))
            .unwrap_or_else(|| self.cwd.clone());
        Some(resolve_against(&base, configured))
    }

    /// Open the catalog, falling back to the built-in sample products.
    pub async fn store(&self) -> Result<CatalogStore> {
        let Some(path) = self.products_path() else {
            self.output.debug("No product document configured, using sample catalog");
            return Ok(CatalogStore::seeded());
        };

        self.output.debug(&format!("Loading products from {}", path.display()));
        let json = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read product document: {}", path.display()))?;
        CatalogStore::from_json(&json)
            .with_context(|| format!("Invalid product document: {}", path.display()))
    }

    /// Currency used to print prices.
    pub fn currency(&self) -> Currency {
        self.config.currency().unwrap_or_default()
    }

    /// Page size when none is requested.
    pub fn default_limit(&self) -> i64 {
        self.config.query.default_limit
    }
}

fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
