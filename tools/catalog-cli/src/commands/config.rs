//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    // Catalog section
    ctx.output.info("[catalog]");
    match ctx.products_path() {
        Some(path) => ctx.output.kv("products_path", &path.display().to_string()),
        None => ctx.output.kv("products_path", "(built-in sample catalog)"),
    }
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    // Query section
    ctx.output.info("[query]");
    ctx.output
        .kv("default_limit", &ctx.config.query.default_limit.to_string());

    // Logging section
    ctx.output.info("[logging]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
    ctx.output.kv("level", &ctx.config.logging.level);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if tokio::fs::try_exists(&config_path).await? && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    tokio::fs::write(&config_path, generate_default_config()).await?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, mut warnings) = ctx.config.validate();

    if let Some(path) = ctx.products_path() {
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            warnings.push(format!("product document {} does not exist", path.display()));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
