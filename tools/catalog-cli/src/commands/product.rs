//! Single product command.

use anyhow::{Context as _, Result};
use storefront_catalog::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let product = store
        .get_by_id(&ProductId::new(&args.id))
        .with_context(|| format!("No product with id '{}'", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("category", &product.category);
    ctx.output.kv("price", &format_price(&product, ctx.currency()));
    if let Some(percent) = product.discount_percent {
        ctx.output.kv("discount", &format!("{}% off", percent));
    }
    ctx.output.kv(
        "rating",
        &format!(
            "{} {} ({} ratings)",
            "★".repeat(usize::from(product.rating_value.full_stars())),
            product.rating_value,
            product.rating_count
        ),
    );
    ctx.output.kv("colors", &product.colors.join(", "));
    if product.is_hot {
        ctx.output.kv("hot", "yes");
    }
    if !product.image_url.is_empty() {
        ctx.output.kv("image", &product.image_url);
    }

    Ok(())
}
