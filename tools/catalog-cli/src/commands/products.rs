//! Product listing command.

use anyhow::Result;
use serde_json::json;
use storefront_catalog::Product;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{format_price, page_strip, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let spec = args.to_spec(ctx.default_limit())?;
    let result = store.query(&spec);
    let pagination = result.pagination();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "products": result.items,
            "total": result.total,
            "pagination": pagination,
        }));
        return Ok(());
    }

    ctx.output.header("Products");

    if result.total == 0 {
        ctx.output.info("No products match the given filters.");
        return Ok(());
    }
    if result.is_empty() {
        ctx.output.info(&format!(
            "Page {} is past the end ({} page(s) available).",
            pagination.page, pagination.total_pages
        ));
        return Ok(());
    }

    let widths = [36, 32, 10, 7, 20];
    ctx.output.table_row(&["ID", "NAME", "BRAND", "RATING", "PRICE"], &widths);
    for product in &result.items {
        print_row(product, &widths, ctx);
    }

    println!();
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {} of {})",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total,
        pagination.page,
        pagination.total_pages
    ));
    if pagination.total_pages > 1 {
        ctx.output.info(&format!("Pages: {}", page_strip(&pagination, 7)));
    }
    if pagination.has_next {
        let next = spec.clone().with_pagination(pagination.page + 1, spec.limit);
        ctx.output.info(&format!("Next page: /api/products?{}", next.to_query_string()));
    }

    Ok(())
}

fn print_row(product: &Product, widths: &[usize], ctx: &Context) {
    let name = if product.is_hot {
        format!("{} *", truncate(&product.name, 30))
    } else {
        truncate(&product.name, 32)
    };
    let rating = format!("{} ({})", product.rating_value, product.rating_count);
    let price = format_price(product, ctx.currency());

    ctx.output.table_row(
        &[
            product.id.as_str(),
            &name,
            &truncate(&product.brand, 10),
            &rating,
            &price,
        ],
        widths,
    );
}
