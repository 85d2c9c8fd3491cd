//! Facet counts command.

use anyhow::Result;
use serde_json::json;
use storefront_catalog::search::{self, Facet, QuerySpec};

use super::FiltersArgs;
use crate::context::Context;

/// Run the filters command.
pub async fn run(args: FiltersArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let spec = args.filter.apply(QuerySpec::new());

    let summary = if args.scoped {
        let products = store.all_products();
        search::facets(search::filter(&products, &spec))
    } else {
        if !args.filter.is_empty() {
            ctx.output
                .warn("Filter flags only affect counts together with --scoped");
        }
        store.facets()
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "brands": summary.brand_counts,
            "colors": summary.color_counts,
            "categories": summary.category_counts,
        }));
        return Ok(());
    }

    let selected_category = spec.category.as_deref();
    print_facet(&summary.category_facet(selected_category), ctx);
    print_facet(&summary.brand_facet(&spec.brands), ctx);
    print_facet(&summary.color_facet(&spec.colors), ctx);

    Ok(())
}

fn print_facet(facet: &Facet, ctx: &Context) {
    ctx.output.header(&format!("{} (--{})", facet.name, flag_for(&facet.key)));
    if facet.values.is_empty() {
        ctx.output.info("none");
        return;
    }
    for value in &facet.values {
        let marker = if value.selected { " ✓" } else { "" };
        ctx.output
            .list_item(&format!("{} ({}){}", value.value, value.count, marker));
    }
}

fn flag_for(key: &str) -> &str {
    match key {
        "colors" => "color",
        other => other,
    }
}
