//! Dispatch a request through the API handlers.

use anyhow::{bail, Result};
use console::style;
use serde_json::json;
use storefront_catalog::api::{self, ApiRequest};

use super::RequestArgs;
use crate::context::Context;

/// Run the request command.
pub async fn run(args: RequestArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store().await?;
    let request = ApiRequest::new(&args.method, &args.target);
    let response = api::handle(&store, &request);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "status": response.status,
            "body": response.body,
        }));
    } else {
        let status = if response.is_success() {
            style(response.status).green()
        } else {
            style(response.status).red()
        };
        println!("{} {} {}", status, request.method, request.path);
        if !response.body.is_null() {
            ctx.output.json(&response.body);
        }
    }

    if response.status >= 400 {
        bail!("{} {} returned {}", request.method, args.target, response.status);
    }
    Ok(())
}
