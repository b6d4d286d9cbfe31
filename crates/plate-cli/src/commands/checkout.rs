use super::quote::print_breakdown;
use super::{configure, load_provider, OrderRequest};
use anyhow::{Context, Result};
use plate_core::checkout::finalize;
use plate_core::BrowsingSession;
use std::path::PathBuf;

pub fn run(menu: Option<PathBuf>, req: OrderRequest, json: bool) -> Result<()> {
    let provider = load_provider(menu)?;
    let session = BrowsingSession::open(provider.as_ref(), &req.restaurant)?;
    let config = configure(&session, &req)?;

    let line = finalize(&config, provider.sauces(), provider.extras())
        .context("checkout refused")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&line)?);
        return Ok(());
    }

    println!("order line {}", line.id.hex());
    println!("Date:   {}", line.confirmed_at.format("%Y-%m-%d %H:%M:%S %Z"));
    print_breakdown(
        &line.configuration,
        &line.breakdown,
        provider.sauces(),
        provider.extras(),
    );
    Ok(())
}
