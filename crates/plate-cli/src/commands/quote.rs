use super::{configure, load_provider, OrderRequest};
use anyhow::Result;
use plate_core::pricing::{compute_total_with_policy, PriceBreakdown, QuantityPolicy};
use plate_core::{BrowsingSession, ModifierCatalog, OrderConfiguration};
use std::path::PathBuf;

pub fn run(menu: Option<PathBuf>, req: OrderRequest, strict: bool, json: bool) -> Result<()> {
    let provider = load_provider(menu)?;
    let session = BrowsingSession::open(provider.as_ref(), &req.restaurant)?;
    let mut config = configure(&session, &req)?;
    // Leave a zero quantity for the pricing policy to judge.
    config.quantity = req.quantity;

    let policy = if strict {
        QuantityPolicy::Reject
    } else {
        QuantityPolicy::Clamp
    };
    let breakdown =
        compute_total_with_policy(&config, provider.sauces(), provider.extras(), policy)?;

    if json {
        let output = serde_json::json!({
            "restaurant": req.restaurant,
            "configuration": config,
            "breakdown": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let item = provider.item(&req.restaurant, &req.item)?;
    println!("{} ({})", item.name, session.restaurant().name);
    print_breakdown(&config, &breakdown, provider.sauces(), provider.extras());
    Ok(())
}

pub(crate) fn print_breakdown(
    config: &OrderConfiguration,
    b: &PriceBreakdown,
    sauces: &ModifierCatalog,
    extras: &ModifierCatalog,
) {
    println!("  Base:     {:>8}", b.base_price);
    match config.selected_sauce_id.as_deref().and_then(|id| sauces.find(id)) {
        Some(sauce) => println!("  Sauce:    {:>8}  {}", b.sauce_cost, sauce.label),
        None => println!("  Sauce:    {:>8}  (not chosen)", b.sauce_cost),
    }
    let labels: Vec<_> = config
        .selected_extra_ids()
        .iter()
        .filter_map(|id| extras.find(id))
        .map(|o| o.label.as_str())
        .collect();
    println!("  Extras:   {:>8}  {}", b.extras_cost, labels.join(", "));
    println!("  Unit:     {:>8}", b.unit_cost);
    println!("  Quantity: {:>8}", b.quantity);
    println!("  Total:    {:>8}", b.total);
    if !config.note.is_empty() {
        println!("  Note:     {}", config.note);
    }
}
