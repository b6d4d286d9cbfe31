use super::load_provider;
use anyhow::{anyhow, Context, Result};
use plate_core::{BrowsingSession, MenuCategory};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn run(
    menu: Option<PathBuf>,
    restaurant: String,
    tab: String,
    adds: Vec<String>,
    json: bool,
) -> Result<()> {
    let provider = load_provider(menu)?;
    let tab: MenuCategory = tab.parse().map_err(|e: String| anyhow!(e))?;

    let mut session = BrowsingSession::open(provider.as_ref(), &restaurant)
        .context(format!("cannot browse restaurant '{}'", restaurant))?;
    session.switch_tab(tab);
    for item in &adds {
        session.add(item)?;
    }

    if json {
        let items: Vec<_> = session
            .visible_items()
            .map(|item| {
                serde_json::json!({
                    "item": item,
                    "added": session.added(&item.id),
                })
            })
            .collect();
        let added: BTreeMap<&str, u64> = session.ledger().entries().collect();
        let output = serde_json::json!({
            "restaurant": session.restaurant(),
            "tab": session.tab(),
            "items": items,
            "added": added,
            "total_added": session.ledger().total_added(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let r = session.restaurant();
    println!("{} ({})", r.name, if r.is_open { "open" } else { "closed" });
    println!("[{}]", session.tab());
    for item in session.visible_items() {
        print!(
            "  {:<4} {:<28} {:>7}  {}",
            item.id, item.name, item.price, item.delivery_time
        );
        match session.added(&item.id) {
            0 => println!(),
            n => println!("  Added: {}", n),
        }
    }
    Ok(())
}
