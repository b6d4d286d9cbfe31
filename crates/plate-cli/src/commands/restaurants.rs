use super::load_provider;
use anyhow::Result;
use plate_core::menu::search_restaurants;
use std::path::PathBuf;

pub fn run(menu: Option<PathBuf>, search: Option<String>, json: bool) -> Result<()> {
    let provider = load_provider(menu)?;
    let found = search_restaurants(provider.as_ref(), search.as_deref().unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("No restaurants found");
        return Ok(());
    }
    for r in &found {
        let status = if r.is_open { "open" } else { "closed" };
        println!("{:<4} {:<24} {:.1}  {:<6}  {}", r.id, r.name, r.rating, status, r.address);
    }
    Ok(())
}
