use super::load_provider;
use anyhow::Result;
use plate_core::ModifierCatalog;
use std::path::PathBuf;

pub fn run(menu: Option<PathBuf>, json: bool) -> Result<()> {
    let provider = load_provider(menu)?;

    if json {
        let output = serde_json::json!({
            "sauces": provider.sauces().options(),
            "extras": provider.extras().options(),
            "no_sauce": provider.sauces().none_option().map(|o| o.id.as_str()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_catalog("Sauces", provider.sauces());
    if let Some(none) = provider.sauces().none_option() {
        println!("  (choose '{}' for no sauce)", none.id);
    }
    println!();
    print_catalog("Extras", provider.extras());
    Ok(())
}

fn print_catalog(title: &str, catalog: &ModifierCatalog) {
    println!("{}:", title);
    for opt in catalog.options() {
        println!("  {:<10} {:<18} {:>6}", opt.id, opt.label, opt.price);
    }
}
