pub mod catalog;
pub mod checkout;
pub mod menu;
pub mod quote;
pub mod restaurants;

use anyhow::{Context, Result};
use plate_core::{BrowsingSession, MenuProvider, OrderConfiguration};
use plate_menu::{FileMenu, SampleMenu};
use std::path::PathBuf;

/// A single item configuration as given on the command line.
pub struct OrderRequest {
    pub restaurant: String,
    pub item: String,
    pub sauce: Option<String>,
    pub extras: Vec<String>,
    pub quantity: u32,
    pub note: Option<String>,
}

pub fn load_provider(menu: Option<PathBuf>) -> Result<Box<dyn MenuProvider>> {
    match menu {
        Some(path) => {
            let file = FileMenu::load(&path)
                .with_context(|| format!("failed to load menu {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(SampleMenu::new())),
    }
}

/// Replay the request as the detail view would: open the item, then apply
/// sauce, extras, quantity and note in that order. Quantity is clamped to 1.
pub fn configure(session: &BrowsingSession, req: &OrderRequest) -> Result<OrderConfiguration> {
    let mut config = session.configure(&req.item)?;
    if let Some(sauce) = &req.sauce {
        config.select_sauce(sauce.as_str());
    }
    for extra in &req.extras {
        config.toggle_extra(extra);
    }
    config.set_quantity(req.quantity);
    if let Some(note) = &req.note {
        config.set_note(note.as_str());
    }
    Ok(config)
}
