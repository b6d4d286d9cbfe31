//! Menu data loaded from a TOML file.
//!
//! ```toml
//! [[restaurants]]
//! id = "1"
//! name = "Chicken Republic"
//!
//! [[items]]
//! restaurant_id = "1"
//! id = "1"
//! name = "Jollof Rice & Chicken"
//! price = "₦3,500"        # or 3500
//! category = "food"
//!
//! [[sauces]]               # optional, stock catalog when omitted
//! id = "none"
//! label = "No sauce"
//! price = 0
//! ```

use crate::error::MenuError;
use plate_core::catalog::{default_extras, default_sauces};
use plate_core::{
    CoreError, MenuCategory, MenuItem, MenuProvider, ModifierCatalog, ModifierKind,
    ModifierOption, Money, Restaurant,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Amount(u64),
    Display(String),
}

impl PriceField {
    fn into_money(self) -> Result<Money, CoreError> {
        match self {
            Self::Amount(n) => Ok(Money::new(n)),
            Self::Display(s) => Money::parse_display(&s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    restaurant_id: String,
    id: String,
    name: String,
    price: PriceField,
    #[serde(default)]
    category: MenuCategory,
    #[serde(default)]
    delivery_time: String,
}

#[derive(Debug, Deserialize)]
struct OptionRecord {
    id: String,
    label: String,
    price: PriceField,
}

#[derive(Debug, Deserialize)]
struct MenuFileData {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
    #[serde(default)]
    items: Vec<ItemRecord>,
    #[serde(default)]
    sauces: Vec<OptionRecord>,
    #[serde(default)]
    extras: Vec<OptionRecord>,
}

/// A validated menu file, held in memory.
#[derive(Debug)]
pub struct FileMenu {
    restaurants: Vec<Restaurant>,
    menus: BTreeMap<String, Vec<MenuItem>>,
    sauces: ModifierCatalog,
    extras: ModifierCatalog,
}

impl FileMenu {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let menu = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            restaurants = menu.restaurants.len(),
            "menu file loaded"
        );
        Ok(menu)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, MenuError> {
        let data: MenuFileData = toml::from_str(content)?;

        let mut menus: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
        for r in &data.restaurants {
            if menus.insert(r.id.clone(), Vec::new()).is_some() {
                return Err(MenuError::DuplicateRestaurant(r.id.clone()));
            }
        }

        for record in data.items {
            let Some(items) = menus.get_mut(&record.restaurant_id) else {
                return Err(MenuError::UnknownRestaurant {
                    item: record.id,
                    restaurant: record.restaurant_id,
                });
            };
            if items.iter().any(|i| i.id == record.id) {
                return Err(MenuError::DuplicateItem {
                    restaurant: record.restaurant_id,
                    item: record.id,
                });
            }
            items.push(MenuItem {
                id: record.id,
                name: record.name,
                price: record.price.into_money()?,
                category: record.category,
                delivery_time: record.delivery_time,
            });
        }

        Ok(Self {
            restaurants: data.restaurants,
            menus,
            sauces: build_catalog(ModifierKind::Sauce, data.sauces)?,
            extras: build_catalog(ModifierKind::Extra, data.extras)?,
        })
    }
}

fn build_catalog(
    kind: ModifierKind,
    records: Vec<OptionRecord>,
) -> Result<ModifierCatalog, MenuError> {
    if records.is_empty() {
        return Ok(match kind {
            ModifierKind::Sauce => default_sauces(),
            ModifierKind::Extra => default_extras(),
        });
    }
    let mut options = Vec::with_capacity(records.len());
    for r in records {
        options.push(ModifierOption {
            id: r.id,
            label: r.label,
            price: r.price.into_money()?,
        });
    }
    Ok(ModifierCatalog::new(kind, options)?)
}

impl MenuProvider for FileMenu {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, CoreError> {
        self.menus
            .get(restaurant_id)
            .cloned()
            .ok_or_else(|| CoreError::RestaurantNotFound(restaurant_id.to_string()))
    }

    fn sauces(&self) -> &ModifierCatalog {
        &self.sauces
    }

    fn extras(&self) -> &ModifierCatalog {
        &self.extras
    }
}
