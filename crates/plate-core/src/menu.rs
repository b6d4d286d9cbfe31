//! Read-side data model for restaurants and their menus, and the provider
//! interface the browsing view is built on. The pricing code never looks at
//! any of this beyond an item's `price`.

use crate::catalog::ModifierCatalog;
use crate::error::CoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default = "default_open")]
    pub is_open: bool,
}

fn default_open() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    #[default]
    Food,
    Drinks,
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => f.write_str("food"),
            Self::Drinks => f.write_str("drinks"),
        }
    }
}

impl FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "drinks" | "drink" => Ok(Self::Drinks),
            other => Err(format!("unknown menu tab '{other}' (expected food or drinks)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub category: MenuCategory,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delivery_time: String,
}

/// Source of restaurant, menu and modifier-catalog data.
pub trait MenuProvider {
    fn restaurants(&self) -> Vec<Restaurant>;

    fn restaurant(&self, id: &str) -> Result<Restaurant, CoreError> {
        self.restaurants()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RestaurantNotFound(id.to_string()))
    }

    /// Every item a restaurant serves, across all tabs.
    fn menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, CoreError>;

    fn item(&self, restaurant_id: &str, item_id: &str) -> Result<MenuItem, CoreError> {
        self.menu(restaurant_id)?
            .into_iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound {
                restaurant: restaurant_id.to_string(),
                item: item_id.to_string(),
            })
    }

    fn sauces(&self) -> &ModifierCatalog;

    fn extras(&self) -> &ModifierCatalog;
}

/// Restaurants whose name contains `query`, ignoring case. An empty query
/// matches everything.
pub fn search_restaurants(provider: &dyn MenuProvider, query: &str) -> Vec<Restaurant> {
    let needle = query.trim().to_lowercase();
    provider
        .restaurants()
        .into_iter()
        .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .collect()
}
