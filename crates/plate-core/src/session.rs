use crate::config::OrderConfiguration;
use crate::error::CoreError;
use crate::ledger::SelectionLedger;
use crate::menu::{MenuCategory, MenuItem, MenuProvider, Restaurant};
use tracing::{debug, warn};

/// State behind one restaurant's menu screen: the visible tab and the quick-add
/// ledger. Opening an item for configuration does not read or touch the
/// ledger.
pub struct BrowsingSession {
    restaurant: Restaurant,
    items: Vec<MenuItem>,
    tab: MenuCategory,
    ledger: SelectionLedger,
}

impl BrowsingSession {
    pub fn open(provider: &dyn MenuProvider, restaurant_id: &str) -> Result<Self, CoreError> {
        let restaurant = provider.restaurant(restaurant_id)?;
        let items = provider.menu(restaurant_id)?;
        debug!(restaurant = %restaurant.id, items = items.len(), "browsing session opened");
        Ok(Self {
            restaurant,
            items,
            tab: MenuCategory::default(),
            ledger: SelectionLedger::new(),
        })
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn tab(&self) -> MenuCategory {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: MenuCategory) {
        self.tab = tab;
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |i| i.category == self.tab)
    }

    fn find_item(&self, item_id: &str) -> Result<&MenuItem, CoreError> {
        self.items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::ItemNotFound {
                restaurant: self.restaurant.id.clone(),
                item: item_id.to_string(),
            })
    }

    /// Quick-add from the listing. Only items on this restaurant's menu count.
    pub fn add(&mut self, item_id: &str) -> Result<u64, CoreError> {
        if let Err(e) = self.find_item(item_id) {
            warn!(restaurant = %self.restaurant.id, item = item_id, "quick-add of unknown item");
            return Err(e);
        }
        Ok(self.ledger.increment(item_id))
    }

    pub fn added(&self, item_id: &str) -> u64 {
        self.ledger.get(item_id)
    }

    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// Start configuring an item, seeded with its current menu price.
    pub fn configure(&self, item_id: &str) -> Result<OrderConfiguration, CoreError> {
        let item = self.find_item(item_id)?;
        Ok(OrderConfiguration::new(item.id.clone(), item.price))
    }

    /// End of browsing: forget every quick-add count.
    pub fn leave(&mut self) {
        self.ledger.reset();
    }
}
