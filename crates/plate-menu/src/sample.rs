use plate_core::catalog::{default_extras, default_sauces};
use plate_core::{
    CoreError, MenuCategory, MenuItem, MenuProvider, ModifierCatalog, Money, Restaurant,
};

/// Built-in demo data: three restaurants sharing one menu and the stock
/// modifier catalogs.
pub struct SampleMenu {
    sauces: ModifierCatalog,
    extras: ModifierCatalog,
}

impl SampleMenu {
    pub fn new() -> Self {
        Self {
            sauces: default_sauces(),
            extras: default_extras(),
        }
    }
}

impl Default for SampleMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn restaurant(id: &str, name: &str, address: &str, rating: f32, is_open: bool) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        rating,
        is_open,
    }
}

fn item(id: &str, name: &str, price: u64, category: MenuCategory, eta: &str) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        price: Money::new(price),
        category,
        delivery_time: eta.into(),
    }
}

impl MenuProvider for SampleMenu {
    fn restaurants(&self) -> Vec<Restaurant> {
        vec![
            restaurant("1", "Chicken Republic", "147 ABC road, XY Street", 4.0, true),
            restaurant("2", "Hungryman Eatery", "258 EFG road, UK Street", 3.5, false),
            restaurant("3", "The Food Palace", "99 Main Street, Downtown", 4.5, true),
        ]
    }

    fn menu(&self, restaurant_id: &str) -> Result<Vec<MenuItem>, CoreError> {
        self.restaurant(restaurant_id)?;
        use MenuCategory::{Drinks, Food};
        Ok(vec![
            item("1", "Jollof Rice & Chicken", 3500, Food, "20-30 mins"),
            item("2", "Fried Rice Special", 4000, Food, "25-35 mins"),
            item("3", "Grilled Chicken Platter", 5500, Food, "30-40 mins"),
            item("4", "Peppered Snail", 6000, Food, "20-25 mins"),
            item("5", "Suya Meat", 3000, Food, "15-20 mins"),
            item("6", "Egusi Soup & Pounded Yam", 4500, Food, "25-35 mins"),
            item("7", "Chapman", 1500, Drinks, "5-10 mins"),
            item("8", "Zobo Drink", 800, Drinks, "5-10 mins"),
            item("9", "Fresh Orange Juice", 1200, Drinks, "5-10 mins"),
            item("10", "Smoothie Bowl", 2000, Drinks, "10-15 mins"),
        ])
    }

    fn sauces(&self) -> &ModifierCatalog {
        &self.sauces
    }

    fn extras(&self) -> &ModifierCatalog {
        &self.extras
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_restaurant_has_both_tabs() {
        let menu = SampleMenu::new();
        for r in menu.restaurants() {
            let items = menu.menu(&r.id).unwrap();
            assert_eq!(items.iter().filter(|i| i.category == MenuCategory::Food).count(), 6);
            assert_eq!(items.iter().filter(|i| i.category == MenuCategory::Drinks).count(), 4);
        }
    }

    #[test]
    fn unknown_restaurant_has_no_menu() {
        let menu = SampleMenu::new();
        assert!(matches!(menu.menu("7"), Err(CoreError::RestaurantNotFound(_))));
    }

    #[test]
    fn only_hungryman_is_closed() {
        let closed: Vec<_> = SampleMenu::new()
            .restaurants()
            .into_iter()
            .filter(|r| !r.is_open)
            .map(|r| r.name)
            .collect();
        assert_eq!(closed, vec!["Hungryman Eatery".to_string()]);
    }
}
