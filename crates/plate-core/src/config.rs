use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// The working selection for one menu item before it becomes an order line.
///
/// `base_price` is copied from the menu item when configuration starts and
/// never changes afterwards. The mutators keep `quantity >= 1`; a value
/// deserialized from elsewhere is not trusted and is guarded again at pricing
/// time (see [`QuantityPolicy`](crate::pricing::QuantityPolicy)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfiguration {
    pub base_item_id: String,
    base_price: Money,
    pub quantity: u32,
    /// `None` means "not yet chosen", which is distinct from choosing the
    /// zero-price "none" sauce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_sauce_id: Option<String>,
    /// Selection order, no duplicates. Repeated ids in incoming data are
    /// dropped after their first occurrence.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "dedup_ids"
    )]
    pub(crate) selected_extra_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl OrderConfiguration {
    pub fn new(base_item_id: impl Into<String>, base_price: Money) -> Self {
        Self {
            base_item_id: base_item_id.into(),
            base_price,
            quantity: 1,
            selected_sauce_id: None,
            selected_extra_ids: Vec::new(),
            note: String::new(),
        }
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn increment_quantity(&mut self) -> u32 {
        self.quantity = self.quantity.max(1).saturating_add(1);
        self.quantity
    }

    /// Decrementing at 1 is a no-op.
    pub fn decrement_quantity(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_sub(1).max(1);
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn select_sauce(&mut self, sauce_id: impl Into<String>) {
        self.selected_sauce_id = Some(sauce_id.into());
    }

    pub fn clear_sauce(&mut self) {
        self.selected_sauce_id = None;
    }

    /// Flip an extra on or off. Returns whether it is selected afterwards.
    pub fn toggle_extra(&mut self, extra_id: &str) -> bool {
        if let Some(pos) = self.selected_extra_ids.iter().position(|id| id == extra_id) {
            self.selected_extra_ids.remove(pos);
            false
        } else {
            self.selected_extra_ids.push(extra_id.to_string());
            true
        }
    }

    pub fn selected_extra_ids(&self) -> &[String] {
        &self.selected_extra_ids
    }

    pub fn is_extra_selected(&self, extra_id: &str) -> bool {
        self.selected_extra_ids.iter().any(|id| id == extra_id)
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }
}

fn dedup_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut ids: Vec<String> = Vec::with_capacity(raw.len());
    for id in raw {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
