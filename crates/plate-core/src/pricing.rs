//! Price computation for a configured menu item.
//!
//! `unit_cost = base_price + sauce + sum(extras)` and
//! `total = unit_cost * quantity`. Every selected id must resolve against its
//! own catalog; a dangling reference is an error rather than a free modifier.

use crate::catalog::ModifierCatalog;
use crate::config::OrderConfiguration;
use crate::error::PricingError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Itemized result, enough to render a summary without recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: Money,
    pub sauce_cost: Money,
    pub extras_cost: Money,
    pub unit_cost: Money,
    pub quantity: u32,
    pub total: Money,
}

/// How a quantity below 1 is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Price it as a single unit.
    #[default]
    Clamp,
    /// Fail with [`PricingError::InvalidQuantity`].
    Reject,
}

/// Price `config` with the default [`QuantityPolicy::Clamp`].
pub fn compute_total(
    config: &OrderConfiguration,
    sauces: &ModifierCatalog,
    extras: &ModifierCatalog,
) -> Result<PriceBreakdown, PricingError> {
    compute_total_with_policy(config, sauces, extras, QuantityPolicy::Clamp)
}

pub fn compute_total_with_policy(
    config: &OrderConfiguration,
    sauces: &ModifierCatalog,
    extras: &ModifierCatalog,
    policy: QuantityPolicy,
) -> Result<PriceBreakdown, PricingError> {
    let quantity = match (config.quantity, policy) {
        (0, QuantityPolicy::Reject) => return Err(PricingError::InvalidQuantity(0)),
        (q, _) => q.max(1),
    };

    let sauce_cost = match &config.selected_sauce_id {
        Some(id) => sauces.resolve(id)?.price,
        None => Money::ZERO,
    };

    let mut extras_cost = Money::ZERO;
    for id in &config.selected_extra_ids {
        let price = extras.resolve(id)?.price;
        extras_cost = extras_cost
            .checked_add(price)
            .ok_or(PricingError::PriceOverflow)?;
    }

    let unit_cost = config
        .base_price()
        .checked_add(sauce_cost)
        .and_then(|m| m.checked_add(extras_cost))
        .ok_or(PricingError::PriceOverflow)?;
    let total = unit_cost
        .checked_mul(quantity)
        .ok_or(PricingError::PriceOverflow)?;

    Ok(PriceBreakdown {
        base_price: config.base_price(),
        sauce_cost,
        extras_cost,
        unit_cost,
        quantity,
        total,
    })
}
