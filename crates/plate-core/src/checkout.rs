use crate::catalog::ModifierCatalog;
use crate::config::OrderConfiguration;
use crate::error::CoreError;
use crate::hash::LineId;
use crate::pricing::{compute_total, PriceBreakdown};
use crate::serialize::content_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TAG_ORDER_LINE: &str = "order_line";

/// A confirmed configuration, handed to the cart as an immutable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub configuration: OrderConfiguration,
    pub breakdown: PriceBreakdown,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct LineContent<'a> {
    configuration: &'a OrderConfiguration,
    breakdown: &'a PriceBreakdown,
}

/// Confirm `config` as an order line.
///
/// Sauce choice is mandatory here even though pricing treats an absent sauce
/// as free. Choosing the "none" sauce explicitly satisfies it.
pub fn finalize(
    config: &OrderConfiguration,
    sauces: &ModifierCatalog,
    extras: &ModifierCatalog,
) -> Result<OrderLine, CoreError> {
    if config.selected_sauce_id.is_none() {
        warn!(item = %config.base_item_id, "checkout refused: no sauce selected");
        return Err(CoreError::SauceRequired);
    }

    // The handed-off configuration carries the quantity that was priced.
    let mut configuration = config.clone();
    configuration.set_quantity(config.quantity);

    let breakdown = compute_total(&configuration, sauces, extras)?;
    let id = line_id(&configuration, &breakdown)?;
    debug!(item = %configuration.base_item_id, line = %id, total = %breakdown.total, "order line finalized");

    Ok(OrderLine {
        id,
        configuration,
        breakdown,
        confirmed_at: Utc::now(),
    })
}

/// Identical configurations priced identically share a line id. Neither the
/// confirmation time nor the order extras were picked in takes part.
pub fn line_id(
    config: &OrderConfiguration,
    breakdown: &PriceBreakdown,
) -> Result<LineId, CoreError> {
    let mut canonical = config.clone();
    canonical.selected_extra_ids.sort();
    content_id(
        TAG_ORDER_LINE,
        &LineContent {
            configuration: &canonical,
            breakdown,
        },
    )
}
