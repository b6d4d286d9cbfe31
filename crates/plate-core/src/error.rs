use crate::catalog::ModifierKind;
use thiserror::Error;

/// Failures of a single pricing computation. None of them touch the
/// configuration being priced; the caller corrects the input and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("unknown {kind} reference: {id}")]
    UnknownModifierReference { kind: ModifierKind, id: String },

    #[error("invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),

    #[error("price overflow while totalling order")]
    PriceOverflow,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("malformed price: {0:?}")]
    MalformedPrice(String),

    #[error("invalid {kind} catalog: {reason}")]
    InvalidCatalog { kind: ModifierKind, reason: String },

    #[error("a sauce must be selected before checkout")]
    SauceRequired,

    #[error("restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("menu item '{item}' not found at restaurant '{restaurant}'")]
    ItemNotFound { restaurant: String, item: String },

    #[error("invalid line id: {0}")]
    InvalidLineId(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
