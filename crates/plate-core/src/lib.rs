//! Order configuration and pricing for the food-ordering client.
//!
//! [`pricing::compute_total`] turns an [`OrderConfiguration`] and the two
//! modifier catalogs into a [`PriceBreakdown`]. [`SelectionLedger`] tracks
//! quick-add counts while a restaurant's menu is being browsed, and
//! [`checkout::finalize`] turns a configuration into an immutable order line.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod serialize;
pub mod session;

pub use catalog::{ModifierCatalog, ModifierKind, ModifierOption};
pub use checkout::OrderLine;
pub use config::OrderConfiguration;
pub use error::{CoreError, PricingError};
pub use hash::LineId;
pub use ledger::SelectionLedger;
pub use menu::{MenuCategory, MenuItem, MenuProvider, Restaurant};
pub use money::Money;
pub use pricing::{PriceBreakdown, QuantityPolicy};
pub use session::BrowsingSession;
