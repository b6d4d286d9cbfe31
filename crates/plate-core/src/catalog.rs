use crate::error::{CoreError, PricingError};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which modifier group a catalog (or a dangling reference) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Sauce,
    Extra,
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sauce => f.write_str("sauce"),
            Self::Extra => f.write_str("extra"),
        }
    }
}

/// A priced add-on. `id` is unique within its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierOption {
    pub id: String,
    pub label: String,
    pub price: Money,
}

impl ModifierOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price: Money::new(price),
        }
    }
}

/// An ordered, read-only list of modifier options.
///
/// Construction validates the catalog once so that lookups never have to:
/// options are non-empty with unique ids, and a sauce catalog always carries
/// a zero-price "none" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifierCatalog {
    kind: ModifierKind,
    options: Vec<ModifierOption>,
}

impl ModifierCatalog {
    pub fn new(kind: ModifierKind, options: Vec<ModifierOption>) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidCatalog { kind, reason };

        if options.is_empty() {
            return Err(invalid("catalog has no options".into()));
        }
        let mut seen = HashSet::new();
        for opt in &options {
            if opt.id.trim().is_empty() {
                return Err(invalid("option with empty id".into()));
            }
            if !seen.insert(opt.id.as_str()) {
                return Err(invalid(format!("duplicate option id '{}'", opt.id)));
            }
        }
        if kind == ModifierKind::Sauce && !options.iter().any(|o| o.price.is_zero()) {
            return Err(invalid("no zero-price \"none\" option".into()));
        }

        Ok(Self { kind, options })
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn options(&self) -> &[ModifierOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Like [`find`](Self::find), but a miss is a pricing error.
    pub fn resolve(&self, id: &str) -> Result<&ModifierOption, PricingError> {
        self.find(id)
            .ok_or_else(|| PricingError::UnknownModifierReference {
                kind: self.kind,
                id: id.to_string(),
            })
    }

    /// The first zero-price option. Always present in a sauce catalog.
    pub fn none_option(&self) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.price.is_zero())
    }
}

/// Stock sauce catalog offered on every meal.
pub fn default_sauces() -> ModifierCatalog {
    ModifierCatalog {
        kind: ModifierKind::Sauce,
        options: vec![
            ModifierOption::new("none", "No sauce", 0),
            ModifierOption::new("tomato", "Tomato sauce", 200),
            ModifierOption::new("pepper", "Pepper sauce", 300),
            ModifierOption::new("garlic", "Garlic sauce", 250),
            ModifierOption::new("mayo", "Mayonnaise", 150),
        ],
    }
}

/// Stock extras catalog offered on every meal.
pub fn default_extras() -> ModifierCatalog {
    ModifierCatalog {
        kind: ModifierKind::Extra,
        options: vec![
            ModifierOption::new("cheese", "Extra cheese", 500),
            ModifierOption::new("chicken", "Extra chicken", 800),
            ModifierOption::new("plantain", "Fried plantain", 400),
            ModifierOption::new("coleslaw", "Coleslaw", 300),
            ModifierOption::new("egg", "Fried egg", 250),
        ],
    }
}
