use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_mul(self, factor: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(factor)).map(Money)
    }

    /// Parse a display price such as `"₦6,500"`.
    ///
    /// Any leading non-digit prefix is treated as a currency symbol; grouping
    /// commas and surrounding whitespace are ignored. Signs and decimal
    /// points are rejected.
    pub fn parse_display(input: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::MalformedPrice(input.to_string());
        let trimmed = input.trim();
        let digits_start = trimmed
            .find(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
            .ok_or_else(malformed)?;
        let symbol = &trimmed[..digits_start];
        if symbol.chars().any(|c| c.is_ascii_alphanumeric() || c == '+') {
            return Err(malformed());
        }

        let digits: String = trimmed[digits_start..]
            .trim()
            .chars()
            .filter(|c| *c != ',')
            .collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        digits.parse::<u64>().map(Money).map_err(|_| malformed())
    }
}

impl Add for Money {
    type Output = Money;

    /// Panics on overflow in debug builds, like the underlying `u64`. Use
    /// [`Money::checked_add`] on untrusted totals.
    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    /// Grouped digits, e.g. `15,400`. No currency symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.to_string();
        let mut out = String::with_capacity(raw.len() + raw.len() / 3);
        for (i, c) in raw.chars().enumerate() {
            if i > 0 && (raw.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        f.pad(&out)
    }
}
