//! Commodity codes and signed amounts.
//!
//! CRITICAL: Never use floating-point for quantities.
//! Amounts wrap `rust_decimal::Decimal` so that repeated summation
//! preserves zero balances exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency or unit-of-account code (e.g. "USD", "AAPL").
///
/// Codes are opaque: no case folding or validation is applied. Ordering is
/// plain byte-wise string ordering, which decides the rank of a commodity
/// within a transaction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commodity(String);

impl Commodity {
    /// Creates a commodity from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the commodity code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Commodity {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Commodity {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signed quantity of a commodity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The commodity the quantity is denominated in.
    pub commodity: Commodity,
    /// Signed quantity.
    pub quantity: Decimal,
}

impl Amount {
    /// Creates a new amount.
    #[must_use]
    pub fn new(commodity: impl Into<Commodity>, quantity: Decimal) -> Self {
        Self {
            commodity: commodity.into(),
            quantity,
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.quantity, self.commodity)
    }
}
