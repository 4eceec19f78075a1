//! Verification domain types.
//!
//! Input postings carry their native and converted amounts as separate
//! optional fields, the way a tabular ledger stores them. Pairing is only
//! enforced by [`super::check`], so malformed rows can be reported instead of
//! being silently coerced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Amount, Commodity, StatementNo, TransactionNo};

fn pair(commodity: Option<&Commodity>, quantity: Option<Decimal>) -> Option<Amount> {
    match (commodity, quantity) {
        (Some(commodity), Some(quantity)) => Some(Amount {
            commodity: commodity.clone(),
            quantity,
        }),
        _ => None,
    }
}

/// A single account movement as read from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Source statement line, for traceability.
    pub statement_no: StatementNo,
    /// Transaction this posting belongs to.
    pub transaction_no: TransactionNo,
    /// Account name or path.
    pub account: String,
    /// Commodity of the price/cost-converted representation.
    pub converted_commodity: Option<Commodity>,
    /// Signed quantity in `converted_commodity`.
    pub converted_quantity: Option<Decimal>,
    /// Native commodity; absent means the amount is elided.
    pub commodity: Option<Commodity>,
    /// Signed quantity in `commodity`.
    pub quantity: Option<Decimal>,
}

impl Posting {
    /// Creates an elided posting with no amounts.
    #[must_use]
    pub fn new(statement_no: u32, transaction_no: u32, account: impl Into<String>) -> Self {
        Self {
            statement_no: StatementNo::new(statement_no),
            transaction_no: TransactionNo::new(transaction_no),
            account: account.into(),
            converted_commodity: None,
            converted_quantity: None,
            commodity: None,
            quantity: None,
        }
    }

    /// Sets the native amount.
    #[must_use]
    pub fn with_amount(mut self, commodity: impl Into<Commodity>, quantity: Decimal) -> Self {
        self.commodity = Some(commodity.into());
        self.quantity = Some(quantity);
        self
    }

    /// Sets the converted amount.
    #[must_use]
    pub fn with_converted(mut self, commodity: impl Into<Commodity>, quantity: Decimal) -> Self {
        self.converted_commodity = Some(commodity.into());
        self.converted_quantity = Some(quantity);
        self
    }

    /// Returns the native amount if both halves are present.
    #[must_use]
    pub fn native(&self) -> Option<Amount> {
        pair(self.commodity.as_ref(), self.quantity)
    }

    /// Returns the converted amount if both halves are present.
    #[must_use]
    pub fn converted(&self) -> Option<Amount> {
        pair(self.converted_commodity.as_ref(), self.converted_quantity)
    }

    /// Returns true if the native amount is left for inference.
    #[must_use]
    pub fn is_elided(&self) -> bool {
        self.commodity.is_none()
    }
}

/// A posting after elision resolution.
///
/// Same shape as [`Posting`]; fields may have been filled from the
/// transaction's [`UnbalancedFlag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPosting {
    /// Source statement line.
    pub statement_no: StatementNo,
    /// Transaction this posting belongs to.
    pub transaction_no: TransactionNo,
    /// Account name or path.
    pub account: String,
    /// Converted commodity, stated or inferred.
    pub converted_commodity: Option<Commodity>,
    /// Converted quantity, stated or inferred.
    pub converted_quantity: Option<Decimal>,
    /// Native commodity, stated or inferred.
    pub commodity: Option<Commodity>,
    /// Native quantity, stated or inferred.
    pub quantity: Option<Decimal>,
}

impl FinalPosting {
    /// Returns the native amount if both halves are present.
    #[must_use]
    pub fn native(&self) -> Option<Amount> {
        pair(self.commodity.as_ref(), self.quantity)
    }

    /// Returns the converted amount if both halves are present.
    #[must_use]
    pub fn converted(&self) -> Option<Amount> {
        pair(self.converted_commodity.as_ref(), self.converted_quantity)
    }

    /// Returns true if no native amount could be inferred.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.commodity.is_none()
    }
}

impl From<Posting> for FinalPosting {
    fn from(posting: Posting) -> Self {
        Self {
            statement_no: posting.statement_no,
            transaction_no: posting.transaction_no,
            account: posting.account,
            converted_commodity: posting.converted_commodity,
            converted_quantity: posting.converted_quantity,
            commodity: posting.commodity,
            quantity: posting.quantity,
        }
    }
}

/// Quantity total per transaction and commodity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommodityGroup {
    /// The transaction.
    pub transaction_no: TransactionNo,
    /// The commodity grouped on.
    pub commodity: Commodity,
    /// Negated sum of quantities: the amount still needed to balance.
    pub quantity_sum: Decimal,
    /// 1-based position among the transaction's commodities, ascending by code.
    pub rank: u32,
}

/// A transaction whose first commodity does not balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbalancedFlag {
    /// The transaction.
    pub transaction_no: TransactionNo,
    /// Commodity to assign to the elided posting.
    pub inferred_commodity: Commodity,
    /// Quantity to assign to the elided posting.
    pub inferred_quantity: Decimal,
}

impl UnbalancedFlag {
    /// Returns the inferred amount.
    #[must_use]
    pub fn inferred(&self) -> Amount {
        Amount {
            commodity: self.inferred_commodity.clone(),
            quantity: self.inferred_quantity,
        }
    }
}

/// A transaction and commodity whose final postings do not sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceError {
    /// The transaction.
    pub transaction_no: TransactionNo,
    /// The unbalanced commodity.
    pub commodity: Commodity,
    /// Non-zero sum of the final quantities.
    pub quantity_sum: Decimal,
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Completed postings, ordered by transaction then statement.
    pub postings: Vec<FinalPosting>,
    /// Inferences that were available, ordered by transaction.
    pub flags: Vec<UnbalancedFlag>,
    /// Balance failures, ordered by transaction then commodity.
    pub errors: Vec<BalanceError>,
}

impl Verification {
    /// Returns true if every transaction balances in every commodity and no
    /// posting was left without an amount.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.errors.is_empty() && self.unresolved().next().is_none()
    }

    /// Postings that still have no native amount after inference.
    pub fn unresolved(&self) -> impl Iterator<Item = &FinalPosting> {
        self.postings.iter().filter(|p| p.is_unresolved())
    }
}
