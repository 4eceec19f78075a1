//! Verification error types.
//!
//! These are precondition violations, or sums outside the decimal range, that
//! abort a whole run. Transactions
//! that fail to balance are not errors here; they are reported as
//! [`super::BalanceError`] data.

use serde::Serialize;
use tally_shared::types::{Commodity, StatementNo, TransactionNo};
use thiserror::Error;

/// Which commodity/quantity pair of a posting is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPair {
    /// `commodity` / `quantity`.
    Native,
    /// `converted_commodity` / `converted_quantity`.
    Converted,
}

impl std::fmt::Display for AmountPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "commodity/quantity"),
            Self::Converted => write!(f, "converted commodity/quantity"),
        }
    }
}

/// Errors that abort a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A posting has a commodity without a quantity, or the reverse.
    #[error("Posting at statement {statement_no} has a half-present {pair} pair")]
    MalformedPosting {
        /// The offending statement line.
        statement_no: StatementNo,
        /// Which pair is incomplete.
        pair: AmountPair,
    },

    /// A transaction has more than one posting with an elided amount.
    #[error("Transaction {transaction_no} has {count} elided postings, at most one is supported")]
    MultipleElisions {
        /// The offending transaction.
        transaction_no: TransactionNo,
        /// Number of elided postings found.
        count: usize,
    },

    /// Summing a transaction's quantities left the decimal range.
    #[error("Quantities of {commodity} in transaction {transaction_no} overflow the decimal range")]
    Overflow {
        /// The offending transaction.
        transaction_no: TransactionNo,
        /// The commodity whose sum overflowed.
        commodity: Commodity,
    },
}

impl VerifyError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedPosting { .. } => "MALFORMED_POSTING",
            Self::MultipleElisions { .. } => "MULTIPLE_ELISIONS",
            Self::Overflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
