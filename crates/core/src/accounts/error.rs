//! Account balance error types.

use tally_shared::types::Commodity;
use thiserror::Error;

/// Errors from account balance computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountsError {
    /// A subtree total left the decimal range.
    #[error("Balance of {account} in {commodity} overflows the decimal range")]
    Overflow {
        /// The subtree root whose total overflowed.
        account: String,
        /// The commodity.
        commodity: Commodity,
    },
}

impl AccountsError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "BALANCE_OVERFLOW",
        }
    }
}
