//! JSON output documents.

use serde::Serialize;
use tally_core::accounts::{AccountBalance, AccountsError, BalanceSide, rollup_balances};
use tally_core::verify::{BalanceError, FinalPosting, UnbalancedFlag, Verification};
use tally_shared::types::StatementNo;

/// Output of the `verify` command.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub postings: Vec<FinalPosting>,
    pub flags: Vec<UnbalancedFlag>,
    pub errors: Vec<BalanceError>,
    /// Statement numbers of postings still without an amount.
    pub unresolved: Vec<StatementNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Balances>,
}

/// Rolled-up balances on both sides.
#[derive(Debug, Serialize)]
pub struct Balances {
    pub native: Vec<AccountBalance>,
    pub converted: Vec<AccountBalance>,
}

impl VerifyReport {
    pub fn new(
        verification: Verification,
        separator: Option<&str>,
    ) -> Result<Self, AccountsError> {
        let unresolved = verification.unresolved().map(|p| p.statement_no).collect();
        let balances = match separator {
            Some(sep) => Some(Balances {
                native: rollup_balances(&verification.postings, sep, BalanceSide::Native)?,
                converted: rollup_balances(&verification.postings, sep, BalanceSide::Converted)?,
            }),
            None => None,
        };
        Ok(Self {
            postings: verification.postings,
            flags: verification.flags,
            errors: verification.errors,
            unresolved,
            balances,
        })
    }

    /// True when every transaction balances and no posting is left unresolved.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.unresolved.is_empty()
    }
}

/// Output of the `compare` command.
#[derive(Debug, Serialize)]
pub struct CompareReport<'a> {
    pub only_left: Vec<&'a FinalPosting>,
    pub only_right: Vec<&'a FinalPosting>,
}

impl CompareReport<'_> {
    pub fn is_clean(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}
