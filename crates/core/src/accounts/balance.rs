//! Rolled-up account balances.
//!
//! A parent account's balance includes every posting booked to it or to any
//! of its descendants, per commodity.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Amount, Commodity};

use super::error::AccountsError;
use super::hierarchy::ancestors;
use crate::verify::FinalPosting;

/// Which amount of a posting to total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSide {
    /// `commodity` / `quantity`.
    Native,
    /// `converted_commodity` / `converted_quantity`.
    Converted,
}

impl BalanceSide {
    fn amount(self, posting: &FinalPosting) -> Option<Amount> {
        match self {
            Self::Native => posting.native(),
            Self::Converted => posting.converted(),
        }
    }
}

/// Balance of an account subtree in one commodity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account (subtree root).
    pub account: String,
    /// The commodity.
    pub commodity: Commodity,
    /// Sum of quantities over the subtree.
    pub total: Decimal,
}

/// Totals `postings` per account subtree and commodity.
///
/// Only (account, commodity) pairs with at least one contributing posting are
/// returned, ordered by account then commodity. Postings without an amount on
/// the chosen side are skipped.
///
/// # Errors
///
/// Returns `AccountsError::Overflow` if a subtree total leaves the decimal
/// range.
pub fn rollup_balances(
    postings: &[FinalPosting],
    separator: &str,
    side: BalanceSide,
) -> Result<Vec<AccountBalance>, AccountsError> {
    let mut totals: BTreeMap<(&str, Commodity), Decimal> = BTreeMap::new();

    for posting in postings {
        let Some(amount) = side.amount(posting) else {
            continue;
        };
        for account in ancestors(&posting.account, separator) {
            let total = totals
                .entry((account, amount.commodity.clone()))
                .or_insert(Decimal::ZERO);
            *total = total
                .checked_add(amount.quantity)
                .ok_or_else(|| AccountsError::Overflow {
                    account: account.to_string(),
                    commodity: amount.commodity.clone(),
                })?;
        }
    }

    Ok(totals
        .into_iter()
        .map(|((account, commodity), total)| AccountBalance {
            account: account.to_string(),
            commodity,
            total,
        })
        .collect())
}
