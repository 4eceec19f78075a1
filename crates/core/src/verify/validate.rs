//! Final balance validation.

use super::aggregate::totals;
use super::error::VerifyError;
use super::types::{BalanceError, FinalPosting};

/// Reports every (transaction, commodity) whose final quantities do not sum
/// to zero.
///
/// The sum is reported as-is (not negated). Postings still lacking a
/// commodity do not contribute. Output is ordered by (transaction, commodity);
/// an empty result means every transaction balances in every commodity it
/// touches.
///
/// # Errors
///
/// Returns `VerifyError::Overflow` if a sum leaves the decimal range.
pub fn validate(postings: &[FinalPosting]) -> Result<Vec<BalanceError>, VerifyError> {
    let totals = totals(
        postings
            .iter()
            .map(|p| (p.transaction_no, p.commodity.as_ref(), p.quantity)),
    )?;

    Ok(totals
        .into_iter()
        .filter(|(_, sum)| !sum.is_zero())
        .map(|((transaction_no, commodity), quantity_sum)| BalanceError {
            transaction_no,
            commodity,
            quantity_sum,
        })
        .collect())
}
