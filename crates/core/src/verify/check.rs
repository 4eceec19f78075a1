//! Precondition checks run before any aggregation.

use std::collections::BTreeMap;

use tally_shared::ElisionPolicy;
use tally_shared::types::TransactionNo;

use super::error::{AmountPair, VerifyError};
use super::types::Posting;

/// Rejects postings whose commodity and quantity are not paired.
///
/// The first offending posting in input order is reported; the native pair is
/// checked before the converted pair.
pub fn check_pairs(postings: &[Posting]) -> Result<(), VerifyError> {
    for posting in postings {
        if posting.commodity.is_some() != posting.quantity.is_some() {
            return Err(VerifyError::MalformedPosting {
                statement_no: posting.statement_no,
                pair: AmountPair::Native,
            });
        }
        if posting.converted_commodity.is_some() != posting.converted_quantity.is_some() {
            return Err(VerifyError::MalformedPosting {
                statement_no: posting.statement_no,
                pair: AmountPair::Converted,
            });
        }
    }
    Ok(())
}

/// Counts elided postings per transaction.
#[must_use]
pub fn elision_counts(postings: &[Posting]) -> BTreeMap<TransactionNo, usize> {
    let mut counts = BTreeMap::new();
    for posting in postings.iter().filter(|p| p.is_elided()) {
        *counts.entry(posting.transaction_no).or_insert(0) += 1;
    }
    counts
}

/// Applies the multiple-elision policy.
///
/// Under [`ElisionPolicy::Reject`] the lowest transaction with two or more
/// elided postings is reported.
pub fn check_elisions(postings: &[Posting], policy: ElisionPolicy) -> Result<(), VerifyError> {
    if policy == ElisionPolicy::FirstOnly {
        return Ok(());
    }

    match elision_counts(postings)
        .into_iter()
        .find(|&(_, count)| count > 1)
    {
        Some((transaction_no, count)) => Err(VerifyError::MultipleElisions {
            transaction_no,
            count,
        }),
        None => Ok(()),
    }
}

/// Runs every precondition check.
pub fn check_postings(postings: &[Posting], policy: ElisionPolicy) -> Result<(), VerifyError> {
    check_pairs(postings)?;
    check_elisions(postings, policy)
}
