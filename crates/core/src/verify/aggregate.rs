//! Commodity aggregation per transaction.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use tally_shared::types::{Commodity, TransactionNo};

use super::error::VerifyError;
use super::types::{CommodityGroup, Posting};

/// Totals keyed by (transaction, commodity).
pub(crate) type Totals = BTreeMap<(TransactionNo, Commodity), Decimal>;

/// Sums quantities keyed by (transaction, commodity).
///
/// Entries without a commodity or quantity are skipped. The map iterates in
/// transaction order, then ascending commodity code.
///
/// # Errors
///
/// Returns `VerifyError::Overflow` if a running sum leaves the decimal range,
/// even when the transaction would balance overall. The lowest overflowing
/// (transaction, commodity) is reported regardless of input order.
pub(crate) fn totals<'a, I>(entries: I) -> Result<Totals, VerifyError>
where
    I: IntoIterator<Item = (TransactionNo, Option<&'a Commodity>, Option<Decimal>)>,
{
    let mut totals = Totals::new();
    let mut overflowed: BTreeSet<(TransactionNo, Commodity)> = BTreeSet::new();

    for (transaction_no, commodity, quantity) in entries {
        let (Some(commodity), Some(quantity)) = (commodity, quantity) else {
            continue;
        };
        let key = (transaction_no, commodity.clone());
        if overflowed.contains(&key) {
            continue;
        }
        let sum = totals.entry(key.clone()).or_insert(Decimal::ZERO);
        match sum.checked_add(quantity) {
            Some(next) => *sum = next,
            None => {
                overflowed.insert(key);
            }
        }
    }

    match overflowed.pop_first() {
        Some((transaction_no, commodity)) => Err(VerifyError::Overflow {
            transaction_no,
            commodity,
        }),
        None => Ok(totals),
    }
}

/// Groups postings by transaction and commodity.
///
/// Each group holds the negated sum of its quantities, i.e. the amount an
/// elided posting would need to balance that commodity. Groups are ranked
/// from 1 within their transaction by ascending commodity code and returned
/// ordered by (transaction, commodity).
///
/// # Errors
///
/// Returns `VerifyError::Overflow` if a sum leaves the decimal range.
pub fn aggregate(postings: &[Posting]) -> Result<Vec<CommodityGroup>, VerifyError> {
    let totals = totals(
        postings
            .iter()
            .map(|p| (p.transaction_no, p.commodity.as_ref(), p.quantity)),
    )?;

    let mut groups = Vec::with_capacity(totals.len());
    let mut current: Option<TransactionNo> = None;
    let mut rank = 0;

    for ((transaction_no, commodity), sum) in totals {
        if current == Some(transaction_no) {
            rank += 1;
        } else {
            current = Some(transaction_no);
            rank = 1;
        }
        groups.push(CommodityGroup {
            transaction_no,
            commodity,
            quantity_sum: -sum,
            rank,
        });
    }

    Ok(groups)
}
