//! Detection of transactions whose first commodity does not balance.
//!
//! Partial solver: only the rank-1 commodity of each transaction is checked
//! and inferred from. A transaction whose stated postings span several
//! commodities gets at most one inference, taken from the alphabetically
//! first one, even when the elided posting "should" balance another. Any
//! remaining imbalance is left for the final validation pass to report.

use super::types::{CommodityGroup, UnbalancedFlag};

/// Flags every transaction whose rank-1 group has a non-zero sum.
///
/// Output follows the order of `groups`, which [`super::aggregate`] yields by
/// transaction.
#[must_use]
pub fn detect(groups: &[CommodityGroup]) -> Vec<UnbalancedFlag> {
    groups
        .iter()
        .filter(|g| g.rank == 1 && !g.quantity_sum.is_zero())
        .map(|g| UnbalancedFlag {
            transaction_no: g.transaction_no,
            inferred_commodity: g.commodity.clone(),
            inferred_quantity: g.quantity_sum,
        })
        .collect()
}
