//! Elision resolution: completes postings from their transaction's flag.

use std::collections::{HashMap, HashSet};

use tally_shared::ConvertedInference;
use tally_shared::types::TransactionNo;

use super::types::{FinalPosting, Posting, UnbalancedFlag};

/// Produces one final posting per input posting.
///
/// Postings are left-joined to `flags` by transaction. Within a flagged
/// transaction the elided posting with the lowest statement number takes the
/// inferred commodity and quantity. Missing converted fields take the same
/// values on that posting with [`ConvertedInference::SharedFlag`], on every
/// posting of the transaction with [`ConvertedInference::AllPostings`], and
/// nowhere with [`ConvertedInference::Never`]. Postings of unflagged
/// transactions pass through unchanged. Output is ordered by (transaction,
/// statement).
#[must_use]
pub fn resolve(
    postings: &[Posting],
    flags: &[UnbalancedFlag],
    converted: ConvertedInference,
) -> Vec<FinalPosting> {
    let flags: HashMap<TransactionNo, &UnbalancedFlag> =
        flags.iter().map(|f| (f.transaction_no, f)).collect();

    let mut ordered: Vec<&Posting> = postings.iter().collect();
    ordered.sort_by_key(|p| (p.transaction_no, p.statement_no));

    let mut filled: HashSet<TransactionNo> = HashSet::new();

    ordered
        .into_iter()
        .map(|posting| match flags.get(&posting.transaction_no) {
            Some(flag) => {
                let native = posting.is_elided() && filled.insert(posting.transaction_no);
                let with_converted = match converted {
                    ConvertedInference::SharedFlag => native,
                    ConvertedInference::AllPostings => true,
                    ConvertedInference::Never => false,
                };
                fill(posting, flag, native, with_converted)
            }
            None => FinalPosting::from(posting.clone()),
        })
        .collect()
}

fn fill(posting: &Posting, flag: &UnbalancedFlag, native: bool, converted: bool) -> FinalPosting {
    let mut out = FinalPosting::from(posting.clone());
    let inferred = flag.inferred();

    if native {
        out.commodity = Some(inferred.commodity.clone());
        out.quantity = Some(inferred.quantity);
    }

    if converted && out.converted().is_none() {
        out.converted_commodity = Some(inferred.commodity);
        out.converted_quantity = Some(inferred.quantity);
    }

    out
}
