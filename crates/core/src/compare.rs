//! Comparison of two verified posting sets.
//!
//! Used to check that two ledgers (for example, an import and a hand-kept
//! journal) book the same movements. Statement and transaction numbers are
//! ignored since they depend on where a posting sits in its source file.

use std::collections::HashSet;

use tally_shared::types::Amount;

use crate::verify::FinalPosting;

type PostingKey<'a> = (&'a str, Option<Amount>, Option<Amount>);

fn key(posting: &FinalPosting) -> PostingKey<'_> {
    (&posting.account, posting.native(), posting.converted())
}

/// Returns the postings of `left` that have no counterpart in `right`.
///
/// A counterpart books to the same account with the same native and converted
/// amounts. Matching is an anti-join, not a one-to-one pairing: one posting in
/// `right` can match several in `left`. Output keeps the order of `left`.
#[must_use]
pub fn unmatched<'a>(left: &'a [FinalPosting], right: &[FinalPosting]) -> Vec<&'a FinalPosting> {
    let known: HashSet<PostingKey<'_>> = right.iter().map(key).collect();
    left.iter().filter(|p| !known.contains(&key(p))).collect()
}
