//! Account path handling.
//!
//! Accounts are opaque strings split into segments by a configurable
//! separator (`:` by default), e.g. `Assets:Bank:Checking`.

use std::collections::BTreeSet;

use crate::verify::FinalPosting;

/// Returns `account` and all its ancestors, root first.
///
/// `ancestors("Assets:Bank:Checking", ":")` yields `Assets`, `Assets:Bank`,
/// `Assets:Bank:Checking`. An empty separator yields only `account`.
pub fn ancestors<'a>(account: &'a str, separator: &str) -> impl Iterator<Item = &'a str> {
    let cuts: Vec<usize> = if separator.is_empty() {
        Vec::new()
    } else {
        account.match_indices(separator).map(|(i, _)| i).collect()
    };
    cuts.into_iter()
        .map(move |i| &account[..i])
        .chain(std::iter::once(account))
}

/// Lists every account used by `postings` together with its ancestors,
/// unique and sorted.
#[must_use]
pub fn expand_accounts(postings: &[FinalPosting], separator: &str) -> Vec<String> {
    postings
        .iter()
        .flat_map(|p| ancestors(&p.account, separator))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
