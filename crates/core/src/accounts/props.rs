//! Property-based tests for account hierarchy and balances.
//!
//! Feature: accounts, Properties: rollup consistency with hierarchy, root
//! totals equal commodity totals.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{BalanceSide, expand_accounts, rollup_balances};
use crate::verify::{FinalPosting, Posting};

/// Strategy to generate an account path of one to three segments.
fn account() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just("Assets"), Just("Bank"), Just("Cash")], 1..4)
        .prop_map(|segments| segments.join(":"))
}

fn postings() -> impl Strategy<Value = Vec<FinalPosting>> {
    prop::collection::vec(
        (
            account(),
            prop_oneof![Just("EUR"), Just("USD")],
            (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(n, (account, code, quantity))| {
                let n = u32::try_from(n).unwrap();
                FinalPosting::from(Posting::new(n, n, account).with_amount(code, quantity))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_rollup_accounts_are_in_hierarchy(postings in postings()) {
        let accounts = expand_accounts(&postings, ":");
        for balance in rollup_balances(&postings, ":", BalanceSide::Native).unwrap() {
            prop_assert!(accounts.binary_search(&balance.account).is_ok());
        }
    }

    #[test]
    fn prop_root_totals_match_commodity_totals(postings in postings()) {
        let mut expected: BTreeMap<String, Decimal> = BTreeMap::new();
        for posting in &postings {
            if let Some(amount) = posting.native() {
                *expected.entry(amount.commodity.to_string()).or_insert(Decimal::ZERO) +=
                    amount.quantity;
            }
        }

        let mut roots: BTreeMap<String, Decimal> = BTreeMap::new();
        for balance in rollup_balances(&postings, ":", BalanceSide::Native).unwrap() {
            if !balance.account.contains(':') {
                *roots.entry(balance.commodity.to_string()).or_insert(Decimal::ZERO) +=
                    balance.total;
            }
        }

        prop_assert_eq!(roots, expected);
    }

    #[test]
    fn prop_rollup_is_ordered(postings in postings()) {
        let balances = rollup_balances(&postings, ":", BalanceSide::Native).unwrap();
        for pair in balances.windows(2) {
            prop_assert!(
                (&pair[0].account, &pair[0].commodity) < (&pair[1].account, &pair[1].commodity)
            );
        }
    }
}
