//! Property-based tests for the verification pipeline.
//!
//! Feature: verify, Properties: validation idempotence, ordering, single
//! elision correctness, no double inference, sharded equivalence.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::VerifyConfig;
use tally_shared::types::TransactionNo;

use super::service::VerifyService;
use super::types::{FinalPosting, Posting};
use super::validate::validate;

/// Strategy to generate a signed quantity with two decimal places.
fn quantity() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a commodity code.
fn commodity() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("EUR"), Just("GBP"), Just("USD")]
}

/// Stated postings of one transaction plus whether it has an elided posting.
type TransactionShape = (Vec<(&'static str, Decimal)>, bool);

fn build(transactions: Vec<TransactionShape>) -> Vec<Posting> {
    let mut postings = Vec::new();
    let mut statement_no = 0u32;
    for (n, (stated, elided)) in transactions.into_iter().enumerate() {
        let transaction_no = u32::try_from(n).unwrap() + 1;
        for (code, amount) in stated {
            statement_no += 1;
            postings.push(
                Posting::new(statement_no, transaction_no, format!("Assets:A{statement_no}"))
                    .with_amount(code, amount),
            );
        }
        if elided {
            statement_no += 1;
            postings.push(Posting::new(statement_no, transaction_no, "Equity:Balancing"));
        }
    }
    postings
}

/// Strategy to generate an arbitrary well-formed, shuffled batch.
fn batch() -> impl Strategy<Value = Vec<Posting>> {
    prop::collection::vec(
        (prop::collection::vec((commodity(), quantity()), 0..5), any::<bool>()),
        0..20,
    )
    .prop_map(build)
    .prop_shuffle()
}

/// Strategy to generate a batch where every transaction states one
/// commodity and elides exactly one posting.
fn single_commodity_batch() -> impl Strategy<Value = Vec<Posting>> {
    prop::collection::vec(
        (commodity(), prop::collection::vec(quantity(), 1..5)),
        1..20,
    )
    .prop_map(|transactions| {
        build(
            transactions
                .into_iter()
                .map(|(code, amounts)| (amounts.into_iter().map(|a| (code, a)).collect(), true))
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Running the final validation twice yields identical errors.
    #[test]
    fn prop_validation_is_idempotent(postings in batch()) {
        let verification = VerifyService::default().verify(&postings).unwrap();
        let first = validate(&verification.postings).unwrap();
        let second = validate(&verification.postings).unwrap();
        prop_assert_eq!(&first, &verification.errors);
        prop_assert_eq!(first, second);
    }

    /// Final postings are ordered by (transaction, statement), errors by
    /// (transaction, commodity), and every input posting appears once.
    #[test]
    fn prop_outputs_are_ordered(postings in batch()) {
        let verification = VerifyService::default().verify(&postings).unwrap();

        prop_assert_eq!(verification.postings.len(), postings.len());
        prop_assert!(verification
            .postings
            .windows(2)
            .all(|w| (w[0].transaction_no, w[0].statement_no) < (w[1].transaction_no, w[1].statement_no)));
        prop_assert!(verification
            .errors
            .windows(2)
            .all(|w| (w[0].transaction_no, &w[0].commodity) < (w[1].transaction_no, &w[1].commodity)));
        prop_assert!(verification.errors.iter().all(|e| !e.quantity_sum.is_zero()));
    }

    /// Transactions without a flag keep every posting unchanged.
    #[test]
    fn prop_no_double_inference(postings in batch()) {
        let verification = VerifyService::default().verify(&postings).unwrap();
        let flagged: HashSet<TransactionNo> =
            verification.flags.iter().map(|f| f.transaction_no).collect();

        for final_posting in &verification.postings {
            let original = postings
                .iter()
                .find(|p| p.statement_no == final_posting.statement_no)
                .unwrap();
            if !flagged.contains(&final_posting.transaction_no) || !original.is_elided() {
                prop_assert_eq!(final_posting, &FinalPosting::from(original.clone()));
            }
        }
    }

    /// One stated commodity plus one elided posting always balances.
    #[test]
    fn prop_single_elision_balances(postings in single_commodity_batch()) {
        let verification = VerifyService::default().verify(&postings).unwrap();
        prop_assert!(verification.errors.is_empty(), "errors: {:?}", verification.errors);
    }

    /// The sharded parallel path produces the same outcome as the sequential one.
    #[test]
    fn prop_sharded_matches_sequential(postings in batch()) {
        let sequential = VerifyService::default().verify(&postings).unwrap();
        let sharded = VerifyService::new(VerifyConfig {
            parallel: true,
            parallel_threshold: 0,
            ..VerifyConfig::default()
        })
        .verify(&postings)
        .unwrap();
        prop_assert_eq!(sequential, sharded);
    }
}
