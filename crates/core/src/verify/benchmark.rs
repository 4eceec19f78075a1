//! Benchmark test for verification performance.

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use std::time::Instant;
    use tally_shared::VerifyConfig;

    use crate::verify::{Posting, VerifyService};

    /// Generate a batch of transactions, each with two stated postings and
    /// one elided posting.
    fn generate_test_data(num_transactions: u32) -> Vec<Posting> {
        let codes = ["EUR", "GBP", "USD"];
        let mut postings = Vec::with_capacity(num_transactions as usize * 3);

        for t in 0..num_transactions {
            let code = codes[(t % 3) as usize];
            let base = t * 3;
            let goods = Decimal::new(i64::from(t) * 100 + 99, 2);
            let tax = Decimal::new(i64::from(t % 50) + 1, 2);
            postings.push(Posting::new(base + 1, t, "Expenses:Goods").with_amount(code, goods));
            postings.push(Posting::new(base + 2, t, "Expenses:Tax").with_amount(code, tax));
            postings.push(Posting::new(base + 3, t, "Assets:Checking"));
        }

        postings
    }

    #[test]
    fn benchmark_verify_100k_postings_sequential() {
        let data = generate_test_data(33_334);

        let start = Instant::now();
        let result = VerifyService::default().verify(&data).unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: ~100k postings, sequential ===");
        println!("Duration: {:?}", duration);
        println!("Flags: {}", result.flags.len());

        assert!(result.errors.is_empty());
        assert_eq!(result.flags.len(), 33_334);
        assert!(
            duration.as_millis() < 5000,
            "Verification took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_verify_100k_postings_sharded() {
        let data = generate_test_data(33_334);
        let service = VerifyService::new(VerifyConfig {
            parallel: true,
            ..VerifyConfig::default()
        });

        let start = Instant::now();
        let result = service.verify(&data).unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: ~100k postings, sharded ===");
        println!("Duration: {:?}", duration);

        assert!(result.errors.is_empty());
        assert_eq!(result.postings.len(), data.len());
        assert!(
            duration.as_millis() < 5000,
            "Verification took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }
}
