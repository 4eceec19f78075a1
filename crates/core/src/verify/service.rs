//! Verification service.
//!
//! Runs the four pipeline stages over a batch of postings:
//! 1. Aggregate quantities per transaction and commodity
//! 2. Detect transactions whose first commodity does not balance
//! 3. Resolve elided postings from those flags
//! 4. Validate the final postings
//!
//! Transactions never interact, so large batches may be sharded by
//! transaction and run on the rayon pool. Both paths produce identical output.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tally_shared::VerifyConfig;
use tally_shared::types::TransactionNo;
use tracing::{debug, info, instrument, trace, warn};

use super::aggregate::aggregate;
use super::check::check_postings;
use super::detect::detect;
use super::error::VerifyError;
use super::resolve::resolve;
use super::types::{Posting, Verification};
use super::validate::validate;

/// Verification service.
///
/// Holds the configuration; contains pure business logic with no I/O.
#[derive(Debug, Clone, Default)]
pub struct VerifyService {
    config: VerifyConfig,
}

impl VerifyService {
    /// Creates a service with the given configuration.
    #[must_use]
    pub fn new(config: VerifyConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verifies a batch of postings.
    ///
    /// Balance failures are returned as data in [`Verification::errors`]; only
    /// malformed input fails the call.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::MalformedPosting` if a commodity/quantity pair is
    /// half-present, `VerifyError::MultipleElisions` if a transaction has
    /// several elided postings under the reject policy, or
    /// `VerifyError::Overflow` if a per-transaction sum leaves the decimal
    /// range.
    #[instrument(skip_all, fields(postings = postings.len()))]
    pub fn verify(&self, postings: &[Posting]) -> Result<Verification, VerifyError> {
        check_postings(postings, self.config.elision_policy)?;

        let verification = if self.config.use_parallel(postings.len()) {
            self.run_sharded(postings)?
        } else {
            self.run(postings)?
        };

        let unresolved = verification.unresolved().count();
        if unresolved > 0 {
            warn!(unresolved, "Postings left without an amount after inference");
        }

        info!(
            flags = verification.flags.len(),
            errors = verification.errors.len(),
            "Verification finished"
        );

        Ok(verification)
    }

    /// Runs the pipeline over one batch without precondition checks.
    fn run(&self, postings: &[Posting]) -> Result<Verification, VerifyError> {
        let groups = aggregate(postings)?;
        trace!(groups = groups.len(), "Aggregated commodity groups");

        let flags = detect(&groups);
        trace!(flags = flags.len(), "Detected unbalanced transactions");

        let final_postings = resolve(postings, &flags, self.config.converted_inference);
        let errors = validate(&final_postings)?;
        trace!(errors = errors.len(), "Validated final postings");

        Ok(Verification {
            postings: final_postings,
            flags,
            errors,
        })
    }

    /// Runs the pipeline per transaction on the rayon pool.
    ///
    /// Shards are processed in transaction order and concatenated, which keeps
    /// every output ordering identical to [`Self::run`]. The error reported is
    /// the one of the lowest failing transaction, as in the sequential run.
    fn run_sharded(&self, postings: &[Posting]) -> Result<Verification, VerifyError> {
        let mut shards: BTreeMap<TransactionNo, Vec<Posting>> = BTreeMap::new();
        for posting in postings {
            shards
                .entry(posting.transaction_no)
                .or_default()
                .push(posting.clone());
        }
        let shards: Vec<Vec<Posting>> = shards.into_values().collect();
        debug!(shards = shards.len(), "Verifying transactions in parallel");

        let parts: Vec<Result<Verification, VerifyError>> =
            shards.par_iter().map(|shard| self.run(shard)).collect();

        let mut merged = Verification {
            postings: Vec::with_capacity(postings.len()),
            ..Verification::default()
        };
        for part in parts {
            let part = part?;
            merged.postings.extend(part.postings);
            merged.flags.extend(part.flags);
            merged.errors.extend(part.errors);
        }
        Ok(merged)
    }
}

/// Verifies a batch of postings with the default configuration.
///
/// # Errors
///
/// See [`VerifyService::verify`].
pub fn verify(postings: &[Posting]) -> Result<Verification, VerifyError> {
    VerifyService::default().verify(postings)
}
