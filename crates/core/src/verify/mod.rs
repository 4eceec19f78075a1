//! Posting verification and elision inference.
//!
//! This module implements the verification pipeline:
//! - Commodity aggregation per transaction
//! - Detection of transactions whose first commodity does not balance
//! - Resolution of elided postings
//! - Final balance validation
//! - Precondition checks and error types
//! - Verification service (sequential or sharded)

pub mod aggregate;
pub mod check;
pub mod detect;
pub mod error;
pub mod resolve;
pub mod service;
pub mod types;
pub mod validate;

#[cfg(test)]
mod benchmark;
#[cfg(test)]
mod props;

pub use aggregate::aggregate;
pub use check::check_postings;
pub use detect::detect;
pub use error::{AmountPair, VerifyError};
pub use resolve::resolve;
pub use service::{VerifyService, verify};
pub use types::{BalanceError, CommodityGroup, FinalPosting, Posting, UnbalancedFlag, Verification};
pub use validate::validate;
