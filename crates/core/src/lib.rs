//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO file or format
//! dependencies. Postings come in fully materialized; results go out as
//! plain data.
//!
//! # Modules
//!
//! - `verify` - Double-entry verification and elided amount inference
//! - `accounts` - Account hierarchy and rolled-up balances
//! - `compare` - Comparison of two verified posting sets

pub mod accounts;
pub mod compare;
pub mod verify;

pub use verify::{Posting, Verification, VerifyError, VerifyService, verify};
