//! Shared types and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Typed statement and transaction numbers
//! - Commodity codes and amounts with decimal precision
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, ConvertedInference, ElisionPolicy, LoggingConfig, VerifyConfig};
pub use types::{Amount, Commodity, StatementNo, TransactionNo};
