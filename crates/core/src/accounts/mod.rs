//! Account hierarchy and rolled-up balances over verified postings.

pub mod balance;
pub mod error;
pub mod hierarchy;

#[cfg(test)]
mod props;

pub use balance::{AccountBalance, BalanceSide, rollup_balances};
pub use error::AccountsError;
pub use hierarchy::{ancestors, expand_accounts};
