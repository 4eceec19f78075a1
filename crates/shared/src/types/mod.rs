//! Common types used across the workspace.

pub mod commodity;
pub mod id;

pub use commodity::{Amount, Commodity};
pub use id::*;
