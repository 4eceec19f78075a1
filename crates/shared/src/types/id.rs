//! Typed identifiers for traceability back to the source ledger.
//!
//! Using typed numbers prevents accidentally passing a `StatementNo` where a
//! `TransactionNo` is expected. Both are opaque to the verifier; only their
//! ordering matters.
//!
//! Identifiers are unsigned 32-bit numbers. String ids such as `"T1"` are
//! rejected on deserialization; callers with textual ids must number their
//! statements and transactions first.

use serde::{Deserialize, Serialize};

/// Macro to generate typed number wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Creates an identifier from a raw number.
            #[must_use]
            pub const fn new(n: u32) -> Self {
                Self(n)
            }

            /// Returns the inner number.
            #[must_use]
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(n)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(
    StatementNo,
    "Position of a statement line in the source ledger."
);
typed_id!(
    TransactionNo,
    "Identifier grouping postings into one transaction."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip() {
        let id = TransactionNo::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(TransactionNo::from(42), id);
    }

    #[test]
    fn test_typed_id_display() {
        assert_eq!(StatementNo::new(7).to_string(), "7");
    }

    #[test]
    fn test_typed_id_from_str() {
        assert_eq!(StatementNo::from_str(" 12 ").unwrap(), StatementNo::new(12));
        assert!(StatementNo::from_str("twelve").is_err());
        assert!(TransactionNo::from_str("-1").is_err());
    }

    #[test]
    fn test_typed_id_ordering() {
        let mut ids = vec![TransactionNo::new(3), TransactionNo::new(1), TransactionNo::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![TransactionNo::new(1), TransactionNo::new(2), TransactionNo::new(3)]
        );
    }

    #[test]
    fn test_typed_id_serde_transparent() {
        let json = serde_json::to_string(&StatementNo::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: StatementNo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StatementNo::new(5));
    }

    #[test]
    fn test_typed_id_rejects_textual_ids() {
        assert!(serde_json::from_str::<TransactionNo>("\"T1\"").is_err());
        assert!(serde_json::from_str::<StatementNo>("-3").is_err());
    }
}
