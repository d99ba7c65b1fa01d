//! Strongly-typed ID wrappers for budget entities
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are string-backed rather than UUID-backed
//! because CSV-imported items carry deterministic `csv-<index>` identifiers
//! alongside the UUID-based ones assigned at manual entry.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Create an ID from an existing string
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(ItemId);
define_id!(SnapshotId);

impl ItemId {
    /// Deterministic ID for a CSV-imported item, derived from its row position
    ///
    /// These are unique within a single import, which is sufficient because an
    /// import replaces the whole item list. Manually added items always use
    /// fresh UUIDs, so the two sources never collide.
    pub fn for_csv_row(index: usize) -> Self {
        Self(format!("csv-{}", index))
    }
}
