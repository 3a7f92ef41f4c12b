//! Entity identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new UUIDv7-based identifier
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Create an identifier from a raw u128 value
            pub fn from_value(value: u128) -> Self {
                Self(Uuid::from_u128(value))
            }

            /// Parse an identifier from its hyphenated string form
            pub fn from_string(s: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| DomainError::InvalidId(format!("{}: {}", s, e)))
            }

            /// Get the raw u128 value
            pub fn value(&self) -> u128 {
                self.0.as_u128()
            }

            /// Milliseconds since the Unix epoch encoded in a UUIDv7
            pub fn timestamp(&self) -> u64 {
                (self.value() >> 80) as u64
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
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }
    };
}

entity_id! {
    /// Identifier of a [`Story`](crate::Story)
    StoryId
}

entity_id! {
    /// Identifier of a [`Claim`](crate::Claim)
    ClaimId
}

entity_id! {
    /// Identifier of a [`Source`](crate::Source)
    SourceId
}

entity_id! {
    /// Identifier of a [`VerificationLog`](crate::VerificationLog)
    LogId
}

/// Supplies identity values to the extraction pipeline.
///
/// Production callers use [`RandomIds`]; [`SequentialIds`] makes repeated
/// runs over the same text produce identical output.
pub trait IdSource {
    /// Produce the next raw identifier value
    fn next_value(&mut self) -> u128;

    /// Next claim identifier
    fn claim_id(&mut self) -> ClaimId {
        ClaimId::from_value(self.next_value())
    }

    /// Next source identifier
    fn source_id(&mut self) -> SourceId {
        SourceId::from_value(self.next_value())
    }
}

/// UUIDv7 identifiers, time-ordered and unique across runs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_value(&mut self) -> u128 {
        Uuid::now_v7().as_u128()
    }
}

/// Deterministic counter starting at a fixed seed
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Start counting at `seed`
    pub fn new(seed: u128) -> Self {
        Self { next: seed }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdSource for SequentialIds {
    fn next_value(&mut self) -> u128 {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        value
    }
}
