//! Typed IDs for type-safe entity references.
//!
//! The ledger uses two distinct id shapes: small sequential integers as
//! internal primary keys (cheap to index, never exposed over HTTP), and
//! UUIDs as stable external identifiers (safe to hand to a client, safe to
//! use as an idempotency anchor). Wrapping both in newtypes prevents
//! accidentally passing a `CustomerId` where a `TransactionId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate integer-backed internal id wrappers.
macro_rules! internal_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw primary key value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw primary key value.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

/// Macro to generate UUID-backed external id wrappers.
macro_rules! external_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random id using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

internal_id!(CustomerId, "Internal primary key of a customer.");
internal_id!(LedgerAccountId, "Internal primary key of a chart-of-accounts entry.");
internal_id!(LedgerEntryId, "Internal primary key of a ledger entry.");
internal_id!(AccountId, "Internal primary key of a customer-facing account.");
internal_id!(TransactionId, "Internal primary key of a business transaction.");

external_id!(CustomerExternalId, "Stable external identifier for a customer.");
external_id!(AccountExternalId, "Stable external identifier for a customer-facing account.");
external_id!(TransactionExternalId, "Stable external identifier for a business transaction.");
external_id!(
    LedgerTxnId,
    "Identifier shared by every entry in one posting. Not unique per entry — the grouping key."
);
