//! Newtype wrappers around `i64` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `VolunteerId` where
//! an `EventId` is expected. The wrappers serialize transparently, so they
//! appear as plain integers on the wire.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw integer value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the inner integer value.
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

define_id!(
    /// Unique identifier for a volunteer.
    VolunteerId
);

define_id!(
    /// Unique identifier for an event.
    EventId
);
