//! Catalog entity models: categories, cast members, genres and videos,
//! plus the [`Entity`] abstraction the stores are generic over.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;

pub use cast_member::*;
pub use category::*;
pub use genre::*;
pub use video::*;

use std::fmt::Display;

/// A uniquely identified catalog record held by a store.
///
/// Identifier equality is structural: two id instances wrapping the same
/// underlying value address the same record.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Value-equality identifier type.
    type Id: PartialEq + Clone + Display + Send + Sync;

    /// Entity kind name used in diagnostics.
    const KIND: &'static str;

    /// Stable identifier accessor.
    fn id(&self) -> &Self::Id;
}

/// Declares a uuid-backed identifier newtype compared by value.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Mint a new random identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wrap an existing uuid.
            pub fn from_uuid(value: uuid::Uuid) -> Self {
                Self(value)
            }

            /// Underlying uuid.
            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
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
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }
        }
    };
}

pub(crate) use entity_id;
