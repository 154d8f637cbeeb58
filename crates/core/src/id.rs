// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prefixed random identifiers

/// Length of the random part of a generated id.
pub const RANDOM_LEN: usize = 19;

/// Define a `SmolStr` newtype whose fresh values are `{prefix}{nanoid}`.
///
/// A 4 character prefix plus [`RANDOM_LEN`] random characters keeps the
/// value at 23 bytes, short enough to stay inline in a `SmolStr`.
///
/// ```ignore
/// roster_core::define_id! {
///     /// Identifies one agent record.
///     pub struct RecordId("agt-");
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($prefix:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(smol_str::SmolStr);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// A fresh random id.
            pub fn new() -> Self {
                let random = nanoid::nanoid!({ $crate::id::RANDOM_LEN });
                Self(smol_str::SmolStr::new(format!("{}{}", Self::PREFIX, random)))
            }

            /// Wrap an id read from disk or the command line. No validation.
            pub fn from_string(id: impl Into<smol_str::SmolStr>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn suffix(&self) -> &str {
                self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::from_string(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::from_string(id)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
