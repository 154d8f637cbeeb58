// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the roster crates.

/// `Display` for a fieldless enum, one string literal per variant.
///
/// ```ignore
/// crate::simple_display! {
///     Tier {
///         Volatile => "volatile",
///         Durable => "durable",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ident { $( $variant:ident => $label:literal ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let label = match self {
                    $( $enum::$variant => $label, )+
                };
                f.write_str(label)
            }
        }
    };
}

/// Test builder for a plain struct: defaults, chained setters, `build()`,
/// and a `Target::builder()` entry point.
///
/// Fields listed under `into` take `impl Into<Type>`; fields under `set`
/// take the type itself. Everything generated is compiled only for tests
/// and the `test-support` feature.
///
/// ```ignore
/// crate::builder! {
///     pub struct AgentRecordBuilder => AgentRecord {
///         into { name: String = "worker" }
///         set { turn_count: u64 = 0 }
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            into { $( $into_field:ident : $into_ty:ty = $into_default:expr ),* $(,)? }
            set { $( $set_field:ident : $set_ty:ty = $set_default:expr ),* $(,)? }
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            $( $into_field: $into_ty, )*
            $( $set_field: $set_ty, )*
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                $builder {
                    $( $into_field: $into_default.into(), )*
                    $( $set_field: $set_default, )*
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $(
                pub fn $into_field(self, value: impl Into<$into_ty>) -> Self {
                    $builder { $into_field: value.into(), ..self }
                }
            )*
            $(
                pub fn $set_field(self, value: $set_ty) -> Self {
                    $builder { $set_field: value, ..self }
                }
            )*

            pub fn build(self) -> $target {
                $target {
                    $( $into_field: self.$into_field, )*
                    $( $set_field: self.$set_field, )*
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

/// Chained by-value setters inside an existing `impl` block.
///
/// `set` fields take the field type; `option` fields are `Option<Type>` and
/// take `impl Into<Type>`.
///
/// ```ignore
/// impl CreateRequest {
///     roster_core::setters! {
///         set { metadata: Metadata }
///         option { scope: String }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $( set { $( $set_field:ident : $set_ty:ty ),* $(,)? } )?
        $( option { $( $opt_field:ident : $opt_ty:ty ),* $(,)? } )?
    ) => {
        $($(
            pub fn $set_field(mut self, value: $set_ty) -> Self {
                self.$set_field = value;
                self
            }
        )*)?
        $($(
            pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                self.$opt_field = Some(value.into());
                self
            }
        )*)?
    };
}
