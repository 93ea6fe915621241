//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs wrap `i64` to
//! match `BIGSERIAL` identity columns.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Default`
/// - Conversion methods: `new()`, `as_i64()`, `is_unassigned()`
/// - `From<i64>` and `Into<i64>` implementations
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// The zero value means "not yet assigned by the database".
///
/// # Example
///
/// ```rust
/// # use customer_crud_core::define_id;
/// define_id!(CustomerId);
/// define_id!(ManagerId);
///
/// let customer_id = CustomerId::new(1);
/// assert!(!customer_id.is_unassigned());
/// assert!(ManagerId::default().is_unassigned());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// The placeholder ID carried by records that were never stored.
            pub const UNASSIGNED: Self = Self(0);

            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }

            /// Whether this ID is still the zero placeholder.
            #[must_use]
            pub const fn is_unassigned(&self) -> bool {
                self.0 == 0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <i64 as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <i64 as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <i64 as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <i64 as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

define_id!(CustomerId);
define_id!(ManagerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unassigned() {
        assert!(CustomerId::default().is_unassigned());
        assert_eq!(CustomerId::default(), CustomerId::UNASSIGNED);
        assert!(!CustomerId::new(7).is_unassigned());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&CustomerId::new(42)).expect("serialize");
        assert_eq!(json, "42");

        let id: CustomerId = serde_json::from_str("17").expect("deserialize");
        assert_eq!(id.as_i64(), 17);
    }

    #[test]
    fn test_display() {
        assert_eq!(CustomerId::new(5).to_string(), "5");
    }
}
