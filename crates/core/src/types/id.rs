//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! Entity IDs are strings: hand-assigned ids (the seed catalog uses plain
//! numerals, seed orders `ORD-001`) and generated ids (`PROD-<millis>`)
//! share one representation.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - A `PREFIX` constant used by generated ids
/// - Conversion methods: `new()`, `from_millis()`, `as_str()`
/// - `From<&str>`, `From<String>`, `Display`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use aurum_core::define_id;
/// define_id!(ProductId, "PROD");
/// define_id!(OrderId, "ORD");
///
/// let product_id = ProductId::new("1");
/// let order_id = OrderId::from_millis(1_770_000_000_000);
///
/// assert_eq!(order_id.as_str(), "ORD-1770000000000");
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix applied to generated ids.
            pub const PREFIX: &'static str = $prefix;

            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Create a prefixed ID from a millisecond timestamp.
            #[must_use]
            pub fn from_millis(millis: i64) -> Self {
                Self(format!("{}-{millis}", Self::PREFIX))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId, "PROD");
define_id!(OrderId, "ORD");
define_id!(InquiryId, "INQ");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_applies_prefix() {
        let id = ProductId::from_millis(1_770_780_019_000);
        assert_eq!(id.as_str(), "PROD-1770780019000");

        let id = OrderId::from_millis(42);
        assert_eq!(id.as_str(), "ORD-42");

        let id = InquiryId::from_millis(42);
        assert_eq!(id.as_str(), "INQ-42");
    }

    #[test]
    fn test_plain_ids_preserved() {
        let id = ProductId::new("3");
        assert_eq!(id.as_str(), "3");
        assert_eq!(format!("{id}"), "3");
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("ORD-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-001\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
