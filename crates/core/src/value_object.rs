//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two postal codes
/// with the same digits are the same postal code, two estimates built from the
/// same inputs are equal. To "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Tier { fee: Money, min_order: Money }
///
/// impl ValueObject for Tier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
