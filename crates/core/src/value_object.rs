//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Roles and locale tags are values: two roles named `management` are the
/// same role, no matter where they were parsed from. Value objects are
/// immutable; to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
