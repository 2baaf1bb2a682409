//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable (e.g. a measurement unit, an expiration status).
/// They are cheap to copy and compared by value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
