//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two with the
/// same attributes are interchangeable.
///
/// - **Value Object**: a performance (play reference + audience), a pricing
///   configuration, a scaled currency amount
/// - **Entity**: a play, identified by its `PlayId`
///
/// Because they never change after construction, value objects can be shared
/// across threads freely while statements are generated.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
