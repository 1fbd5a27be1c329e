//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Model name used in record links and error messages (e.g. `"sale.order"`).
    const MODEL: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
