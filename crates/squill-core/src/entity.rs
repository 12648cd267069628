use std::any::TypeId;

/// Marker for application types that map to a table within a query scope.
pub trait Entity: 'static {}

/// Identity of an [`Entity`] type.
///
/// Used as the key when binding and resolving table aliases, and carried by
/// projection entries so alias resolution can happen at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(TypeId);

impl EntityId {
    pub fn of<E: Entity>() -> Self {
        Self(TypeId::of::<E>())
    }
}
