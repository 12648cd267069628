use crate::{Entity, EntityId};

use std::marker::PhantomData;

/// Typed single-field selector descriptor.
///
/// Names one field of an entity. The descriptor carries just enough
/// structure for an [`EntityResolver`](crate::EntityResolver) to determine
/// the target column statically; it never touches live values.
#[derive(Debug, Clone)]
pub struct Field<E> {
    name: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Field<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _entity: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entity(&self) -> EntityId {
        EntityId::of::<E>()
    }
}

/// Typed multi-field selector descriptor.
///
/// Names an ordered list of fields of one entity. Order is preserved all the
/// way through to the rendered column list.
#[derive(Debug, Clone)]
pub struct Fields<E> {
    names: Vec<&'static str>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Fields<E> {
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            names: names.into_iter().collect(),
            _entity: PhantomData,
        }
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn entity(&self) -> EntityId {
        EntityId::of::<E>()
    }
}
