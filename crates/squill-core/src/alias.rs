use crate::EntityId;

use std::collections::HashMap;

/// Table aliases bound to entity types within one query scope.
///
/// A registry instance belongs to a single builder scope; a clause cloned
/// for a nested sub-query is handed a distinct registry appropriate to that
/// scope. Implementations may keep accepting bindings after a clause has
/// captured them, since the clause looks aliases up at render time.
pub trait AliasRegistry {
    /// Returns the alias registered for the entity, or `None` when no alias
    /// is bound.
    fn resolve(&self, entity: EntityId) -> Option<String>;
}

/// Map-backed [`AliasRegistry`].
#[derive(Debug, Default)]
pub struct AliasMap {
    aliases: HashMap<EntityId, String>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `alias` to the entity, replacing any previous binding.
    pub fn bind(&mut self, entity: EntityId, alias: impl Into<String>) {
        self.aliases.insert(entity, alias.into());
    }
}

impl AliasRegistry for AliasMap {
    fn resolve(&self, entity: EntityId) -> Option<String> {
        self.aliases.get(&entity).cloned()
    }
}
