use squill_core::{AliasRegistry, EntityId};

/// One projected item in a SELECT list.
///
/// Entries are immutable once constructed. All dialect quoting happens at
/// construction time inside [`SelectClause`](super::SelectClause), so
/// rendering needs only the alias registry. Table-alias lookup is deferred
/// to render time because the registry may gain bindings after the entry is
/// created, when joins are registered later in the fluent chain.
#[derive(Debug, Clone)]
pub enum ColumnEntry {
    /// Verbatim fragment. The owning clause never appends a list separator
    /// after a raw entry; the fragment carries its own punctuation.
    Raw { sql: String },

    /// A single column reference, or caller-supplied column text.
    Single {
        text: String,
        entity: Option<EntityId>,
        table_alias: Option<String>,
        aggregation: bool,
    },

    /// Ordered columns scoped to one entity.
    Group {
        columns: Vec<String>,
        entity: EntityId,
    },
}

impl ColumnEntry {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw { sql: sql.into() }
    }

    pub fn single(text: impl Into<String>, table_alias: Option<String>) -> Self {
        Self::Single {
            text: text.into(),
            entity: None,
            table_alias,
            aggregation: false,
        }
    }

    pub fn aggregate(text: impl Into<String>) -> Self {
        Self::Single {
            text: text.into(),
            entity: None,
            table_alias: None,
            aggregation: true,
        }
    }

    pub fn typed(text: impl Into<String>, entity: EntityId) -> Self {
        Self::Single {
            text: text.into(),
            entity: Some(entity),
            table_alias: None,
            aggregation: false,
        }
    }

    pub fn group(columns: Vec<String>, entity: EntityId) -> Self {
        Self::Group { columns, entity }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw { .. })
    }

    pub fn is_aggregation(&self) -> bool {
        matches!(self, Self::Single { aggregation: true, .. })
    }

    /// Renders the entry, consulting the registry for table aliases.
    pub fn render(&self, registry: &dyn AliasRegistry) -> String {
        match self {
            Self::Raw { sql } => sql.clone(),
            Self::Single {
                text,
                entity,
                table_alias,
                ..
            } => match resolve_alias(table_alias.as_deref(), *entity, registry) {
                Some(alias) => format!("{alias}.{text}"),
                None => text.clone(),
            },
            Self::Group { columns, entity } => {
                let alias = registry.resolve(*entity).filter(|a| !a.is_empty());
                columns
                    .iter()
                    .map(|column| match &alias {
                        Some(alias) => format!("{alias}.{column}"),
                        None => column.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }
}

/// An explicit table alias overrides entity-based lookup.
fn resolve_alias(
    explicit: Option<&str>,
    entity: Option<EntityId>,
    registry: &dyn AliasRegistry,
) -> Option<String> {
    if let Some(alias) = explicit {
        if !alias.trim().is_empty() {
            return Some(alias.to_string());
        }
    }

    entity
        .and_then(|entity| registry.resolve(entity))
        .filter(|alias| !alias.is_empty())
}
