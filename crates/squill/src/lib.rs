pub mod append;
pub use append::SqlBuilderExt;

pub mod clause;
pub use clause::{AggregateFunc, ColumnEntry, SelectClause};

pub use squill_core::{
    AliasMap, AliasRegistry, Clause, Dialect, Entity, EntityId, EntityResolver, Field, Fields,
    Flavor, Result, SqlBuilder,
};
