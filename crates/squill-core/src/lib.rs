pub mod alias;
pub use alias::{AliasMap, AliasRegistry};

pub mod builder;
pub use builder::{Clause, SqlBuilder};

pub mod dialect;
pub use dialect::{Dialect, Flavor};

pub mod entity;
pub use entity::{Entity, EntityId};

pub mod field;
pub use field::{Field, Fields};

pub mod resolver;
pub use resolver::EntityResolver;

/// A Result type alias using [`anyhow::Error`].
///
/// The clause engine never constructs errors of its own; this alias carries
/// failures surfaced by collaborators (an unresolvable field selector, for
/// example) through to the caller unchanged.
pub type Result<T> = anyhow::Result<T>;
