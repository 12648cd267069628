use crate::{EntityId, Result};

/// Translates typed field selectors into column references.
///
/// Resolvers are expected to be stateless and reentrant; one instance is
/// shared read-only between a clause and all of its clones.
pub trait EntityResolver {
    /// Resolves one field to a column reference.
    ///
    /// The returned text may already carry dialect quoting or an embedded
    /// `AS` clause depending on resolver configuration; the clause engine
    /// treats it as opaque. Fails when the field is not mapped.
    fn column(&self, entity: EntityId, field: &str) -> Result<String>;

    /// Resolves an ordered list of fields to column references.
    ///
    /// When `property_as_alias` is set, each column is suffixed with
    /// `AS <field>` so the result set mirrors the entity's field names.
    fn columns(
        &self,
        entity: EntityId,
        fields: &[&'static str],
        property_as_alias: bool,
    ) -> Result<Vec<String>>;
}
