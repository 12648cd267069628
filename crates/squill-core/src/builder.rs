/// Tags each clause of an enclosing query builder that can receive raw SQL
/// fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    From,
    Join,
    LeftJoin,
    RightJoin,
    Where,
    GroupBy,
    OrderBy,
}

/// Capabilities the clause engine consumes from an enclosing query builder.
///
/// The builder itself (FROM/JOIN/WHERE handling, parameter binding,
/// execution) lives outside this library; the select clause needs only the
/// ability to spawn a nested builder, render one to text, and push raw
/// fragments at a tagged clause.
pub trait SqlBuilder {
    /// Returns a fresh, independent builder for nested sub-query
    /// construction.
    fn new_builder(&self) -> Box<dyn SqlBuilder>;

    /// Renders the builder's full SQL text.
    fn to_sql(&self) -> String;

    /// Appends a raw fragment to the given clause.
    fn append(&mut self, clause: Clause, sql: &str);
}
