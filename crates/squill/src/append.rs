use squill_core::{Clause, SqlBuilder};

/// Conditional fragment appending, uniform across every clause kind.
///
/// The logic lives once in [`append_if`](SqlBuilderExt::append_if),
/// parameterized over the [`Clause`] tag; the per-clause methods are thin
/// conveniences so call sites read like the unconditional append API.
pub trait SqlBuilderExt: SqlBuilder {
    /// Appends `sql` to the tagged clause iff `condition` is true, then
    /// returns the builder for chaining.
    fn append_if(&mut self, clause: Clause, sql: &str, condition: bool) -> &mut Self {
        if condition {
            self.append(clause, sql);
        }
        self
    }

    fn append_select_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::Select, sql, condition)
    }

    fn append_from_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::From, sql, condition)
    }

    fn append_join_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::Join, sql, condition)
    }

    fn append_left_join_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::LeftJoin, sql, condition)
    }

    fn append_right_join_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::RightJoin, sql, condition)
    }

    fn append_where_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::Where, sql, condition)
    }

    fn append_group_by_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::GroupBy, sql, condition)
    }

    fn append_order_by_if(&mut self, sql: &str, condition: bool) -> &mut Self {
        self.append_if(Clause::OrderBy, sql, condition)
    }
}

impl<B: SqlBuilder + ?Sized> SqlBuilderExt for B {}
