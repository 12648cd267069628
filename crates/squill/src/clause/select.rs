use super::{AggregateFunc, ColumnEntry};

use squill_core::{
    AliasRegistry, Dialect, Entity, EntityResolver, Field, Fields, Result, SqlBuilder,
};

use std::rc::Rc;

/// The SELECT clause of a fluent SQL query builder.
///
/// Accumulates projection entries in call order and renders them on demand;
/// insertion order is render order and matches the eventual result-column
/// order. An empty clause renders as `SELECT *`.
///
/// Blank or absent inputs to any mutator are silent no-ops, never errors, so
/// callers can chain conditional construction without guarding. The only
/// failures that pass through are those raised by the entity resolver for
/// genuinely unresolvable selectors; the clause neither catches nor wraps
/// them.
///
/// A clause is a plain single-threaded accumulator with no internal
/// synchronization. [`clone_with`](SelectClause::clone_with) is the
/// sanctioned fan-out mechanism: it produces an independent entry sequence
/// bound to a nested builder scope, leaving the parent free to keep mutating.
pub struct SelectClause {
    /// Owning builder; used to spawn nested builders for sub-query columns.
    builder: Rc<dyn SqlBuilder>,

    /// Identifier quoting, shared read-only with clones.
    dialect: Rc<dyn Dialect>,

    /// Field-selector resolution, shared read-only with clones.
    resolver: Rc<dyn EntityResolver>,

    /// Table aliases for the current query scope, consulted at render time.
    registry: Rc<dyn AliasRegistry>,

    entries: Vec<ColumnEntry>,

    distinct: bool,
}

impl std::fmt::Debug for SelectClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectClause")
            .field("entries", &self.entries)
            .field("distinct", &self.distinct)
            .finish_non_exhaustive()
    }
}

impl SelectClause {
    pub fn new(
        builder: Rc<dyn SqlBuilder>,
        dialect: Rc<dyn Dialect>,
        resolver: Rc<dyn EntityResolver>,
        registry: Rc<dyn AliasRegistry>,
    ) -> Self {
        Self {
            builder,
            dialect,
            resolver,
            registry,
            entries: vec![],
            distinct: false,
        }
    }

    /// Returns an independent clause bound to a new builder/registry pair.
    ///
    /// The entry sequence is copied so parent and clone can be mutated
    /// independently; entry values are immutable snapshots. The `distinct`
    /// flag is reset because a clone starts a fresh nested SELECT rather
    /// than continuing the parent's.
    pub fn clone_with(
        &self,
        builder: Rc<dyn SqlBuilder>,
        registry: Rc<dyn AliasRegistry>,
    ) -> Self {
        Self {
            builder,
            dialect: Rc::clone(&self.dialect),
            resolver: Rc::clone(&self.resolver),
            registry,
            entries: self.entries.clone(),
            distinct: false,
        }
    }

    /// Filters duplicate rows. Idempotent.
    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Projects `COUNT(*)`, with an optional quoted column alias.
    pub fn count(&mut self, column_alias: Option<&str>) -> &mut Self {
        match non_blank(column_alias) {
            None => self.push_aggregate("COUNT(*)".to_string()),
            Some(alias) => {
                let sql = format!("COUNT(*) AS {}", self.dialect.safe_name(alias));
                self.push_aggregate(sql)
            }
        }
    }

    pub fn count_column(&mut self, column: &str, column_alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Count, column, column_alias)
    }

    pub fn sum(&mut self, column: &str, column_alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Sum, column, column_alias)
    }

    pub fn avg(&mut self, column: &str, column_alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Avg, column, column_alias)
    }

    pub fn max(&mut self, column: &str, column_alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Max, column, column_alias)
    }

    pub fn min(&mut self, column: &str, column_alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Min, column, column_alias)
    }

    /// Projects `<FUNC>(<quoted column>)`, with an optional quoted column
    /// alias. The named aggregate methods all funnel through here.
    pub fn aggregate(
        &mut self,
        func: AggregateFunc,
        column: &str,
        column_alias: Option<&str>,
    ) -> &mut Self {
        if is_blank(column) {
            return self;
        }

        let column = self.dialect.safe_name(column);
        let sql = match non_blank(column_alias) {
            None => format!("{}({column})", func.as_str()),
            Some(alias) => format!(
                "{}({column}) AS {}",
                func.as_str(),
                self.dialect.safe_name(alias)
            ),
        };
        self.push_aggregate(sql)
    }

    pub fn count_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        self.aggregate_field(AggregateFunc::Count, selector, column_alias)
    }

    pub fn sum_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        self.aggregate_field(AggregateFunc::Sum, selector, column_alias)
    }

    pub fn avg_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        self.aggregate_field(AggregateFunc::Avg, selector, column_alias)
    }

    pub fn max_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        self.aggregate_field(AggregateFunc::Max, selector, column_alias)
    }

    pub fn min_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        self.aggregate_field(AggregateFunc::Min, selector, column_alias)
    }

    /// Projects the given column text verbatim, optionally qualified by an
    /// explicit table alias at render time.
    pub fn select(&mut self, columns: &str, table_alias: Option<&str>) -> &mut Self {
        if is_blank(columns) {
            return self;
        }

        let table_alias = non_blank(table_alias).map(str::to_string);
        self.entries.push(ColumnEntry::single(columns, table_alias));
        self
    }

    /// Projects an ordered list of entity fields as one column group.
    ///
    /// When `property_as_alias` is set, the resolver suffixes each column
    /// with `AS <field>`. The group is tagged with the entity type so the
    /// table alias can be resolved at render time.
    pub fn select_fields<E: Entity>(
        &mut self,
        selector: Option<&Fields<E>>,
        property_as_alias: bool,
    ) -> Result<&mut Self> {
        let Some(selector) = selector else {
            return Ok(self);
        };

        let columns = self
            .resolver
            .columns(selector.entity(), selector.names(), property_as_alias)?;
        self.entries
            .push(ColumnEntry::group(columns, selector.entity()));
        Ok(self)
    }

    /// Projects one entity field.
    ///
    /// When the resolved text does not already contain an `AS` clause and
    /// `column_alias` is non-blank, the alias is appended as an unquoted
    /// literal suffix. The aggregate methods quote their aliases through the
    /// dialect instead; that asymmetry is part of the emitted-SQL contract.
    pub fn select_field<E: Entity>(
        &mut self,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        let Some(selector) = selector else {
            return Ok(self);
        };

        let mut column = self.resolver.column(selector.entity(), selector.name())?;
        if !column.contains(" AS ") {
            if let Some(alias) = non_blank(column_alias) {
                column.push_str(" AS ");
                column.push_str(alias);
            }
        }

        self.entries
            .push(ColumnEntry::typed(column, selector.entity()));
        Ok(self)
    }

    /// Projects a sub-query as a column.
    ///
    /// With a non-blank alias the rendered text becomes
    /// `(<sql>) AS <quoted alias>`; without one the sub-query text is
    /// embedded as-is. Either way the result is a raw entry and manages its
    /// own punctuation.
    pub fn select_query(
        &mut self,
        builder: Option<&dyn SqlBuilder>,
        column_alias: Option<&str>,
    ) -> &mut Self {
        let Some(builder) = builder else {
            return self;
        };

        let mut sql = builder.to_sql();
        if let Some(alias) = non_blank(column_alias) {
            sql = format!("({sql}) AS {}", self.dialect.safe_name(alias));
        }
        self.append_sql(&sql)
    }

    /// Projects a sub-query built by `configure` against a fresh nested
    /// builder obtained from the owning builder.
    pub fn select_query_with<F>(
        &mut self,
        configure: Option<F>,
        column_alias: Option<&str>,
    ) -> &mut Self
    where
        F: FnOnce(&mut dyn SqlBuilder),
    {
        let Some(configure) = configure else {
            return self;
        };

        let mut nested = self.builder.new_builder();
        configure(nested.as_mut());
        self.select_query(Some(nested.as_ref()), column_alias)
    }

    /// Appends a raw fragment to the projection list verbatim.
    pub fn append_sql(&mut self, sql: &str) -> &mut Self {
        if is_blank(sql) {
            return self;
        }

        self.entries.push(ColumnEntry::raw(sql));
        self
    }

    /// True iff any projected entry is an aggregate expression.
    pub fn is_aggregation(&self) -> bool {
        self.entries.iter().any(ColumnEntry::is_aggregation)
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn entries(&self) -> &[ColumnEntry] {
        &self.entries
    }

    /// Renders the clause. Pure and uncached; repeated calls on an
    /// unmutated clause return identical text.
    pub fn to_sql(&self) -> String {
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.render_columns());
        sql
    }

    fn render_columns(&self) -> String {
        if self.entries.is_empty() {
            return "*".to_string();
        }

        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.render(&*self.registry));
            // Raw entries carry their own punctuation.
            if !entry.is_raw() {
                out.push(',');
            }
        }

        out.trim_end_matches(',').to_string()
    }

    fn aggregate_field<E: Entity>(
        &mut self,
        func: AggregateFunc,
        selector: Option<&Field<E>>,
        column_alias: Option<&str>,
    ) -> Result<&mut Self> {
        let Some(selector) = selector else {
            return Ok(self);
        };

        let column = self.resolver.column(selector.entity(), selector.name())?;
        Ok(self.aggregate(func, &column, column_alias))
    }

    fn push_aggregate(&mut self, sql: String) -> &mut Self {
        self.entries.push(ColumnEntry::aggregate(sql));
        self
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
