mod aggregate;
pub use aggregate::AggregateFunc;

mod column_entry;
pub use column_entry::ColumnEntry;

mod select;
pub use select::SelectClause;
