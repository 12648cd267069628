/// Identifier quoting rules for a target SQL engine.
///
/// The clause engine invokes quoting only where the fluent API explicitly
/// calls for it (aggregate column operands and explicitly quoted aliases);
/// everything else is emitted verbatim.
pub trait Dialect {
    /// Returns the dialect-quoted form of a bare identifier.
    fn safe_name(&self, ident: &str) -> String;
}

/// The database flavor handles the differences between SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Dialect for Flavor {
    fn safe_name(&self, ident: &str) -> String {
        // `*` is not an identifier and passes through unquoted.
        if ident == "*" {
            return ident.to_string();
        }

        match self {
            Flavor::Postgresql | Flavor::Sqlite => {
                format!("\"{}\"", ident.replace('"', "\"\""))
            }
            Flavor::Mysql => format!("`{}`", ident.replace('`', "``")),
        }
    }
}
