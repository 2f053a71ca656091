//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. This module
//! provides a trait for dialect-specific behavior and one stateless instance
//! per supported database.

mod ansi;
mod h2;
mod mysql;
mod postgres;
mod sqlserver;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

pub use ansi::AnsiDialect;
pub use h2::H2Dialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlserver::SqlServerDialect;

use crate::ast::{quote_name, DataType};
use crate::error::{Result, SqlError};

/// The ANSI dialect.
pub static ANSI: AnsiDialect = AnsiDialect::new();
/// The PostgreSQL dialect.
pub static POSTGRES: PostgresDialect = PostgresDialect::new();
/// The MySQL dialect.
pub static MYSQL: MySqlDialect = MySqlDialect::new();
/// The H2 dialect.
pub static H2: H2Dialect = H2Dialect::new();
/// The SQL Server dialect.
pub static SQL_SERVER: SqlServerDialect = SqlServerDialect::new();

/// Where the LIMIT/OFFSET clause goes in a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitPosition {
    /// Right after WHERE, before ORDER BY.
    AfterWhere,
    /// After ORDER BY, at the end of the statement.
    AfterOrderBy,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns where the LIMIT/OFFSET clause is placed.
    fn limit_position(&self) -> LimitPosition {
        LimitPosition::AfterOrderBy
    }

    /// Renders a clause limiting the result to `limit` rows.
    fn limit(&self, limit: u64) -> String;

    /// Renders a clause skipping the first `offset` rows.
    fn offset(&self, offset: u64) -> String;

    /// Renders a clause skipping `offset` rows and returning at most `limit`.
    fn limit_offset(&self, limit: u64, offset: u64) -> String;

    /// Returns the ORDER BY clause to emit when a statement is paged without
    /// one, for dialects that reject paging without ORDER BY.
    fn paging_order_by(&self) -> Option<&'static str> {
        None
    }

    /// Returns whether array columns are supported.
    fn supports_arrays(&self) -> bool {
        false
    }

    /// Returns the column type for an array of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Unsupported`] if the dialect has no array support.
    fn array_type(&self, element: &DataType) -> Result<DataType> {
        Err(SqlError::Unsupported(format!(
            "{} does not support arrays of {element}",
            self.name()
        )))
    }

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the keyword between a table name and its alias, if any.
    fn table_alias_keyword(&self) -> Option<&'static str> {
        Some("AS")
    }

    /// Quotes an identifier, doubling embedded quote characters.
    ///
    /// Every quoted identifier of a render goes through this method.
    fn quote_identifier(&self, name: &str) -> String {
        quote_name(name, self.identifier_quote())
    }
}

impl fmt::Debug for dyn Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect").field("name", &self.name()).finish()
    }
}

/// Renders the tail clause for an optional limit and offset.
pub(crate) fn tail_clause(
    dialect: &dyn Dialect,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Option<String> {
    match (limit, offset) {
        (Some(limit), Some(offset)) => Some(dialect.limit_offset(limit, offset)),
        (Some(limit), None) => Some(dialect.limit(limit)),
        (None, Some(offset)) => Some(dialect.offset(offset)),
        (None, None) => None,
    }
}

/// The built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// ANSI SQL.
    #[default]
    Ansi,
    /// PostgreSQL.
    Postgres,
    /// MySQL and MariaDB.
    MySql,
    /// H2.
    H2,
    /// Microsoft SQL Server.
    SqlServer,
}

impl DialectKind {
    /// All built-in dialects.
    pub const ALL: [Self; 5] = [
        Self::Ansi,
        Self::Postgres,
        Self::MySql,
        Self::H2,
        Self::SqlServer,
    ];

    /// Returns the shared dialect instance.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Ansi => &ANSI,
            Self::Postgres => &POSTGRES,
            Self::MySql => &MYSQL,
            Self::H2 => &H2,
            Self::SqlServer => &SQL_SERVER,
        }
    }
}

impl FromStr for DialectKind {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(Self::Ansi),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "h2" => Ok(Self::H2),
            "sqlserver" | "mssql" => Ok(Self::SqlServer),
            other => Err(SqlError::invalid(format!("unknown dialect '{other}'"))),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dialect().name())
    }
}
