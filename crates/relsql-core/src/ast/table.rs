//! Table and column references.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::{Expression, Identifier};
use crate::error::Result;

/// A table reference, used in FROM and JOIN and to qualify columns.
///
/// Unaliased tables are identified by their name. Once aliased, a table is
/// identified by its alias only.
#[derive(Debug, Clone)]
pub struct Table {
    name: Identifier,
    alias: Option<Identifier>,
}

impl Table {
    /// Creates a table from its name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if `name` is empty.
    pub fn create(name: impl Into<String>) -> Result<Self> {
        Ok(Self::from_identifier(Identifier::unquoted(name)?))
    }

    /// Creates a table from an identifier.
    #[must_use]
    pub const fn from_identifier(name: Identifier) -> Self {
        Self { name, alias: None }
    }

    /// Creates an aliased table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if `name` or `alias` is
    /// empty.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Result<Self> {
        Self::create(name)?.alias(alias)
    }

    /// Returns this table aliased to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if `alias` is empty.
    pub fn alias(self, alias: impl Into<String>) -> Result<Self> {
        Ok(self.alias_identifier(Identifier::unquoted(alias)?))
    }

    /// Returns this table aliased to the identifier `alias`.
    #[must_use]
    pub fn alias_identifier(self, alias: Identifier) -> Self {
        Self {
            name: self.name,
            alias: Some(alias),
        }
    }

    /// Returns the table name.
    #[must_use]
    pub const fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the alias, if any.
    #[must_use]
    pub const fn alias_name(&self) -> Option<&Identifier> {
        self.alias.as_ref()
    }

    /// Returns the name other clauses use to refer to this table.
    #[must_use]
    pub fn reference_name(&self) -> &Identifier {
        self.alias.as_ref().unwrap_or(&self.name)
    }

    /// Creates a column qualified by this table.
    ///
    /// The table does not keep track of the columns created from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if `name` is empty.
    pub fn column(&self, name: impl Into<String>) -> Result<Column> {
        Ok(Column::new(Identifier::unquoted(name)?, self.clone()))
    }

    /// Creates several columns qualified by this table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if any name is empty.
    pub fn columns<I, S>(&self, names: I) -> Result<Vec<Column>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| self.column(name)).collect()
    }

    /// Creates a `<table>.*` select-list entry.
    #[must_use]
    pub fn asterisk(&self) -> Expression {
        Expression::Asterisk(Some(self.clone()))
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        match (&self.alias, &other.alias) {
            (None, None) => self.name == other.name,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alias.is_some().hash(state);
        self.reference_name().hash(state);
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} AS {alias}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A column bound to the table it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: Identifier,
    table: Table,
}

impl Column {
    /// Creates a column of `table`.
    #[must_use]
    pub const fn new(name: Identifier, table: Table) -> Self {
        Self { name, table }
    }

    /// Creates a column from a table name and a column name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SqlError::InvalidArgument`] if either name is empty.
    pub fn create(table: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        Table::create(table)?.column(name)
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the owning table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table.reference_name(), self.name)
    }
}
