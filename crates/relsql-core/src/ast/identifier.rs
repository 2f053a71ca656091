//! SQL identifiers.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{Result, SqlError};

/// A table, column or alias name.
///
/// Two identifiers are equal when their names are equal. Whether an
/// identifier is quoted only changes how it is rendered.
#[derive(Debug, Clone)]
pub struct Identifier {
    name: String,
    quoted: bool,
}

impl Identifier {
    /// Creates an identifier rendered as-is.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `name` is empty or blank.
    pub fn unquoted(name: impl Into<String>) -> Result<Self> {
        Self::new(name.into(), false)
    }

    /// Creates an identifier rendered with the dialect's quote character.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `name` is empty or blank.
    pub fn quoted(name: impl Into<String>) -> Result<Self> {
        Self::new(name.into(), true)
    }

    fn new(name: String, quoted: bool) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SqlError::invalid("name must not be empty"));
        }
        Ok(Self { name, quoted })
    }

    /// Returns the raw name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the identifier was declared quoted.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Renders the identifier, quoting it with `quote` when `quoted` is set.
    ///
    /// Embedded quote characters are doubled.
    #[must_use]
    pub fn to_sql_with(&self, quote: char, quoted: bool) -> String {
        if !quoted {
            return self.name.clone();
        }
        quote_name(&self.name, quote)
    }

    /// Renders the identifier, quoting it only if it was declared quoted.
    #[must_use]
    pub fn to_sql(&self, quote: char) -> String {
        self.to_sql_with(quote, self.quoted)
    }
}

/// Wraps `name` in `quote`, doubling embedded quote characters.
pub(crate) fn quote_name(name: &str, quote: char) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    out
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
