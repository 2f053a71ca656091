//! Error types for statement construction, validation and rendering.

use core::fmt;

use crate::ast::Identifier;

/// The clause of a SELECT statement that required a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    /// A column (or table-scoped asterisk) in the select list.
    SelectColumn,
    /// A column used in the WHERE condition.
    WherePredicate,
    /// A column used in ORDER BY.
    OrderByColumn,
}

impl Clause {
    /// Returns the clause description used in validation messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectColumn => "SELECT column",
            Self::WherePredicate => "WHERE predicate",
            Self::OrderByColumn => "ORDER BY column",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table referenced by a statement that is not imported by FROM or JOIN.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Required table [{missing}] by a {clause} not imported by FROM [{}] or JOIN [{}]",
    join_names(.from),
    join_names(.join)
)]
pub struct ValidationError {
    /// The clause that referenced the table.
    pub clause: Clause,
    /// Reference name of the missing table.
    pub missing: Identifier,
    /// Reference names imported by FROM.
    pub from: Vec<Identifier>,
    /// Reference names imported by JOIN.
    pub join: Vec<Identifier>,
}

impl ValidationError {
    /// Returns every reference name the statement imports, FROM first.
    #[must_use]
    pub fn available(&self) -> Vec<&Identifier> {
        self.from.iter().chain(&self.join).collect()
    }
}

fn join_names(names: &[Identifier]) -> String {
    names
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while building, validating or rendering statements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// A factory was called with a missing or empty argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The statement references a table it does not import.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The traversal reached a node no renderer handles.
    #[error("internal error: {0}")]
    Internal(String),

    /// The dialect does not support the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl SqlError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the validation details if this is a validation failure.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for statement operations.
pub type Result<T> = std::result::Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = ValidationError {
            clause: Clause::OrderByColumn,
            missing: Identifier::unquoted("orders").unwrap(),
            from: vec![
                Identifier::unquoted("users").unwrap(),
                Identifier::unquoted("u2").unwrap(),
            ],
            join: vec![Identifier::unquoted("items").unwrap()],
        };
        assert_eq!(
            err.to_string(),
            "Required table [orders] by a ORDER BY column not imported by FROM [users, u2] or JOIN [items]"
        );
        assert_eq!(err.available().len(), 3);
    }

    #[test]
    fn test_sql_error_wraps_validation() {
        let err = SqlError::from(ValidationError {
            clause: Clause::SelectColumn,
            missing: Identifier::unquoted("t").unwrap(),
            from: vec![],
            join: vec![],
        });
        assert!(err.as_validation().is_some());
        assert_eq!(
            err.to_string(),
            "Required table [t] by a SELECT column not imported by FROM [] or JOIN []"
        );
    }
}
