//! Expression and function factories.

use crate::ast::{Expression, Function, Identifier, Literal, Select, Table};
use crate::error::{Result, SqlError};

/// Stateless factory for [`Expression`] nodes.
#[derive(Debug, Clone, Copy)]
pub struct Expressions;

impl Expressions {
    /// `*`
    #[must_use]
    pub const fn asterisk() -> Expression {
        Expression::Asterisk(None)
    }

    /// `<table>.*`
    #[must_use]
    pub fn asterisk_from(table: &Table) -> Expression {
        table.asterisk()
    }

    /// An expression given as raw SQL text.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `text` is blank.
    pub fn just(text: impl Into<String>) -> Result<Expression> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SqlError::invalid("raw expression must not be empty"));
        }
        Ok(Expression::Raw(text))
    }

    /// A column of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `name` is blank.
    pub fn column(table: &Table, name: impl Into<String>) -> Result<Expression> {
        Ok(table.column(name)?.into())
    }

    /// A parenthesized sub-select.
    #[must_use]
    pub fn sub_select(select: Select) -> Expression {
        select.into()
    }

    /// An integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Expression {
        Expression::Literal(Literal::Integer(value))
    }

    /// A floating point literal.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `value` is NaN or infinite.
    pub fn float(value: f64) -> Result<Expression> {
        if !value.is_finite() {
            return Err(SqlError::invalid(format!("float literal must be finite, got {value}")));
        }
        Ok(Expression::Literal(Literal::Float(value)))
    }

    /// A string literal, quoted and escaped on rendering.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Expression {
        Expression::Literal(Literal::String(value.into()))
    }

    /// A boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Expression {
        Expression::Literal(Literal::Boolean(value))
    }

    /// `NULL`
    #[must_use]
    pub const fn null() -> Expression {
        Expression::Literal(Literal::Null)
    }

    /// A positional bind marker, `?`.
    #[must_use]
    pub const fn bind_marker() -> Expression {
        Expression::BindMarker(None)
    }

    /// A named bind marker, `:name`.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `name` is blank.
    pub fn named_bind_marker(name: impl Into<String>) -> Result<Expression> {
        Ok(Expression::BindMarker(Some(Identifier::unquoted(name)?)))
    }
}

/// Stateless factory for function calls.
#[derive(Debug, Clone, Copy)]
pub struct Functions;

impl Functions {
    fn builtin(name: &str, args: Vec<Expression>) -> Expression {
        Expression::Function(Function {
            name: name.to_owned(),
            args,
        })
    }

    /// `COUNT(expr)`
    #[must_use]
    pub fn count(expression: impl Into<Expression>) -> Expression {
        Self::builtin("COUNT", vec![expression.into()])
    }

    /// `UPPER(expr)`
    #[must_use]
    pub fn upper(expression: impl Into<Expression>) -> Expression {
        Self::builtin("UPPER", vec![expression.into()])
    }

    /// `LOWER(expr)`
    #[must_use]
    pub fn lower(expression: impl Into<Expression>) -> Expression {
        Self::builtin("LOWER", vec![expression.into()])
    }

    /// Calls an arbitrary function.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `name` is blank.
    pub fn call<I, E>(name: impl Into<String>, args: I) -> Result<Expression>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SqlError::invalid("function name must not be empty"));
        }
        Ok(Expression::Function(Function {
            name,
            args: args.into_iter().map(Into::into).collect(),
        }))
    }
}
