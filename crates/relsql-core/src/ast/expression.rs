//! Expression AST types.

use super::{Column, Identifier, Select, Table};

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

impl Literal {
    /// Returns the SQL representation, escaping string quotes as `''`.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Boolean(true) => String::from("TRUE"),
            Self::Boolean(false) => String::from("FALSE"),
            Self::Null => String::from("NULL"),
        }
    }
}

/// A function call such as `COUNT(users.id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub(crate) name: String,
    pub(crate) args: Vec<Expression>,
}

impl Function {
    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments.
    #[must_use]
    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A column qualified by its table.
    Column(Column),
    /// Raw SQL text, rendered verbatim.
    Raw(String),
    /// `*`, or `<table>.*` when a table is given.
    Asterisk(Option<Table>),
    /// A nested SELECT, rendered in parentheses.
    SubSelect(Box<Select>),
    /// A literal value.
    Literal(Literal),
    /// A bind marker: `?` or `:name`.
    BindMarker(Option<Identifier>),
    /// A function call.
    Function(Function),
}

impl Expression {
    /// Returns a short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Column(_) => "Column",
            Self::Raw(_) => "RawExpression",
            Self::Asterisk(None) => "Asterisk",
            Self::Asterisk(Some(_)) => "AsteriskFromTable",
            Self::SubSelect(_) => "SubSelectExpression",
            Self::Literal(_) => "Literal",
            Self::BindMarker(_) => "BindMarker",
            Self::Function(_) => "Function",
        }
    }

    /// Returns the column if this is a column reference.
    #[must_use]
    pub const fn as_column(&self) -> Option<&Column> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl From<Column> for Expression {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<&Column> for Expression {
    fn from(column: &Column) -> Self {
        Self::Column(column.clone())
    }
}

impl From<Select> for Expression {
    fn from(select: Select) -> Self {
        Self::SubSelect(Box::new(select))
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_to_sql() {
        assert_eq!(Literal::Integer(42).to_sql(), "42");
        assert_eq!(Literal::Float(1.5).to_sql(), "1.5");
        assert_eq!(Literal::String(String::from("O'Brien")).to_sql(), "'O''Brien'");
        assert_eq!(Literal::Boolean(true).to_sql(), "TRUE");
        assert_eq!(Literal::Null.to_sql(), "NULL");
    }

    #[test]
    fn test_expression_kind() {
        let table = Table::create("users").unwrap();
        assert_eq!(Expression::Asterisk(None).kind(), "Asterisk");
        assert_eq!(table.asterisk().kind(), "AsteriskFromTable");
        let col: Expression = table.column("id").unwrap().into();
        assert_eq!(col.kind(), "Column");
        assert!(col.as_column().is_some());
    }
}
