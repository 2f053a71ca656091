//! SELECT statement AST types.

use super::{Column, Condition, Expression, Table};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByField {
    pub(crate) expression: Expression,
    pub(crate) direction: Option<OrderDirection>,
    pub(crate) nulls: Option<NullOrdering>,
}

impl OrderByField {
    /// Orders by `expression` without an explicit direction.
    #[must_use]
    pub fn of(expression: impl Into<Expression>) -> Self {
        Self {
            expression: expression.into(),
            direction: None,
            nulls: None,
        }
    }

    /// Sets ascending order.
    #[must_use]
    pub const fn asc(mut self) -> Self {
        self.direction = Some(OrderDirection::Asc);
        self
    }

    /// Sets descending order.
    #[must_use]
    pub const fn desc(mut self) -> Self {
        self.direction = Some(OrderDirection::Desc);
        self
    }

    /// Sets the null ordering.
    #[must_use]
    pub const fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = Some(nulls);
        self
    }

    /// Returns the ordered expression.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Returns the direction, if one was set.
    #[must_use]
    pub const fn direction(&self) -> Option<OrderDirection> {
        self.direction
    }

    /// Returns the null ordering, if one was set.
    #[must_use]
    pub const fn null_ordering(&self) -> Option<NullOrdering> {
        self.nulls
    }
}

impl From<Expression> for OrderByField {
    fn from(expression: Expression) -> Self {
        Self::of(expression)
    }
}

impl From<Column> for OrderByField {
    fn from(column: Column) -> Self {
        Self::of(column)
    }
}

impl From<&Column> for OrderByField {
    fn from(column: &Column) -> Self {
        Self::of(column)
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT OUTER JOIN.
    LeftOuter,
    /// RIGHT OUTER JOIN.
    RightOuter,
    /// FULL OUTER JOIN.
    FullOuter,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
        }
    }
}

/// A JOIN clause: the joined table and its ON condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub(crate) join_type: JoinType,
    pub(crate) table: Table,
    pub(crate) on: Condition,
}

impl Join {
    /// Returns the join type.
    #[must_use]
    pub const fn join_type(&self) -> JoinType {
        self.join_type
    }

    /// Returns the joined table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the join condition.
    #[must_use]
    pub const fn on(&self) -> &Condition {
        &self.on
    }
}

/// A validated SELECT statement.
///
/// Only obtainable through [`crate::builder::SelectBuilder::build`], which
/// rejects statements referencing tables they do not import.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub(crate) distinct: bool,
    pub(crate) select_list: Vec<Expression>,
    pub(crate) from: Vec<Table>,
    pub(crate) joins: Vec<Join>,
    pub(crate) where_clause: Option<Condition>,
    pub(crate) order_by: Vec<OrderByField>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl Select {
    /// Returns whether DISTINCT is set.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Returns the select list.
    #[must_use]
    pub fn select_list(&self) -> &[Expression] {
        &self.select_list
    }

    /// Returns the FROM tables.
    #[must_use]
    pub fn from(&self) -> &[Table] {
        &self.from
    }

    /// Returns the JOIN clauses.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Returns the WHERE condition.
    #[must_use]
    pub const fn where_clause(&self) -> Option<&Condition> {
        self.where_clause.as_ref()
    }

    /// Returns the ORDER BY fields.
    #[must_use]
    pub fn order_by(&self) -> &[OrderByField] {
        &self.order_by
    }

    /// Returns the row limit.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns the row offset.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_direction() {
        assert_eq!(OrderDirection::Asc.as_str(), "ASC");
        assert_eq!(OrderDirection::Desc.as_str(), "DESC");
        assert_eq!(NullOrdering::Last.as_str(), "NULLS LAST");
    }

    #[test]
    fn test_join_type() {
        assert_eq!(JoinType::Inner.as_str(), "JOIN");
        assert_eq!(JoinType::LeftOuter.as_str(), "LEFT OUTER JOIN");
    }

    #[test]
    fn test_order_by_field_builder() {
        let col = Table::create("users").unwrap().column("name").unwrap();
        let field = OrderByField::of(col).desc();
        assert_eq!(field.direction(), Some(OrderDirection::Desc));
        assert!(field.expression().as_column().is_some());
    }
}
