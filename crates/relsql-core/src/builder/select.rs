//! Staged SELECT builder using the typestate pattern.
//!
//! Clause order is enforced at compile time: the select list comes first,
//! FROM second, and joins, WHERE, ORDER BY and paging only after FROM.
//! [`SelectBuilder::build`] validates table imports before handing out the
//! immutable [`Select`].

use std::marker::PhantomData;

use tracing::debug;

use crate::ast::{Condition, Expression, Join, JoinType, Literal, OrderByField, Select, Table};
use crate::error::{Result, SqlError};
use crate::validator;
use crate::visitor::{Node, Visitor};

// Typestate markers (zero-sized types)

/// Marker: No select list specified yet.
pub struct NoColumns;
/// Marker: The select list has been specified.
pub struct HasColumns;
/// Marker: No FROM clause specified yet.
pub struct NoFrom;
/// Marker: FROM clause has been specified.
pub struct HasFrom;

/// A SELECT statement builder.
///
/// Uses the typestate pattern to ensure that:
/// - `from()` is only available after the select list
/// - joins, `where_clause()` and `order_by()` are only available after FROM
/// - `build()` is only available when both the select list and FROM are set
pub struct SelectBuilder<Cols, From> {
    distinct: bool,
    select_list: Vec<Expression>,
    from: Vec<Table>,
    joins: Vec<Join>,
    where_clause: Option<Condition>,
    order_by: Vec<OrderByField>,
    limit: Option<u64>,
    offset: Option<u64>,
    _state: PhantomData<(Cols, From)>,
}

impl Select {
    /// Starts building a SELECT statement.
    #[must_use]
    pub fn builder() -> SelectBuilder<NoColumns, NoFrom> {
        SelectBuilder::new()
    }
}

impl SelectBuilder<NoColumns, NoFrom> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            distinct: false,
            select_list: vec![],
            from: vec![],
            joins: vec![],
            where_clause: None,
            order_by: vec![],
            limit: None,
            offset: None,
            _state: PhantomData,
        }
    }

    /// Specifies the select list.
    #[must_use]
    pub fn select<I, E>(self, expressions: I) -> SelectBuilder<HasColumns, NoFrom>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        SelectBuilder {
            distinct: self.distinct,
            select_list: expressions.into_iter().map(Into::into).collect(),
            from: self.from,
            joins: self.joins,
            where_clause: self.where_clause,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
            _state: PhantomData,
        }
    }
}

impl Default for SelectBuilder<NoColumns, NoFrom> {
    fn default() -> Self {
        Self::new()
    }
}

// Methods available with a select list
impl<From> SelectBuilder<HasColumns, From> {
    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

// Transition: NoFrom -> HasFrom
impl SelectBuilder<HasColumns, NoFrom> {
    /// Specifies the tables to select from.
    #[must_use]
    pub fn from<I>(self, tables: I) -> SelectBuilder<HasColumns, HasFrom>
    where
        I: IntoIterator<Item = Table>,
    {
        SelectBuilder {
            distinct: self.distinct,
            select_list: self.select_list,
            from: tables.into_iter().collect(),
            joins: self.joins,
            where_clause: self.where_clause,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
            _state: PhantomData,
        }
    }
}

// Methods available after FROM
impl SelectBuilder<HasColumns, HasFrom> {
    fn push_join(mut self, join_type: JoinType, table: Table, on: Condition) -> Self {
        self.joins.push(Join {
            join_type,
            table,
            on,
        });
        self
    }

    /// Adds an inner JOIN.
    #[must_use]
    pub fn join(self, table: Table, on: Condition) -> Self {
        self.push_join(JoinType::Inner, table, on)
    }

    /// Adds a LEFT OUTER JOIN.
    #[must_use]
    pub fn left_outer_join(self, table: Table, on: Condition) -> Self {
        self.push_join(JoinType::LeftOuter, table, on)
    }

    /// Adds a RIGHT OUTER JOIN.
    #[must_use]
    pub fn right_outer_join(self, table: Table, on: Condition) -> Self {
        self.push_join(JoinType::RightOuter, table, on)
    }

    /// Adds a FULL OUTER JOIN.
    #[must_use]
    pub fn full_outer_join(self, table: Table, on: Condition) -> Self {
        self.push_join(JoinType::FullOuter, table, on)
    }

    /// Sets the WHERE clause, replacing any previous one.
    #[must_use]
    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// ANDs `condition` onto the WHERE clause.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    /// ORs `condition` onto the WHERE clause.
    #[must_use]
    pub fn or(mut self, condition: Condition) -> Self {
        self.where_clause = Some(match self.where_clause.take() {
            Some(existing) => existing.or(condition),
            None => condition,
        });
        self
    }

    /// Appends ORDER BY fields.
    #[must_use]
    pub fn order_by<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<OrderByField>,
    {
        self.order_by.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Limits the number of rows.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skips the first `n` rows.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Validates and builds the statement.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if the select list or FROM is
    /// empty or a node was constructed in a shape its factory rejects, and
    /// [`SqlError::Validation`] if a table referenced by the select list,
    /// WHERE or ORDER BY is not imported by FROM or JOIN.
    pub fn build(self) -> Result<Select> {
        if self.select_list.is_empty() {
            return Err(SqlError::invalid("select list must not be empty"));
        }
        if self.from.is_empty() {
            return Err(SqlError::invalid("FROM must name at least one table"));
        }

        let select = Select {
            distinct: self.distinct,
            select_list: self.select_list,
            from: self.from,
            joins: self.joins,
            where_clause: self.where_clause,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
        };
        select.visit(&mut ShapeCheck)?;
        if let Err(err) = validator::validate(&select) {
            debug!(error = %err, "Statement failed validation");
            return Err(err);
        }
        Ok(select)
    }
}

/// Rejects hand-built nodes that the factories would not produce.
struct ShapeCheck;

impl<'a> Visitor<'a> for ShapeCheck {
    fn enter(&mut self, node: Node<'a>) -> Result<()> {
        match node {
            Node::Expression(Expression::Raw(text)) | Node::Condition(Condition::Raw(text))
                if text.trim().is_empty() =>
            {
                Err(SqlError::invalid("raw SQL text must not be empty"))
            }
            Node::Expression(Expression::Function(function)) if function.name.trim().is_empty() => {
                Err(SqlError::invalid("function name must not be empty"))
            }
            Node::Expression(Expression::Literal(Literal::Float(value))) if !value.is_finite() => {
                Err(SqlError::invalid(format!("float literal must be finite, got {value}")))
            }
            Node::Condition(Condition::In { args, .. }) if args.is_empty() => {
                Err(SqlError::invalid("IN list must not be empty"))
            }
            _ => Ok(()),
        }
    }

    fn leave(&mut self, _node: Node<'a>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Conditions;

    #[test]
    fn test_builds_plain_select() {
        let users = Table::create("users").unwrap();
        let select = Select::builder()
            .select(users.columns(["id", "name"]).unwrap())
            .distinct()
            .from([users])
            .limit(3)
            .build()
            .unwrap();

        assert!(select.is_distinct());
        assert_eq!(select.select_list().len(), 2);
        assert_eq!(select.from().len(), 1);
        assert_eq!(select.limit(), Some(3));
        assert_eq!(select.offset(), None);
    }

    #[test]
    fn test_and_or_combine_where() {
        let users = Table::create("users").unwrap();
        let id = users.column("id").unwrap();
        let select = Select::builder()
            .select([&id])
            .from([users])
            .and(Conditions::is_not_null(&id))
            .or(Conditions::just("1 = 1").unwrap())
            .build()
            .unwrap();

        assert_eq!(select.where_clause().map(Condition::kind), Some("OrCondition"));
    }

    #[test]
    fn test_empty_clauses_rejected() {
        let users = Table::create("users").unwrap();
        let empty: [Expression; 0] = [];
        assert!(matches!(
            Select::builder().select(empty).from([users]).build(),
            Err(SqlError::InvalidArgument(_))
        ));

        let no_tables: [Table; 0] = [];
        assert!(matches!(
            Select::builder()
                .select([Expression::Asterisk(None)])
                .from(no_tables)
                .build(),
            Err(SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_hand_built_nodes_are_checked() {
        let users = Table::create("users").unwrap();
        let id = users.column("id").unwrap();
        let empty_in = Condition::In {
            left: id.clone().into(),
            args: vec![],
            negated: false,
        };
        assert!(matches!(
            Select::builder()
                .select([&id])
                .from([users.clone()])
                .where_clause(empty_in)
                .build(),
            Err(SqlError::InvalidArgument(_))
        ));

        assert!(matches!(
            Select::builder()
                .select([Expression::Raw(String::new())])
                .from([users.clone()])
                .build(),
            Err(SqlError::InvalidArgument(_))
        ));

        let nan = Expression::Literal(Literal::Float(f64::NAN));
        assert!(matches!(
            Select::builder()
                .select([&id])
                .from([users])
                .where_clause(Conditions::is_equal(&id, nan))
                .build(),
            Err(SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_joins_keep_order() {
        let a = Table::create("a").unwrap();
        let b = Table::create("b").unwrap();
        let c = Table::create("c").unwrap();
        let on_b = Conditions::is_equal(a.column("id").unwrap(), b.column("a_id").unwrap());
        let on_c = Conditions::is_equal(b.column("id").unwrap(), c.column("b_id").unwrap());
        let select = Select::builder()
            .select([a.asterisk()])
            .from([a])
            .join(b, on_b)
            .full_outer_join(c, on_c)
            .build()
            .unwrap();

        let types: Vec<_> = select.joins().iter().map(Join::join_type).collect();
        assert_eq!(types, vec![JoinType::Inner, JoinType::FullOuter]);
    }

    // This would fail to compile: FROM before the select list
    // #[test]
    // fn test_from_before_select_fails() {
    //     let _ = Select::builder().from([users]);  // Error: method `from` not found
    // }
}
