//! Condition factories.

use crate::ast::{Comparator, Condition, Expression, Select};
use crate::error::{Result, SqlError};

/// Stateless factory for [`Condition`] nodes.
///
/// Factories whose inputs cannot be missing are infallible; those taking
/// text or collections reject empty input with
/// [`SqlError::InvalidArgument`].
#[derive(Debug, Clone, Copy)]
pub struct Conditions;

impl Conditions {
    fn comparison(
        left: impl Into<Expression>,
        comparator: Comparator,
        right: impl Into<Expression>,
    ) -> Condition {
        Condition::Comparison {
            left: left.into(),
            comparator,
            right: right.into(),
        }
    }

    /// `left = right`
    #[must_use]
    pub fn is_equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Condition {
        Self::comparison(left, Comparator::Eq, right)
    }

    /// `left != right`
    #[must_use]
    pub fn is_not_equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Condition {
        Self::comparison(left, Comparator::NotEq, right)
    }

    /// `left < right`
    #[must_use]
    pub fn is_less(left: impl Into<Expression>, right: impl Into<Expression>) -> Condition {
        Self::comparison(left, Comparator::Lt, right)
    }

    /// `left <= right`
    #[must_use]
    pub fn is_less_or_equal_to(
        left: impl Into<Expression>,
        right: impl Into<Expression>,
    ) -> Condition {
        Self::comparison(left, Comparator::LtEq, right)
    }

    /// `left > right`
    #[must_use]
    pub fn is_greater(left: impl Into<Expression>, right: impl Into<Expression>) -> Condition {
        Self::comparison(left, Comparator::Gt, right)
    }

    /// `left >= right`
    #[must_use]
    pub fn is_greater_or_equal_to(
        left: impl Into<Expression>,
        right: impl Into<Expression>,
    ) -> Condition {
        Self::comparison(left, Comparator::GtEq, right)
    }

    /// Compares with an operator given as text (`=`, `!=`, `<>`, `<`, `<=`,
    /// `>`, `>=`).
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] for an unknown operator.
    pub fn compare(
        left: impl Into<Expression>,
        comparator: &str,
        right: impl Into<Expression>,
    ) -> Result<Condition> {
        Ok(Self::comparison(left, comparator.parse()?, right))
    }

    /// `left LIKE right`
    #[must_use]
    pub fn like(left: impl Into<Expression>, right: impl Into<Expression>) -> Condition {
        Condition::Like {
            left: left.into(),
            right: right.into(),
        }
    }

    fn in_args<I, E>(left: impl Into<Expression>, args: I, negated: bool) -> Result<Condition>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let args: Vec<Expression> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(SqlError::invalid("IN requires at least one argument"));
        }
        Ok(Condition::In {
            left: left.into(),
            args,
            negated,
        })
    }

    /// `left IN (arg)`
    #[must_use]
    pub fn in_one(left: impl Into<Expression>, arg: impl Into<Expression>) -> Condition {
        Condition::In {
            left: left.into(),
            args: vec![arg.into()],
            negated: false,
        }
    }

    /// `left IN (a, b, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `args` is empty.
    pub fn in_list<I, E>(left: impl Into<Expression>, args: I) -> Result<Condition>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self::in_args(left, args, false)
    }

    /// `left IN (SELECT ...)`
    #[must_use]
    pub fn in_select(left: impl Into<Expression>, select: Select) -> Condition {
        Self::in_one(left, select)
    }

    /// `left NOT IN (arg)`
    #[must_use]
    pub fn not_in_one(left: impl Into<Expression>, arg: impl Into<Expression>) -> Condition {
        Condition::In {
            left: left.into(),
            args: vec![arg.into()],
            negated: true,
        }
    }

    /// `left NOT IN (a, b, ...)`
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `args` is empty.
    pub fn not_in_list<I, E>(left: impl Into<Expression>, args: I) -> Result<Condition>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self::in_args(left, args, true)
    }

    /// `left NOT IN (SELECT ...)`
    #[must_use]
    pub fn not_in_select(left: impl Into<Expression>, select: Select) -> Condition {
        Self::not_in_one(left, select)
    }

    /// `operand IS NULL`
    #[must_use]
    pub fn is_null(operand: impl Into<Expression>) -> Condition {
        Condition::IsNull {
            operand: operand.into(),
            negated: false,
        }
    }

    /// `operand IS NOT NULL`
    #[must_use]
    pub fn is_not_null(operand: impl Into<Expression>) -> Condition {
        Condition::IsNull {
            operand: operand.into(),
            negated: true,
        }
    }

    /// `(inner)`
    #[must_use]
    pub fn nest(inner: Condition) -> Condition {
        inner.nest()
    }

    /// A condition given as raw SQL text.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidArgument`] if `text` is blank.
    pub fn just(text: impl Into<String>) -> Result<Condition> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SqlError::invalid("raw condition must not be empty"));
        }
        Ok(Condition::Raw(text))
    }

    /// `left AND right`
    #[must_use]
    pub fn and(left: Condition, right: Condition) -> Condition {
        left.and(right)
    }

    /// `left OR right`
    #[must_use]
    pub fn or(left: Condition, right: Condition) -> Condition {
        left.or(right)
    }

    /// `NOT inner`
    #[must_use]
    pub fn not(inner: Condition) -> Condition {
        inner.not()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Table;

    #[test]
    fn test_comparisons() {
        let users = Table::create("users").unwrap();
        let age = users.column("age").unwrap();
        let cases = [
            (Conditions::is_equal(&age, &age), Comparator::Eq),
            (Conditions::is_not_equal(&age, &age), Comparator::NotEq),
            (Conditions::is_less(&age, &age), Comparator::Lt),
            (Conditions::is_less_or_equal_to(&age, &age), Comparator::LtEq),
            (Conditions::is_greater(&age, &age), Comparator::Gt),
            (Conditions::is_greater_or_equal_to(&age, &age), Comparator::GtEq),
        ];
        for (condition, expected) in cases {
            assert!(matches!(
                condition,
                Condition::Comparison { comparator, .. } if comparator == expected
            ));
        }
    }

    #[test]
    fn test_compare_rejects_unknown_operator() {
        let users = Table::create("users").unwrap();
        let age = users.column("age").unwrap();
        assert!(matches!(
            Conditions::compare(&age, "===", &age),
            Err(SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_in_list_rejects_empty() {
        let users = Table::create("users").unwrap();
        let id = users.column("id").unwrap();
        let empty: Vec<Expression> = vec![];
        assert!(matches!(
            Conditions::in_list(&id, empty),
            Err(SqlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_in_select_wraps_sub_select() {
        let floo = Table::create("floo").unwrap();
        let bah = floo.column("bah").unwrap();
        let inner = Select::builder().select([&bah]).from([floo]).build().unwrap();
        let users = Table::create("users").unwrap();
        let condition = Conditions::not_in_select(users.column("id").unwrap(), inner);
        assert!(matches!(
            &condition,
            Condition::In { args, negated: true, .. } if matches!(args.as_slice(), [Expression::SubSelect(_)])
        ));
    }

    #[test]
    fn test_just_rejects_blank() {
        assert!(matches!(Conditions::just("  "), Err(SqlError::InvalidArgument(_))));
        assert!(matches!(Conditions::just("1 = 1"), Ok(Condition::Raw(_))));
    }
}
