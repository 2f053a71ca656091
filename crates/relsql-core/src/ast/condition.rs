//! Condition AST types.

use core::str::FromStr;

use super::Expression;
use crate::error::SqlError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl Comparator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl FromStr for Comparator {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" => Ok(Self::Eq),
            "!=" | "<>" => Ok(Self::NotEq),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::LtEq),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::GtEq),
            other => Err(SqlError::invalid(format!("unknown comparator '{other}'"))),
        }
    }
}

/// A boolean condition, used in WHERE and JOIN ... ON.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `<left> <op> <right>`
    Comparison {
        /// Left operand.
        left: Expression,
        /// Operator.
        comparator: Comparator,
        /// Right operand.
        right: Expression,
    },
    /// `<left> LIKE <right>`
    Like {
        /// Value to match.
        left: Expression,
        /// Pattern.
        right: Expression,
    },
    /// `<left> [NOT] IN (<args>)`
    In {
        /// Value to look up.
        left: Expression,
        /// Candidate values, or a single sub-select.
        args: Vec<Expression>,
        /// Whether this is NOT IN.
        negated: bool,
    },
    /// `<operand> IS [NOT] NULL`
    IsNull {
        /// The expression to check.
        operand: Expression,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },
    /// A condition enclosed in parentheses.
    Nested(Box<Condition>),
    /// Raw SQL text, rendered verbatim.
    Raw(String),
    /// `<left> AND <right>`
    And(Box<Condition>, Box<Condition>),
    /// `<left> OR <right>`
    Or(Box<Condition>, Box<Condition>),
    /// `NOT <inner>`
    Not(Box<Condition>),
}

impl Condition {
    /// Returns a short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Comparison { .. } => "Comparison",
            Self::Like { .. } => "Like",
            Self::In { .. } => "In",
            Self::IsNull { .. } => "IsNull",
            Self::Nested(_) => "NestedCondition",
            Self::Raw(_) => "ConstantCondition",
            Self::And(..) => "AndCondition",
            Self::Or(..) => "OrCondition",
            Self::Not(_) => "Not",
        }
    }

    /// Combines this condition with `other` using AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combines this condition with `other` using OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Negates this condition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Wraps this condition in parentheses.
    #[must_use]
    pub fn nest(self) -> Self {
        Self::Nested(Box::new(self))
    }
}
