//! Statement tree traversal.
//!
//! Every AST node can be viewed as a [`Node`]. [`walk`] visits a node with a
//! strict enter/leave pairing: `enter(node)`, then each child in declaration
//! order, then `leave(node)`.

mod delegation;

pub(crate) use delegation::{delegate, no_renderer, Delegation, DelegatingWalker, SubtreeHandler};

use crate::ast::{Condition, Expression, Join, OrderByField, Select, Table};
use crate::error::Result;

/// A borrowed view of one node of a statement tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A SELECT statement, top-level or nested.
    Select(&'a Select),
    /// The select list of a statement.
    SelectList(&'a [Expression]),
    /// The FROM clause of a statement.
    From(&'a [Table]),
    /// One JOIN clause.
    Join(&'a Join),
    /// The WHERE clause of a statement.
    Where(&'a Condition),
    /// The ORDER BY clause of a statement.
    OrderBy(&'a [OrderByField]),
    /// One ORDER BY entry.
    OrderByField(&'a OrderByField),
    /// A table in FROM or JOIN.
    Table(&'a Table),
    /// An expression.
    Expression(&'a Expression),
    /// A condition.
    Condition(&'a Condition),
}

impl<'a> Node<'a> {
    /// Returns the node kind name, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "Select",
            Self::SelectList(_) => "SelectList",
            Self::From(_) => "From",
            Self::Join(_) => "Join",
            Self::Where(_) => "Where",
            Self::OrderBy(_) => "OrderBy",
            Self::OrderByField(_) => "OrderByField",
            Self::Table(_) => "Table",
            Self::Expression(expr) => expr.kind(),
            Self::Condition(cond) => cond.kind(),
        }
    }

    /// Returns the immediate children in declaration order.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Self::Select(select) => {
                let mut children = vec![
                    Self::SelectList(&select.select_list),
                    Self::From(&select.from),
                ];
                children.extend(select.joins.iter().map(Self::Join));
                if let Some(cond) = &select.where_clause {
                    children.push(Self::Where(cond));
                }
                if !select.order_by.is_empty() {
                    children.push(Self::OrderBy(&select.order_by));
                }
                children
            }
            Self::SelectList(list) => list.iter().map(Self::Expression).collect(),
            Self::From(tables) => tables.iter().map(Self::Table).collect(),
            Self::Join(join) => vec![Self::Table(&join.table), Self::Condition(&join.on)],
            Self::Where(cond) => vec![Self::Condition(cond)],
            Self::OrderBy(fields) => fields.iter().map(Self::OrderByField).collect(),
            Self::OrderByField(field) => vec![Self::Expression(&field.expression)],
            Self::Table(_) => vec![],
            Self::Expression(expr) => match expr {
                Expression::SubSelect(select) => vec![Self::Select(select)],
                Expression::Function(function) => {
                    function.args.iter().map(Self::Expression).collect()
                }
                Expression::Column(_)
                | Expression::Raw(_)
                | Expression::Asterisk(_)
                | Expression::Literal(_)
                | Expression::BindMarker(_) => vec![],
            },
            Self::Condition(cond) => match cond {
                Condition::Comparison { left, right, .. } | Condition::Like { left, right } => {
                    vec![Self::Expression(left), Self::Expression(right)]
                }
                Condition::In { left, args, .. } => {
                    let mut children = vec![Self::Expression(left)];
                    children.extend(args.iter().map(Self::Expression));
                    children
                }
                Condition::IsNull { operand, .. } => vec![Self::Expression(operand)],
                Condition::Nested(inner) | Condition::Not(inner) => vec![Self::Condition(inner)],
                Condition::And(left, right) | Condition::Or(left, right) => {
                    vec![Self::Condition(left), Self::Condition(right)]
                }
                Condition::Raw(_) => vec![],
            },
        }
    }
}

/// A visitor receiving enter/leave callbacks during [`walk`].
pub trait Visitor<'a> {
    /// Called before the children of `node` are visited.
    ///
    /// # Errors
    ///
    /// Any error aborts the traversal.
    fn enter(&mut self, node: Node<'a>) -> Result<()>;

    /// Called after the children of `node` were visited.
    ///
    /// # Errors
    ///
    /// Any error aborts the traversal.
    fn leave(&mut self, node: Node<'a>) -> Result<()>;
}

/// Walks `node` and its subtree depth-first.
///
/// # Errors
///
/// Returns the first error raised by the visitor.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: Node<'a>) -> Result<()> {
    visitor.enter(node)?;
    for child in node.children() {
        walk(visitor, child)?;
    }
    visitor.leave(node)
}

impl Select {
    /// Walks this statement with `visitor`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the visitor.
    pub fn visit<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) -> Result<()> {
        walk(visitor, Node::Select(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Conditions;

    struct Recorder(Vec<String>);

    impl<'a> Visitor<'a> for Recorder {
        fn enter(&mut self, node: Node<'a>) -> Result<()> {
            self.0.push(format!("enter {}", node.kind()));
            Ok(())
        }

        fn leave(&mut self, node: Node<'a>) -> Result<()> {
            self.0.push(format!("leave {}", node.kind()));
            Ok(())
        }
    }

    #[test]
    fn test_enter_leave_pairing() {
        let users = Table::create("users").unwrap();
        let id = users.column("id").unwrap();
        let select = Select::builder()
            .select([id.clone()])
            .from([users])
            .where_clause(Conditions::is_equal(id, Expression::Raw(String::from("1"))))
            .build()
            .unwrap();

        let mut recorder = Recorder(vec![]);
        select.visit(&mut recorder).unwrap();

        assert_eq!(
            recorder.0,
            vec![
                "enter Select",
                "enter SelectList",
                "enter Column",
                "leave Column",
                "leave SelectList",
                "enter From",
                "enter Table",
                "leave Table",
                "leave From",
                "enter Where",
                "enter Comparison",
                "enter Column",
                "leave Column",
                "enter RawExpression",
                "leave RawExpression",
                "leave Comparison",
                "leave Where",
                "leave Select",
            ]
        );
    }

    #[test]
    fn test_sub_select_is_a_child_of_its_expression() {
        let floo = Table::create("floo").unwrap();
        let inner = Select::builder()
            .select([floo.column("bah").unwrap()])
            .from([floo])
            .build()
            .unwrap();
        let expr = Expression::from(inner);
        let children = Node::Expression(&expr).children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), "Select");
    }
}
