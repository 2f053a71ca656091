//! Condition renderers.
//!
//! Composite conditions buffer the text of their children privately and
//! only hand it upwards once the composite itself is left.

use super::{ExpressionRenderer, RenderContext};
use crate::ast::{Condition, Expression};
use crate::error::{Result, SqlError};
use crate::visitor::{delegate, no_renderer, Delegation, Node, SubtreeHandler};

/// Dispatches a condition to the renderer of its variant.
pub(crate) struct ConditionRenderer {
    ctx: RenderContext,
    rendered: Option<String>,
}

impl ConditionRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for ConditionRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Condition(condition) = node else {
            return Err(no_renderer(node));
        };
        let ctx = self.ctx;
        Ok(match condition {
            Condition::Raw(text) => {
                self.rendered = Some(text.clone());
                Delegation::Retain
            }
            Condition::Comparison { comparator, .. } => {
                delegate(InfixRenderer::new(ctx, format!(" {} ", comparator.as_str())))
            }
            Condition::Like { .. } => delegate(InfixRenderer::new(ctx, String::from(" LIKE "))),
            Condition::In { .. } => delegate(InRenderer::new(ctx)),
            Condition::IsNull { .. } => delegate(IsNullRenderer::new(ctx)),
            Condition::Nested(_) => delegate(NestedRenderer::new(ctx)),
            Condition::And(..) => delegate(MultiConditionRenderer::new(ctx, " AND ")),
            Condition::Or(..) => delegate(MultiConditionRenderer::new(ctx, " OR ")),
            Condition::Not(_) => delegate(NotRenderer::new(ctx)),
        })
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        Err(no_renderer(node))
    }

    fn on_rendered(&mut self, part: String) {
        self.rendered = Some(part);
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Delegates an expression child, rejecting anything else.
fn expression_child<'a>(ctx: RenderContext, node: Node<'a>) -> Result<Delegation<'a>> {
    match node {
        Node::Expression(_) => Ok(delegate(ExpressionRenderer::new(ctx))),
        _ => Err(no_renderer(node)),
    }
}

/// Delegates a condition child, rejecting anything else.
fn condition_child<'a>(ctx: RenderContext, node: Node<'a>) -> Result<Delegation<'a>> {
    match node {
        Node::Condition(_) => Ok(delegate(ConditionRenderer::new(ctx))),
        _ => Err(no_renderer(node)),
    }
}

/// Renders `<left><separator><right>` for comparisons and LIKE.
pub(crate) struct InfixRenderer {
    ctx: RenderContext,
    separator: String,
    buffer: String,
    parts: usize,
    rendered: Option<String>,
}

impl InfixRenderer {
    pub(crate) const fn new(ctx: RenderContext, separator: String) -> Self {
        Self {
            ctx,
            separator,
            buffer: String::new(),
            parts: 0,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for InfixRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Condition(Condition::Comparison { .. } | Condition::Like { .. }) => {
                Ok(Delegation::Retain)
            }
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        expression_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        if self.parts > 0 {
            self.buffer.push_str(&self.separator);
        }
        self.buffer.push_str(&part);
        self.parts += 1;
    }

    fn leave_matched(&mut self, node: Node<'a>) -> Result<()> {
        if self.parts != 2 {
            return Err(SqlError::Internal(format!(
                "{} rendered {} operand(s)",
                node.kind(),
                self.parts
            )));
        }
        self.rendered = Some(std::mem::take(&mut self.buffer));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `<left> [NOT ]IN (<args>)`.
pub(crate) struct InRenderer {
    ctx: RenderContext,
    negated: bool,
    sub_select: bool,
    parts: Vec<String>,
    rendered: Option<String>,
}

impl InRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            negated: false,
            sub_select: false,
            parts: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for InRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Condition(Condition::In { args, negated, .. }) = node else {
            return Err(no_renderer(node));
        };
        self.negated = *negated;
        // A lone sub-select already renders its own parentheses.
        self.sub_select = matches!(args.as_slice(), [Expression::SubSelect(_)]);
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        expression_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        self.parts.push(part);
    }

    fn leave_matched(&mut self, node: Node<'a>) -> Result<()> {
        let (left, args) = self
            .parts
            .split_first()
            .ok_or_else(|| SqlError::Internal(format!("{} rendered no operand", node.kind())))?;
        let keyword = if self.negated { "NOT IN" } else { "IN" };
        let args = args.join(", ");
        self.rendered = Some(if self.sub_select {
            format!("{left} {keyword} {args}")
        } else {
            format!("{left} {keyword} ({args})")
        });
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `<operand> IS [NOT ]NULL`.
pub(crate) struct IsNullRenderer {
    ctx: RenderContext,
    negated: bool,
    operand: Option<String>,
    rendered: Option<String>,
}

impl IsNullRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            negated: false,
            operand: None,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for IsNullRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Condition(Condition::IsNull { negated, .. }) = node else {
            return Err(no_renderer(node));
        };
        self.negated = *negated;
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        expression_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        self.operand = Some(part);
    }

    fn leave_matched(&mut self, node: Node<'a>) -> Result<()> {
        let operand = self
            .operand
            .take()
            .ok_or_else(|| SqlError::Internal(format!("{} rendered no operand", node.kind())))?;
        let keyword = if self.negated { "IS NOT NULL" } else { "IS NULL" };
        self.rendered = Some(format!("{operand} {keyword}"));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `(<inner>)`.
pub(crate) struct NestedRenderer {
    ctx: RenderContext,
    rendered: Option<String>,
}

impl NestedRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for NestedRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Condition(Condition::Nested(_)) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        condition_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        self.rendered = Some(format!("({part})"));
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders AND and OR.
///
/// A child of the other conjunction is parenthesized, so `(a OR b) AND c`
/// keeps its grouping.
pub(crate) struct MultiConditionRenderer {
    ctx: RenderContext,
    separator: &'static str,
    conjunction: Option<Conjunction>,
    wrap_next: bool,
    parts: Vec<String>,
    rendered: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    const fn of(condition: &Condition) -> Option<Self> {
        match condition {
            Condition::And(..) => Some(Self::And),
            Condition::Or(..) => Some(Self::Or),
            _ => None,
        }
    }
}

impl MultiConditionRenderer {
    pub(crate) const fn new(ctx: RenderContext, separator: &'static str) -> Self {
        Self {
            ctx,
            separator,
            conjunction: None,
            wrap_next: false,
            parts: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for MultiConditionRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Condition(condition @ (Condition::And(..) | Condition::Or(..))) => {
                self.conjunction = Conjunction::of(condition);
                Ok(Delegation::Retain)
            }
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        self.wrap_next = match node {
            Node::Condition(child) => {
                Conjunction::of(child).is_some_and(|kind| Some(kind) != self.conjunction)
            }
            _ => false,
        };
        condition_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        if core::mem::take(&mut self.wrap_next) {
            self.parts.push(format!("({part})"));
        } else {
            self.parts.push(part);
        }
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        self.rendered = Some(self.parts.join(self.separator));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `NOT <inner>`.
///
/// Operator conditions are parenthesized; raw and nested ones are not.
pub(crate) struct NotRenderer {
    ctx: RenderContext,
    wrap: bool,
    rendered: Option<String>,
}

impl NotRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            wrap: false,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for NotRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Condition(Condition::Not(_)) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        self.wrap = matches!(
            node,
            Node::Condition(
                Condition::And(..)
                    | Condition::Or(..)
                    | Condition::Comparison { .. }
                    | Condition::Like { .. }
                    | Condition::In { .. }
                    | Condition::IsNull { .. }
            )
        );
        condition_child(self.ctx, node)
    }

    fn on_rendered(&mut self, part: String) {
        self.rendered = Some(if self.wrap {
            format!("NOT ({part})")
        } else {
            format!("NOT {part}")
        });
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Literal, Table};
    use crate::builder::Conditions;
    use crate::render::SqlRenderer;
    use crate::visitor::{walk, DelegatingWalker};

    fn render(condition: &Condition) -> String {
        SqlRenderer::default().render_condition(condition).unwrap()
    }

    #[test]
    fn test_comparison_and_like() {
        let users = Table::create("users").unwrap();
        let name = users.column("name").unwrap();
        let pattern = Expression::Literal(Literal::String(String::from("a%")));
        assert_eq!(
            render(&Conditions::compare(&name, "<>", pattern.clone()).unwrap()),
            "users.name != 'a%'"
        );
        assert_eq!(
            render(&Conditions::like(&name, pattern)),
            "users.name LIKE 'a%'"
        );
    }

    #[test]
    fn test_in_and_is_null() {
        let users = Table::create("users").unwrap();
        let id = users.column("id").unwrap();
        let args: [Expression; 2] = [Literal::Integer(1).into(), Literal::Integer(2).into()];
        assert_eq!(
            render(&Conditions::not_in_list(&id, args).unwrap()),
            "users.id NOT IN (1, 2)"
        );
        assert_eq!(render(&Conditions::is_not_null(&id)), "users.id IS NOT NULL");
    }

    #[test]
    fn test_conjunctions() {
        let a = Conditions::just("a = 1").unwrap();
        let b = Conditions::just("b = 2").unwrap();
        let c = Conditions::just("c = 3").unwrap();
        let cond = Conditions::or(Conditions::nest(Conditions::and(a, b)), Conditions::not(c));
        assert_eq!(render(&cond), "(a = 1 AND b = 2) OR NOT c = 3");
    }

    #[test]
    fn test_mixed_conjunctions_keep_grouping() {
        let users = Table::create("users").unwrap();
        let a = users.column("a").unwrap();
        let b = users.column("b").unwrap();
        let c = users.column("c").unwrap();
        let a_or_b = Conditions::or(
            Conditions::is_equal(&a, Literal::Integer(1)),
            Conditions::is_equal(&b, Literal::Integer(2)),
        );
        let cond = Conditions::and(a_or_b, Conditions::is_equal(&c, Literal::Integer(3)));
        assert_eq!(
            render(&cond),
            "(users.a = 1 OR users.b = 2) AND users.c = 3"
        );

        let same_kind = Conditions::and(
            Conditions::and(
                Conditions::is_equal(&a, Literal::Integer(1)),
                Conditions::is_equal(&b, Literal::Integer(2)),
            ),
            Conditions::is_equal(&c, Literal::Integer(3)),
        );
        assert_eq!(
            render(&same_kind),
            "users.a = 1 AND users.b = 2 AND users.c = 3"
        );
    }

    #[test]
    fn test_not_groups_its_operand() {
        let users = Table::create("users").unwrap();
        let a = users.column("a").unwrap();
        let b = users.column("b").unwrap();
        let both = Conditions::and(
            Conditions::is_equal(&a, Literal::Integer(1)),
            Conditions::is_equal(&b, Literal::Integer(2)),
        );
        assert_eq!(
            render(&Conditions::not(both)),
            "NOT (users.a = 1 AND users.b = 2)"
        );
        assert_eq!(
            render(&Conditions::not(Conditions::is_null(&a))),
            "NOT (users.a IS NULL)"
        );
    }

    #[test]
    fn test_comparison_renderer_rejects_table_node() {
        let users = Table::create("users").unwrap();
        let ctx = SqlRenderer::default().context();
        let mut walker = DelegatingWalker::new(InfixRenderer::new(ctx, String::from(" = ")));
        let err = walk(&mut walker, Node::Table(&users)).unwrap_err();
        assert_eq!(
            err,
            SqlError::Internal(String::from("no renderer for node kind Table"))
        );
    }
}
