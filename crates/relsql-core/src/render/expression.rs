//! Expression and function renderers.

use super::{RenderContext, SelectRenderer};
use crate::ast::Expression;
use crate::error::Result;
use crate::visitor::{delegate, no_renderer, Delegation, Node, SubtreeHandler};

/// Renders any expression, delegating functions and sub-selects.
pub(crate) struct ExpressionRenderer {
    ctx: RenderContext,
    sub_select: bool,
    rendered: Option<String>,
}

impl ExpressionRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            sub_select: false,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for ExpressionRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Expression(expr) = node else {
            return Err(no_renderer(node));
        };
        let text = match expr {
            Expression::Column(column) => self.ctx.column(column),
            Expression::Raw(text) => text.clone(),
            Expression::Asterisk(None) => String::from("*"),
            Expression::Asterisk(Some(table)) => {
                format!("{}.*", self.ctx.identifier(table.reference_name()))
            }
            Expression::Literal(literal) => literal.to_sql(),
            Expression::BindMarker(None) => String::from("?"),
            Expression::BindMarker(Some(name)) => format!(":{name}"),
            Expression::Function(_) => return Ok(delegate(FunctionRenderer::new(self.ctx))),
            Expression::SubSelect(_) => {
                self.sub_select = true;
                return Ok(Delegation::Retain);
            }
        };
        self.rendered = Some(text);
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Select(_) if self.sub_select => Ok(delegate(SelectRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn on_rendered(&mut self, part: String) {
        self.rendered = Some(if self.sub_select {
            format!("({part})")
        } else {
            part
        });
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `name(arg, ...)`.
pub(crate) struct FunctionRenderer {
    ctx: RenderContext,
    name: String,
    args: Vec<String>,
    rendered: Option<String>,
}

impl FunctionRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            name: String::new(),
            args: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for FunctionRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Expression(Expression::Function(function)) => {
                self.name = function.name().to_owned();
                Ok(Delegation::Retain)
            }
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Expression(_) => Ok(delegate(ExpressionRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        self.rendered = Some(format!("{}({})", self.name, self.args.join(", ")));
        Ok(())
    }

    fn on_rendered(&mut self, part: String) {
        self.args.push(part);
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}
