//! Delegating traversal.
//!
//! A [`DelegatingWalker`] keeps an explicit stack of visitors. The visitor on
//! top receives every enter/leave event. It may hand a subtree over to a
//! freshly created visitor, which is pushed and enters the same node, and is
//! popped again once it leaves that node. The popped visitor's rendered text
//! is handed to the visitor below before that one sees the same leave event.

use tracing::trace;

use super::{Node, Visitor};
use crate::error::{Result, SqlError};

/// What the walker does after a visitor handled an event.
pub(crate) enum Delegation<'a> {
    /// Keep the current visitor.
    Retain,
    /// Push the visitor; it enters the current node next.
    DelegateTo(Box<dyn DelegatingVisitor<'a> + 'a>),
    /// Pop the current visitor.
    Leave,
}

/// A visitor driven by a [`DelegatingWalker`].
pub(crate) trait DelegatingVisitor<'a> {
    fn do_enter(&mut self, node: Node<'a>) -> Result<Delegation<'a>>;

    fn do_leave(&mut self, node: Node<'a>) -> Result<Delegation<'a>>;

    /// Receives the text of a delegate that just finished.
    fn on_rendered(&mut self, part: String);

    /// Hands over the text this visitor produced.
    fn take_rendered(&mut self) -> Option<String>;
}

/// Callbacks of a visitor bound to the subtree of the node it first enters.
///
/// The first node entered is the matched node. Everything below it is
/// nested. Leaving the matched node pops the visitor.
pub(crate) trait SubtreeHandler<'a> {
    fn enter_matched(&mut self, _node: Node<'a>) -> Result<Delegation<'a>> {
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, _node: Node<'a>) -> Result<Delegation<'a>> {
        Ok(Delegation::Retain)
    }

    fn leave_nested(&mut self, _node: Node<'a>) -> Result<()> {
        Ok(())
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        Ok(())
    }

    fn on_rendered(&mut self, _part: String) {}

    fn take_rendered(&mut self) -> Option<String>;
}

/// Adapts a [`SubtreeHandler`] to a [`DelegatingVisitor`] by tracking depth.
struct FilteredSubtree<H> {
    depth: usize,
    handler: H,
}

impl<'a, H: SubtreeHandler<'a>> DelegatingVisitor<'a> for FilteredSubtree<H> {
    fn do_enter(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        self.depth += 1;
        if self.depth == 1 {
            self.handler.enter_matched(node)
        } else {
            self.handler.enter_nested(node)
        }
    }

    fn do_leave(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        self.depth = self.depth.checked_sub(1).ok_or_else(|| {
            SqlError::Internal(format!("unbalanced leave of node kind {}", node.kind()))
        })?;
        if self.depth == 0 {
            self.handler.leave_matched(node)?;
            Ok(Delegation::Leave)
        } else {
            self.handler.leave_nested(node)?;
            Ok(Delegation::Retain)
        }
    }

    fn on_rendered(&mut self, part: String) {
        self.handler.on_rendered(part);
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.handler.take_rendered()
    }
}

/// Delegates the current node to a visitor built from `handler`.
pub(crate) fn delegate<'a, H: SubtreeHandler<'a> + 'a>(handler: H) -> Delegation<'a> {
    Delegation::DelegateTo(Box::new(FilteredSubtree { depth: 0, handler }))
}

/// The error raised when a renderer meets a node kind it cannot handle.
pub(crate) fn no_renderer(node: Node<'_>) -> SqlError {
    SqlError::Internal(format!("no renderer for node kind {}", node.kind()))
}

/// Drives a stack of delegating visitors over a tree.
pub(crate) struct DelegatingWalker<'a> {
    stack: Vec<Box<dyn DelegatingVisitor<'a> + 'a>>,
    output: Option<String>,
}

impl<'a> DelegatingWalker<'a> {
    /// Creates a walker whose root visitor is built from `handler`.
    pub(crate) fn new<H: SubtreeHandler<'a> + 'a>(handler: H) -> Self {
        Self {
            stack: vec![Box::new(FilteredSubtree { depth: 0, handler })],
            output: None,
        }
    }

    /// Returns the text produced by the root visitor.
    pub(crate) fn into_output(self) -> Result<String> {
        if !self.stack.is_empty() {
            return Err(SqlError::Internal(format!(
                "traversal ended with {} visitor(s) still active",
                self.stack.len()
            )));
        }
        self.output
            .ok_or_else(|| SqlError::Internal(String::from("traversal produced no output")))
    }
}

impl<'a> Visitor<'a> for DelegatingWalker<'a> {
    fn enter(&mut self, node: Node<'a>) -> Result<()> {
        loop {
            let top = self.stack.last_mut().ok_or_else(|| {
                SqlError::Internal(format!("no active visitor to enter {}", node.kind()))
            })?;
            match top.do_enter(node)? {
                Delegation::Retain => return Ok(()),
                Delegation::DelegateTo(visitor) => {
                    trace!(node = node.kind(), depth = self.stack.len(), "Delegating");
                    self.stack.push(visitor);
                }
                Delegation::Leave => {
                    return Err(SqlError::Internal(format!(
                        "visitor left while entering {}",
                        node.kind()
                    )));
                }
            }
        }
    }

    fn leave(&mut self, node: Node<'a>) -> Result<()> {
        loop {
            let top = self.stack.last_mut().ok_or_else(|| {
                SqlError::Internal(format!("no active visitor to leave {}", node.kind()))
            })?;
            match top.do_leave(node)? {
                Delegation::Retain => return Ok(()),
                Delegation::Leave => {
                    let part = self.stack.pop().and_then(|mut done| done.take_rendered());
                    trace!(node = node.kind(), depth = self.stack.len(), "Delegate finished");
                    match self.stack.last_mut() {
                        Some(parent) => {
                            if let Some(part) = part {
                                parent.on_rendered(part);
                            }
                        }
                        None => {
                            self.output = part;
                            return Ok(());
                        }
                    }
                }
                Delegation::DelegateTo(_) => {
                    return Err(SqlError::Internal(format!(
                        "cannot delegate while leaving {}",
                        node.kind()
                    )));
                }
            }
        }
    }
}
