//! SQL rendering.
//!
//! A [`SqlRenderer`] walks a statement with a delegating walker: each
//! construct is rendered by its own handler, which hands its children to further
//! handlers and assembles their text once the construct is left.
//!
//! ```rust
//! use relsql_core::builder::Conditions;
//! use relsql_core::dialect::DialectKind;
//! use relsql_core::render::SqlRenderer;
//! use relsql_core::{RenderConfig, Select, Table};
//!
//! let users = Table::create("users").unwrap();
//! let id = users.column("id").unwrap();
//! let select = Select::builder()
//!     .select([&id])
//!     .from([users])
//!     .where_clause(Conditions::is_equal(&id, relsql_core::Expressions::bind_marker()))
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! let renderer = SqlRenderer::new(RenderConfig::for_dialect(DialectKind::Postgres));
//! assert_eq!(
//!     renderer.render(&select).unwrap(),
//!     "SELECT users.id FROM users WHERE users.id = ? LIMIT 10"
//! );
//! ```

mod condition;
mod expression;
mod select;

use tracing::debug;

use crate::ast::{Column, Condition, Expression, Identifier, Select, Table};
use crate::config::{Quoting, RenderConfig};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::visitor::{walk, DelegatingWalker, Node};

pub(crate) use condition::ConditionRenderer;
pub(crate) use expression::ExpressionRenderer;
pub(crate) use select::SelectRenderer;

/// Settings shared by every handler of one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    dialect: &'static dyn Dialect,
    quoting: Quoting,
}

impl RenderContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(dialect: &'static dyn Dialect, quoting: Quoting) -> Self {
        Self { dialect, quoting }
    }

    /// Returns the target dialect.
    #[must_use]
    pub const fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// Renders an identifier according to the quoting mode.
    #[must_use]
    pub fn identifier(&self, identifier: &Identifier) -> String {
        if self.quoting.applies(identifier.is_quoted()) {
            self.dialect.quote_identifier(identifier.name())
        } else {
            identifier.name().to_owned()
        }
    }

    /// Renders a table as it appears in FROM or JOIN.
    #[must_use]
    pub fn table(&self, table: &Table) -> String {
        let name = self.identifier(table.name());
        match (table.alias_name(), self.dialect.table_alias_keyword()) {
            (Some(alias), Some(keyword)) => format!("{name} {keyword} {}", self.identifier(alias)),
            (Some(alias), None) => format!("{name} {}", self.identifier(alias)),
            (None, _) => name,
        }
    }

    /// Renders a column qualified by its table's reference name.
    #[must_use]
    pub fn column(&self, column: &Column) -> String {
        format!(
            "{}.{}",
            self.identifier(column.table().reference_name()),
            self.identifier(column.name())
        )
    }
}

/// Renders statements to SQL text for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct SqlRenderer {
    ctx: RenderContext,
}

impl SqlRenderer {
    /// Creates a renderer from a configuration.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            ctx: RenderContext::new(config.dialect.dialect(), config.quoting),
        }
    }

    /// Creates a renderer for `dialect` with default quoting.
    #[must_use]
    pub fn with_dialect(dialect: &'static dyn Dialect) -> Self {
        Self {
            ctx: RenderContext::new(dialect, Quoting::default()),
        }
    }

    /// Returns the render context.
    #[must_use]
    pub const fn context(&self) -> RenderContext {
        self.ctx
    }

    /// Renders a statement.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Internal`](crate::SqlError::Internal) if a node
    /// has no renderer.
    pub fn render(&self, select: &Select) -> Result<String> {
        let mut walker = DelegatingWalker::new(SelectRenderer::new(self.ctx));
        select.visit(&mut walker)?;
        let sql = walker.into_output()?;
        debug!(
            dialect = self.ctx.dialect.name(),
            len = sql.len(),
            "Rendered statement"
        );
        Ok(sql)
    }

    /// Renders a single condition.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Internal`](crate::SqlError::Internal) if a node
    /// has no renderer.
    pub fn render_condition(&self, condition: &Condition) -> Result<String> {
        let mut walker = DelegatingWalker::new(ConditionRenderer::new(self.ctx));
        walk(&mut walker, Node::Condition(condition))?;
        walker.into_output()
    }

    /// Renders a single expression.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Internal`](crate::SqlError::Internal) if a node
    /// has no renderer.
    pub fn render_expression(&self, expression: &Expression) -> Result<String> {
        let mut walker = DelegatingWalker::new(ExpressionRenderer::new(self.ctx));
        walk(&mut walker, Node::Expression(expression))?;
        walker.into_output()
    }
}

impl Default for SqlRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
