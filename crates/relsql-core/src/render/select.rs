//! SELECT statement renderers.

use super::{ConditionRenderer, ExpressionRenderer, RenderContext};
use crate::ast::{JoinType, OrderByField};
use crate::dialect::{tail_clause, LimitPosition};
use crate::error::{Result, SqlError};
use crate::visitor::{delegate, no_renderer, Delegation, Node, SubtreeHandler};

/// The clause whose renderer is currently active.
#[derive(Debug, Clone, Copy)]
enum Section {
    List,
    From,
    Join,
    Where,
    OrderBy,
}

/// Assembles a whole statement from its clauses.
pub(crate) struct SelectRenderer {
    ctx: RenderContext,
    distinct: bool,
    limit: Option<u64>,
    offset: Option<u64>,
    section: Option<Section>,
    list: String,
    from: String,
    joins: Vec<String>,
    where_clause: Option<String>,
    order_by: Option<String>,
    rendered: Option<String>,
}

impl SelectRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            distinct: false,
            limit: None,
            offset: None,
            section: None,
            list: String::new(),
            from: String::new(),
            joins: Vec::new(),
            where_clause: None,
            order_by: None,
            rendered: None,
        }
    }

    fn assemble(&mut self) -> String {
        let dialect = self.ctx.dialect();
        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&self.list);
        sql.push(' ');
        sql.push_str(&self.from);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if let Some(where_clause) = &self.where_clause {
            sql.push(' ');
            sql.push_str(where_clause);
        }

        let tail = tail_clause(dialect, self.limit, self.offset);
        let order_by = match (self.order_by.take(), &tail) {
            (Some(order_by), _) => Some(order_by),
            (None, Some(_)) => dialect.paging_order_by().map(String::from),
            (None, None) => None,
        };
        let sections = match dialect.limit_position() {
            LimitPosition::AfterWhere => [tail, order_by],
            LimitPosition::AfterOrderBy => [order_by, tail],
        };
        for section in sections.into_iter().flatten() {
            sql.push(' ');
            sql.push_str(&section);
        }
        sql
    }
}

impl<'a> SubtreeHandler<'a> for SelectRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Select(select) = node else {
            return Err(no_renderer(node));
        };
        self.distinct = select.is_distinct();
        self.limit = select.limit();
        self.offset = select.offset();
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let ctx = self.ctx;
        let (section, delegation) = match node {
            Node::SelectList(_) => (Section::List, delegate(SelectListRenderer::new(ctx))),
            Node::From(_) => (Section::From, delegate(FromRenderer::new(ctx))),
            Node::Join(_) => (Section::Join, delegate(JoinRenderer::new(ctx))),
            Node::Where(_) => (Section::Where, delegate(WhereRenderer::new(ctx))),
            Node::OrderBy(_) => (Section::OrderBy, delegate(OrderByRenderer::new(ctx))),
            _ => return Err(no_renderer(node)),
        };
        self.section = Some(section);
        Ok(delegation)
    }

    fn on_rendered(&mut self, part: String) {
        match self.section.take() {
            Some(Section::List) => self.list = part,
            Some(Section::From) => self.from = part,
            Some(Section::Join) => self.joins.push(part),
            Some(Section::Where) => self.where_clause = Some(part),
            Some(Section::OrderBy) => self.order_by = Some(part),
            None => {}
        }
    }

    fn leave_matched(&mut self, node: Node<'a>) -> Result<()> {
        if self.list.is_empty() || self.from.is_empty() {
            return Err(SqlError::Internal(format!(
                "{} rendered without select list or FROM",
                node.kind()
            )));
        }
        self.rendered = Some(self.assemble());
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders the comma separated select list.
pub(crate) struct SelectListRenderer {
    ctx: RenderContext,
    items: Vec<String>,
    rendered: Option<String>,
}

impl SelectListRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            items: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for SelectListRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::SelectList(_) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Expression(_) => Ok(delegate(ExpressionRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn on_rendered(&mut self, part: String) {
        self.items.push(part);
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        self.rendered = Some(self.items.join(", "));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `FROM a, b`.
pub(crate) struct FromRenderer {
    ctx: RenderContext,
    tables: Vec<String>,
    rendered: Option<String>,
}

impl FromRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            tables: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for FromRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::From(_) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Table(table) => {
                self.tables.push(self.ctx.table(table));
                Ok(Delegation::Retain)
            }
            _ => Err(no_renderer(node)),
        }
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        self.rendered = Some(format!("FROM {}", self.tables.join(", ")));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `<JOIN TYPE> <table> ON <condition>`.
pub(crate) struct JoinRenderer {
    ctx: RenderContext,
    join_type: JoinType,
    table: String,
    on: Option<String>,
    rendered: Option<String>,
}

impl JoinRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            join_type: JoinType::Inner,
            table: String::new(),
            on: None,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for JoinRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        let Node::Join(join) = node else {
            return Err(no_renderer(node));
        };
        self.join_type = join.join_type();
        Ok(Delegation::Retain)
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Table(table) => {
                self.table = self.ctx.table(table);
                Ok(Delegation::Retain)
            }
            Node::Condition(_) => Ok(delegate(ConditionRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn on_rendered(&mut self, part: String) {
        self.on = Some(part);
    }

    fn leave_matched(&mut self, node: Node<'a>) -> Result<()> {
        let on = self
            .on
            .take()
            .ok_or_else(|| SqlError::Internal(format!("{} rendered no condition", node.kind())))?;
        self.rendered = Some(format!("{} {} ON {on}", self.join_type.as_str(), self.table));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `WHERE <condition>`.
pub(crate) struct WhereRenderer {
    ctx: RenderContext,
    rendered: Option<String>,
}

impl WhereRenderer {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for WhereRenderer {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Where(_) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::Condition(_) => Ok(delegate(ConditionRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn on_rendered(&mut self, part: String) {
        self.rendered = Some(format!("WHERE {part}"));
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

/// Renders `ORDER BY <expr> [ASC|DESC] [NULLS FIRST|LAST], ...`.
pub(crate) struct OrderByRenderer<'a> {
    ctx: RenderContext,
    field: Option<&'a OrderByField>,
    items: Vec<String>,
    rendered: Option<String>,
}

impl OrderByRenderer<'_> {
    pub(crate) const fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            field: None,
            items: Vec::new(),
            rendered: None,
        }
    }
}

impl<'a> SubtreeHandler<'a> for OrderByRenderer<'a> {
    fn enter_matched(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::OrderBy(_) => Ok(Delegation::Retain),
            _ => Err(no_renderer(node)),
        }
    }

    fn enter_nested(&mut self, node: Node<'a>) -> Result<Delegation<'a>> {
        match node {
            Node::OrderByField(field) => {
                self.field = Some(field);
                Ok(Delegation::Retain)
            }
            Node::Expression(_) => Ok(delegate(ExpressionRenderer::new(self.ctx))),
            _ => Err(no_renderer(node)),
        }
    }

    fn on_rendered(&mut self, part: String) {
        let mut item = part;
        if let Some(field) = self.field.take() {
            if let Some(direction) = field.direction() {
                item.push(' ');
                item.push_str(direction.as_str());
            }
            if let Some(nulls) = field.null_ordering() {
                item.push(' ');
                item.push_str(nulls.as_str());
            }
        }
        self.items.push(item);
    }

    fn leave_matched(&mut self, _node: Node<'a>) -> Result<()> {
        self.rendered = Some(format!("ORDER BY {}", self.items.join(", ")));
        Ok(())
    }

    fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{NullOrdering, OrderByField, Table};
    use crate::builder::Conditions;
    use crate::dialect::{ANSI, SQL_SERVER};
    use crate::render::SqlRenderer;
    use crate::Select;

    #[test]
    fn test_full_statement_shape() {
        let users = Table::aliased("users", "u").unwrap();
        let orders = Table::aliased("orders", "o").unwrap();
        let uid = users.column("id").unwrap();
        let oid = orders.column("user_id").unwrap();
        let total = orders.column("total").unwrap();

        let select = Select::builder()
            .select([uid.clone(), total.clone()])
            .distinct()
            .from([users])
            .left_outer_join(orders, Conditions::is_equal(&uid, &oid))
            .where_clause(Conditions::is_not_null(&total))
            .order_by([OrderByField::of(&total).desc().nulls(NullOrdering::Last)])
            .limit(5)
            .offset(10)
            .build()
            .unwrap();

        assert_eq!(
            SqlRenderer::with_dialect(&ANSI).render(&select).unwrap(),
            "SELECT DISTINCT u.id, o.total FROM users AS u \
             LEFT OUTER JOIN orders AS o ON u.id = o.user_id \
             WHERE o.total IS NOT NULL ORDER BY o.total DESC NULLS LAST \
             OFFSET 10 ROWS FETCH FIRST 5 ROWS ONLY"
        );
    }

    #[test]
    fn test_paging_without_order_by() {
        let users = Table::create("users").unwrap();
        let select = Select::builder()
            .select([users.asterisk()])
            .from([users])
            .limit(10)
            .build()
            .unwrap();
        assert_eq!(
            SqlRenderer::with_dialect(&SQL_SERVER).render(&select).unwrap(),
            "SELECT users.* FROM users ORDER BY (SELECT 1) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
        );
    }
}
