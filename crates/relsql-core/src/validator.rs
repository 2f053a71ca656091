//! Table import validation.
//!
//! Every table referenced by a column (or a table-scoped asterisk) in the
//! select list, WHERE or ORDER BY must be imported by FROM or JOIN of the
//! same statement. Sub-selects are their own scope: nothing below a nested
//! SELECT is collected, and the nested statement was already validated when
//! it was built.

use crate::ast::{Expression, Identifier, Select};
use crate::error::{Clause, Result, ValidationError};
use crate::visitor::{Node, Visitor};

/// The part of the top-level statement currently being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    From,
    Join,
    Requiring(Clause),
}

/// Collects imported and required tables of one statement.
#[derive(Debug, Default)]
pub struct SelectValidator<'a> {
    depth: usize,
    section: Option<Section>,
    from: Vec<&'a Identifier>,
    join: Vec<&'a Identifier>,
    required: Vec<(Clause, &'a Identifier)>,
}

impl<'a> SelectValidator<'a> {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the collected tables.
    ///
    /// Clauses are checked in the order SELECT, WHERE, ORDER BY, and the
    /// first missing table in encounter order is reported.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Validation`](crate::SqlError::Validation) if a
    /// required table is not imported.
    pub fn finish(self) -> Result<()> {
        let imported = |name: &Identifier| {
            self.from.iter().chain(&self.join).any(|&table| table == name)
        };
        let Some((clause, missing)) = self
            .required
            .iter()
            .copied()
            .find(|&(_, name)| !imported(name))
        else {
            return Ok(());
        };
        Err(ValidationError {
            clause,
            missing: missing.clone(),
            from: self.from.iter().map(|&name| name.clone()).collect(),
            join: self.join.iter().map(|&name| name.clone()).collect(),
        }
        .into())
    }
}

impl<'a> Visitor<'a> for SelectValidator<'a> {
    fn enter(&mut self, node: Node<'a>) -> Result<()> {
        if let Node::Select(_) = node {
            self.depth += 1;
            return Ok(());
        }
        if self.depth != 1 {
            return Ok(());
        }
        match node {
            Node::SelectList(_) => self.section = Some(Section::Requiring(Clause::SelectColumn)),
            Node::From(_) => self.section = Some(Section::From),
            Node::Join(_) => self.section = Some(Section::Join),
            Node::Where(_) => self.section = Some(Section::Requiring(Clause::WherePredicate)),
            Node::OrderBy(_) => self.section = Some(Section::Requiring(Clause::OrderByColumn)),
            Node::Table(table) => match self.section {
                Some(Section::From) => self.from.push(table.reference_name()),
                Some(Section::Join) => self.join.push(table.reference_name()),
                _ => {}
            },
            Node::Expression(expr) => {
                if let Some(Section::Requiring(clause)) = self.section {
                    match expr {
                        Expression::Column(column) => self
                            .required
                            .push((clause, column.table().reference_name())),
                        Expression::Asterisk(Some(table)) if clause == Clause::SelectColumn => {
                            self.required.push((clause, table.reference_name()));
                        }
                        _ => {}
                    }
                }
            }
            Node::Select(_) | Node::OrderByField(_) | Node::Condition(_) => {}
        }
        Ok(())
    }

    fn leave(&mut self, node: Node<'a>) -> Result<()> {
        match node {
            Node::Select(_) => self.depth = self.depth.saturating_sub(1),
            Node::SelectList(_) | Node::From(_) | Node::Join(_) | Node::Where(_) | Node::OrderBy(_)
                if self.depth == 1 =>
            {
                self.section = None;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Validates the table imports of `select`.
///
/// # Errors
///
/// Returns [`SqlError::Validation`](crate::SqlError::Validation) naming the
/// first table that is referenced but not imported.
pub fn validate(select: &Select) -> Result<()> {
    let mut validator = SelectValidator::new();
    select.visit(&mut validator)?;
    validator.finish()
}
