#![allow(dead_code)]

use relsql_core::dialect::Dialect;
use relsql_core::{Select, SqlError, SqlRenderer, Table, ValidationError};

pub fn table(name: &str) -> Table {
    Table::create(name).unwrap_or_else(|e| panic!("Failed to create table {name}: {e}"))
}

pub fn aliased(name: &str, alias: &str) -> Table {
    Table::aliased(name, alias)
        .unwrap_or_else(|e| panic!("Failed to create table {name} AS {alias}: {e}"))
}

pub fn render(select: &Select) -> String {
    SqlRenderer::default()
        .render(select)
        .unwrap_or_else(|e| panic!("Failed to render {select:?}\nError: {e}"))
}

pub fn render_with(dialect: &'static dyn Dialect, select: &Select) -> String {
    SqlRenderer::with_dialect(dialect)
        .render(select)
        .unwrap_or_else(|e| panic!("Failed to render for {}: {e}", dialect.name()))
}

pub fn validation_err(result: Result<Select, SqlError>) -> ValidationError {
    match result {
        Err(SqlError::Validation(err)) => err,
        other => panic!("Expected a validation error, got {other:?}"),
    }
}
