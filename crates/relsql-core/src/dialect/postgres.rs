//! PostgreSQL dialect.

use super::Dialect;
use crate::ast::DataType;
use crate::error::Result;

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn limit(&self, limit: u64) -> String {
        format!("LIMIT {limit}")
    }

    fn offset(&self, offset: u64) -> String {
        format!("OFFSET {offset}")
    }

    fn limit_offset(&self, limit: u64, offset: u64) -> String {
        format!("LIMIT {limit} OFFSET {offset}")
    }

    fn supports_arrays(&self) -> bool {
        true
    }

    fn array_type(&self, element: &DataType) -> Result<DataType> {
        Ok(DataType::Array(Box::new(element.clone())))
    }
}
