//! SQL Server dialect.

use super::{Dialect, LimitPosition};

/// Microsoft SQL Server dialect.
///
/// Paging uses `OFFSET ... ROWS FETCH NEXT ... ROWS ONLY`, which SQL Server
/// only accepts after ORDER BY.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlServerDialect;

impl SqlServerDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn limit_position(&self) -> LimitPosition {
        LimitPosition::AfterOrderBy
    }

    fn paging_order_by(&self) -> Option<&'static str> {
        Some("ORDER BY (SELECT 1)")
    }

    fn limit(&self, limit: u64) -> String {
        format!("OFFSET 0 ROWS FETCH NEXT {limit} ROWS ONLY")
    }

    fn offset(&self, offset: u64) -> String {
        format!("OFFSET {offset} ROWS")
    }

    fn limit_offset(&self, limit: u64, offset: u64) -> String {
        format!("OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY")
    }
}
