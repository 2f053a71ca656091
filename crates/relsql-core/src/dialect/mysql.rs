//! MySQL dialect.

use super::Dialect;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn limit(&self, limit: u64) -> String {
        format!("LIMIT {limit}")
    }

    // MySQL has no standalone OFFSET; the documented idiom is the largest
    // unsigned BIGINT as row count.
    fn offset(&self, offset: u64) -> String {
        format!("LIMIT {offset}, {}", u64::MAX)
    }

    fn limit_offset(&self, limit: u64, offset: u64) -> String {
        format!("LIMIT {offset}, {limit}")
    }

    fn identifier_quote(&self) -> char {
        '`'
    }
}
