//! ANSI SQL dialect.

use super::Dialect;

/// A dialect following the SQL:2008 `OFFSET ... FETCH FIRST` syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiDialect;

impl AnsiDialect {
    /// Creates a new ANSI dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for AnsiDialect {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn limit(&self, limit: u64) -> String {
        format!("FETCH FIRST {limit} ROWS ONLY")
    }

    fn offset(&self, offset: u64) -> String {
        format!("OFFSET {offset} ROWS")
    }

    fn limit_offset(&self, limit: u64, offset: u64) -> String {
        format!("OFFSET {offset} ROWS FETCH FIRST {limit} ROWS ONLY")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::LimitPosition;

    #[test]
    fn test_ansi_dialect() {
        let dialect = AnsiDialect::new();
        assert_eq!(dialect.name(), "ansi");
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.limit_position(), LimitPosition::AfterOrderBy);
        assert!(!dialect.supports_arrays());
    }

    #[test]
    fn test_ansi_limit_offset() {
        let dialect = AnsiDialect::new();
        assert_eq!(dialect.limit(10), "FETCH FIRST 10 ROWS ONLY");
        assert_eq!(dialect.offset(5), "OFFSET 5 ROWS");
        assert_eq!(
            dialect.limit_offset(20, 10),
            "OFFSET 10 ROWS FETCH FIRST 20 ROWS ONLY"
        );
    }
}
