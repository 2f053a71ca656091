//! H2 dialect.

use super::Dialect;
use crate::ast::DataType;
use crate::error::Result;

/// H2 dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct H2Dialect;

impl H2Dialect {
    /// Creates a new H2 dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for H2Dialect {
    fn name(&self) -> &'static str {
        "h2"
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

    // H2 spells array types as `<element> ARRAY`.
    fn array_type(&self, element: &DataType) -> Result<DataType> {
        Ok(DataType::Custom(format!("{element} ARRAY")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2_dialect() {
        let dialect = H2Dialect::new();
        assert_eq!(dialect.name(), "h2");
        assert_eq!(dialect.limit_offset(20, 10), "LIMIT 20 OFFSET 10");
        assert_eq!(
            dialect.array_type(&DataType::Integer).unwrap().to_sql(),
            "INTEGER ARRAY"
        );
    }
}
