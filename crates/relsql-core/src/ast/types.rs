//! Column types a dialect can build arrays of.

use core::fmt;

/// The element or array type of a column.
///
/// Only the types that appear as array elements are modelled; anything
/// else goes through [`DataType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `INTEGER`
    Integer,
    /// `BIGINT`
    Bigint,
    /// `DOUBLE PRECISION`
    Double,
    /// `BOOLEAN`
    Boolean,
    /// `TEXT`
    Text,
    /// `VARCHAR` with an optional length.
    Varchar(Option<u32>),
    /// `TIMESTAMP`
    Timestamp,
    /// `ELEMENT[]`, the notation used by PostgreSQL.
    Array(Box<DataType>),
    /// A type name written out verbatim.
    Custom(String),
}

impl DataType {
    /// Wraps `element` in an array type.
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns the SQL spelling of the type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("INTEGER"),
            Self::Bigint => f.write_str("BIGINT"),
            Self::Double => f.write_str("DOUBLE PRECISION"),
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Text => f.write_str("TEXT"),
            Self::Varchar(None) => f.write_str("VARCHAR"),
            Self::Varchar(Some(len)) => write!(f, "VARCHAR({len})"),
            Self::Timestamp => f.write_str("TIMESTAMP"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}
