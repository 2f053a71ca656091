//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Nodes are immutable once built. Leaf factories validate their input;
//! composite nodes wrap already-valid children.

mod condition;
mod expression;
mod identifier;
mod select;
mod table;
mod types;

pub use condition::{Comparator, Condition};
pub use expression::{Expression, Function, Literal};
pub use identifier::Identifier;
pub(crate) use identifier::quote_name;
pub use select::{Join, JoinType, NullOrdering, OrderByField, OrderDirection, Select};
pub use table::{Column, Table};
pub use types::DataType;
