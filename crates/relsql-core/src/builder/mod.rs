//! Statement builders and node factories.
//!
//! The staged [`SelectBuilder`] uses the typestate pattern: clauses can only
//! be added in SQL order, and a [`Select`](crate::ast::Select) only exists
//! once it passed validation.
//!
//! # Example
//!
//! ```rust
//! use relsql_core::builder::{Conditions, Expressions};
//! use relsql_core::{Select, SqlError, Table};
//!
//! let users = Table::create("users").unwrap();
//! let active = users.column("active").unwrap();
//!
//! let select = Select::builder()
//!     .select([users.asterisk()])
//!     .from([users])
//!     .where_clause(Conditions::is_equal(&active, Expressions::boolean(true)))
//!     .build();
//! assert!(select.is_ok());
//!
//! // Referencing a table that is not imported fails.
//! let orders = Table::create("orders").unwrap();
//! let err = Select::builder()
//!     .select([orders.column("id").unwrap()])
//!     .from([Table::create("users").unwrap()])
//!     .build()
//!     .unwrap_err();
//! assert!(matches!(err, SqlError::Validation(_)));
//! ```

mod conditions;
mod expressions;
mod select;

pub use conditions::Conditions;
pub use expressions::{Expressions, Functions};
pub use select::{HasColumns, HasFrom, NoColumns, NoFrom, SelectBuilder};
