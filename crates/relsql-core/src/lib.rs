//! # relsql-core
//!
//! Dialect-portable SQL statement construction, validation and rendering.
//!
//! This crate provides:
//! - An immutable AST for SELECT statements, expressions and conditions
//! - A staged builder using the typestate pattern, which validates that
//!   every referenced table is imported by FROM or JOIN
//! - A visitor framework with delegation, used to render statements
//! - Dialect policies for LIMIT/OFFSET syntax, quoting and array support
//!
//! ## Building and rendering
//!
//! ```rust
//! use relsql_core::{Conditions, Select, SqlRenderer, Table};
//! use relsql_core::dialect::SQL_SERVER;
//!
//! let users = Table::aliased("users", "u").unwrap();
//! let name = users.column("name").unwrap();
//!
//! let select = Select::builder()
//!     .select([&name])
//!     .from([users])
//!     .where_clause(Conditions::is_not_null(&name))
//!     .order_by([&name])
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! let sql = SqlRenderer::with_dialect(&SQL_SERVER).render(&select).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT u.name FROM users AS u WHERE u.name IS NOT NULL \
//!      ORDER BY u.name OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"
//! );
//! ```
//!
//! ## Validation
//!
//! A statement referencing a table it does not import is never built:
//!
//! ```rust
//! use relsql_core::{Select, Table};
//!
//! let bar = Table::create("bar").unwrap();
//! let foo = Table::create("table").unwrap().column("foo").unwrap();
//!
//! let err = Select::builder().select([foo]).from([bar]).build().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Required table [table] by a SELECT column not imported by FROM [bar] or JOIN []"
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod render;
pub mod validator;
pub mod visitor;

pub use ast::{Column, Condition, Expression, Identifier, Select, Table};
pub use builder::{Conditions, Expressions, Functions, SelectBuilder};
pub use config::{Quoting, RenderConfig};
pub use dialect::{Dialect, DialectKind};
pub use error::{Clause, Result, SqlError, ValidationError};
pub use render::SqlRenderer;
